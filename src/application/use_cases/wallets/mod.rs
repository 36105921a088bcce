pub mod create_wallet;
pub mod delete_wallet;
pub mod list_wallets;
