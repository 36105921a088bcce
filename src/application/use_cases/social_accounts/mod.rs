pub mod create_social_account;
pub mod delete_social_account;
pub mod list_social_accounts;
