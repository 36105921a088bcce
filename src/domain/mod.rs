pub mod airdrops;
pub mod categories;
pub mod preferences;
pub mod social_accounts;
pub mod users;
pub mod validation;
pub mod wallets;
