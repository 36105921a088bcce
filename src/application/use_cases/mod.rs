pub mod airdrops;
pub mod auth;
pub mod categories;
pub mod preferences;
pub mod social_accounts;
pub mod wallets;
