pub mod airdrop_repository;
pub mod category_repository;
pub mod health_port;
pub mod kv_store;
pub mod preference_repository;
pub mod social_account_repository;
pub mod user_repository;
pub mod wallet_repository;
