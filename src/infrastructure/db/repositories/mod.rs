pub mod airdrop_repository_sqlx;
pub mod category_repository_sqlx;
pub mod preference_repository_sqlx;
pub mod social_account_repository_sqlx;
pub mod user_repository_sqlx;
pub mod wallet_repository_sqlx;
