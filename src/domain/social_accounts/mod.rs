pub mod social_account;
