pub mod delete_account;
pub mod login;
pub mod me;
pub mod register;
