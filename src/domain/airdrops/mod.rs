pub mod airdrop;
pub mod draft;
