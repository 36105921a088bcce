pub mod create_airdrop;
pub mod delete_airdrop;
pub mod get_airdrop;
pub mod get_stats;
pub mod list_airdrops;
pub mod update_airdrop;
