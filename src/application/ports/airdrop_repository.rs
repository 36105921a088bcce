use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::airdrops::airdrop::{Airdrop, NewAirdrop};

#[async_trait]
pub trait AirdropRepository: Send + Sync {
    /// Newest first.
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Airdrop>>;
    async fn get_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Airdrop>>;
    async fn create_for_user(&self, user_id: Uuid, fields: &NewAirdrop) -> anyhow::Result<Airdrop>;
    async fn update_owned(
        &self,
        id: Uuid,
        user_id: Uuid,
        fields: &NewAirdrop,
    ) -> anyhow::Result<Option<Airdrop>>;
    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64>;
}
