use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::wallets::wallet::Wallet;

#[async_trait]
pub trait WalletRepository: Send + Sync {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Wallet>>;
    async fn create_for_user(
        &self,
        user_id: Uuid,
        name: &str,
        address: &str,
    ) -> anyhow::Result<Wallet>;
    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64>;
}
