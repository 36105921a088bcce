use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::categories::category::{Category, CategoryError};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Category>>;
    async fn create_for_user(&self, user_id: Uuid, name: &str) -> Result<Category, CategoryError>;
    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64>;
}
