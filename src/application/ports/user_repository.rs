use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::users::user::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, email: &str, name: &str, password_hash: &str)
    -> anyhow::Result<User>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn delete_user(&self, id: Uuid) -> anyhow::Result<bool>;
}
