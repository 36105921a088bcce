use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::social_accounts::social_account::{SocialAccount, SocialPlatform};

#[async_trait]
pub trait SocialAccountRepository: Send + Sync {
    async fn list_for_user(
        &self,
        user_id: Uuid,
        platform: Option<SocialPlatform>,
    ) -> anyhow::Result<Vec<SocialAccount>>;
    async fn create_for_user(
        &self,
        user_id: Uuid,
        platform: SocialPlatform,
        username: &str,
    ) -> anyhow::Result<SocialAccount>;
    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64>;
}
