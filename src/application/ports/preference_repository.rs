use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::preferences::theme::Theme;

#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    async fn get_theme(&self, user_id: Uuid) -> anyhow::Result<Theme>;
    async fn set_theme(&self, user_id: Uuid, theme: Theme) -> anyhow::Result<()>;
    async fn clear_for_user(&self, user_id: Uuid) -> anyhow::Result<()>;
}
