use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::document::theme_key;
use crate::application::ports::kv_store::KvStore;
use crate::application::ports::preference_repository::PreferenceRepository;
use crate::domain::preferences::theme::Theme;

/// Stores the bare `light`/`dark` string, not JSON.
pub struct KvPreferenceRepository {
    store: Arc<dyn KvStore>,
}

impl KvPreferenceRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PreferenceRepository for KvPreferenceRepository {
    async fn get_theme(&self, user_id: Uuid) -> anyhow::Result<Theme> {
        Ok(self
            .store
            .get(&theme_key(user_id))
            .await?
            .map(|v| Theme::from_stored(&v))
            .unwrap_or_default())
    }

    async fn set_theme(&self, user_id: Uuid, theme: Theme) -> anyhow::Result<()> {
        self.store.set(&theme_key(user_id), theme.as_str()).await
    }

    async fn clear_for_user(&self, user_id: Uuid) -> anyhow::Result<()> {
        self.store.remove(&theme_key(user_id)).await
    }
}
