use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::preference_repository::PreferenceRepository;
use crate::domain::preferences::theme::Theme;
use crate::infrastructure::db::PgPool;

const THEME_KEY: &str = "theme";

pub struct SqlxPreferenceRepository {
    pub pool: PgPool,
}

impl SqlxPreferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceRepository for SqlxPreferenceRepository {
    async fn get_theme(&self, user_id: Uuid) -> anyhow::Result<Theme> {
        let value = sqlx::query_scalar::<_, String>(
            "SELECT value FROM user_preferences WHERE user_id = $1 AND key = $2",
        )
        .bind(user_id)
        .bind(THEME_KEY)
        .fetch_optional(&self.pool)
        .await?;
        Ok(value.map(|v| Theme::from_stored(&v)).unwrap_or_default())
    }

    async fn set_theme(&self, user_id: Uuid, theme: Theme) -> anyhow::Result<()> {
        sqlx::query(
            r#"INSERT INTO user_preferences (user_id, key, value) VALUES ($1, $2, $3)
               ON CONFLICT (user_id, key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()"#,
        )
        .bind(user_id)
        .bind(THEME_KEY)
        .bind(theme.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn clear_for_user(&self, user_id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM user_preferences WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
