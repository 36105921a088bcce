use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::domain::social_accounts::social_account::{SocialAccount, SocialPlatform};
use crate::infrastructure::db::PgPool;

pub struct SqlxSocialAccountRepository {
    pub pool: PgPool,
}

impl SqlxSocialAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &PgRow) -> anyhow::Result<SocialAccount> {
    let platform: String = r.get("type");
    Ok(SocialAccount {
        id: r.get("id"),
        user_id: r.get("user_id"),
        platform: platform.parse()?,
        username: r.get("username"),
        created_at: r.get("created_at"),
    })
}

#[async_trait]
impl SocialAccountRepository for SqlxSocialAccountRepository {
    async fn list_for_user(
        &self,
        user_id: Uuid,
        platform: Option<SocialPlatform>,
    ) -> anyhow::Result<Vec<SocialAccount>> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, type, username, created_at FROM social_accounts
               WHERE user_id = $1 AND ($2::text IS NULL OR type = $2)
               ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .bind(platform.map(|p| p.as_str()))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_row).collect()
    }

    async fn create_for_user(
        &self,
        user_id: Uuid,
        platform: SocialPlatform,
        username: &str,
    ) -> anyhow::Result<SocialAccount> {
        let row = sqlx::query(
            r#"INSERT INTO social_accounts (user_id, type, username) VALUES ($1, $2, $3)
               RETURNING id, user_id, type, username, created_at"#,
        )
        .bind(user_id)
        .bind(platform.as_str())
        .bind(username)
        .fetch_one(&self.pool)
        .await?;
        map_row(&row)
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM social_accounts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM social_accounts WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
