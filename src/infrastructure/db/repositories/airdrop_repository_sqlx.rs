use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::domain::airdrops::airdrop::{Airdrop, NewAirdrop};
use crate::infrastructure::db::PgPool;

const COLUMNS: &str = "id, user_id, name, categories, status, date, notes, link, reward, \
     selected_wallet, selected_twitter, selected_discord, selected_telegram, selected_email, \
     created_at, updated_at";

pub struct SqlxAirdropRepository {
    pub pool: PgPool,
}

impl SqlxAirdropRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &PgRow) -> anyhow::Result<Airdrop> {
    let status: String = r.get("status");
    Ok(Airdrop {
        id: r.get("id"),
        user_id: r.get("user_id"),
        name: r.get("name"),
        categories: r.get("categories"),
        status: status.parse()?,
        date: r.get("date"),
        notes: r.get("notes"),
        link: r.get("link"),
        reward: r.get("reward"),
        selected_wallet: r.get("selected_wallet"),
        selected_twitter: r.get("selected_twitter"),
        selected_discord: r.get("selected_discord"),
        selected_telegram: r.get("selected_telegram"),
        selected_email: r.get("selected_email"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    })
}

#[async_trait]
impl AirdropRepository for SqlxAirdropRepository {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Airdrop>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM airdrops WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_row).collect()
    }

    async fn get_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Airdrop>> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM airdrops WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_row).transpose()
    }

    async fn create_for_user(&self, user_id: Uuid, f: &NewAirdrop) -> anyhow::Result<Airdrop> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO airdrops (user_id, name, categories, status, date, notes, link, reward,
                   selected_wallet, selected_twitter, selected_discord, selected_telegram, selected_email)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
               RETURNING {COLUMNS}"#
        ))
        .bind(user_id)
        .bind(&f.name)
        .bind(&f.categories)
        .bind(f.status.as_str())
        .bind(f.date)
        .bind(&f.notes)
        .bind(&f.link)
        .bind(f.reward)
        .bind(f.selected_wallet)
        .bind(f.selected_twitter)
        .bind(f.selected_discord)
        .bind(f.selected_telegram)
        .bind(f.selected_email)
        .fetch_one(&self.pool)
        .await?;
        map_row(&row)
    }

    async fn update_owned(
        &self,
        id: Uuid,
        user_id: Uuid,
        f: &NewAirdrop,
    ) -> anyhow::Result<Option<Airdrop>> {
        let row = sqlx::query(&format!(
            r#"UPDATE airdrops SET name = $3, categories = $4, status = $5, date = $6, notes = $7,
                   link = $8, reward = $9, selected_wallet = $10, selected_twitter = $11,
                   selected_discord = $12, selected_telegram = $13, selected_email = $14,
                   updated_at = now()
               WHERE id = $1 AND user_id = $2
               RETURNING {COLUMNS}"#
        ))
        .bind(id)
        .bind(user_id)
        .bind(&f.name)
        .bind(&f.categories)
        .bind(f.status.as_str())
        .bind(f.date)
        .bind(&f.notes)
        .bind(&f.link)
        .bind(f.reward)
        .bind(f.selected_wallet)
        .bind(f.selected_twitter)
        .bind(f.selected_discord)
        .bind(f.selected_telegram)
        .bind(f.selected_email)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_row).transpose()
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM airdrops WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM airdrops WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
