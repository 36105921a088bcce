use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::wallet_repository::WalletRepository;
use crate::domain::wallets::wallet::Wallet;
use crate::infrastructure::db::PgPool;

pub struct SqlxWalletRepository {
    pub pool: PgPool,
}

impl SqlxWalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalletRepository for SqlxWalletRepository {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Wallet>> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, name, address, created_at FROM wallets
               WHERE user_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| Wallet {
                id: r.get("id"),
                user_id: r.get("user_id"),
                name: r.get("name"),
                address: r.get("address"),
                created_at: r.get("created_at"),
            })
            .collect())
    }

    async fn create_for_user(
        &self,
        user_id: Uuid,
        name: &str,
        address: &str,
    ) -> anyhow::Result<Wallet> {
        let row = sqlx::query(
            r#"INSERT INTO wallets (user_id, name, address) VALUES ($1, $2, $3)
               RETURNING id, user_id, name, address, created_at"#,
        )
        .bind(user_id)
        .bind(name)
        .bind(address)
        .fetch_one(&self.pool)
        .await?;
        Ok(Wallet {
            id: row.get("id"),
            user_id: row.get("user_id"),
            name: row.get("name"),
            address: row.get("address"),
            created_at: row.get("created_at"),
        })
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM wallets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM wallets WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
