use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::categories::category::{Category, CategoryError};
use crate::infrastructure::db::PgPool;

pub struct SqlxCategoryRepository {
    pub pool: PgPool,
}

impl SqlxCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepository {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Category>> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, name, created_at FROM categories
               WHERE user_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| Category {
                id: r.get("id"),
                user_id: r.get("user_id"),
                name: r.get("name"),
                created_at: r.get("created_at"),
            })
            .collect())
    }

    async fn create_for_user(&self, user_id: Uuid, name: &str) -> Result<Category, CategoryError> {
        let res = sqlx::query(
            r#"INSERT INTO categories (user_id, name) VALUES ($1, $2)
               RETURNING id, user_id, name, created_at"#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(row) => Ok(Category {
                id: row.get("id"),
                user_id: row.get("user_id"),
                name: row.get("name"),
                created_at: row.get("created_at"),
            }),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(CategoryError::Duplicate)
            }
            Err(e) => Err(CategoryError::Storage(e.into())),
        }
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM categories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM categories WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
