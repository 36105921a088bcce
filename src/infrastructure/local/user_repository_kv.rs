use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::document::{self, USERS_KEY};
use crate::application::ports::kv_store::KvStore;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredUser {
    id: Uuid,
    email: String,
    name: String,
    password_hash: String,
}

impl StoredUser {
    fn to_user(&self, with_hash: bool) -> User {
        User {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            password_hash: with_hash.then(|| self.password_hash.clone()),
        }
    }
}

pub struct KvUserRepository {
    store: Arc<dyn KvStore>,
    write: Mutex<()>,
}

impl KvUserRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write: Mutex::new(()),
        }
    }

    async fn load(&self) -> anyhow::Result<Vec<StoredUser>> {
        Ok(document::load(self.store.as_ref(), USERS_KEY)
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let _guard = self.write.lock().await;
        let mut users = self.load().await?;
        anyhow::ensure!(
            !users.iter().any(|u| u.email == email),
            "email already registered"
        );
        let stored = StoredUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(stored.clone());
        document::save(self.store.as_ref(), USERS_KEY, &users).await?;
        Ok(stored.to_user(true))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .load()
            .await?
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.to_user(true)))
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self
            .load()
            .await?
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.to_user(false)))
    }

    async fn delete_user(&self, id: Uuid) -> anyhow::Result<bool> {
        let _guard = self.write.lock().await;
        let mut users = self.load().await?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }
        document::save(self.store.as_ref(), USERS_KEY, &users).await?;
        Ok(true)
    }
}
