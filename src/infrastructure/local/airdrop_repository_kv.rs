use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::document::{self, airdrops_key};
use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::application::ports::kv_store::KvStore;
use crate::domain::airdrops::airdrop::{Airdrop, NewAirdrop};

/// One `airdrops-data:{user}` document per user, kept in insertion order.
pub struct KvAirdropRepository {
    store: Arc<dyn KvStore>,
    write: Mutex<()>,
}

impl KvAirdropRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write: Mutex::new(()),
        }
    }

    async fn load(&self, user_id: Uuid) -> anyhow::Result<Vec<Airdrop>> {
        Ok(
            document::load(self.store.as_ref(), &airdrops_key(user_id))
                .await?
                .unwrap_or_default(),
        )
    }

    async fn save(&self, user_id: Uuid, airdrops: &[Airdrop]) -> anyhow::Result<()> {
        document::save(self.store.as_ref(), &airdrops_key(user_id), &airdrops).await
    }
}

#[async_trait]
impl AirdropRepository for KvAirdropRepository {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Airdrop>> {
        let mut airdrops = self.load(user_id).await?;
        airdrops.reverse();
        Ok(airdrops)
    }

    async fn get_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Airdrop>> {
        Ok(self
            .load(user_id)
            .await?
            .into_iter()
            .find(|a| a.id == id))
    }

    async fn create_for_user(&self, user_id: Uuid, fields: &NewAirdrop) -> anyhow::Result<Airdrop> {
        let _guard = self.write.lock().await;
        let mut airdrops = self.load(user_id).await?;
        let airdrop = Airdrop::from_new(Uuid::new_v4(), user_id, fields.clone(), Utc::now());
        airdrops.push(airdrop.clone());
        self.save(user_id, &airdrops).await?;
        Ok(airdrop)
    }

    async fn update_owned(
        &self,
        id: Uuid,
        user_id: Uuid,
        fields: &NewAirdrop,
    ) -> anyhow::Result<Option<Airdrop>> {
        let _guard = self.write.lock().await;
        let mut airdrops = self.load(user_id).await?;
        let Some(target) = airdrops.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        target.apply(fields.clone(), Utc::now());
        let updated = target.clone();
        self.save(user_id, &airdrops).await?;
        Ok(Some(updated))
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let _guard = self.write.lock().await;
        let mut airdrops = self.load(user_id).await?;
        let before = airdrops.len();
        airdrops.retain(|a| a.id != id);
        if airdrops.len() == before {
            return Ok(false);
        }
        self.save(user_id, &airdrops).await?;
        Ok(true)
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let _guard = self.write.lock().await;
        let count = self.load(user_id).await?.len() as u64;
        self.store.remove(&airdrops_key(user_id)).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::airdrops::draft::AirdropDraft;
    use crate::infrastructure::local::MemoryKvStore;

    fn fields(name: &str) -> NewAirdrop {
        AirdropDraft {
            name: Some(name.into()),
            ..Default::default()
        }
        .normalize()
        .unwrap()
    }

    #[tokio::test]
    async fn lists_newest_first_and_scopes_by_owner() {
        let repo = KvAirdropRepository::new(Arc::new(MemoryKvStore::default()));
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let first = repo.create_for_user(alice, &fields("first")).await.unwrap();
        repo.create_for_user(alice, &fields("second")).await.unwrap();
        repo.create_for_user(bob, &fields("bobs")).await.unwrap();

        let names: Vec<String> = repo
            .list_for_user(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["second", "first"]);

        assert!(repo.get_owned(first.id, bob).await.unwrap().is_none());
        assert!(!repo.delete_owned(first.id, bob).await.unwrap());
        assert!(repo.delete_owned(first.id, alice).await.unwrap());
        assert_eq!(repo.list_for_user(alice).await.unwrap().len(), 1);
        assert_eq!(repo.delete_all_for_user(alice).await.unwrap(), 1);
        assert_eq!(repo.list_for_user(bob).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn document_is_plain_json_under_user_key() {
        let store = Arc::new(MemoryKvStore::default());
        let repo = KvAirdropRepository::new(store.clone());
        let user = Uuid::new_v4();
        repo.create_for_user(user, &fields("Zora")).await.unwrap();

        let raw = store.get(&airdrops_key(user)).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["name"], "Zora");
        assert_eq!(json[0]["status"], "ongoing");
        assert!(json[0]["reward"].is_null());
    }

    #[tokio::test]
    async fn corrupt_document_surfaces_an_error() {
        let store = Arc::new(MemoryKvStore::default());
        let user = Uuid::new_v4();
        store.set(&airdrops_key(user), "[{oops").await.unwrap();
        let repo = KvAirdropRepository::new(store);
        assert!(repo.list_for_user(user).await.is_err());
    }
}
