use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::document::{self, settings_key};
use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::kv_store::KvStore;
use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::application::ports::wallet_repository::WalletRepository;
use crate::domain::categories::category::{
    Category, CategoryError, DEFAULT_CATEGORIES, same_name,
};
use crate::domain::social_accounts::social_account::{SocialAccount, SocialPlatform};
use crate::domain::wallets::wallet::Wallet;

/// The `user-settings:{user}` document: wallets, accounts grouped by
/// platform, and categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsDoc {
    #[serde(default)]
    wallets: Vec<Wallet>,
    #[serde(default)]
    twitter: Vec<SocialAccount>,
    #[serde(default)]
    discord: Vec<SocialAccount>,
    #[serde(default)]
    telegram: Vec<SocialAccount>,
    #[serde(default)]
    email: Vec<SocialAccount>,
    #[serde(default)]
    categories: Vec<Category>,
}

impl SettingsDoc {
    fn seeded(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|name| Category {
                    id: Uuid::new_v4(),
                    user_id,
                    name: (*name).to_string(),
                    created_at: now,
                })
                .collect(),
            ..Default::default()
        }
    }

    fn accounts(&self, platform: SocialPlatform) -> &Vec<SocialAccount> {
        match platform {
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Discord => &self.discord,
            SocialPlatform::Telegram => &self.telegram,
            SocialPlatform::Email => &self.email,
        }
    }

    fn accounts_mut(&mut self, platform: SocialPlatform) -> &mut Vec<SocialAccount> {
        match platform {
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Discord => &mut self.discord,
            SocialPlatform::Telegram => &mut self.telegram,
            SocialPlatform::Email => &mut self.email,
        }
    }
}

pub struct KvSettingsRepository {
    store: Arc<dyn KvStore>,
    write: Mutex<()>,
}

impl KvSettingsRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write: Mutex::new(()),
        }
    }

    /// Reads the user's document, seeding and saving it on first access so
    /// default category ids stay stable.
    async fn load(&self, user_id: Uuid) -> anyhow::Result<SettingsDoc> {
        if let Some(doc) = document::load(self.store.as_ref(), &settings_key(user_id)).await? {
            return Ok(doc);
        }
        let _guard = self.write.lock().await;
        self.load_or_seed(user_id).await
    }

    /// Caller holds `write`.
    async fn load_or_seed(&self, user_id: Uuid) -> anyhow::Result<SettingsDoc> {
        if let Some(doc) = document::load(self.store.as_ref(), &settings_key(user_id)).await? {
            return Ok(doc);
        }
        let doc = SettingsDoc::seeded(user_id);
        self.save(user_id, &doc).await?;
        tracing::debug!(user_id = %user_id, "settings_seeded");
        Ok(doc)
    }

    async fn save(&self, user_id: Uuid, doc: &SettingsDoc) -> anyhow::Result<()> {
        document::save(self.store.as_ref(), &settings_key(user_id), doc).await
    }

    /// Runs `f` against the user's document and persists it when `f` reports a change.
    async fn modify<T, F>(&self, user_id: Uuid, f: F) -> anyhow::Result<T>
    where
        F: FnOnce(&mut SettingsDoc) -> (T, bool) + Send,
        T: Send,
    {
        let _guard = self.write.lock().await;
        let mut doc = self.load_or_seed(user_id).await?;
        let (out, changed) = f(&mut doc);
        if changed {
            self.save(user_id, &doc).await?;
        }
        Ok(out)
    }
}

fn newest_first<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

fn remove_by_id<T>(items: &mut Vec<T>, id: Uuid, id_of: impl Fn(&T) -> Uuid) -> bool {
    let before = items.len();
    items.retain(|it| id_of(it) != id);
    items.len() != before
}

#[async_trait]
impl WalletRepository for KvSettingsRepository {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Wallet>> {
        Ok(newest_first(&self.load(user_id).await?.wallets))
    }

    async fn create_for_user(
        &self,
        user_id: Uuid,
        name: &str,
        address: &str,
    ) -> anyhow::Result<Wallet> {
        let wallet = Wallet {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            address: address.to_string(),
            created_at: Utc::now(),
        };
        let stored = wallet.clone();
        self.modify(user_id, move |doc| {
            doc.wallets.push(stored);
            ((), true)
        })
        .await?;
        Ok(wallet)
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        self.modify(user_id, |doc| {
            let removed = remove_by_id(&mut doc.wallets, id, |w| w.id);
            (removed, removed)
        })
        .await
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        self.modify(user_id, |doc| {
            let n = doc.wallets.len() as u64;
            doc.wallets.clear();
            (n, n > 0)
        })
        .await
    }
}

#[async_trait]
impl SocialAccountRepository for KvSettingsRepository {
    async fn list_for_user(
        &self,
        user_id: Uuid,
        platform: Option<SocialPlatform>,
    ) -> anyhow::Result<Vec<SocialAccount>> {
        let doc = self.load(user_id).await?;
        let mut out: Vec<SocialAccount> = match platform {
            Some(p) => doc.accounts(p).clone(),
            None => SocialPlatform::ALL
                .iter()
                .flat_map(|p| doc.accounts(*p).iter().cloned())
                .collect(),
        };
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn create_for_user(
        &self,
        user_id: Uuid,
        platform: SocialPlatform,
        username: &str,
    ) -> anyhow::Result<SocialAccount> {
        let account = SocialAccount {
            id: Uuid::new_v4(),
            user_id,
            platform,
            username: username.to_string(),
            created_at: Utc::now(),
        };
        let stored = account.clone();
        self.modify(user_id, move |doc| {
            doc.accounts_mut(platform).push(stored);
            ((), true)
        })
        .await?;
        Ok(account)
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        self.modify(user_id, |doc| {
            let removed = SocialPlatform::ALL
                .iter()
                .any(|p| remove_by_id(doc.accounts_mut(*p), id, |a| a.id));
            (removed, removed)
        })
        .await
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        self.modify(user_id, |doc| {
            let mut n = 0u64;
            for p in SocialPlatform::ALL {
                let list = doc.accounts_mut(p);
                n += list.len() as u64;
                list.clear();
            }
            (n, n > 0)
        })
        .await
    }
}

#[async_trait]
impl CategoryRepository for KvSettingsRepository {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Category>> {
        let mut out = self.load(user_id).await?.categories;
        // Stable: seeded defaults share a timestamp and keep their order.
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn create_for_user(&self, user_id: Uuid, name: &str) -> Result<Category, CategoryError> {
        let category = Category {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        let stored = category.clone();
        let inserted = self
            .modify(user_id, move |doc| {
                if doc.categories.iter().any(|c| same_name(&c.name, &stored.name)) {
                    return (false, false);
                }
                doc.categories.push(stored);
                (true, true)
            })
            .await
            .map_err(CategoryError::Storage)?;
        if inserted {
            Ok(category)
        } else {
            Err(CategoryError::Duplicate)
        }
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        self.modify(user_id, |doc| {
            let removed = remove_by_id(&mut doc.categories, id, |c| c.id);
            (removed, removed)
        })
        .await
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let _guard = self.write.lock().await;
        let count = match document::load::<SettingsDoc, _>(
            self.store.as_ref(),
            &settings_key(user_id),
        )
        .await?
        {
            Some(doc) => doc.categories.len() as u64,
            None => 0,
        };
        // Wallets and accounts are cleared through their own ports; dropping
        // the document here also resets the seeded categories.
        self.store.remove(&settings_key(user_id)).await?;
        Ok(count)
    }
}
