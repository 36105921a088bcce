//! Key-value backed persistence: every user's data lives in a handful of
//! JSON documents addressed by string keys.

mod airdrop_repository_kv;
mod document;
mod kv_store;
mod preference_repository_kv;
mod settings_repository_kv;
mod user_repository_kv;

pub use airdrop_repository_kv::KvAirdropRepository;
pub use kv_store::{JsonFileKvStore, MemoryKvStore};
pub use preference_repository_kv::KvPreferenceRepository;
pub use settings_repository_kv::KvSettingsRepository;
pub use user_repository_kv::KvUserRepository;

use std::sync::Arc;

use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::kv_store::KvStore;
use crate::application::ports::preference_repository::PreferenceRepository;
use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::ports::wallet_repository::WalletRepository;

/// Every repository port served from one key-value store.
#[derive(Clone)]
pub struct LocalBackend {
    pub users: Arc<dyn UserRepository>,
    pub airdrops: Arc<dyn AirdropRepository>,
    pub wallets: Arc<dyn WalletRepository>,
    pub socials: Arc<dyn SocialAccountRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl LocalBackend {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        let settings = Arc::new(KvSettingsRepository::new(store.clone()));
        Self {
            users: Arc::new(KvUserRepository::new(store.clone())),
            airdrops: Arc::new(KvAirdropRepository::new(store.clone())),
            wallets: settings.clone(),
            socials: settings.clone(),
            categories: settings,
            preferences: Arc::new(KvPreferenceRepository::new(store)),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub fn memory_backend() -> LocalBackend {
        LocalBackend::new(Arc::new(MemoryKvStore::default()))
    }
}
