use std::sync::Arc;

use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::health_port::StorageHealthPort;
use crate::application::ports::preference_repository::PreferenceRepository;
use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::ports::wallet_repository::WalletRepository;
use crate::bootstrap::config::Config;
use crate::infrastructure::db::PgPool;
use crate::infrastructure::db::repositories::{
    airdrop_repository_sqlx::SqlxAirdropRepository,
    category_repository_sqlx::SqlxCategoryRepository,
    preference_repository_sqlx::SqlxPreferenceRepository,
    social_account_repository_sqlx::SqlxSocialAccountRepository,
    user_repository_sqlx::SqlxUserRepository, wallet_repository_sqlx::SqlxWalletRepository,
};
use crate::infrastructure::local::LocalBackend;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    airdrop_repo: Arc<dyn AirdropRepository>,
    wallet_repo: Arc<dyn WalletRepository>,
    social_account_repo: Arc<dyn SocialAccountRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    preference_repo: Arc<dyn PreferenceRepository>,
    storage_health: Arc<dyn StorageHealthPort>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        airdrop_repo: Arc<dyn AirdropRepository>,
        wallet_repo: Arc<dyn WalletRepository>,
        social_account_repo: Arc<dyn SocialAccountRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        preference_repo: Arc<dyn PreferenceRepository>,
        storage_health: Arc<dyn StorageHealthPort>,
    ) -> Self {
        Self {
            user_repo,
            airdrop_repo,
            wallet_repo,
            social_account_repo,
            category_repo,
            preference_repo,
            storage_health,
        }
    }

    pub fn local(backend: LocalBackend, storage_health: Arc<dyn StorageHealthPort>) -> Self {
        Self::new(
            backend.users,
            backend.airdrops,
            backend.wallets,
            backend.socials,
            backend.categories,
            backend.preferences,
            storage_health,
        )
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(SqlxUserRepository::new(pool.clone())),
            Arc::new(SqlxAirdropRepository::new(pool.clone())),
            Arc::new(SqlxWalletRepository::new(pool.clone())),
            Arc::new(SqlxSocialAccountRepository::new(pool.clone())),
            Arc::new(SqlxCategoryRepository::new(pool.clone())),
            Arc::new(SqlxPreferenceRepository::new(pool.clone())),
            Arc::new(crate::infrastructure::db::PgHealth { pool }),
        )
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn airdrop_repo(&self) -> Arc<dyn AirdropRepository> {
        self.services.airdrop_repo.clone()
    }

    pub fn wallet_repo(&self) -> Arc<dyn WalletRepository> {
        self.services.wallet_repo.clone()
    }

    pub fn social_account_repo(&self) -> Arc<dyn SocialAccountRepository> {
        self.services.social_account_repo.clone()
    }

    pub fn category_repo(&self) -> Arc<dyn CategoryRepository> {
        self.services.category_repo.clone()
    }

    pub fn preference_repo(&self) -> Arc<dyn PreferenceRepository> {
        self.services.preference_repo.clone()
    }

    pub fn storage_health(&self) -> Arc<dyn StorageHealthPort> {
        self.services.storage_health.clone()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::infrastructure::local::MemoryKvStore;

    /// Context over a fresh in-memory store with default config.
    pub fn memory_context() -> AppContext {
        let store = Arc::new(MemoryKvStore::default());
        let backend = LocalBackend::new(store.clone());
        let cfg = Config::from_lookup(|_| None).expect("default config");
        AppContext::new(cfg, AppServices::local(backend, store))
    }
}
