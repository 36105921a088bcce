use uuid::Uuid;

use crate::application::ports::wallet_repository::WalletRepository;
use crate::domain::validation::ValidationError;
use crate::domain::wallets::wallet::Wallet;

#[derive(thiserror::Error, Debug)]
pub enum CreateWalletError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct CreateWallet<'a, R: WalletRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: WalletRepository + ?Sized> CreateWallet<'a, R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        name: &str,
        address: &str,
    ) -> Result<Wallet, CreateWalletError> {
        let name = name.trim();
        let address = address.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("name").into());
        }
        if address.is_empty() {
            return Err(ValidationError::Required("address").into());
        }
        Ok(self.repo.create_for_user(user_id, name, address).await?)
    }
}
