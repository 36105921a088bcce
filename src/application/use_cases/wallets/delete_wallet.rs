use uuid::Uuid;

use crate::application::ports::wallet_repository::WalletRepository;

pub struct DeleteWallet<'a, R: WalletRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: WalletRepository + ?Sized> DeleteWallet<'a, R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        self.repo.delete_owned(id, user_id).await
    }
}
