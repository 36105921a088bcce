use uuid::Uuid;

use crate::application::ports::wallet_repository::WalletRepository;
use crate::domain::wallets::wallet::Wallet;

pub struct ListWallets<'a, R: WalletRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: WalletRepository + ?Sized> ListWallets<'a, R> {
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<Vec<Wallet>> {
        self.repo.list_for_user(user_id).await
    }
}
