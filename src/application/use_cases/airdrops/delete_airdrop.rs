use uuid::Uuid;

use crate::application::ports::airdrop_repository::AirdropRepository;

pub struct DeleteAirdrop<'a, R: AirdropRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AirdropRepository + ?Sized> DeleteAirdrop<'a, R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        self.repo.delete_owned(id, user_id).await
    }
}
