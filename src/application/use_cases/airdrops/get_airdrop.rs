use uuid::Uuid;

use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::domain::airdrops::airdrop::Airdrop;

pub struct GetAirdrop<'a, R: AirdropRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AirdropRepository + ?Sized> GetAirdrop<'a, R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Airdrop>> {
        self.repo.get_owned(id, user_id).await
    }
}
