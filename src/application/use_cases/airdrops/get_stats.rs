use uuid::Uuid;

use crate::application::dto::dashboard::StatsDto;
use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::application::services::dashboard::compute_stats;

pub struct GetStats<'a, R: AirdropRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AirdropRepository + ?Sized> GetStats<'a, R> {
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<StatsDto> {
        let all = self.repo.list_for_user(user_id).await?;
        Ok(compute_stats(&all))
    }
}
