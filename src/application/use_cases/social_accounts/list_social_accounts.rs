use uuid::Uuid;

use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::domain::social_accounts::social_account::{SocialAccount, SocialPlatform};

pub struct ListSocialAccounts<'a, R: SocialAccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SocialAccountRepository + ?Sized> ListSocialAccounts<'a, R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        platform: Option<SocialPlatform>,
    ) -> anyhow::Result<Vec<SocialAccount>> {
        self.repo.list_for_user(user_id, platform).await
    }
}
