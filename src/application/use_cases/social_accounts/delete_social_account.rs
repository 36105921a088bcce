use uuid::Uuid;

use crate::application::ports::social_account_repository::SocialAccountRepository;

pub struct DeleteSocialAccount<'a, R: SocialAccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SocialAccountRepository + ?Sized> DeleteSocialAccount<'a, R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        self.repo.delete_owned(id, user_id).await
    }
}
