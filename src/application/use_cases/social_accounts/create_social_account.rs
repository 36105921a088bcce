use uuid::Uuid;

use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::domain::validation::ValidationError;
use crate::domain::social_accounts::social_account::{SocialAccount, SocialPlatform};

#[derive(thiserror::Error, Debug)]
pub enum CreateSocialAccountError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct CreateSocialAccount<'a, R: SocialAccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SocialAccountRepository + ?Sized> CreateSocialAccount<'a, R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        platform: SocialPlatform,
        username: &str,
    ) -> Result<SocialAccount, CreateSocialAccountError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::Required("username").into());
        }
        Ok(self
            .repo
            .create_for_user(user_id, platform, username)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::local::testing::memory_backend;

    #[tokio::test]
    async fn creates_and_filters_by_platform() {
        let b = memory_backend();
        let user = Uuid::new_v4();
        let uc = CreateSocialAccount {
            repo: b.socials.as_ref(),
        };
        uc.execute(user, SocialPlatform::Twitter, " @hunter ")
            .await
            .unwrap();
        uc.execute(user, SocialPlatform::Telegram, "@tg_hunter")
            .await
            .unwrap();
        assert!(uc.execute(user, SocialPlatform::Email, "  ").await.is_err());

        let twitter = b
            .socials
            .list_for_user(user, Some(SocialPlatform::Twitter))
            .await
            .unwrap();
        assert_eq!(twitter.len(), 1);
        assert_eq!(twitter[0].username, "@hunter");
        assert_eq!(b.socials.list_for_user(user, None).await.unwrap().len(), 2);
    }
}
