use uuid::Uuid;

use crate::application::ports::preference_repository::PreferenceRepository;
use crate::domain::preferences::theme::Theme;

pub struct GetTheme<'a, R: PreferenceRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PreferenceRepository + ?Sized> GetTheme<'a, R> {
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<Theme> {
        self.repo.get_theme(user_id).await
    }
}

pub struct SetTheme<'a, R: PreferenceRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PreferenceRepository + ?Sized> SetTheme<'a, R> {
    pub async fn execute(&self, user_id: Uuid, theme: Theme) -> anyhow::Result<Theme> {
        self.repo.set_theme(user_id, theme).await?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::local::testing::memory_backend;

    #[tokio::test]
    async fn defaults_to_light_and_persists_dark() {
        let b = memory_backend();
        let user = Uuid::new_v4();
        let get = GetTheme {
            repo: b.preferences.as_ref(),
        };
        assert_eq!(get.execute(user).await.unwrap(), Theme::Light);
        SetTheme {
            repo: b.preferences.as_ref(),
        }
        .execute(user, Theme::Dark)
        .await
        .unwrap();
        assert_eq!(get.execute(user).await.unwrap(), Theme::Dark);
    }
}
