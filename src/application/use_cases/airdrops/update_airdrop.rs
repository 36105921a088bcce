use uuid::Uuid;

use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::application::ports::wallet_repository::WalletRepository;
use crate::application::use_cases::airdrops::create_airdrop::{
    AirdropWriteError, verify_references,
};
use crate::domain::airdrops::airdrop::Airdrop;
use crate::domain::airdrops::draft::AirdropDraft;

pub struct UpdateAirdrop<'a, AR, WR, SR>
where
    AR: AirdropRepository + ?Sized,
    WR: WalletRepository + ?Sized,
    SR: SocialAccountRepository + ?Sized,
{
    pub airdrops: &'a AR,
    pub wallets: &'a WR,
    pub social_accounts: &'a SR,
}

impl<'a, AR, WR, SR> UpdateAirdrop<'a, AR, WR, SR>
where
    AR: AirdropRepository + ?Sized,
    WR: WalletRepository + ?Sized,
    SR: SocialAccountRepository + ?Sized,
{
    /// Replaces every editable field. `Ok(None)` when the airdrop is not the user's.
    pub async fn execute(
        &self,
        id: Uuid,
        user_id: Uuid,
        draft: AirdropDraft,
    ) -> Result<Option<Airdrop>, AirdropWriteError> {
        let fields = draft.normalize()?;
        verify_references(self.wallets, self.social_accounts, user_id, &fields).await?;
        Ok(self.airdrops.update_owned(id, user_id, &fields).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::airdrops::airdrop::AirdropStatus;
    use crate::domain::airdrops::draft::RewardInput;
    use crate::domain::social_accounts::social_account::SocialPlatform;
    use crate::domain::validation::ValidationError;
    use crate::infrastructure::local::testing::memory_backend;

    #[tokio::test]
    async fn updates_owned_and_ignores_foreign() {
        let b = memory_backend();
        let owner = Uuid::new_v4();
        let fields = AirdropDraft {
            name: Some("Blast".into()),
            link: Some("https://blast.io".into()),
            ..Default::default()
        }
        .normalize()
        .unwrap();
        let created = b.airdrops.create_for_user(owner, &fields).await.unwrap();

        let uc = UpdateAirdrop {
            airdrops: b.airdrops.as_ref(),
            wallets: b.wallets.as_ref(),
            social_accounts: b.socials.as_ref(),
        };
        let draft = AirdropDraft {
            name: Some("Blast".into()),
            status: Some("claimed".into()),
            reward: Some(RewardInput::Text("250.75".into())),
            link: Some(String::new()),
            ..Default::default()
        };
        let stranger = Uuid::new_v4();
        assert!(
            uc.execute(created.id, stranger, draft.clone())
                .await
                .unwrap()
                .is_none()
        );

        let updated = uc.execute(created.id, owner, draft).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.status, AirdropStatus::Claimed);
        assert_eq!(updated.reward, Some(250.75));
        assert_eq!(updated.link, None);
    }

    #[tokio::test]
    async fn rejects_account_from_another_platform() {
        let b = memory_backend();
        let owner = Uuid::new_v4();
        let fields = AirdropDraft {
            name: Some("Zora".into()),
            ..Default::default()
        }
        .normalize()
        .unwrap();
        let created = b.airdrops.create_for_user(owner, &fields).await.unwrap();
        let telegram = b
            .socials
            .create_for_user(owner, SocialPlatform::Telegram, "@zora")
            .await
            .unwrap();

        let uc = UpdateAirdrop {
            airdrops: b.airdrops.as_ref(),
            wallets: b.wallets.as_ref(),
            social_accounts: b.socials.as_ref(),
        };
        let err = uc
            .execute(
                created.id,
                owner,
                AirdropDraft {
                    name: Some("Zora".into()),
                    selected_discord: Some(telegram.id.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AirdropWriteError::Invalid(ValidationError::InvalidReference {
                field: "selected_discord",
                ..
            })
        ));

        let ok = uc
            .execute(
                created.id,
                owner,
                AirdropDraft {
                    name: Some("Zora".into()),
                    selected_telegram: Some(telegram.id.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ok.selected_telegram, Some(telegram.id));
    }
}
