use uuid::Uuid;

use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::application::ports::wallet_repository::WalletRepository;
use crate::domain::airdrops::airdrop::{Airdrop, NewAirdrop};
use crate::domain::airdrops::draft::AirdropDraft;
use crate::domain::social_accounts::social_account::SocialPlatform;
use crate::domain::validation::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum AirdropWriteError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Every `selected_*` id must name one of the user's own wallets, or one of
/// their accounts on the matching platform.
pub(super) async fn verify_references<WR, SR>(
    wallets: &WR,
    social_accounts: &SR,
    user_id: Uuid,
    fields: &NewAirdrop,
) -> Result<(), AirdropWriteError>
where
    WR: WalletRepository + ?Sized,
    SR: SocialAccountRepository + ?Sized,
{
    if let Some(id) = fields.selected_wallet {
        let owned = wallets.list_for_user(user_id).await?;
        if !owned.iter().any(|w| w.id == id) {
            return Err(invalid("selected_wallet", id));
        }
    }

    let socials = [
        ("selected_twitter", SocialPlatform::Twitter, fields.selected_twitter),
        ("selected_discord", SocialPlatform::Discord, fields.selected_discord),
        ("selected_telegram", SocialPlatform::Telegram, fields.selected_telegram),
        ("selected_email", SocialPlatform::Email, fields.selected_email),
    ];
    if socials.iter().all(|(_, _, id)| id.is_none()) {
        return Ok(());
    }
    let owned = social_accounts.list_for_user(user_id, None).await?;
    for (field, platform, id) in socials {
        let Some(id) = id else { continue };
        if !owned.iter().any(|a| a.id == id && a.platform == platform) {
            return Err(invalid(field, id));
        }
    }
    Ok(())
}

fn invalid(field: &'static str, id: Uuid) -> AirdropWriteError {
    ValidationError::InvalidReference {
        field,
        value: id.to_string(),
    }
    .into()
}

pub struct CreateAirdrop<'a, AR, WR, SR>
where
    AR: AirdropRepository + ?Sized,
    WR: WalletRepository + ?Sized,
    SR: SocialAccountRepository + ?Sized,
{
    pub airdrops: &'a AR,
    pub wallets: &'a WR,
    pub social_accounts: &'a SR,
}

impl<'a, AR, WR, SR> CreateAirdrop<'a, AR, WR, SR>
where
    AR: AirdropRepository + ?Sized,
    WR: WalletRepository + ?Sized,
    SR: SocialAccountRepository + ?Sized,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        draft: AirdropDraft,
    ) -> Result<Airdrop, AirdropWriteError> {
        let fields = draft.normalize()?;
        verify_references(self.wallets, self.social_accounts, user_id, &fields).await?;
        tracing::debug!(user_id = %user_id, name = %fields.name, status = %fields.status, "creating_airdrop");
        let airdrop = self.airdrops.create_for_user(user_id, &fields).await?;
        Ok(airdrop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::local::LocalBackend;
    use crate::infrastructure::local::testing::memory_backend;

    type Uc<'a> =
        CreateAirdrop<'a, dyn AirdropRepository, dyn WalletRepository, dyn SocialAccountRepository>;

    fn create(b: &LocalBackend) -> Uc<'_> {
        CreateAirdrop {
            airdrops: b.airdrops.as_ref(),
            wallets: b.wallets.as_ref(),
            social_accounts: b.socials.as_ref(),
        }
    }

    #[tokio::test]
    async fn create_then_read_returns_same_record() {
        let b = memory_backend();
        let user = Uuid::new_v4();
        let created = create(&b)
            .execute(
                user,
                AirdropDraft {
                    name: Some("Scroll".into()),
                    notes: Some("".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(created.notes, None);
        let read = b.airdrops.get_owned(created.id, user).await.unwrap();
        assert_eq!(read, Some(created));
    }

    #[tokio::test]
    async fn invalid_draft_is_not_persisted() {
        let b = memory_backend();
        let user = Uuid::new_v4();
        let err = create(&b)
            .execute(user, AirdropDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AirdropWriteError::Invalid(_)));
        assert!(b.airdrops.list_for_user(user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn accepts_own_wallet_and_matching_accounts() {
        let b = memory_backend();
        let user = Uuid::new_v4();
        let wallet = b.wallets.create_for_user(user, "Main", "0xabc").await.unwrap();
        let tw = b
            .socials
            .create_for_user(user, SocialPlatform::Twitter, "@me")
            .await
            .unwrap();
        let created = create(&b)
            .execute(
                user,
                AirdropDraft {
                    name: Some("Linea".into()),
                    selected_wallet: Some(wallet.id.to_string()),
                    selected_twitter: Some(tw.id.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(created.selected_wallet, Some(wallet.id));
        assert_eq!(created.selected_twitter, Some(tw.id));
    }

    #[tokio::test]
    async fn rejects_unknown_foreign_and_wrong_platform_references() {
        let b = memory_backend();
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();
        let discord = b
            .socials
            .create_for_user(user, SocialPlatform::Discord, "disc#1")
            .await
            .unwrap();
        let foreign_wallet = b
            .wallets
            .create_for_user(other, "Theirs", "0xdef")
            .await
            .unwrap();

        let cases = [
            AirdropDraft {
                selected_twitter: Some(discord.id.to_string()),
                ..Default::default()
            },
            AirdropDraft {
                selected_wallet: Some(foreign_wallet.id.to_string()),
                ..Default::default()
            },
            AirdropDraft {
                selected_email: Some(Uuid::new_v4().to_string()),
                ..Default::default()
            },
        ];
        let expected_fields = ["selected_twitter", "selected_wallet", "selected_email"];
        for (draft, expected) in cases.into_iter().zip(expected_fields) {
            let draft = AirdropDraft {
                name: Some("Bad ref".into()),
                ..draft
            };
            let err = create(&b).execute(user, draft).await.unwrap_err();
            assert!(
                matches!(
                    err,
                    AirdropWriteError::Invalid(ValidationError::InvalidReference { field, .. })
                        if field == expected
                ),
                "expected {expected} to be rejected"
            );
        }
        assert!(b.airdrops.list_for_user(user).await.unwrap().is_empty());
    }
}
