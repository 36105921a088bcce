use uuid::Uuid;

use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::preference_repository::PreferenceRepository;
use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::ports::wallet_repository::WalletRepository;

pub struct DeleteAccount<'a, UR, AR, WR, SR, CR, PR>
where
    UR: UserRepository + ?Sized,
    AR: AirdropRepository + ?Sized,
    WR: WalletRepository + ?Sized,
    SR: SocialAccountRepository + ?Sized,
    CR: CategoryRepository + ?Sized,
    PR: PreferenceRepository + ?Sized,
{
    pub user_repo: &'a UR,
    pub airdrops: &'a AR,
    pub wallets: &'a WR,
    pub social_accounts: &'a SR,
    pub categories: &'a CR,
    pub preferences: &'a PR,
}

impl<'a, UR, AR, WR, SR, CR, PR> DeleteAccount<'a, UR, AR, WR, SR, CR, PR>
where
    UR: UserRepository + ?Sized,
    AR: AirdropRepository + ?Sized,
    WR: WalletRepository + ?Sized,
    SR: SocialAccountRepository + ?Sized,
    CR: CategoryRepository + ?Sized,
    PR: PreferenceRepository + ?Sized,
{
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<()> {
        // Airdrops reference wallets and accounts, so they go first.
        let airdrops = self.airdrops.delete_all_for_user(user_id).await?;
        let wallets = self.wallets.delete_all_for_user(user_id).await?;
        let socials = self.social_accounts.delete_all_for_user(user_id).await?;
        let categories = self.categories.delete_all_for_user(user_id).await?;
        self.preferences.clear_for_user(user_id).await?;

        let deleted = self.user_repo.delete_user(user_id).await?;
        anyhow::ensure!(deleted, "user not found");

        tracing::info!(
            user_id = %user_id,
            airdrops,
            wallets,
            socials,
            categories,
            "account_deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::airdrops::draft::AirdropDraft;
    use crate::domain::social_accounts::social_account::SocialPlatform;
    use crate::infrastructure::local::testing::memory_backend;

    #[tokio::test]
    async fn removes_everything_owned_by_the_user() {
        let b = memory_backend();
        let user = b.users.create_user("a@b.io", "A", "hash").await.unwrap();
        let other = b.users.create_user("c@d.io", "C", "hash").await.unwrap();
        let fields = AirdropDraft {
            name: Some("Linea".into()),
            ..Default::default()
        }
        .normalize()
        .unwrap();
        b.airdrops.create_for_user(user.id, &fields).await.unwrap();
        b.airdrops.create_for_user(other.id, &fields).await.unwrap();
        b.wallets.create_for_user(user.id, "Main", "0xabc").await.unwrap();
        b.socials
            .create_for_user(user.id, SocialPlatform::Discord, "hunter#1")
            .await
            .unwrap();

        DeleteAccount {
            user_repo: b.users.as_ref(),
            airdrops: b.airdrops.as_ref(),
            wallets: b.wallets.as_ref(),
            social_accounts: b.socials.as_ref(),
            categories: b.categories.as_ref(),
            preferences: b.preferences.as_ref(),
        }
        .execute(user.id)
        .await
        .unwrap();

        assert!(b.users.find_by_id(user.id).await.unwrap().is_none());
        assert!(b.airdrops.list_for_user(user.id).await.unwrap().is_empty());
        assert!(b.wallets.list_for_user(user.id).await.unwrap().is_empty());
        assert!(b.socials.list_for_user(user.id, None).await.unwrap().is_empty());
        assert_eq!(b.airdrops.list_for_user(other.id).await.unwrap().len(), 1);
    }
}
