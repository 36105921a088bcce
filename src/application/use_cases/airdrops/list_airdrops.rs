use uuid::Uuid;

use crate::application::dto::dashboard::{DashboardDto, PageDto};
use crate::application::ports::airdrop_repository::AirdropRepository;
use crate::application::ports::social_account_repository::SocialAccountRepository;
use crate::application::ports::wallet_repository::WalletRepository;
use crate::application::services::dashboard::{
    AccountDirectory, StatusFilter, compute_stats, paginate,
};

pub struct ListAirdrops<'a, AR, WR, SR>
where
    AR: AirdropRepository + ?Sized,
    WR: WalletRepository + ?Sized,
    SR: SocialAccountRepository + ?Sized,
{
    pub airdrops: &'a AR,
    pub wallets: &'a WR,
    pub social_accounts: &'a SR,
}

#[derive(Debug, Clone, Copy)]
pub struct ListAirdropsQuery {
    pub filter: StatusFilter,
    pub page: usize,
    pub per_page: usize,
}

impl<'a, AR, WR, SR> ListAirdrops<'a, AR, WR, SR>
where
    AR: AirdropRepository + ?Sized,
    WR: WalletRepository + ?Sized,
    SR: SocialAccountRepository + ?Sized,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        query: ListAirdropsQuery,
    ) -> anyhow::Result<DashboardDto> {
        let all = self.airdrops.list_for_user(user_id).await?;
        let wallets = self.wallets.list_for_user(user_id).await?;
        let socials = self.social_accounts.list_for_user(user_id, None).await?;

        let stats = compute_stats(&all);
        let directory = AccountDirectory::new(wallets, socials);
        let filtered: Vec<_> = all
            .into_iter()
            .filter(|a| query.filter.matches(a))
            .collect();
        let page = paginate(filtered, query.page, query.per_page);
        let cards = page
            .items
            .into_iter()
            .map(|a| directory.card(a))
            .collect();

        Ok(DashboardDto {
            filter: query.filter.as_str().to_string(),
            page: PageDto {
                items: cards,
                page: page.page,
                per_page: page.per_page,
                total_items: page.total_items,
                total_pages: page.total_pages,
                showing_from: page.showing_from,
                showing_to: page.showing_to,
                has_previous: page.has_previous,
                has_next: page.has_next,
            },
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::airdrops::airdrop::AirdropStatus;
    use crate::domain::airdrops::draft::{AirdropDraft, RewardInput};
    use crate::infrastructure::local::testing::memory_backend;

    #[tokio::test]
    async fn filters_paginates_and_reports_unfiltered_stats() {
        let b = memory_backend();
        let user = Uuid::new_v4();
        let wallet = b
            .wallets
            .create_for_user(user, "Main", "0x71C7656EC7ab88b098defB751B7401B5f6d8976F")
            .await
            .unwrap();
        for i in 0..12 {
            let status = if i % 3 == 0 { "claimed" } else { "ongoing" };
            let fields = AirdropDraft {
                name: Some(format!("drop-{i}")),
                status: Some(status.into()),
                reward: Some(RewardInput::Text("10".into())),
                selected_wallet: Some(wallet.id.to_string()),
                ..Default::default()
            }
            .normalize()
            .unwrap();
            b.airdrops.create_for_user(user, &fields).await.unwrap();
        }

        let uc = ListAirdrops {
            airdrops: b.airdrops.as_ref(),
            wallets: b.wallets.as_ref(),
            social_accounts: b.socials.as_ref(),
        };
        let dash = uc
            .execute(
                user,
                ListAirdropsQuery {
                    filter: StatusFilter::Only(AirdropStatus::Ongoing),
                    page: 2,
                    per_page: 6,
                },
            )
            .await
            .unwrap();

        assert_eq!(dash.filter, "ongoing");
        assert_eq!(dash.page.total_items, 8);
        assert_eq!(dash.page.total_pages, 2);
        assert_eq!(dash.page.items.len(), 2);
        assert_eq!((dash.page.showing_from, dash.page.showing_to), (7, 8));
        assert!(
            dash.page
                .items
                .iter()
                .all(|c| c.airdrop.status == AirdropStatus::Ongoing)
        );
        assert_eq!(
            dash.page.items[0].wallet_label.as_deref(),
            Some("Main: 0x71C7...976F")
        );
        assert_eq!(dash.stats.total, 12);
        assert_eq!(dash.stats.claimed, 4);
        assert_eq!(dash.stats.total_earnings, 40.0);
    }
}
