use std::collections::HashMap;
use std::str::FromStr;

use uuid::Uuid;

use crate::application::dto::dashboard::{AirdropCardDto, PageDto, StatsDto};
use crate::domain::airdrops::airdrop::{Airdrop, AirdropStatus};
use crate::domain::social_accounts::social_account::SocialAccount;
use crate::domain::wallets::wallet::Wallet;

pub const DEFAULT_PER_PAGE: usize = 9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AirdropStatus),
}

impl StatusFilter {
    pub fn matches(&self, airdrop: &Airdrop) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => airdrop.status == *status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.as_str(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "all" {
            return Ok(StatusFilter::All);
        }
        Ok(StatusFilter::Only(s.parse()?))
    }
}

/// Slices `items` into the requested 1-based page.
///
/// The page number is clamped into `1..=total_pages` (page 1 when there is
/// nothing to show), so a stale page index after a filter change still lands
/// on real data.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> PageDto<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let items: Vec<T> = items.into_iter().skip(start).take(end - start).collect();
    let (showing_from, showing_to) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };
    PageDto {
        items,
        page,
        per_page,
        total_items,
        total_pages,
        showing_from,
        showing_to,
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}

pub fn compute_stats(airdrops: &[Airdrop]) -> StatsDto {
    let mut stats = StatsDto {
        total: airdrops.len(),
        ..Default::default()
    };
    for a in airdrops {
        match a.status {
            AirdropStatus::Ongoing => stats.ongoing += 1,
            AirdropStatus::Completed => stats.completed += 1,
            AirdropStatus::Claimed => stats.claimed += 1,
        }
        if let Some(reward) = a.claimed_reward() {
            stats.total_earnings += reward;
        }
    }
    stats
}

/// `0x1234567890abcdef` -> `0x1234...cdef`.
///
/// Addresses of 10 chars or fewer, where head and tail would overlap, are
/// returned unchanged.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Lookup of a user's wallets and social accounts by id, used to render cards.
pub struct AccountDirectory {
    wallets: HashMap<Uuid, Wallet>,
    socials: HashMap<Uuid, SocialAccount>,
}

impl AccountDirectory {
    pub fn new(wallets: Vec<Wallet>, socials: Vec<SocialAccount>) -> Self {
        Self {
            wallets: wallets.into_iter().map(|w| (w.id, w)).collect(),
            socials: socials.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn wallet_label(&self, id: Option<Uuid>) -> Option<String> {
        let w = self.wallets.get(&id?)?;
        Some(format!("{}: {}", w.name, truncate_address(&w.address)))
    }

    pub fn social_label(&self, id: Option<Uuid>) -> Option<String> {
        self.socials.get(&id?).map(|s| s.username.clone())
    }

    pub fn card(&self, airdrop: Airdrop) -> AirdropCardDto {
        AirdropCardDto {
            status_label: airdrop.status.label(),
            wallet_label: self.wallet_label(airdrop.selected_wallet),
            twitter_label: self.social_label(airdrop.selected_twitter),
            discord_label: self.social_label(airdrop.selected_discord),
            telegram_label: self.social_label(airdrop.selected_telegram),
            email_label: self.social_label(airdrop.selected_email),
            airdrop,
        }
    }
}
