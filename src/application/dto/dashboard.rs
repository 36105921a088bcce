use crate::domain::airdrops::airdrop::Airdrop;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsDto {
    pub total: usize,
    pub ongoing: usize,
    pub completed: usize,
    pub claimed: usize,
    pub total_earnings: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based index of the first item shown, 0 when the page is empty.
    pub showing_from: usize,
    pub showing_to: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// An airdrop with the account references resolved to display labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AirdropCardDto {
    pub airdrop: Airdrop,
    pub status_label: &'static str,
    pub wallet_label: Option<String>,
    pub twitter_label: Option<String>,
    pub discord_label: Option<String>,
    pub telegram_label: Option<String>,
    pub email_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardDto {
    pub filter: String,
    pub page: PageDto<AirdropCardDto>,
    pub stats: StatsDto,
}
