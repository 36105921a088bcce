use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::dto::dashboard::{AirdropCardDto, DashboardDto, StatsDto};
use crate::application::services::dashboard::StatusFilter;
use crate::application::use_cases::airdrops::create_airdrop::{AirdropWriteError, CreateAirdrop};
use crate::application::use_cases::airdrops::delete_airdrop::DeleteAirdrop;
use crate::application::use_cases::airdrops::get_airdrop::GetAirdrop;
use crate::application::use_cases::airdrops::get_stats::GetStats;
use crate::application::use_cases::airdrops::list_airdrops::{ListAirdrops, ListAirdropsQuery};
use crate::application::use_cases::airdrops::update_airdrop::UpdateAirdrop;
use crate::bootstrap::app_context::AppContext;
use crate::domain::airdrops::airdrop::{Airdrop, AirdropStatus};
use crate::domain::airdrops::draft::{AirdropDraft, RewardInput};
use crate::presentation::http::auth::{Bearer, current_user};
use crate::presentation::http::error::{ApiError, ErrorBody};

const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Serialize, ToSchema)]
pub struct AirdropResponse {
    pub id: Uuid,
    pub name: String,
    pub categories: Vec<String>,
    pub status: AirdropStatus,
    pub date: Option<chrono::NaiveDate>,
    pub notes: Option<String>,
    pub link: Option<String>,
    pub reward: Option<f64>,
    pub selected_wallet: Option<Uuid>,
    pub selected_twitter: Option<Uuid>,
    pub selected_discord: Option<Uuid>,
    pub selected_telegram: Option<Uuid>,
    pub selected_email: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Airdrop> for AirdropResponse {
    fn from(a: Airdrop) -> Self {
        Self {
            id: a.id,
            name: a.name,
            categories: a.categories,
            status: a.status,
            date: a.date,
            notes: a.notes,
            link: a.link,
            reward: a.reward,
            selected_wallet: a.selected_wallet,
            selected_twitter: a.selected_twitter,
            selected_discord: a.selected_discord,
            selected_telegram: a.selected_telegram,
            selected_email: a.selected_email,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// An airdrop as shown on a dashboard card.
#[derive(Debug, Serialize, ToSchema)]
pub struct AirdropCard {
    #[serde(flatten)]
    pub airdrop: AirdropResponse,
    pub status_label: String,
    pub wallet_label: Option<String>,
    pub twitter_label: Option<String>,
    pub discord_label: Option<String>,
    pub telegram_label: Option<String>,
    pub email_label: Option<String>,
}

impl From<AirdropCardDto> for AirdropCard {
    fn from(c: AirdropCardDto) -> Self {
        Self {
            airdrop: c.airdrop.into(),
            status_label: c.status_label.to_string(),
            wallet_label: c.wallet_label,
            twitter_label: c.twitter_label,
            discord_label: c.discord_label,
            telegram_label: c.telegram_label,
            email_label: c.email_label,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total: usize,
    pub ongoing: usize,
    pub completed: usize,
    pub claimed: usize,
    pub total_earnings: f64,
}

impl From<StatsDto> for StatsResponse {
    fn from(s: StatsDto) -> Self {
        Self {
            total: s.total,
            ongoing: s.ongoing,
            completed: s.completed,
            claimed: s.claimed,
            total_earnings: s.total_earnings,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationResponse {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub showing_from: usize,
    pub showing_to: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub filter: String,
    pub items: Vec<AirdropCard>,
    pub pagination: PaginationResponse,
    pub stats: StatsResponse,
}

impl From<DashboardDto> for DashboardResponse {
    fn from(d: DashboardDto) -> Self {
        let p = d.page;
        Self {
            filter: d.filter,
            pagination: PaginationResponse {
                page: p.page,
                per_page: p.per_page,
                total_items: p.total_items,
                total_pages: p.total_pages,
                showing_from: p.showing_from,
                showing_to: p.showing_to,
                has_previous: p.has_previous,
                has_next: p.has_next,
            },
            items: p.items.into_iter().map(AirdropCard::from).collect(),
            stats: d.stats.into(),
        }
    }
}

/// Form payload for create and update. Every field is optional and loosely
/// typed; `reward` may be a number or a string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AirdropRequest {
    pub name: Option<String>,
    pub categories: Option<Vec<String>>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub notes: Option<String>,
    pub link: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub reward: Option<RewardInput>,
    pub selected_wallet: Option<String>,
    pub selected_twitter: Option<String>,
    pub selected_discord: Option<String>,
    pub selected_telegram: Option<String>,
    pub selected_email: Option<String>,
}

impl From<AirdropRequest> for AirdropDraft {
    fn from(r: AirdropRequest) -> Self {
        Self {
            name: r.name,
            categories: r.categories,
            status: r.status,
            date: r.date,
            notes: r.notes,
            link: r.link,
            reward: r.reward,
            selected_wallet: r.selected_wallet,
            selected_twitter: r.selected_twitter,
            selected_discord: r.selected_discord,
            selected_telegram: r.selected_telegram,
            selected_email: r.selected_email,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListAirdropsParams {
    pub status: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/airdrops", get(list_airdrops).post(create_airdrop))
        .route(
            "/airdrops/:id",
            get(get_airdrop).put(update_airdrop).delete(delete_airdrop),
        )
        .route("/stats", get(get_stats))
        .with_state(ctx)
}

fn write_error(action: &str, e: AirdropWriteError) -> ApiError {
    match e {
        AirdropWriteError::Invalid(v) => ApiError::bad_request(v.to_string()),
        AirdropWriteError::Storage(e) => ApiError::internal(&format!("Failed to {action} airdrop"), e),
    }
}

#[utoipa::path(get, path = "/api/airdrops", tag = "Airdrops",
    params(
        ("status" = Option<String>, Query, description = "all | ongoing | completed | claimed"),
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("per_page" = Option<usize>, Query, description = "Items per page")
    ),
    responses((status = 200, body = DashboardResponse), (status = 400, body = ErrorBody)))]
pub async fn list_airdrops(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    q: Option<Query<ListAirdropsParams>>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let params = q.map(|Query(v)| v).unwrap_or_default();
    let filter: StatusFilter = params
        .status
        .as_deref()
        .unwrap_or("all")
        .parse()
        .map_err(|e: anyhow::Error| ApiError::bad_request(e.to_string()))?;
    let query = ListAirdropsQuery {
        filter,
        page: params.page.unwrap_or(1),
        per_page: params
            .per_page
            .unwrap_or(ctx.cfg.items_per_page)
            .clamp(1, MAX_PER_PAGE),
    };

    let airdrops = ctx.airdrop_repo();
    let wallets = ctx.wallet_repo();
    let socials = ctx.social_account_repo();
    let uc = ListAirdrops {
        airdrops: airdrops.as_ref(),
        wallets: wallets.as_ref(),
        social_accounts: socials.as_ref(),
    };
    let dashboard = uc
        .execute(user_id, query)
        .await
        .map_err(|e| ApiError::internal("Failed to load airdrops", e))?;
    Ok(Json(dashboard.into()))
}

#[utoipa::path(post, path = "/api/airdrops", tag = "Airdrops", request_body = AirdropRequest,
    responses((status = 201, body = AirdropResponse), (status = 400, body = ErrorBody)))]
pub async fn create_airdrop(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Json(req): Json<AirdropRequest>,
) -> Result<(StatusCode, Json<AirdropResponse>), ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let airdrops = ctx.airdrop_repo();
    let wallets = ctx.wallet_repo();
    let socials = ctx.social_account_repo();
    let uc = CreateAirdrop {
        airdrops: airdrops.as_ref(),
        wallets: wallets.as_ref(),
        social_accounts: socials.as_ref(),
    };
    let airdrop = uc
        .execute(user_id, req.into())
        .await
        .map_err(|e| write_error("create", e))?;
    Ok((StatusCode::CREATED, Json(airdrop.into())))
}

#[utoipa::path(get, path = "/api/airdrops/{id}", tag = "Airdrops",
    params(("id" = Uuid, Path, description = "Airdrop ID")),
    responses((status = 200, body = AirdropResponse), (status = 404, body = ErrorBody)))]
pub async fn get_airdrop(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Path(id): Path<Uuid>,
) -> Result<Json<AirdropResponse>, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.airdrop_repo();
    let uc = GetAirdrop {
        repo: repo.as_ref(),
    };
    let airdrop = uc
        .execute(id, user_id)
        .await
        .map_err(|e| ApiError::internal("Failed to load airdrop", e))?
        .ok_or_else(|| ApiError::not_found("Airdrop"))?;
    Ok(Json(airdrop.into()))
}

#[utoipa::path(put, path = "/api/airdrops/{id}", tag = "Airdrops", request_body = AirdropRequest,
    params(("id" = Uuid, Path, description = "Airdrop ID")),
    responses(
        (status = 200, body = AirdropResponse),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn update_airdrop(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Path(id): Path<Uuid>,
    Json(req): Json<AirdropRequest>,
) -> Result<Json<AirdropResponse>, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let airdrops = ctx.airdrop_repo();
    let wallets = ctx.wallet_repo();
    let socials = ctx.social_account_repo();
    let uc = UpdateAirdrop {
        airdrops: airdrops.as_ref(),
        wallets: wallets.as_ref(),
        social_accounts: socials.as_ref(),
    };
    let airdrop = uc
        .execute(id, user_id, req.into())
        .await
        .map_err(|e| write_error("update", e))?
        .ok_or_else(|| ApiError::not_found("Airdrop"))?;
    Ok(Json(airdrop.into()))
}

#[utoipa::path(delete, path = "/api/airdrops/{id}", tag = "Airdrops",
    params(("id" = Uuid, Path, description = "Airdrop ID")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_airdrop(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.airdrop_repo();
    let uc = DeleteAirdrop {
        repo: repo.as_ref(),
    };
    let deleted = uc
        .execute(id, user_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete airdrop", e))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Airdrop"))
    }
}

#[utoipa::path(get, path = "/api/stats", tag = "Airdrops", responses((status = 200, body = StatsResponse)))]
pub async fn get_stats(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
) -> Result<Json<StatsResponse>, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.airdrop_repo();
    let uc = GetStats {
        repo: repo.as_ref(),
    };
    let stats = uc
        .execute(user_id)
        .await
        .map_err(|e| ApiError::internal("Failed to load stats", e))?;
    Ok(Json(stats.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_numeric_and_text_reward() {
        let r: AirdropRequest = serde_json::from_str(r#"{"name":"a","reward":12.5}"#).unwrap();
        assert_eq!(r.reward, Some(RewardInput::Number(12.5)));
        let r: AirdropRequest = serde_json::from_str(r#"{"name":"a","reward":"7"}"#).unwrap();
        let draft = AirdropDraft::from(r);
        assert_eq!(draft.reward, Some(RewardInput::Text("7".into())));
        assert_eq!(draft.normalize().unwrap().reward, Some(7.0));
    }
}
