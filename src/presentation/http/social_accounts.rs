use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::social_accounts::create_social_account::{
    CreateSocialAccount, CreateSocialAccountError,
};
use crate::application::use_cases::social_accounts::delete_social_account::DeleteSocialAccount;
use crate::application::use_cases::social_accounts::list_social_accounts::ListSocialAccounts;
use crate::bootstrap::app_context::AppContext;
use crate::domain::social_accounts::social_account::{SocialAccount, SocialPlatform};
use crate::presentation::http::auth::{Bearer, current_user};
use crate::presentation::http::error::{ApiError, ErrorBody};

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialAccountResponse {
    pub id: Uuid,
    pub r#type: SocialPlatform,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<SocialAccount> for SocialAccountResponse {
    fn from(a: SocialAccount) -> Self {
        Self {
            id: a.id,
            r#type: a.platform,
            username: a.username,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialAccountListResponse {
    pub items: Vec<SocialAccountResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSocialAccountRequest {
    pub r#type: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct ListSocialAccountsQuery {
    pub r#type: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/social-accounts",
            get(list_social_accounts).post(create_social_account),
        )
        .route("/social-accounts/:id", delete(delete_social_account))
        .with_state(ctx)
}

fn parse_platform(raw: &str) -> Result<SocialPlatform, ApiError> {
    raw.parse()
        .map_err(|e: anyhow::Error| ApiError::bad_request(e.to_string()))
}

#[utoipa::path(get, path = "/api/social-accounts", tag = "Settings",
    params(("type" = Option<String>, Query, description = "twitter | discord | telegram | email")),
    responses((status = 200, body = SocialAccountListResponse), (status = 400, body = ErrorBody)))]
pub async fn list_social_accounts(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    q: Option<Query<ListSocialAccountsQuery>>,
) -> Result<Json<SocialAccountListResponse>, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let platform = match q.and_then(|Query(v)| v.r#type) {
        Some(t) if !t.trim().is_empty() => Some(parse_platform(&t)?),
        _ => None,
    };
    let repo = ctx.social_account_repo();
    let uc = ListSocialAccounts {
        repo: repo.as_ref(),
    };
    let items = uc
        .execute(user_id, platform)
        .await
        .map_err(|e| ApiError::internal("Failed to load social accounts", e))?;
    Ok(Json(SocialAccountListResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/api/social-accounts", tag = "Settings", request_body = CreateSocialAccountRequest,
    responses((status = 201, body = SocialAccountResponse), (status = 400, body = ErrorBody)))]
pub async fn create_social_account(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Json(req): Json<CreateSocialAccountRequest>,
) -> Result<(StatusCode, Json<SocialAccountResponse>), ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let platform = parse_platform(&req.r#type)?;
    let repo = ctx.social_account_repo();
    let uc = CreateSocialAccount {
        repo: repo.as_ref(),
    };
    let account = uc
        .execute(user_id, platform, &req.username)
        .await
        .map_err(|e| match e {
            CreateSocialAccountError::Invalid(v) => ApiError::bad_request(v.to_string()),
            CreateSocialAccountError::Storage(e) => {
                ApiError::internal("Failed to add social account", e)
            }
        })?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

#[utoipa::path(delete, path = "/api/social-accounts/{id}", tag = "Settings",
    params(("id" = Uuid, Path, description = "Social account ID")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_social_account(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.social_account_repo();
    let uc = DeleteSocialAccount {
        repo: repo.as_ref(),
    };
    match uc.execute(id, user_id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::not_found("Social account")),
        Err(e) => Err(ApiError::internal("Failed to delete social account", e)),
    }
}
