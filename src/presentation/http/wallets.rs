use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::wallets::create_wallet::{CreateWallet, CreateWalletError};
use crate::application::use_cases::wallets::delete_wallet::DeleteWallet;
use crate::application::use_cases::wallets::list_wallets::ListWallets;
use crate::bootstrap::app_context::AppContext;
use crate::domain::wallets::wallet::Wallet;
use crate::presentation::http::auth::{Bearer, current_user};
use crate::presentation::http::error::{ApiError, ErrorBody};

#[derive(Debug, Serialize, ToSchema)]
pub struct WalletResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Wallet> for WalletResponse {
    fn from(w: Wallet) -> Self {
        Self {
            id: w.id,
            name: w.name,
            address: w.address,
            created_at: w.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WalletListResponse {
    pub items: Vec<WalletResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWalletRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/wallets", get(list_wallets).post(create_wallet))
        .route("/wallets/:id", delete(delete_wallet))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/wallets", tag = "Settings", responses((status = 200, body = WalletListResponse)))]
pub async fn list_wallets(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
) -> Result<Json<WalletListResponse>, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.wallet_repo();
    let uc = ListWallets {
        repo: repo.as_ref(),
    };
    let items = uc
        .execute(user_id)
        .await
        .map_err(|e| ApiError::internal("Failed to load wallets", e))?;
    Ok(Json(WalletListResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/api/wallets", tag = "Settings", request_body = CreateWalletRequest,
    responses((status = 201, body = WalletResponse), (status = 400, body = ErrorBody)))]
pub async fn create_wallet(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Json(req): Json<CreateWalletRequest>,
) -> Result<(StatusCode, Json<WalletResponse>), ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.wallet_repo();
    let uc = CreateWallet {
        repo: repo.as_ref(),
    };
    let wallet = uc
        .execute(user_id, &req.name, &req.address)
        .await
        .map_err(|e| match e {
            CreateWalletError::Invalid(v) => ApiError::bad_request(v.to_string()),
            CreateWalletError::Storage(e) => ApiError::internal("Failed to add wallet", e),
        })?;
    Ok((StatusCode::CREATED, Json(wallet.into())))
}

#[utoipa::path(delete, path = "/api/wallets/{id}", tag = "Settings",
    params(("id" = Uuid, Path, description = "Wallet ID")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_wallet(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.wallet_repo();
    let uc = DeleteWallet {
        repo: repo.as_ref(),
    };
    match uc.execute(id, user_id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::not_found("Wallet")),
        Err(e) => Err(ApiError::internal("Failed to delete wallet", e)),
    }
}
