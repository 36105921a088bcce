use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::preferences::theme::{GetTheme, SetTheme};
use crate::bootstrap::app_context::AppContext;
use crate::domain::preferences::theme::Theme;
use crate::presentation::http::auth::{Bearer, current_user};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThemeBody {
    pub theme: Theme,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/preferences/theme", get(get_theme).put(set_theme))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/preferences/theme", tag = "Preferences", responses((status = 200, body = ThemeBody)))]
pub async fn get_theme(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
) -> Result<Json<ThemeBody>, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.preference_repo();
    let uc = GetTheme {
        repo: repo.as_ref(),
    };
    let theme = uc
        .execute(user_id)
        .await
        .map_err(|e| ApiError::internal("Failed to load theme", e))?;
    Ok(Json(ThemeBody { theme }))
}

#[utoipa::path(put, path = "/api/preferences/theme", tag = "Preferences", request_body = ThemeBody, responses((status = 200, body = ThemeBody)))]
pub async fn set_theme(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Json(body): Json<ThemeBody>,
) -> Result<Json<ThemeBody>, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.preference_repo();
    let uc = SetTheme {
        repo: repo.as_ref(),
    };
    let theme = uc
        .execute(user_id, body.theme)
        .await
        .map_err(|e| ApiError::internal("Failed to save theme", e))?;
    Ok(Json(ThemeBody { theme }))
}
