use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::categories::create_category::{
    CreateCategory, CreateCategoryError,
};
use crate::application::use_cases::categories::delete_category::DeleteCategory;
use crate::application::use_cases::categories::list_categories::ListCategories;
use crate::bootstrap::app_context::AppContext;
use crate::domain::categories::category::{Category, CategoryError};
use crate::presentation::http::auth::{Bearer, current_user};
use crate::presentation::http::error::{ApiError, ErrorBody};

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub items: Vec<CategoryResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/:id", delete(delete_category))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/categories", tag = "Settings", responses((status = 200, body = CategoryListResponse)))]
pub async fn list_categories(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.category_repo();
    let uc = ListCategories {
        repo: repo.as_ref(),
    };
    let items = uc
        .execute(user_id)
        .await
        .map_err(|e| ApiError::internal("Failed to load categories", e))?;
    Ok(Json(CategoryListResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/api/categories", tag = "Settings", request_body = CreateCategoryRequest,
    responses(
        (status = 201, body = CategoryResponse),
        (status = 400, body = ErrorBody),
        (status = 409, body = ErrorBody)
    ))]
pub async fn create_category(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.category_repo();
    let uc = CreateCategory {
        repo: repo.as_ref(),
    };
    let category = uc
        .execute(user_id, &req.name)
        .await
        .map_err(|e| match e {
            CreateCategoryError::Invalid(v) => ApiError::bad_request(v.to_string()),
            CreateCategoryError::Category(CategoryError::Duplicate) => {
                ApiError::conflict("Category already exists")
            }
            CreateCategoryError::Category(CategoryError::Storage(e)) => {
                ApiError::internal("Failed to add category", e)
            }
        })?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

#[utoipa::path(delete, path = "/api/categories/{id}", tag = "Settings",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_category(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.category_repo();
    let uc = DeleteCategory {
        repo: repo.as_ref(),
    };
    match uc.execute(id, user_id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::not_found("Category")),
        Err(e) => Err(ApiError::internal("Failed to delete category", e)),
    }
}
