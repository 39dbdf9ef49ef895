//! Category endpoints.

use actix_web::{HttpResponse, web};

use listing_shared::MessageResponse;
use listing_shared::dto::{CategoryCreatedResponse, CategoryRequest};

use super::parse_id;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /categories
pub async fn create_category(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    body.validate().map_err(AppError::Validation)?;

    let category_id = state.categories.create_category(body.name.trim()).await?;
    tracing::debug!(category_id, user_id = identity.user_id, "Category added");

    Ok(HttpResponse::Created().json(CategoryCreatedResponse { category_id }))
}

/// GET /categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let names = state.categories.get_all_categories().await?;
    Ok(HttpResponse::Ok().json(names))
}

/// GET /categories/{id}
pub async fn get_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "category")?;
    let name = state.categories.get_category_by_id(id).await?;

    Ok(HttpResponse::Ok().json(name))
}

/// PUT /categories/{id}
pub async fn update_category(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "category")?;
    body.validate().map_err(AppError::Validation)?;

    state.categories.update_category(id, body.name.trim()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Category updated successfully")))
}
