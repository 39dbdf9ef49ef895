//! HTTP handlers and route configuration.

mod category;
mod health;
mod post;


use actix_web::{HttpRequest, error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/categories")
                .route("", web::post().to(category::create_category))
                .route("", web::get().to(category::list_categories))
                .route("/{id}", web::get().to(category::get_category))
                .route("/{id}", web::put().to(category::update_category)),
        )
        .service(
            web::scope("/posts")
                .route("", web::post().to(post::create_post))
                .route("", web::get().to(post::list_posts))
                // Must precede `/{postId}`.
                .route(
                    "/category/{category}",
                    web::get().to(post::list_posts_by_category),
                )
                .route("/{postId}", web::get().to(post::get_post))
                .route("/{postId}", web::put().to(post::update_post))
                .route("/{postId}", web::delete().to(post::delete_post)),
        )
        .route("/my-posts", web::get().to(post::my_posts));
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected JSON body");
    AppError::BadRequest(format!("Invalid request body: {err}")).into()
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid query string: {err}")).into()
}

/// Path IDs are unsigned and must fit the store's `i32` keys.
fn parse_id(raw: &str, what: &str) -> Result<i32, AppError> {
    raw.parse::<u32>()
        .ok()
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {what} ID")))
}
