//! Post endpoints: creation, search, and owner-only mutation.

use actix_web::{HttpResponse, web};

use listing_core::domain::{Page, PostDetails, PostDraft, PostPatch, PostSearch, PriceRange};
use listing_shared::MessageResponse;
use listing_shared::dto::{
    CreatePostRequest, PageQuery, PostCreatedResponse, PostListQuery, PostResponse,
    PostResponseWithOwner, UpdatePostRequest,
};

use super::parse_id;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_draft(req: CreatePostRequest) -> PostDraft {
    PostDraft {
        title: req.title,
        description: req.description,
        price_per_day: req.price_per_day,
        address: req.address,
        category: req.category,
    }
}

fn to_patch(req: UpdatePostRequest) -> PostPatch {
    PostPatch {
        title: req.title,
        description: req.description,
        price_per_day: req.price_per_day,
        address: req.address,
        category: req.category,
        is_active: req.is_active,
    }
}

fn to_response(post: PostDetails) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        description: post.description,
        price_per_day: post.price_per_day,
        address: post.address,
        category: post.category,
        is_active: post.is_active,
    }
}

fn to_response_with_owner(post: PostDetails) -> PostResponseWithOwner {
    PostResponseWithOwner {
        id: post.id,
        title: post.title,
        description: post.description,
        price_per_day: post.price_per_day,
        address: post.address,
        category: post.category,
        is_active: post.is_active,
        owner_id: post.owner_id,
    }
}

fn search(category: Option<String>, query: PostListQuery) -> AppResult<PostSearch> {
    let price = match query.price.as_deref().filter(|p| !p.is_empty()) {
        Some(raw) => PriceRange::parse(raw)?,
        None => PriceRange::default(),
    };

    Ok(PostSearch {
        category,
        title: query.title,
        price,
        page: Page::parse(query.page.as_deref()),
    })
}

async fn list(state: &AppState, search: PostSearch) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all_posts(search).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    body.validate().map_err(AppError::Validation)?;

    let post_id = state
        .posts
        .create_post(identity.user_id, to_draft(body.into_inner()))
        .await?;

    Ok(HttpResponse::Created().json(PostCreatedResponse { post_id }))
}

/// GET /posts?title=&price=min-max&page=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    list(&state, search(None, query.into_inner())?).await
}

/// GET /posts/category/{category}
pub async fn list_posts_by_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let search = search(Some(path.into_inner()), query.into_inner())?;
    list(&state, search).await
}

/// GET /posts/{postId}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post")?;
    let post = state.posts.get_post_by_id(id).await?;

    Ok(HttpResponse::Ok().json(to_response_with_owner(post)))
}

/// GET /my-posts
pub async fn my_posts(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = Page::parse(query.page.as_deref());
    let posts = state.posts.get_posts_by_owner(identity.user_id, page).await?;

    if posts.is_empty() {
        return Ok(HttpResponse::Ok().json(MessageResponse::new("You have no posts")));
    }

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// PUT /posts/{postId}
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post")?;
    body.validate().map_err(AppError::Validation)?;

    state
        .posts
        .update_post(identity.user_id, id, to_patch(body.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post updated successfully")))
}

/// DELETE /posts/{postId}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post")?;
    state.posts.delete_post(id, identity.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
