//! Blog handlers

use axum::{
    extract::{Path, State},
    Json,
};
use lab_service::dto::{BlogPostDetailResponse, BlogPostListResponse};
use lab_service::BlogService;

use crate::extractors::Pagination;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/blogs
pub async fn list_posts(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<BlogPostListResponse>> {
    let service = BlogService::new(state.service_context());
    Ok(Json(service.list(page).await?))
}

/// GET /api/blogs/:slug
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<BlogPostDetailResponse>> {
    let service = BlogService::new(state.service_context());
    let post = service.get_by_slug(&slug).await?;
    Ok(Json(BlogPostDetailResponse::new(post)))
}
