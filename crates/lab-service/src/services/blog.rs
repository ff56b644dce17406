//! Blog service

use lab_core::value_objects::PageRequest;
use lab_core::DomainError;
use tracing::instrument;

use crate::dto::{BlogPostListResponse, BlogPostResponse, BlogPostSummaryResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Published posts, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageRequest) -> ServiceResult<BlogPostListResponse> {
        let posts = self.ctx.blog_repo().list_published(page).await?;
        Ok(BlogPostListResponse::new(
            posts.iter().map(BlogPostSummaryResponse::from).collect(),
            page,
        ))
    }

    /// A published post by slug
    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> ServiceResult<BlogPostResponse> {
        let post = self
            .ctx
            .blog_repo()
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::BlogPostNotFound(slug.to_string()))?;

        Ok(BlogPostResponse::from(&post))
    }
}
