//! PostgreSQL implementation of BlogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lab_core::entities::BlogPost;
use lab_core::traits::{BlogRepository, RepoResult};
use lab_core::value_objects::PageRequest;

use crate::models::BlogPostModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BlogRepository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    /// Create a new PgBlogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn list_published(&self, page: PageRequest) -> RepoResult<Vec<BlogPost>> {
        let rows = sqlx::query_as::<_, BlogPostModel>(
            r"
            SELECT id, title, slug, excerpt, content, author, cover_image, is_published,
                   published_at, created_at
            FROM blog_posts
            WHERE is_published = TRUE
            ORDER BY published_at DESC NULLS LAST, created_at DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_published_by_slug(&self, slug: &str) -> RepoResult<Option<BlogPost>> {
        let result = sqlx::query_as::<_, BlogPostModel>(
            r"
            SELECT id, title, slug, excerpt, content, author, cover_image, is_published,
                   published_at, created_at
            FROM blog_posts
            WHERE slug = $1 AND is_published = TRUE
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(BlogPost::from))
    }
}
