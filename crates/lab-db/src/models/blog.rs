//! Blog post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for blog_posts table
#[derive(Debug, Clone, FromRow)]
pub struct BlogPostModel {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
