//! Package database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for packages table
#[derive(Debug, Clone, FromRow)]
pub struct PackageModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: i32,
    pub original_price: Option<i32>,
    pub parameter_count: i32,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub sample_type: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub popularity_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
