//! Report database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub booking_id: Option<Uuid>,
    pub title: String,
    pub status: String,
    pub report_date: Option<NaiveDate>,
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
