//! Booking database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for bookings table
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub package_id: i64,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub preferred_date: NaiveDate,
    pub preferred_time: Option<String>,
    /// 'home' or 'lab'
    pub collection_type: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
