//! Location database model

use chrono::{DateTime, Utc};
use lab_core::entities::ConnectivityInfo;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for locations table
#[derive(Debug, Clone, FromRow)]
pub struct LocationModel {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub address: String,
    pub phone: Option<String>,
    pub map_link: Option<String>,
    pub opening_hours: Option<String>,
    pub connectivity: Json<Vec<ConnectivityInfo>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
