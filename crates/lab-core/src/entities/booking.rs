//! Booking entity - a sample collection appointment for a package

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    SampleCollected,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Database / wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::SampleCollected => "sample_collected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the patient may still cancel
    #[inline]
    #[must_use]
    pub fn is_cancellable(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl From<&str> for BookingStatus {
    fn from(value: &str) -> Self {
        match value {
            "confirmed" => Self::Confirmed,
            "sample_collected" => Self::SampleCollected,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Pending,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the sample is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollectionType {
    #[default]
    Home,
    Lab,
}

impl CollectionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Lab => "lab",
        }
    }
}

impl From<&str> for CollectionType {
    fn from(value: &str) -> Self {
        match value {
            "lab" => Self::Lab,
            _ => Self::Home,
        }
    }
}

/// Booking entity. `user_id` is `None` for guest bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub package_id: i64,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub preferred_date: NaiveDate,
    pub preferred_time: Option<String>,
    pub collection_type: CollectionType,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Whether the booking belongs to the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == Some(user_id)
    }

    /// Mark the booking cancelled
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
    }
}
