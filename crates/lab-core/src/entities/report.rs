//! Report entity - a lab report issued to a patient

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Report processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Processing,
    Ready,
}

impl ReportStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Ready => "ready",
        }
    }
}

impl From<&str> for ReportStatus {
    fn from(value: &str) -> Self {
        match value {
            "ready" => Self::Ready,
            _ => Self::Processing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    pub booking_id: Option<Uuid>,
    pub title: String,
    pub status: ReportStatus,
    pub report_date: Option<NaiveDate>,
    /// Relative path under `/uploads` once the PDF is available
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// A report is downloadable once it is ready and has a file attached
    pub fn is_downloadable(&self) -> bool {
        self.status == ReportStatus::Ready && self.file_url.is_some()
    }
}
