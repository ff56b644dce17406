//! Contact inquiry submitted from the website form

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactInquiry {
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        subject: Option<String>,
        message: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            subject,
            message,
            created_at: Utc::now(),
        }
    }
}
