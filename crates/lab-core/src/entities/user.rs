//! User entity - a registered patient account

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Registered user. The password hash is deliberately not part of the entity;
/// repositories hand it out separately for authentication only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with a fresh id
    pub fn new(name: String, email: String, phone: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            is_active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the contact phone number
    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
        self.updated_at = Utc::now();
    }
}
