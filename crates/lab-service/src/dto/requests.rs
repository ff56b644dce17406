//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::NaiveDate;
use lab_core::entities::CollectionType;
use serde::Deserialize;
use validator::Validate;

use super::validators::{validate_indian_phone, validate_name, validate_search_term};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(custom(function = "validate_indian_phone"))]
    pub phone: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user's profile
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_indian_phone"))]
    pub phone: Option<String>,
}

/// Change the current user's password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 6, max = 128, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

// ============================================================================
// Package Queries
// ============================================================================

/// Query string for `GET /api/packages`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PackageListQuery {
    pub featured: Option<bool>,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: Option<String>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

/// Query string for `GET /api/search/packages`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PackageSearchQuery {
    #[validate(custom(function = "validate_search_term"))]
    pub q: String,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: Option<String>,

    #[validate(range(min = 1, max = 50, message = "Limit must be between 1 and 50"))]
    pub limit: Option<i64>,
}

// ============================================================================
// Booking Requests
// ============================================================================

/// Book a package for sample collection
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(range(min = 1, message = "A valid package is required"))]
    pub package_id: i64,

    #[validate(custom(function = "validate_name"))]
    pub patient_name: String,

    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    #[validate(custom(function = "validate_indian_phone"))]
    pub phone: String,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,

    /// ISO date, e.g. `2025-03-14`
    pub preferred_date: NaiveDate,

    #[validate(length(max = 20, message = "Preferred time must be at most 20 characters"))]
    pub preferred_time: Option<String>,

    #[serde(default)]
    pub collection_type: CollectionType,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

// ============================================================================
// Contact Requests
// ============================================================================

/// Contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    #[validate(custom(function = "validate_indian_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 10, max = 5000, message = "Message must be at least 10 characters"))]
    pub message: String,
}

// ============================================================================
// Location Queries
// ============================================================================

/// Query string for `GET /api/locations`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationQuery {
    pub city: Option<String>,
}
