//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Success bodies
//! carry `"success": true` next to a named payload.

use chrono::{DateTime, NaiveDate, Utc};
use lab_core::entities::{BookingStatus, CollectionType, ConnectivityInfo, ReportStatus};
use lab_core::value_objects::PageRequest;
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Plain acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Offset pagination metadata
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    /// Whether another page may exist
    pub has_more: bool,
}

impl PaginationMeta {
    /// A full page suggests there may be more
    pub fn new(page: PageRequest, returned: usize) -> Self {
        Self {
            page: page.page(),
            limit: page.per_page(),
            has_more: returned == page.per_page() as usize,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl HealthResponse {
    pub fn healthy(server_time: DateTime<Utc>) -> Self {
        Self {
            status: "healthy",
            database: "connected",
            server_time: Some(server_time),
            error: None,
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy",
            database: "disconnected",
            server_time: None,
            error: Some("Database connection failed"),
        }
    }
}

// ============================================================================
// Auth / User Responses
// ============================================================================

/// Public view of an account; never includes the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Register / login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(message: &'static str, token: String, user: UserResponse) -> Self {
        Self {
            success: true,
            message,
            token,
            user,
        }
    }
}

/// `{success, user}`
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub user: UserResponse,
}

impl UserEnvelope {
    pub fn new(user: UserResponse) -> Self {
        Self {
            success: true,
            message: None,
            user,
        }
    }

    pub fn with_message(message: &'static str, user: UserResponse) -> Self {
        Self {
            success: true,
            message: Some(message),
            user,
        }
    }
}

// ============================================================================
// Package Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PackageResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: i32,
    pub original_price: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<i32>,
    pub parameter_count: i32,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub sample_type: Option<String>,
    pub is_featured: bool,
    pub popularity_score: i32,
}

#[derive(Debug, Serialize)]
pub struct PackageListResponse {
    pub success: bool,
    pub count: usize,
    pub packages: Vec<PackageResponse>,
}

impl PackageListResponse {
    pub fn new(packages: Vec<PackageResponse>) -> Self {
        Self {
            success: true,
            count: packages.len(),
            packages,
        }
    }
}

// ============================================================================
// Booking Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
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

#[derive(Debug, Serialize)]
pub struct BookingEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub booking: BookingResponse,
}

impl BookingEnvelope {
    pub fn new(booking: BookingResponse) -> Self {
        Self {
            success: true,
            message: None,
            booking,
        }
    }

    pub fn with_message(message: &'static str, booking: BookingResponse) -> Self {
        Self {
            success: true,
            message: Some(message),
            booking,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub success: bool,
    pub bookings: Vec<BookingResponse>,
    pub pagination: PaginationMeta,
}

impl BookingListResponse {
    pub fn new(bookings: Vec<BookingResponse>, page: PageRequest) -> Self {
        Self {
            success: true,
            pagination: PaginationMeta::new(page, bookings.len()),
            bookings,
        }
    }
}

// ============================================================================
// Report Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: Uuid,
    pub booking_id: Option<Uuid>,
    pub title: String,
    pub status: ReportStatus,
    pub report_date: Option<NaiveDate>,
    pub file_url: Option<String>,
    pub downloadable: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReportEnvelope {
    pub success: bool,
    pub report: ReportResponse,
}

impl ReportEnvelope {
    pub fn new(report: ReportResponse) -> Self {
        Self {
            success: true,
            report,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    pub success: bool,
    pub reports: Vec<ReportResponse>,
    pub pagination: PaginationMeta,
}

impl ReportListResponse {
    pub fn new(reports: Vec<ReportResponse>, page: PageRequest) -> Self {
        Self {
            success: true,
            pagination: PaginationMeta::new(page, reports.len()),
            reports,
        }
    }
}

// ============================================================================
// Location Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub address: String,
    pub phone: Option<String>,
    pub map_link: Option<String>,
    pub opening_hours: Option<String>,
    pub connectivity: Vec<ConnectivityInfo>,
    /// Distinct connectivity kinds, used for the filter tabs
    pub connectivity_types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub success: bool,
    pub count: usize,
    pub locations: Vec<LocationResponse>,
}

impl LocationListResponse {
    pub fn new(locations: Vec<LocationResponse>) -> Self {
        Self {
            success: true,
            count: locations.len(),
            locations,
        }
    }
}

// ============================================================================
// Blog Responses
// ============================================================================

/// Listing entry, without the body
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPostResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostListResponse {
    pub success: bool,
    pub posts: Vec<BlogPostSummaryResponse>,
    pub pagination: PaginationMeta,
}

impl BlogPostListResponse {
    pub fn new(posts: Vec<BlogPostSummaryResponse>, page: PageRequest) -> Self {
        Self {
            success: true,
            pagination: PaginationMeta::new(page, posts.len()),
            posts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostDetailResponse {
    pub success: bool,
    pub post: BlogPostResponse,
}

impl BlogPostDetailResponse {
    pub fn new(post: BlogPostResponse) -> Self {
        Self {
            success: true,
            post,
        }
    }
}
