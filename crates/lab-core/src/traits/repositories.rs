//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    BlogPost, Booking, ContactInquiry, Location, Package, Report, User,
};
use crate::error::DomainError;
use crate::value_objects::PageRequest;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active user by ID
    async fn find_active_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find an active user by email together with their password hash
    async fn find_active_by_email(&self, email: &str) -> RepoResult<Option<(User, String)>>;

    /// Check if email is already taken (active or not)
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update name and phone
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Uuid, password_hash: &str) -> RepoResult<()>;

    /// Record a successful login
    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> RepoResult<()>;
}

// ============================================================================
// Package Repository
// ============================================================================

/// Filters for the package listing
#[derive(Debug, Clone, Default)]
pub struct PackageFilter {
    pub featured: Option<bool>,
    pub category: Option<String>,
    pub limit: Option<i64>,
}

/// Free-text package search
#[derive(Debug, Clone)]
pub struct PackageSearch {
    pub term: String,
    pub category: Option<String>,
    pub limit: i64,
}

#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Active packages ordered by name
    async fn list_active(&self, filter: &PackageFilter) -> RepoResult<Vec<Package>>;

    /// Active packages matching the search term, most popular first
    async fn search(&self, search: &PackageSearch) -> RepoResult<Vec<Package>>;

    /// Find an active package by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Package>>;

    /// Find an active package by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Package>>;
}

// ============================================================================
// Booking Repository
// ============================================================================

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Create a new booking
    async fn create(&self, booking: &Booking) -> RepoResult<()>;

    /// Find booking by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Booking>>;

    /// List a user's bookings, newest first
    async fn list_by_user(&self, user_id: Uuid, page: PageRequest) -> RepoResult<Vec<Booking>>;

    /// Cancel the booking if it is still pending or confirmed.
    /// Returns `false` when no open booking with that id exists.
    async fn cancel(&self, id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// List a user's reports, newest first
    async fn list_by_user(&self, user_id: Uuid, page: PageRequest) -> RepoResult<Vec<Report>>;

    /// Find report by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Report>>;
}

// ============================================================================
// Contact Repository
// ============================================================================

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Store a contact inquiry
    async fn create(&self, inquiry: &ContactInquiry) -> RepoResult<()>;
}

// ============================================================================
// Location Repository
// ============================================================================

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Active centres, optionally restricted to a city (case-insensitive)
    async fn list_active(&self, city: Option<&str>) -> RepoResult<Vec<Location>>;
}

// ============================================================================
// Blog Repository
// ============================================================================

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Published posts, newest first
    async fn list_published(&self, page: PageRequest) -> RepoResult<Vec<BlogPost>>;

    /// Find a published post by slug
    async fn find_published_by_slug(&self, slug: &str) -> RepoResult<Option<BlogPost>>;
}
