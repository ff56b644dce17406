//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;
pub mod validators;

// Re-export commonly used request types
pub use requests::{
    ChangePasswordRequest, ContactRequest, CreateBookingRequest, LocationQuery, LoginRequest,
    PackageListQuery, PackageSearchQuery, RegisterRequest, UpdateProfileRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, BlogPostDetailResponse, BlogPostListResponse, BlogPostResponse,
    BlogPostSummaryResponse, BookingEnvelope, BookingListResponse, BookingResponse,
    HealthResponse, LocationListResponse, LocationResponse, MessageResponse,
    PackageListResponse, PackageResponse, PaginationMeta, ReportEnvelope, ReportListResponse,
    ReportResponse, UserEnvelope, UserResponse,
};
