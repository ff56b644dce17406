//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod blog;
pub mod booking;
pub mod contact;
pub mod context;
pub mod error;
pub mod location;
pub mod package;
pub mod report;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use blog::BlogService;
pub use booking::BookingService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use location::LocationService;
pub use package::PackageService;
pub use report::ReportService;
pub use user::UserService;
