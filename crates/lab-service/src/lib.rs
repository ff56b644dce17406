//! # lab-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, BlogService, BookingService, ContactService, LocationService, PackageService,
    ReportService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
