//! # lab-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BlogPost, Booking, BookingStatus, CollectionType, ConnectivityInfo, ContactInquiry, Location,
    Package, Report, ReportStatus, User,
};
pub use error::DomainError;
pub use traits::{
    BlogRepository, BookingRepository, ContactRepository, LocationRepository, PackageFilter,
    PackageRepository, PackageSearch, ReportRepository, RepoResult, UserRepository,
};
pub use value_objects::PageRequest;
