//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in lab-core.
//! Each repository handles database operations for a specific domain entity.

mod blog;
mod booking;
mod contact;
mod error;
mod location;
mod package;
mod report;
mod user;

pub use blog::PgBlogRepository;
pub use booking::PgBookingRepository;
pub use contact::PgContactRepository;
pub use location::PgLocationRepository;
pub use package::PgPackageRepository;
pub use report::PgReportRepository;
pub use user::PgUserRepository;
