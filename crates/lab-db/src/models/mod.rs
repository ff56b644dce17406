//! Database models - SQLx-compatible structs for PostgreSQL tables

mod blog;
mod booking;
mod location;
mod package;
mod report;
mod user;

pub use blog::BlogPostModel;
pub use booking::BookingModel;
pub use location::LocationModel;
pub use package::PackageModel;
pub use report::ReportModel;
pub use user::UserModel;
