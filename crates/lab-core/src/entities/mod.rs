//! Domain entities - core business objects

mod blog;
mod booking;
mod contact;
mod location;
mod package;
mod report;
mod user;

pub use blog::BlogPost;
pub use booking::{Booking, BookingStatus, CollectionType};
pub use contact::ContactInquiry;
pub use location::{ConnectivityInfo, Location};
pub use package::Package;
pub use report::{Report, ReportStatus};
pub use user::User;
