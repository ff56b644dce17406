//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BlogRepository, BookingRepository, ContactRepository, LocationRepository, PackageFilter,
    PackageRepository, PackageSearch, ReportRepository, RepoResult, UserRepository,
};
