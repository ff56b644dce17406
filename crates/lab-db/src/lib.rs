//! # lab-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `lab-core`. It handles:
//!
//! - Connection pool management (including Supabase TLS)
//! - Schema migrations from the workspace `migrations/` directory
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lab_db::pool::{create_pool, DatabaseConfig};
//! use lab_db::repositories::PgPackageRepository;
//! use lab_core::traits::PackageRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_url("postgres://localhost/vilife");
//!     let pool = create_pool(&config).await?;
//!     let packages = PgPackageRepository::new(pool);
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ping, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgBlogRepository, PgBookingRepository, PgContactRepository, PgLocationRepository,
    PgPackageRepository, PgReportRepository, PgUserRepository,
};
