//! Entity to model mappers
//!
//! This module provides conversions between domain entities (lab-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod blog;
mod booking;
mod location;
mod package;
mod report;
mod user;

pub use booking::BookingInsert;
