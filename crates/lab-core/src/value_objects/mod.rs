//! Value objects

mod page;

pub use page::{PageRequest, DEFAULT_PER_PAGE};
