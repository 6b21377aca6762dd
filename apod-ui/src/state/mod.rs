//! Frontend data types.

pub mod record;

pub use record::{DayRecord, MediaType};
