//! UI Components
//!
//! The three mutually exclusive page views.

pub mod loading;
pub mod record;

pub use loading::{ErrorMessage, Loading};
pub use record::DayRecordView;
