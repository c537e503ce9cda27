//! Alumni engagement data model.
//!
//! Typed rows are validated once, when they are built, and then shared
//! read-only through [`Dataset`].

pub mod aggregate;
pub mod criteria;
pub mod error;
pub mod record;

pub use aggregate::AggregateRow;
pub use criteria::FilterCriteria;
pub use error::{ModelError, Result};
pub use record::{Dataset, Record};
