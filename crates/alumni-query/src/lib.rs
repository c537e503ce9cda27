//! Filter → aggregate → rank pipeline for alumni engagement data.
//!
//! # Example
//!
//! ```
//! use alumni_model::{Dataset, FilterCriteria, Record};
//! use alumni_query::AlumniQueryEngine;
//!
//! let dataset = Dataset::new(vec![
//!     Record::new(1, "A", "X", 10.0).unwrap(),
//!     Record::new(2, "B", "X", 5.0).unwrap(),
//! ]);
//! let engine = AlumniQueryEngine::new(dataset);
//! let outcome = engine.run(&FilterCriteria::new().with_names(["A"]));
//! assert_eq!(outcome.participant_count(), 1);
//! ```

pub mod aggregate;
pub mod engine;
pub mod filter;
pub mod rank;

pub use aggregate::aggregate;
pub use engine::{AlumniQueryEngine, QueryOptions, QueryOutcome, QueryReport, QueryResult};
pub use filter::{FilteredView, filter};
pub use rank::{DEFAULT_TOP_N, top_n};
