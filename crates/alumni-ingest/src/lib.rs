//! Alumni data ingestion.
//!
//! This crate reads the engagement CSV with Polars and converts it into a
//! typed, validated [`alumni_model::Dataset`]. Validation happens here, once;
//! the query engine trusts the records it receives.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use alumni_ingest::load_dataset;
//!
//! let dataset = load_dataset(Path::new("alumini_data.csv"))?;
//! println!("{} records", dataset.len());
//! ```

mod dataset;
mod error;
mod reader;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use dataset::{
    NAME_COLUMN, PLATFORM_COLUMN, POINTS_COLUMN, load_dataset, load_dataset_from_frame,
};
pub use reader::{read_csv_frame, validate_encoding};

// === Value Conversion ===
pub use values::{any_to_f64, any_to_string, format_numeric, parse_f64};
