//! Listing data ingestion.
//!
//! Reads raw and cleaned vehicle listing CSV files into Polars
//! `DataFrame`s and provides the `AnyValue` conversion helpers shared by
//! the downstream cleaning stages.

pub mod error;
pub mod reader;
pub mod values;

pub use error::{IngestError, Result};
pub use reader::read_listing_csv;
pub use values::{any_to_string, parse_f64};
