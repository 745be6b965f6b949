//! Tickframe Library
//!
//! An in-memory, time-indexed store for sparse, multi-asset, multi-feature
//! numeric observations, populated by ingesting delimited text files.
//!
//! This library provides tools for:
//! - Ingesting CSV-like files with one header row of feature names and one
//!   date/time column per data row
//! - Parsing date/time strings against a prioritized, extensible format list
//! - Point lookups by (timestamp, asset, feature) with chronological iteration
//! - Pruning empty timestamps and caller-supplied gap filling
//!
//! # Example
//!
//! ```no_run
//! use tickframe::TimeSeriesStore;
//!
//! # fn example() -> tickframe::Result<()> {
//! let mut store: TimeSeriesStore<f64> = TimeSeriesStore::new();
//! let stats = store.ingest("EUR_USD", "path/to/EUR_USD.csv")?;
//!
//! println!("{} rows ingested, {} warnings", stats.rows_read, stats.warnings.len());
//! # Ok(())
//! # }
//! ```

pub mod store;
pub mod table;
pub mod value;

// Re-export commonly used types
pub use store::dates::{day_of_week, format_timestamp, sentinel, Timestamp};
pub use store::gaps::GapPolicy;
pub use store::stats::IngestStats;
pub use store::TimeSeriesStore;
pub use table::FeatureValueTable;
pub use value::Value;

/// Result type alias for tickframe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tickframe operations
///
/// Only the fatal condition in the ingestion pipeline (a file that cannot be
/// opened or read) surfaces as an [`Error`]. Every other anomaly (duplicate
/// assets, unparseable dates or values, row/header length mismatches) is
/// absorbed and reported through [`IngestStats`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
