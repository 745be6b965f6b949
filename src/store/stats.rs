//! Ingestion statistics and warning report
//!
//! Every ingestion call returns an [`IngestStats`] summarizing what happened
//! to the file's rows. The silent-degradation paths of the pipeline
//! (sentinel-dated rows, skipped duplicate assets, reader-level row errors)
//! are counted here without changing the best-effort behavior itself.

/// Per-call ingestion statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct IngestStats {
    /// Number of data rows read from the file (header excluded)
    pub rows_read: usize,

    /// Number of rows the CSV reader could not tokenize
    pub rows_skipped: usize,

    /// Number of value tokens converted and offered to the table
    pub values_converted: usize,

    /// Number of rows whose date string matched no registered format and
    /// collapsed onto the sentinel timestamp
    pub sentinel_rows: usize,

    /// Human-readable warnings for reported-and-skipped conditions
    pub warnings: Vec<String>,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the file ingested without any anomaly worth inspecting
    pub fn is_clean(&self) -> bool {
        self.rows_skipped == 0 && self.sentinel_rows == 0 && self.warnings.is_empty()
    }
}
