//! Time-ordered store of per-timestamp observation tables
//!
//! A [`TimeSeriesStore`] owns a chronologically ordered mapping from
//! timestamp to [`FeatureValueTable`], a side index recording which features
//! each asset declared in its header row, and the prioritized date-format
//! list used during ingestion. Rows may arrive in any order across files;
//! iteration is always ascending by timestamp.
//!
//! ## Architecture
//!
//! The store is organized into logical components:
//! - [`ingest`] - CSV ingestion pipeline (sanitization, tokenizing, folding)
//! - [`dates`] - Format registry, sentinel fallback, calendar arithmetic
//! - [`gaps`] - Caller-supplied gap-filling strategy
//! - [`stats`] - Per-ingestion statistics and warnings
//!
//! ## Usage
//!
//! ```no_run
//! use tickframe::TimeSeriesStore;
//!
//! # fn example() -> tickframe::Result<()> {
//! let mut store: TimeSeriesStore<f64> = TimeSeriesStore::new();
//! store.add_date_format("%d/%m/%Y");
//! store.ingest("EUR_USD", "data/EUR_USD.csv")?;
//!
//! for (timestamp, table) in store.iter() {
//!     println!("{}: {} assets", tickframe::format_timestamp(*timestamp), table.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use crate::table::FeatureValueTable;
use crate::value::Value;

pub mod dates;
pub mod gaps;
pub mod ingest;
pub mod stats;

#[cfg(test)]
mod tests;

use dates::{format_timestamp, DateFormatList, Timestamp};

/// Chronological collection of observation tables with an asset/feature index
///
/// The store exclusively owns its tables and index; both are exposed outward
/// only as read-only views. Mutation happens through ingestion and the
/// maintenance operations. The store is single-threaded by design: concurrent
/// ingestion calls must be externally serialized, while read-only queries may
/// run concurrently with each other.
#[derive(Debug, Clone)]
pub struct TimeSeriesStore<T> {
    /// Timestamp to the table holding that instant's observations, ascending
    pub(crate) data: BTreeMap<Timestamp, FeatureValueTable<T>>,

    /// Features each asset declared in its header row, one entry per asset
    pub(crate) asset_features: HashMap<String, HashSet<String>>,

    /// Date-parse patterns tried in registration order during ingestion
    pub(crate) formats: DateFormatList,
}

impl<T> Default for TimeSeriesStore<T> {
    fn default() -> Self {
        Self {
            data: BTreeMap::new(),
            asset_features: HashMap::new(),
            formats: DateFormatList::new(),
        }
    }
}

impl<T: Value> TimeSeriesStore<T> {
    /// Create a new empty store with the built-in date formats
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct timestamps in the store
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the store holds any timestamp entry
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether an asset has been ingested
    pub fn contains_asset(&self, asset: &str) -> bool {
        self.asset_features.contains_key(asset)
    }

    /// Check whether a timestamp entry exists
    pub fn contains_timestamp(&self, timestamp: Timestamp) -> bool {
        self.data.contains_key(&timestamp)
    }

    /// Read-only view of the asset → declared-features index
    pub fn features(&self) -> &HashMap<String, HashSet<String>> {
        &self.asset_features
    }

    /// Return the value at (timestamp, asset, feature), or `T::default()`.
    ///
    /// Misses at any of the three levels are indistinguishable from a stored
    /// default; use [`TimeSeriesStore::table`] when that distinction matters.
    pub fn get(&self, timestamp: Timestamp, asset: &str, feature: &str) -> T {
        self.data
            .get(&timestamp)
            .map(|table| table.get(asset, feature))
            .unwrap_or_default()
    }

    /// Read-only view of the table at one timestamp, if present
    pub fn table(&self, timestamp: Timestamp) -> Option<&FeatureValueTable<T>> {
        self.data.get(&timestamp)
    }

    /// Iterate over (timestamp, table) entries in ascending timestamp order
    pub fn iter(&self) -> btree_map::Iter<'_, Timestamp, FeatureValueTable<T>> {
        self.data.iter()
    }

    /// Earliest timestamp in the store, if any
    pub fn first_timestamp(&self) -> Option<Timestamp> {
        self.data.keys().next().copied()
    }

    /// Latest timestamp in the store, if any
    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.data.keys().next_back().copied()
    }

    /// Append one date-parse pattern to the end of the priority list.
    ///
    /// Affects only ingestion calls made afterward.
    pub fn add_date_format(&mut self, pattern: impl Into<String>) {
        self.formats.push(pattern);
    }

    /// Append several date-parse patterns, preserving their order
    pub fn add_date_formats<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats.extend(patterns);
    }

    /// Delete every timestamp entry whose table holds no data.
    ///
    /// Rows carrying only a date token, and grids materialized by
    /// [`TimeSeriesStore::fill_gaps`], leave empty tables behind; this prunes
    /// them without touching populated entries.
    pub fn remove_empty_timestamps(&mut self) {
        self.data.retain(|_, table| !table.is_empty());
    }
}

impl<T: Value> fmt::Display for TimeSeriesStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (timestamp, table) in &self.data {
            writeln!(f, "{}:\n{}", format_timestamp(*timestamp), table)?;
        }
        Ok(())
    }
}

// Re-export main types for easy access
pub use gaps::GapPolicy;
pub use stats::IngestStats;
