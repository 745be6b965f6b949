//! Per-timestamp snapshot of asset → feature → value observations
//!
//! A [`FeatureValueTable`] holds everything recorded at one instant: an owned
//! mapping from asset identifier to a mapping from feature identifier to a
//! single value. Tables are created lazily during ingestion, one per distinct
//! timestamp, and mutated only through [`FeatureValueTable::set`].

use std::collections::HashMap;
use std::fmt;

use crate::value::Value;

/// All observations recorded at one instant, keyed by asset then feature.
///
/// Writes are first-write-wins: for a given (asset, feature) pair at most one
/// value is ever stored, and a second write to the same pair is silently
/// ignored. Iteration order over assets and features follows the underlying
/// hash maps and is not guaranteed stable across runs.
#[derive(Debug, Clone)]
pub struct FeatureValueTable<T> {
    /// {asset : {feature : value}}
    values: HashMap<String, HashMap<String, T>>,
}

impl<T> Default for FeatureValueTable<T> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<T: Value> FeatureValueTable<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` at (asset, feature) only if that pair is absent.
    ///
    /// A second write to an existing pair is a no-op, not an error.
    pub fn set(&mut self, asset: &str, feature: &str, value: T) {
        self.values
            .entry(asset.to_string())
            .or_default()
            .entry(feature.to_string())
            .or_insert(value);
    }

    /// Return the stored value for (asset, feature), or `T::default()`.
    ///
    /// A lookup miss is indistinguishable from a genuinely stored default;
    /// callers that need to tell the two apart should go through
    /// [`FeatureValueTable::features`] instead.
    pub fn get(&self, asset: &str, feature: &str) -> T {
        self.values
            .get(asset)
            .and_then(|features| features.get(feature))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of distinct assets recorded in this table
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether any asset has been recorded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the feature map for one asset, if present
    pub fn features(&self, asset: &str) -> Option<&HashMap<String, T>> {
        self.values.get(asset)
    }

    /// Iterate over (asset, feature map) entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashMap<String, T>)> {
        self.values.iter()
    }
}

impl<T: Value> fmt::Display for FeatureValueTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (asset, features) in &self.values {
            write!(f, "\t{}:\n\t\t", asset)?;
            for (feature, value) in features {
                write!(f, "{}: {}\t", feature, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
