//! Caller-supplied gap filling
//!
//! The store does not interpolate missing time points on its own: which
//! granularity to backfill (daily, hourly, minute-level) is a policy
//! decision that belongs to the caller. A [`GapPolicy`] produces the
//! timestamp grid to materialize; the store inserts an empty table at each
//! grid point not already present.

use crate::store::dates::Timestamp;
use crate::store::TimeSeriesStore;
use crate::value::Value;

/// Strategy producing the timestamps a store should materialize.
///
/// Implementations receive the store's first and last timestamps and return
/// the full grid between them, in any order; points already present in the
/// store are left untouched.
pub trait GapPolicy {
    /// Timestamps to materialize between `start` and `end` inclusive
    fn grid(&self, start: Timestamp, end: Timestamp) -> Vec<Timestamp>;
}

impl<T: Value> TimeSeriesStore<T> {
    /// Insert an empty table at every policy grid point not already present.
    ///
    /// A no-op on an empty store. The inserted tables hold no data and are
    /// removed again by [`TimeSeriesStore::remove_empty_timestamps`], so a
    /// policy can be applied and reversed without loss.
    pub fn fill_gaps(&mut self, policy: &dyn GapPolicy) {
        let (Some(start), Some(end)) = (self.first_timestamp(), self.last_timestamp()) else {
            return;
        };

        for timestamp in policy.grid(start, end) {
            self.data.entry(timestamp).or_default();
        }
    }
}
