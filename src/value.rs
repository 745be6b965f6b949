//! Capability bound for the generic value type
//!
//! The store is parameterized over the numeric type held at each
//! (timestamp, asset, feature) cell. Any type that is default-constructible,
//! parseable from text, and renderable to text qualifies; `f64`, `f32`, and
//! the integer primitives all satisfy the bound out of the box.

use std::fmt::Display;
use std::str::FromStr;

/// Capability set required of a cell value.
///
/// - `Default` supplies the fallback returned by lookups that miss and the
///   conversion result for malformed tokens.
/// - `FromStr` converts raw CSV tokens during ingestion.
/// - `Display` renders values in the textual output.
/// - `Clone` supports deep copies of the owning structures.
pub trait Value: Clone + Default + FromStr + Display {}

impl<T: Clone + Default + FromStr + Display> Value for T {}
