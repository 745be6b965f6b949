//! Test utilities and fixtures for the store
//!
//! Provides common helpers used across the store's test modules: temporary
//! CSV fixtures and timestamp construction.

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::store::dates::Timestamp;

mod dates_tests;

/// Helper to create a temporary file with the given content
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to build a timestamp from calendar components
pub fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

/// Helper to create the canonical two-row daily fixture
pub fn create_daily_csv() -> String {
    "Date,Open,Close\n\
     2020-01-01,100,110\n\
     2020-01-02,105,115\n"
        .to_string()
}
