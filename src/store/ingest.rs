//! CSV ingestion pipeline
//!
//! One ingestion call reads a whole file, synchronously and to completion.
//! The first line is the header: its first token is discarded and the
//! remaining tokens become the asset's ordered feature list. Every
//! subsequent line carries a raw date string in its first token and value
//! tokens positionally aligned with the feature list.
//!
//! Lines are sanitized before tokenizing: every byte outside printable ASCII
//! (32–126) is stripped, which removes BOM markers, carriage returns, and
//! other control noise from spreadsheet exports. Tokenizing itself is
//! comma-separated with double-quote quoting and a backslash escape
//! character.
//!
//! The only fatal condition is a file that cannot be read. A duplicate asset
//! id is reported and skipped; unparseable dates collapse onto the sentinel
//! timestamp; malformed value tokens convert to the value type's default;
//! rows shorter or longer than the header truncate positionally. All of
//! these are counted in the returned [`IngestStats`].

use std::path::Path;

use tracing::{debug, info, warn};

use crate::store::stats::IngestStats;
use crate::store::TimeSeriesStore;
use crate::value::Value;
use crate::{Error, Result};

impl<T: Value> TimeSeriesStore<T> {
    /// Ingest one CSV file under the given asset identifier.
    ///
    /// Re-ingesting an asset id already present is a reported no-op: the
    /// store is left untouched and the returned stats carry a warning.
    /// Failure to read the file is the one hard error of the pipeline.
    pub fn ingest(&mut self, asset: &str, path: impl AsRef<Path>) -> Result<IngestStats> {
        let path = path.as_ref();
        let mut stats = IngestStats::new();

        if self.asset_features.contains_key(asset) {
            warn!("asset '{}' already ingested, skipping {}", asset, path.display());
            stats.warnings.push(format!(
                "asset '{}' already ingested; file '{}' skipped",
                asset,
                path.display()
            ));
            return Ok(stats);
        }

        info!("ingesting {} as asset '{}'", path.display(), asset);

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read file {}", path.display()), e))?;

        let sanitized = content
            .lines()
            .map(sanitize_line)
            .collect::<Vec<_>>()
            .join("\n");

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .escape(Some(b'\\'))
            .double_quote(false)
            .from_reader(sanitized.as_bytes());
        let mut records = reader.records();

        // Header row: first token ignored, the rest is the feature list.
        let features: Vec<String> = match records.next() {
            Some(Ok(header)) => header.iter().skip(1).map(str::to_string).collect(),
            Some(Err(e)) => {
                stats
                    .warnings
                    .push(format!("header of '{}' unreadable: {}", path.display(), e));
                Vec::new()
            }
            None => {
                stats
                    .warnings
                    .push(format!("file '{}' is empty", path.display()));
                Vec::new()
            }
        };

        // The asset is indexed even when the header was empty or unreadable;
        // one index entry per asset, ever.
        self.asset_features
            .insert(asset.to_string(), features.iter().cloned().collect());

        for result in records {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    stats.rows_skipped += 1;
                    stats.warnings.push(format!("row unreadable: {}", e));
                    continue;
                }
            };
            stats.rows_read += 1;

            let raw_date = record.get(0).unwrap_or("");
            let timestamp = match self.formats.try_parse(raw_date) {
                Some(timestamp) => timestamp,
                None => {
                    debug!("no format matched date '{}', using sentinel", raw_date);
                    stats.sentinel_rows += 1;
                    super::dates::sentinel()
                }
            };

            // First occurrence of a timestamp allocates its table; later
            // rows for the same instant fold into it under first-write-wins.
            let table = self.data.entry(timestamp).or_default();
            for (feature, token) in features.iter().zip(record.iter().skip(1)) {
                table.set(asset, feature, convert(token));
                stats.values_converted += 1;
            }
        }

        debug!(
            "ingested '{}': {} rows, {} values, {} sentinel-dated",
            asset, stats.rows_read, stats.values_converted, stats.sentinel_rows
        );
        Ok(stats)
    }

    /// Ingest one CSV file, deriving the asset id from the file's base name
    /// (directory and extension stripped).
    pub fn ingest_file(&mut self, path: impl AsRef<Path>) -> Result<IngestStats> {
        let path = path.as_ref();
        let asset = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.ingest(&asset, path)
    }
}

/// Drop every byte outside the printable ASCII range 32–126 inclusive.
fn sanitize_line(line: &str) -> String {
    line.chars().filter(|c| (' '..='~').contains(c)).collect()
}

/// Convert a raw token to the value type; malformed tokens become the default.
fn convert<T: Value>(token: &str) -> T {
    token.trim().parse().unwrap_or_default()
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn sanitize_strips_bom_and_control_bytes() {
        assert_eq!(sanitize_line("\u{feff}Date,Open\r"), "Date,Open");
        assert_eq!(sanitize_line("a\tb"), "ab");
        assert_eq!(sanitize_line("plain ascii ~!"), "plain ascii ~!");
    }

    #[test]
    fn convert_falls_back_to_default() {
        assert_eq!(convert::<f64>("1.5"), 1.5);
        assert_eq!(convert::<f64>(" 2.5 "), 2.5);
        assert_eq!(convert::<f64>("abc"), 0.0);
        assert_eq!(convert::<i64>(""), 0);
    }
}
