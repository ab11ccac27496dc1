//! File handling for LFA exports
//!
//! Decodes the CSV rows of an export and streams them through an
//! [`LfaExtractor`]. Rows may have any number of fields and non-UTF-8 bytes
//! (instrument software commonly writes `°` in Latin-1) are replaced rather
//! than rejected.
//!
//! Blank lines are dropped by the CSV reader and never reach the extractor,
//! so `empty_rows` stays zero for file input and `total_rows` (and the header
//! row number) count only non-blank lines.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use super::extractor::LfaExtractor;
use super::stats::ParseResult;
use crate::config::ExtractorConfig;
use crate::{Error, Result};

/// Parser for LFA diffusivity exports
#[derive(Debug, Clone, Default)]
pub struct LfaCsvParser {
    config: ExtractorConfig,
}

impl LfaCsvParser {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Parse an export file into a record
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing LFA export: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open file {}", file_path.display()), e)
        })?;

        self.parse_reader(BufReader::new(file), &file_path.to_string_lossy())
    }

    /// Parse CSV content from any reader
    ///
    /// `source_name` supplies the record identifier and file reference.
    pub fn parse_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<ParseResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut extractor = LfaExtractor::new(self.config.clone());
        let mut record = csv::ByteRecord::new();

        loop {
            let more = csv_reader.read_byte_record(&mut record).map_err(|e| {
                Error::csv_parsing(source_name, "Failed to read CSV row", e)
            })?;
            if !more {
                break;
            }

            let fields: Vec<_> = record.iter().map(String::from_utf8_lossy).collect();
            extractor.push_row(&fields)?;
        }

        let (record, stats) = extractor.finish_with_stats(source_name)?;
        debug!("Parse statistics for {}: {:?}", source_name, stats);
        info!(
            "Parsed {} data points from {} rows (header at row {:?})",
            stats.data_points, stats.total_rows, stats.header_row
        );

        Ok(ParseResult { record, stats })
    }
}
