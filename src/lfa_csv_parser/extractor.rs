//! Row classification state machine
//!
//! The extractor consumes rows one at a time and never looks back. Every
//! non-empty row is first checked against the metadata tags. Until a header
//! is found, rows are also checked against the header rules; once found, the
//! resolved column positions travel with the `Accumulating` state and every
//! later row is read as a candidate data row.

use tracing::debug;

use super::builder::RecordBuilder;
use super::header::{HeaderIndex, detect_header};
use super::stats::ParseStats;
use super::tags::apply_metadata;
use crate::Result;
use crate::config::ExtractorConfig;
use crate::models::ChemicalSystem;

/// Position of the extractor relative to the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorState {
    SeekingHeader,
    Accumulating(HeaderIndex),
}

/// Streaming extractor for one LFA export
#[derive(Debug, Clone)]
pub struct LfaExtractor {
    config: ExtractorConfig,
    state: ExtractorState,
    builder: RecordBuilder,
    stats: ParseStats,
}

impl Default for LfaExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl LfaExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            state: ExtractorState::SeekingHeader,
            builder: RecordBuilder::new(),
            stats: ParseStats::new(),
        }
    }

    pub fn state(&self) -> ExtractorState {
        self.state
    }

    pub fn builder(&self) -> &RecordBuilder {
        &self.builder
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Classify one row and update the accumulated record
    ///
    /// A row with zero fields leaves the state and the record untouched. It
    /// still counts towards `total_rows` and `empty_rows` in the statistics.
    pub fn push_row<S: AsRef<str>>(&mut self, row: &[S]) -> Result<()> {
        self.stats.total_rows += 1;
        let row_number = self.stats.total_rows;

        if row.is_empty() {
            self.stats.empty_rows += 1;
            return Ok(());
        }

        self.stats.metadata_fields += apply_metadata(row, row_number, &mut self.builder)?;

        match self.state {
            ExtractorState::SeekingHeader => {
                if let Some(index) = detect_header(row, row_number, self.config.header_policy)? {
                    self.builder.begin_series();
                    self.stats.header_row = Some(row_number);
                    self.state = ExtractorState::Accumulating(index);
                }
            }
            ExtractorState::Accumulating(index) => match index.read_point(row, row_number)? {
                Some(point) => {
                    self.builder.push_point(point);
                    self.stats.data_points += 1;
                }
                None => {
                    debug!("Row {}: empty temperature or diffusivity, skipped", row_number);
                    self.stats.rows_skipped += 1;
                }
            },
        }

        Ok(())
    }

    /// Validate and assemble the record, consuming the extractor
    pub fn finish(self, source_name: &str) -> Result<ChemicalSystem> {
        self.builder.build(source_name)
    }

    /// Like [`finish`](Self::finish), also returning the pass statistics
    pub fn finish_with_stats(self, source_name: &str) -> Result<(ChemicalSystem, ParseStats)> {
        let record = self.builder.build(source_name)?;
        Ok((record, self.stats))
    }
}

/// Extract a record from a sequence of rows with the default configuration
pub fn extract<I, R, S>(rows: I, source_name: &str) -> Result<ChemicalSystem>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    extract_with(rows, source_name, &ExtractorConfig::default())
}

/// Extract a record from a sequence of rows
pub fn extract_with<I, R, S>(
    rows: I,
    source_name: &str,
    config: &ExtractorConfig,
) -> Result<ChemicalSystem>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut extractor = LfaExtractor::new(config.clone());
    for row in rows {
        extractor.push_row(row.as_ref())?;
    }
    extractor.finish(source_name)
}
