//! Parsing statistics and result structures

use crate::models::ChemicalSystem;

/// Counters collected during one pass over an export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Rows pushed through the extractor, empty rows included
    pub total_rows: usize,

    /// Rows with zero fields; blank CSV lines never produce one
    pub empty_rows: usize,

    /// Metadata tags applied
    pub metadata_fields: usize,

    /// 1-based row number of the resolved header
    pub header_row: Option<usize>,

    /// Rows after the header accepted into the series
    pub data_points: usize,

    /// Rows after the header rejected for an empty cell
    pub rows_skipped: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Converted record together with the statistics of its pass
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub record: ChemicalSystem,
    pub stats: ParseStats,
}
