//! LFA CSV parser for laser-flash thermal diffusivity exports
//!
//! An LFA export is a single CSV table: tagged metadata rows (`#Material`,
//! `#Thickness_RT/mm`, ...) followed by a header row whose position and
//! column layout vary between instruments and export modes, then the data
//! rows. The parser makes one forward pass over the rows and returns a PIF
//! [`ChemicalSystem`](crate::models::ChemicalSystem).
//!
//! ## Architecture
//!
//! - [`parser`] - File handling and CSV decoding
//! - [`extractor`] - Row classification state machine
//! - [`tags`] - Ordered metadata tag table
//! - [`header`] - Header detection and column resolution
//! - [`builder`] - Record assembly and required-field validation
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use lfa_processor::lfa_csv_parser::extract;
//!
//! let rows = vec![
//!     vec!["#Thickness_RT/mm", "2.0"],
//!     vec!["#Diameter/mm", "12.5"],
//!     vec!["#Time/min", "Temperature/C", "Diffusivity/(mm^2/s)"],
//!     vec!["0.5", "25.0", "1.2"],
//! ];
//! let record = extract(rows, "S1_run.csv")?;
//! assert_eq!(record.ids, vec!["S1".to_string()]);
//! # Ok::<(), lfa_processor::Error>(())
//! ```

pub mod builder;
pub mod extractor;
pub mod header;
pub mod parser;
pub mod stats;
pub mod tags;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::RecordBuilder;
pub use extractor::{ExtractorState, LfaExtractor, extract, extract_with};
pub use header::{DataPoint, HeaderIndex, HeaderRule};
pub use parser::LfaCsvParser;
pub use stats::{ParseResult, ParseStats};
pub use tags::{METADATA_TAGS, MetadataTag};
