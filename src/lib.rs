//! LFA Processor Library
//!
//! A Rust library for converting laser-flash-analysis (LFA) thermal
//! diffusivity exports from CSV into PIF JSON records.
//!
//! This library provides tools for:
//! - Classifying export rows as tagged metadata or tabular data
//! - Locating the variable-position header row and resolving its columns
//! - Accumulating temperature/diffusivity series with optional uncertainty
//! - Validating required fields and assembling the PIF record
//! - Writing one JSON document per export

pub mod config;
pub mod constants;
pub mod error;
pub mod lfa_csv_parser;
pub mod models;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use lfa_csv_parser::{LfaCsvParser, LfaExtractor, extract};
pub use models::ChemicalSystem;
