//! Command implementations for the LFA processor CLI
//!
//! Argument handling is flat: every positional path is converted in turn.
//! The conversion loop lives in [`convert`], logging, discovery and
//! statistics in [`shared`].

pub mod convert;
pub mod shared;

pub use shared::ConversionStats;

use crate::Result;
use crate::cli::args::Args;
use shared::{discover_input_files, setup_logging};
use tracing::{debug, info};

/// Main command runner for the LFA processor
pub fn run(args: Args) -> Result<ConversionStats> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config()?;
    let files = discover_input_files(&args.paths)?;

    if files.is_empty() {
        info!("No input files given");
        return Ok(ConversionStats::default());
    }

    info!("Converting {} files", files.len());
    let stats = convert::convert_files(&files, &config, args.show_progress())?;

    if args.show_progress() {
        stats.print_summary();
    }

    Ok(stats)
}
