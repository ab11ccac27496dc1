//! Shared components for CLI commands
//!
//! Logging setup, input discovery, progress reporting and run statistics.

use crate::cli::args::Args;
use crate::constants::INPUT_EXTENSION;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Statistics for a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of files converted
    pub files_converted: usize,
    /// Number of files that failed
    pub files_failed: usize,
    /// Data points written across all records
    pub data_points: usize,
    /// Written JSON files
    pub outputs: Vec<PathBuf>,
    /// Failed inputs with their error message
    pub failures: Vec<(PathBuf, String)>,
    /// Total processing time
    pub processing_time: Duration,
}

impl ConversionStats {
    /// Whether every file converted
    pub fn is_success(&self) -> bool {
        self.files_failed == 0
    }

    /// Print a colored summary of the run
    pub fn print_summary(&self) {
        println!();
        println!("{}", "Conversion summary".bold());
        println!(
            "  {} {}",
            "Files converted:".green(),
            self.files_converted
        );
        if self.files_failed > 0 {
            println!("  {} {}", "Files failed:".red(), self.files_failed);
            for (path, message) in &self.failures {
                println!("    {} {}", path.display(), message.dimmed());
            }
        }
        println!("  {} {}", "Data points:".cyan(), self.data_points);
        println!(
            "  {} {:.2}s",
            "Elapsed:".cyan(),
            self.processing_time.as_secs_f64()
        );
    }
}

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lfa_processor={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_err() {
        debug!("Logging already initialized");
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Expand the positional inputs into a list of export files
///
/// Directories contribute every `*.csv` below them in sorted order, glob
/// patterns their matches, and anything else is taken as a file path as is.
pub fn discover_input_files(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);

        if path.is_dir() {
            let before = files.len();
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| Error::invalid_input(input, e.to_string()))?;
                if entry.file_type().is_file() && has_input_extension(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            if files.len() == before {
                warn!("No .{} files found in {}", INPUT_EXTENSION, path.display());
            }
        } else if is_glob_pattern(input) {
            let matches = glob::glob(input).map_err(|e| Error::invalid_input(input, e.to_string()))?;
            let before = files.len();
            for entry in matches {
                let entry = entry.map_err(|e| Error::invalid_input(input, e.to_string()))?;
                if entry.is_file() {
                    files.push(entry);
                }
            }
            if files.len() == before {
                warn!("Pattern matched no files: {}", input);
            }
        } else {
            files.push(path.to_path_buf());
        }
    }

    debug!("Discovered {} input files", files.len());
    Ok(files)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}

/// Create a styled progress bar, hidden when progress is off
pub fn create_progress_bar(total: u64, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
