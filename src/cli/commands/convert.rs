//! Convert command implementation
//!
//! Runs the extractor over each input file and writes the PIF JSON record
//! next to it.

use super::shared::{ConversionStats, create_progress_bar};
use crate::config::{Config, OutputConfig};
use crate::lfa_csv_parser::LfaCsvParser;
use crate::models::ChemicalSystem;
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};

/// Outcome of converting a single file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub output_path: PathBuf,
    pub data_points: usize,
}

/// Convert every file in order
///
/// The first failure aborts the run unless `config.keep_going` is set, in
/// which case failures are collected in the returned statistics.
pub fn convert_files(
    files: &[PathBuf],
    config: &Config,
    show_progress: bool,
) -> Result<ConversionStats> {
    let start_time = Instant::now();
    let parser = LfaCsvParser::new(config.extractor.clone());
    let pb = create_progress_bar(files.len() as u64, show_progress);
    let mut stats = ConversionStats::default();

    for path in files {
        pb.set_message(path.display().to_string());
        if show_progress {
            pb.println(format!("{} {}", "Parsing".cyan().bold(), path.display()));
        }

        match convert_file(&parser, path, &config.output) {
            Ok(outcome) => {
                if show_progress {
                    pb.println(format!(
                        "{} {}",
                        "Output file".green().bold(),
                        outcome.output_path.display()
                    ));
                }
                stats.files_converted += 1;
                stats.data_points += outcome.data_points;
                stats.outputs.push(outcome.output_path);
            }
            Err(e) if config.keep_going => {
                error!("Failed to convert {}: {}", path.display(), e);
                stats.files_failed += 1;
                stats.failures.push((path.clone(), e.to_string()));
            }
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    stats.processing_time = start_time.elapsed();

    info!(
        "Converted {} files ({} failed) in {:.2}s",
        stats.files_converted,
        stats.files_failed,
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// Convert one export and write its JSON record
pub fn convert_file(
    parser: &LfaCsvParser,
    path: &Path,
    output: &OutputConfig,
) -> Result<FileOutcome> {
    let result = parser.parse_file(path)?;
    let output_path = output_path(path, output);

    write_record(&result.record, &output_path, output.json_indent)?;
    info!("Wrote {}", output_path.display());

    Ok(FileOutcome {
        output_path,
        data_points: result.stats.data_points,
    })
}

/// Path of the JSON document written for an input file
pub fn output_path(input: &Path, output: &OutputConfig) -> PathBuf {
    input.with_extension(&output.extension)
}

/// Serialize a record to a JSON file
pub fn write_record(record: &ChemicalSystem, path: &Path, indent: usize) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);

    let written = if indent == 0 {
        serde_json::to_writer(&mut writer, record)
    } else {
        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        record.serialize(&mut serializer)
    };
    written.map_err(|e| Error::serialization(format!("Failed to write {}", path.display()), e))?;

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;
    Ok(())
}
