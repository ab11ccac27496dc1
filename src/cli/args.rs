//! Command-line argument definitions for the LFA processor
//!
//! The interface is a list of input paths plus a handful of switches for
//! logging and failure handling.

use crate::Result;
use crate::config::{Config, HeaderPolicy};
use clap::Parser;

/// CLI arguments for the LFA diffusivity converter
///
/// Converts laser-flash-analysis CSV exports into PIF JSON records, one
/// JSON file next to each input.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "lfa-processor",
    version,
    about = "Convert LFA thermal diffusivity CSV exports to PIF JSON",
    long_about = "Reads laser-flash-analysis (LFA) CSV exports, extracts the sample metadata \
                  and the temperature/diffusivity table, and writes a PIF JSON record next to \
                  each input file with the extension replaced by .json."
)]
pub struct Args {
    /// Export files, directories or glob patterns to convert
    ///
    /// Directories are searched recursively for *.csv files.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Continue with the remaining files when one fails
    ///
    /// By default the first failing file aborts the whole run.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Drop the Std_Dev column whenever the generic header rule also fires
    ///
    /// Reproduces the output of older converters, which never emitted
    /// uncertainties for `#Shot` headers.
    #[arg(long = "last-header-rule-wins")]
    pub last_header_rule_wins: bool,

    /// Indent width of the written JSON (0 for compact output)
    #[arg(long = "indent", value_name = "N")]
    pub json_indent: Option<usize>,
}

impl Args {
    /// Log level derived from the verbosity switches
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Whether per-file lines and the progress bar are shown
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the run configuration with CLI overrides applied
    pub fn to_config(&self) -> Result<Config> {
        let mut config = Config::default();

        if self.keep_going {
            config.keep_going = true;
        }
        if self.last_header_rule_wins {
            config.extractor.header_policy = HeaderPolicy::LastRuleWins;
        }
        if let Some(indent) = self.json_indent {
            config.output.json_indent = indent;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_paths() {
        let args = Args::parse_from(["lfa-processor", "a_1.csv", "b_2.csv"]);
        assert_eq!(args.paths, vec!["a_1.csv", "b_2.csv"]);
        assert!(!args.keep_going);
        assert_eq!(args.get_log_level(), "info");
    }

    #[test]
    fn test_no_paths_is_accepted() {
        let args = Args::parse_from(["lfa-processor"]);
        assert!(args.paths.is_empty());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["lfa-processor", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_config_overrides() {
        let args = Args::parse_from([
            "lfa-processor",
            "--keep-going",
            "--last-header-rule-wins",
            "--indent",
            "2",
            "x.csv",
        ]);
        let config = args.to_config().unwrap();

        assert!(config.keep_going);
        assert_eq!(config.extractor.header_policy, HeaderPolicy::LastRuleWins);
        assert_eq!(config.output.json_indent, 2);
    }

    #[test]
    fn test_quiet_hides_progress() {
        let args = Args::parse_from(["lfa-processor", "-q"]);
        assert!(!args.show_progress());
        assert_eq!(args.get_log_level(), "error");
    }
}
