use clap::Parser;
use lfa_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(stats) if stats.is_success() => process::exit(0),
        Ok(stats) => {
            eprintln!("Error: {} file(s) failed to convert", stats.files_failed);
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
