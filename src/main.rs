//! Pharmadex CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use pharmadex::cli::args::*;
use pharmadex::cli::commands::*;

fn main() {
    let args = PharmaArgs::parse();

    // -vv shows table loading and list changes, -vvv every match decision
    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // --quiet
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Input errors and fetch failures alike end with a message and status 1
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
