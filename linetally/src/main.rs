//! # linetally
//!
//! Counts code, comment and blank lines, characters and bytes of the `.rs`
//! files under `cli/`, `core/` and `daemon/` in the current directory.
//!
//! ## Usage
//!
//! ```bash
//! # Per-file report and grand total
//! linetally
//!
//! # Same data as JSON
//! linetally --output json
//!
//! # Log progress to stderr
//! linetally -v
//! ```

mod render;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use linetallylib::ScanOptions;
use tracing::Level;

use render::{render, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("linetally")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Line, character and size statistics for the .rs files under cli/, core/ and daemon/")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(OutputMode::VARIANTS)
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log progress to stderr (repeat for more detail)"),
        )
}

/// Install the stderr log subscriber
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Handler for the (only) count command
fn count_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let mode = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputMode>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(mode, Path::new("."), &ScanOptions::new(), &mut out)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match count_handler(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold().for_stderr());
            ExitCode::FAILURE
        }
    }
}
