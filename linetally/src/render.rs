//! Output dispatch for the CLI

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use linetallylib::{collect_report, run, ScanOptions};

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable lines, streamed root by root
    #[default]
    Text,
    /// Pretty JSON of the whole report, written after the scan
    Json,
}

impl OutputMode {
    /// Values accepted by `--output`.
    pub const VARIANTS: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output mode: {s}")),
        }
    }
}

/// Scan the roots under `base` and write the report in the given mode.
pub fn render(
    mode: OutputMode,
    base: &Path,
    options: &ScanOptions,
    out: &mut impl Write,
) -> Result<(), anyhow::Error> {
    match mode {
        OutputMode::Text => {
            run(base, options, out)?;
        }
        OutputMode::Json => {
            let report = collect_report(base, options)?;
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
