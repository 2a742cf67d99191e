//! Report assembly and text rendering.
//!
//! [`run`] is the whole tool: scan each root in order, print its files as
//! soon as the root is done, then print the grand total. [`collect_report`]
//! produces the same data as a [`Report`] value for structured output.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::options::ScanOptions;
use crate::scanner::scan_directory;
use crate::stats::{FileStat, GrandTotal};
use crate::Result;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// Width of the path column in per-file lines.
const PATH_WIDTH: usize = 60;

/// Render a byte count with 1024-based units.
///
/// ```rust
/// use linetallylib::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(2048), "2.00 KB");
/// assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes >= MIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Outcome of scanning one root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RootReport {
    /// The root exists; one entry per matching file, paths relative to the base.
    Scanned { name: String, files: Vec<FileStat> },
    /// No directory with this name under the base.
    NotFound { name: String },
}

impl RootReport {
    /// Root directory name.
    pub fn name(&self) -> &str {
        match self {
            Self::Scanned { name, .. } | Self::NotFound { name } => name,
        }
    }

    /// Files scanned under this root (empty when not found).
    pub fn files(&self) -> &[FileStat] {
        match self {
            Self::Scanned { files, .. } => files.as_slice(),
            Self::NotFound { .. } => &[],
        }
    }

    /// Sum of this root's file stats.
    pub fn total(&self) -> GrandTotal {
        self.files().iter().collect()
    }
}

/// Full result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Per-root outcomes, in configured order
    pub roots: Vec<RootReport>,
    /// Sum over every scanned file
    pub total: GrandTotal,
}

/// Convert a path to a path relative to the base directory.
fn make_relative(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Scan one root directory resolved against `base`.
///
/// A root that is missing, or is not a directory, is reported as not found.
pub fn scan_root(base: impl AsRef<Path>, name: &str, extension: &str) -> Result<RootReport> {
    let base = base.as_ref();
    let dir = base.join(name);

    if !dir.is_dir() {
        info!(root = name, "root directory not found");
        return Ok(RootReport::NotFound {
            name: name.to_string(),
        });
    }

    let files = scan_directory(&dir, extension)?
        .into_iter()
        .map(|stat| FileStat {
            path: make_relative(&stat.path, base),
            ..stat
        })
        .collect();

    Ok(RootReport::Scanned {
        name: name.to_string(),
        files,
    })
}

/// Scan every configured root and collect the results.
pub fn collect_report(base: impl AsRef<Path>, options: &ScanOptions) -> Result<Report> {
    let base = base.as_ref();
    let mut roots = Vec::with_capacity(options.roots.len());
    let mut total = GrandTotal::new();

    for name in &options.roots {
        let root = scan_root(base, name, &options.extension)?;
        total += root.total();
        roots.push(root);
    }

    Ok(Report { roots, total })
}

/// Format the report line for one file.
pub fn format_file_line(stat: &FileStat) -> String {
    format!(
        "{:<width$} | Code: {:4} | //: {:4} | Empty: {:4} | Total: {:4} | Chars: {:6} | Size: {:>8}",
        stat.path.to_string_lossy(),
        stat.code_lines,
        stat.comment_lines,
        stat.empty_lines,
        stat.total_lines,
        stat.char_count,
        format_size(stat.byte_size),
        width = PATH_WIDTH,
    )
}

/// Write the text block for one root.
pub fn write_root(out: &mut impl Write, root: &RootReport) -> Result<()> {
    match root {
        RootReport::Scanned { name, files } => {
            writeln!(out)?;
            writeln!(out, "📁 Project: {name}")?;
            for stat in files {
                writeln!(out, "{}", format_file_line(stat))?;
            }
        }
        RootReport::NotFound { name } => {
            writeln!(out, "{name} directory not found.")?;
        }
    }
    Ok(())
}

/// Write the grand total summary block.
pub fn write_grand_total(out: &mut impl Write, total: &GrandTotal) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "📊 Grand Total:")?;
    writeln!(out, "  Code lines:    {}", total.code_lines)?;
    writeln!(out, "  Comment lines: {}", total.comment_lines)?;
    writeln!(out, "  Empty lines:   {}", total.empty_lines)?;
    writeln!(out, "  Total lines:   {}", total.total_lines)?;
    writeln!(out, "  Characters:    {}", total.char_count)?;
    writeln!(out, "  File size:     {}", format_size(total.byte_size))?;
    Ok(())
}

/// Write a collected report as text.
pub fn render_report(out: &mut impl Write, report: &Report) -> Result<()> {
    for root in &report.roots {
        write_root(out, root)?;
    }
    write_grand_total(out, &report.total)
}

/// Scan all roots under `base` and write the text report to `out`.
///
/// Each root's block is written as soon as that root has been scanned, so a
/// read error in a later root leaves the earlier output in place.
pub fn run(
    base: impl AsRef<Path>,
    options: &ScanOptions,
    out: &mut impl Write,
) -> Result<GrandTotal> {
    let base = base.as_ref();
    let mut total = GrandTotal::new();

    for name in &options.roots {
        let root = scan_root(base, name, &options.extension)?;
        write_root(out, &root)?;
        total += root.total();
    }

    write_grand_total(out, &total)?;
    Ok(total)
}
