//! Line, character and size counters.
//!
//! [`FileStat`] holds the numbers for one scanned file and [`GrandTotal`]
//! sums them across a run. Both keep `total_lines` equal to the sum of the
//! three line kinds.

use serde::Serialize;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use crate::classify::LineKind;

/// Line counts for a body of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    /// Code lines
    pub code: u64,
    /// Lines starting with `//`
    pub comment: u64,
    /// Whitespace-only lines
    pub empty: u64,
    /// Characters, line terminators included
    pub chars: u64,
}

impl LineCounts {
    /// Create counts with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one line of the given kind and character length.
    pub fn record(&mut self, kind: LineKind, chars: u64) {
        match kind {
            LineKind::Blank => self.empty += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Code => self.code += 1,
        }
        self.chars += chars;
    }

    /// Total lines (code + comment + empty).
    pub fn total(&self) -> u64 {
        self.code + self.comment + self.empty
    }
}

/// Statistics for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStat {
    /// Path to the file, as walked.
    pub path: PathBuf,
    pub code_lines: u64,
    pub comment_lines: u64,
    pub empty_lines: u64,
    pub total_lines: u64,
    pub char_count: u64,
    /// Size on disk in bytes.
    pub byte_size: u64,
}

impl FileStat {
    /// Build file stats from line counts and the on-disk size.
    pub fn new(path: PathBuf, counts: LineCounts, byte_size: u64) -> Self {
        Self {
            path,
            code_lines: counts.code,
            comment_lines: counts.comment,
            empty_lines: counts.empty,
            total_lines: counts.total(),
            char_count: counts.chars,
            byte_size,
        }
    }
}

/// Running totals across every file of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GrandTotal {
    pub code_lines: u64,
    pub comment_lines: u64,
    pub empty_lines: u64,
    pub total_lines: u64,
    pub char_count: u64,
    pub byte_size: u64,
}

impl GrandTotal {
    /// Create a total with all zeros.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AddAssign<&FileStat> for GrandTotal {
    fn add_assign(&mut self, file: &FileStat) {
        self.code_lines += file.code_lines;
        self.comment_lines += file.comment_lines;
        self.empty_lines += file.empty_lines;
        self.total_lines += file.total_lines;
        self.char_count += file.char_count;
        self.byte_size += file.byte_size;
    }
}

impl AddAssign for GrandTotal {
    fn add_assign(&mut self, other: Self) {
        self.code_lines += other.code_lines;
        self.comment_lines += other.comment_lines;
        self.empty_lines += other.empty_lines;
        self.total_lines += other.total_lines;
        self.char_count += other.char_count;
        self.byte_size += other.byte_size;
    }
}

impl Add for GrandTotal {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<'a> FromIterator<&'a FileStat> for GrandTotal {
    fn from_iter<I: IntoIterator<Item = &'a FileStat>>(iter: I) -> Self {
        let mut total = Self::new();
        for file in iter {
            total += file;
        }
        total
    }
}
