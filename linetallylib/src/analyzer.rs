//! Per-file analysis: classify every line and measure the file.
//!
//! Text is consumed one `char` at a time. `\n`, `\r\n` and a lone `\r` all
//! end a line, so LF, CRLF and old Mac files produce the same counts. Each
//! terminator counts as one character.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::mem;
use std::path::Path;

use tracing::debug;
use utf8_chars::BufReadCharsExt;

use crate::classify::classify_line;
use crate::error::ScanError;
use crate::stats::{FileStat, LineCounts};
use crate::Result;

/// Splits a character stream into lines and records each one.
#[derive(Debug, Default)]
struct LineAccumulator {
    counts: LineCounts,
    line: String,
    /// Previous char was a `\r` that already ended a line
    pending_cr: bool,
}

impl LineAccumulator {
    fn push(&mut self, ch: char) {
        if mem::take(&mut self.pending_cr) && ch == '\n' {
            return;
        }
        match ch {
            '\n' => self.end_line(true),
            '\r' => {
                self.end_line(true);
                self.pending_cr = true;
            }
            _ => self.line.push(ch),
        }
    }

    fn end_line(&mut self, terminated: bool) {
        let chars = self.line.chars().count() as u64 + u64::from(terminated);
        self.counts.record(classify_line(&self.line), chars);
        self.line.clear();
    }

    fn finish(mut self) -> LineCounts {
        // Last line without a terminator still counts
        if !self.line.is_empty() {
            self.end_line(false);
        }
        self.counts
    }
}

fn read_error(path: &Path, err: io::Error) -> ScanError {
    if err.kind() == io::ErrorKind::InvalidData {
        ScanError::Decode {
            path: path.to_path_buf(),
        }
    } else {
        ScanError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Count the lines of any buffered UTF-8 reader.
///
/// `path` is only used to label errors.
pub fn analyze_reader<R: BufRead>(path: impl AsRef<Path>, mut reader: R) -> Result<LineCounts> {
    let path = path.as_ref();
    let mut acc = LineAccumulator::default();
    for ch in reader.chars() {
        acc.push(ch.map_err(|e| read_error(path, e))?);
    }
    Ok(acc.finish())
}

/// Count the lines of an in-memory string.
///
/// ```rust
/// use linetallylib::analyze_str;
///
/// let counts = analyze_str("// header\n\nfn main() {}\n");
/// assert_eq!(counts.comment, 1);
/// assert_eq!(counts.empty, 1);
/// assert_eq!(counts.code, 1);
/// assert_eq!(counts.total(), 3);
/// ```
pub fn analyze_str(text: &str) -> LineCounts {
    let mut acc = LineAccumulator::default();
    text.chars().for_each(|ch| acc.push(ch));
    acc.finish()
}

/// Analyze a single file: line kinds, character count and on-disk size.
///
/// Fails if the file cannot be opened, is not valid UTF-8, or cannot be
/// stat'ed.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<FileStat> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let counts = analyze_reader(path, BufReader::new(file))?;

    let byte_size = fs::metadata(path)
        .map_err(|source| ScanError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    debug!(
        path = %path.display(),
        lines = counts.total(),
        bytes = byte_size,
        "analyzed file"
    );

    Ok(FileStat::new(path.to_path_buf(), counts, byte_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn empty_text() {
        let counts = analyze_str("");
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.chars, 0);
    }

    #[test]
    fn single_newline() {
        let counts = analyze_str("\n");
        assert_eq!(counts.empty, 1);
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.chars, 1);
    }

    #[test]
    fn mixed_lines() {
        let source = "//! Crate docs\n\nfn main() {\n    // say hi\n    println!(\"hi\");\n}\n";
        let counts = analyze_str(source);

        assert_eq!(counts.code, 3);
        assert_eq!(counts.comment, 2);
        assert_eq!(counts.empty, 1);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.chars, source.chars().count() as u64);
    }

    #[test]
    fn last_line_without_newline() {
        let counts = analyze_str("let a = 1;\nlet b = 2;");
        assert_eq!(counts.code, 2);
        assert_eq!(counts.chars, 21);
    }

    #[test]
    fn crlf_matches_lf() {
        let lf = analyze_str("fn a() {}\n// c\n\n");
        let crlf = analyze_str("fn a() {}\r\n// c\r\n\r\n");
        assert_eq!(lf, crlf);
    }

    #[test]
    fn lone_cr_ends_a_line() {
        let counts = analyze_str("fn a() {}\r// c\r\rfn b() {}\n");
        assert_eq!(counts.code, 2);
        assert_eq!(counts.comment, 1);
        assert_eq!(counts.empty, 1);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.chars, 26);
    }

    #[test]
    fn mixed_line_endings() {
        let counts = analyze_str("a\r\nb\rc\n\r\n");
        assert_eq!(counts.code, 3);
        assert_eq!(counts.empty, 1);
        assert_eq!(counts.chars, 7);
    }

    #[test]
    fn trailing_cr_without_newline() {
        let counts = analyze_str("abc\r");
        assert_eq!(counts.code, 1);
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.chars, 4);
    }

    #[test]
    fn chars_are_scalar_values_not_bytes() {
        let counts = analyze_str("// héllo ✓\n");
        assert_eq!(counts.comment, 1);
        assert_eq!(counts.chars, 11);
    }

    #[test]
    fn reader_matches_str() {
        let source = "a\n\n// b\n  c\n";
        let from_reader = analyze_reader("mem.rs", source.as_bytes()).unwrap();
        assert_eq!(from_reader, analyze_str(source));
    }

    #[test]
    fn analyze_file_counts_and_size() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lib.rs");
        let source = "/// Doc\npub fn f() {}\n\n";
        fs::write(&path, source).unwrap();

        let stat = analyze_file(&path).unwrap();

        assert_eq!(stat.path, path);
        assert_eq!(stat.code_lines, 1);
        assert_eq!(stat.comment_lines, 1);
        assert_eq!(stat.empty_lines, 1);
        assert_eq!(stat.total_lines, 3);
        assert_eq!(stat.char_count, 23);
        assert_eq!(stat.byte_size, source.len() as u64);
    }

    #[test]
    fn byte_size_differs_from_char_count_for_multibyte_text() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("u.rs");
        fs::write(&path, "// ü\n").unwrap();

        let stat = analyze_file(&path).unwrap();
        assert_eq!(stat.char_count, 5);
        assert_eq!(stat.byte_size, 6);
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = analyze_file(PathBuf::from("/nonexistent/file.rs"));
        assert!(matches!(result, Err(ScanError::FileRead { .. })));
    }

    #[test]
    fn invalid_utf8_is_decode_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.rs");
        fs::write(&path, [b'f', b'n', 0xff, 0xfe, b'\n']).unwrap();

        match analyze_file(&path) {
            Err(ScanError::Decode { path: p }) => assert_eq!(p, path),
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }
}
