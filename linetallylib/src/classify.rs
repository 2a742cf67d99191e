//! Line classification.
//!
//! A line is one of three kinds, decided from its trimmed text alone:
//!
//! - **Blank**: nothing but whitespace
//! - **Comment**: first non-whitespace characters are `//`
//! - **Code**: anything else
//!
//! This is a prefix check, not a lexer. A `//` inside a string literal on a
//! code line does not matter, and block comments (`/* */`) count as code.

/// The kind of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Token that marks a comment line.
const COMMENT_PREFIX: &str = "//";

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Classify one line of text.
///
/// The line may still carry its terminator; it is trimmed before inspection.
///
/// ```rust
/// use linetallylib::{classify_line, LineKind};
///
/// assert_eq!(classify_line("   "), LineKind::Blank);
/// assert_eq!(classify_line("  // note"), LineKind::Comment);
/// assert_eq!(classify_line("let x = 1;"), LineKind::Code);
/// ```
pub fn classify_line(line: &str) -> LineKind {
    let stripped = line.trim_matches(is_strippable);
    if stripped.is_empty() {
        LineKind::Blank
    } else if stripped.starts_with(COMMENT_PREFIX) {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   "), LineKind::Blank);
        assert_eq!(classify_line("\t \n"), LineKind::Blank);
        assert_eq!(classify_line("\r\n"), LineKind::Blank);
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(classify_line("// x"), LineKind::Comment);
        assert_eq!(classify_line("    // indented"), LineKind::Comment);
        assert_eq!(classify_line("/// doc comment"), LineKind::Comment);
        assert_eq!(classify_line("//! inner doc"), LineKind::Comment);
        assert_eq!(classify_line("//"), LineKind::Comment);
    }

    #[test]
    fn test_code_lines() {
        assert_eq!(classify_line("let x = 1;"), LineKind::Code);
        assert_eq!(classify_line("let x = 1; // trailing"), LineKind::Code);
        assert_eq!(classify_line("/* block */"), LineKind::Code);
        assert_eq!(classify_line("/ not a comment"), LineKind::Code);
        assert_eq!(classify_line("}"), LineKind::Code);
    }

    #[test]
    fn test_ascii_separators_are_stripped() {
        assert_eq!(classify_line("\x1c"), LineKind::Blank);
        assert_eq!(classify_line("\x1d\x1e\x1f \n"), LineKind::Blank);
        assert_eq!(classify_line("\x1f// sep"), LineKind::Comment);
        assert_eq!(classify_line("x\x1c"), LineKind::Code);
    }

    #[test]
    fn test_unicode_whitespace_is_stripped() {
        // U+3000 ideographic space
        assert_eq!(classify_line("\u{3000}// wide"), LineKind::Comment);
        assert_eq!(classify_line("\u{3000}"), LineKind::Blank);
    }
}
