//! Line classification for the configuration DSL.
//!
//! Each input line maps to exactly one [`Line`] variant. Classification is
//! purely textual: it decides what a line *is*, never what it means for the
//! tree being built. Variants are tried in a fixed order — blank, comment,
//! block open, block close, assignment, `let` — and a non-blank line that
//! matches none of them is `Invalid`. The patterns are mutually exclusive,
//! so the order only matters for falling through to `Invalid` last.

use once_cell::sync::Lazy;
use regex::Regex;

/// `ident = value;` — the value runs greedily to the *last* `;` on the
/// line, so it may itself contain `;` characters.
static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z][_a-zA-Z0-9]*)\s*=\s*(.+);$").unwrap());

/// `let ident = value` — no trailing `;` required; the value is the whole
/// remainder of the line.
static LET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^let\s+([a-zA-Z][_a-zA-Z0-9]*)\s*=\s*(.+)$").unwrap());

/// One classified input line, borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after trimming; skipped.
    Blank,
    /// Starts with `*` after trimming; skipped.
    Comment,
    /// The entire trimmed line is `@{`.
    DictOpen,
    /// The entire trimmed line is `}`.
    DictClose,
    /// `key = value;` — value is the raw text between `=` and the last `;`.
    Assignment { key: &'a str, value: &'a str },
    /// `let name = value` — value is the raw remainder of the line.
    Let { name: &'a str, value: &'a str },
    /// Non-blank line matching no recognized form.
    Invalid,
}

/// Classifies one raw input line.
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('*') {
        return Line::Comment;
    }
    if line == "@{" {
        return Line::DictOpen;
    }
    if line == "}" {
        return Line::DictClose;
    }
    if let Some(caps) = ASSIGNMENT.captures(line) {
        return Line::Assignment {
            key: caps.get(1).map_or("", |m| m.as_str()),
            value: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    if let Some(caps) = LET.captures(line) {
        return Line::Let {
            name: caps.get(1).map_or("", |m| m.as_str()),
            value: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    Line::Invalid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t  "), Line::Blank);
        assert_eq!(classify("* a comment"), Line::Comment);
        assert_eq!(classify("   *also a comment"), Line::Comment);
    }

    #[test]
    fn block_delimiters_must_stand_alone() {
        assert_eq!(classify("@{"), Line::DictOpen);
        assert_eq!(classify("  @{  "), Line::DictOpen);
        assert_eq!(classify("}"), Line::DictClose);
        assert_eq!(classify("@{ }"), Line::Invalid);
        assert_eq!(classify("} }"), Line::Invalid);
    }

    #[test]
    fn assignment_value_runs_to_last_semicolon() {
        assert_eq!(
            classify("path = /usr;/bin;"),
            Line::Assignment {
                key: "path",
                value: "/usr;/bin"
            }
        );
        assert_eq!(
            classify("a = 1;"),
            Line::Assignment {
                key: "a",
                value: "1"
            }
        );
    }

    #[test]
    fn assignment_requires_terminator_and_identifier_key() {
        assert_eq!(classify("a = 1"), Line::Invalid);
        assert_eq!(classify("1a = 1;"), Line::Invalid);
        assert_eq!(classify("a =;"), Line::Invalid);
    }

    #[test]
    fn let_takes_remainder_of_line() {
        assert_eq!(
            classify("let greeting = hello"),
            Line::Let {
                name: "greeting",
                value: "hello"
            }
        );
        // No terminator is stripped from a let value.
        assert_eq!(
            classify("let n = 5;"),
            Line::Let {
                name: "n",
                value: "5;"
            }
        );
    }

    #[test]
    fn let_keyword_needs_following_identifier() {
        assert_eq!(classify("let = 5"), Line::Invalid);
        assert_eq!(classify("let 1x = 5"), Line::Invalid);
        // Without the space this is just an ordinary identifier.
        assert_eq!(
            classify("letx = 5;"),
            Line::Assignment {
                key: "letx",
                value: "5"
            }
        );
    }
}
