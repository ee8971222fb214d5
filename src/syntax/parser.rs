//! The configuration parser.
//!
//! One forward pass over the input lines, numbered from 1. Each line is
//! classified ([`crate::syntax::line`]), then dispatched: block delimiters
//! drive a stack of open nodes, assignments write scalars onto the top
//! node, and `let` lines feed the constants table. Value text goes through
//! constant substitution and then typing before it lands in the tree.
//! The first invalid input aborts the whole call; no partial tree escapes.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;
use crate::syntax::line::{classify, Line};
use crate::value::{ConfigValue, Dict};

/// `$(name)` references inside assignment and `let` values.
static CONST_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\(([a-zA-Z][_a-zA-Z0-9]*)\)").unwrap());

/// Parser for the configuration DSL.
///
/// The constants table is owned by the instance and accumulates across
/// [`parse`](ConfigParser::parse) calls: a `let` from one document resolves
/// in the next document parsed by the same instance. Callers wanting an
/// isolated namespace construct a fresh parser per document. A single
/// instance must not be shared across threads mid-parse.
///
/// # Examples
///
/// ```rust
/// use confix::ConfigParser;
///
/// let mut parser = ConfigParser::new();
/// let root = parser
///     .parse(["let host = localhost", "addr = $(host):8080;"])
///     .unwrap();
/// assert_eq!(root.get("addr").and_then(|v| v.as_str()), Some("localhost:8080"));
/// ```
pub struct ConfigParser {
    constants: IndexMap<String, String>,
}

impl ConfigParser {
    pub fn new() -> Self {
        Self {
            constants: IndexMap::new(),
        }
    }

    /// The constants defined so far, in definition order.
    pub fn constants(&self) -> &IndexMap<String, String> {
        &self.constants
    }

    /// Parses an ordered sequence of lines into the root node.
    ///
    /// On any error the call yields no tree, but constants defined before
    /// the failing line remain in the table.
    pub fn parse<'a, I>(&mut self, lines: I) -> Result<Dict, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut stack = vec![Dict::new()];

        for (index, raw) in lines.into_iter().enumerate() {
            let number = index + 1;
            match classify(raw) {
                Line::Blank | Line::Comment => {}
                Line::DictOpen => stack.push(Dict::new()),
                Line::DictClose => {
                    if stack.len() == 1 {
                        return Err(ParseError::UnexpectedCloseBrace { line: number });
                    }
                    let child = stack.pop().unwrap(); // depth checked above
                    let parent = stack.last_mut().unwrap(); // root is never popped
                    parent.push_nested(child);
                }
                Line::Assignment { key, value } => {
                    let resolved = self.resolve_constants(value, number)?;
                    let typed = type_value(&resolved, number)?;
                    let top = stack.last_mut().unwrap(); // stack is never empty
                    top.set(key, typed);
                }
                Line::Let { name, value } => {
                    let resolved = self.resolve_constants(value, number)?;
                    self.constants.insert(name.to_string(), resolved);
                }
                Line::Invalid => {
                    return Err(ParseError::InvalidSyntax {
                        line: number,
                        text: raw.trim().to_string(),
                    });
                }
            }
        }

        match stack.pop() {
            Some(root) if stack.is_empty() => Ok(root),
            _ => Err(ParseError::MismatchedBraces),
        }
    }

    /// Replaces every `$(name)` in `value` with the stored constant text.
    ///
    /// This is a single textual pass: substituted text is not re-scanned,
    /// and a reference to a constant not yet defined fails the parse.
    fn resolve_constants(&self, value: &str, line: usize) -> Result<String, ParseError> {
        let mut out = String::with_capacity(value.len());
        let mut scanned_to = 0;
        for caps in CONST_REF.captures_iter(value) {
            let whole = caps.get(0).unwrap(); // capture 0 is the whole match
            let name = &caps[1];
            let replacement =
                self.constants
                    .get(name)
                    .ok_or_else(|| ParseError::UndefinedConstant {
                        name: name.to_string(),
                        line,
                    })?;
            out.push_str(&value[scanned_to..whole.start()]);
            out.push_str(replacement);
            scanned_to = whole.end();
        }
        out.push_str(&value[scanned_to..]);
        Ok(out)
    }
}

impl Default for ConfigParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Types a substituted assignment value.
///
/// All decimal digits coerces to `Integer`; the block-open marker is
/// rejected (nested structure only enters via `@{` on its own line);
/// anything else stays a `String` verbatim, with no quote or escape
/// handling. A digit run too wide for `u64` also stays a `String`.
fn type_value(value: &str, line: usize) -> Result<ConfigValue, ParseError> {
    let value = value.trim();
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = value.parse::<u64>() {
            return Ok(ConfigValue::Integer(n));
        }
    }
    if value == "@{" {
        return Err(ParseError::InlineNestedDictNotAllowed { line });
    }
    Ok(ConfigValue::String(value.to_string()))
}
