//! Parse diagnostics for the configuration DSL.
//!
//! Every failure mode is one variant of [`ParseError`], carrying the
//! 1-based input line where it was detected when that is meaningful.
//! Errors abort the parse at the point of detection; there is no
//! recovery and no partial result.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// A `}` with no matching `@{` above it.
    #[error("Unexpected '}}' at line {line}")]
    #[diagnostic(
        code(confix::parse::unexpected_close_brace),
        help("every '}}' must close a preceding '@{{'")
    )]
    UnexpectedCloseBrace { line: usize },

    /// A non-blank line matching none of the recognized forms.
    #[error("Invalid syntax at line {line}: {text}")]
    #[diagnostic(code(confix::parse::invalid_syntax))]
    InvalidSyntax { line: usize, text: String },

    /// A `$(name)` reference with no preceding `let name = ...`.
    #[error("Undefined constant '{name}' at line {line}")]
    #[diagnostic(
        code(confix::parse::undefined_constant),
        help("constants must be defined with 'let' earlier in the document")
    )]
    UndefinedConstant { name: String, line: usize },

    /// One or more blocks still open at end of input.
    #[error("Mismatched braces in configuration")]
    #[diagnostic(
        code(confix::parse::mismatched_braces),
        help("every '@{{' needs a matching '}}' before the end of the file")
    )]
    MismatchedBraces,

    /// An assignment whose value is the block-open marker.
    #[error("Nested dictionaries must be explicitly opened with '@{{' (line {line})")]
    #[diagnostic(
        code(confix::parse::inline_nested_dict),
        help("put '@{{' on its own line to start a nested block")
    )]
    InlineNestedDictNotAllowed { line: usize },
}

impl ParseError {
    /// The input line the error points at, where one applies.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedCloseBrace { line }
            | ParseError::InvalidSyntax { line, .. }
            | ParseError::UndefinedConstant { line, .. }
            | ParseError::InlineNestedDictNotAllowed { line } => Some(*line),
            ParseError::MismatchedBraces => None,
        }
    }
}

/// Prints a ParseError with full miette diagnostics.
///
/// Use this for user-facing error display in CLI contexts.
pub fn print_error(error: ParseError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{:?}", report);
}
