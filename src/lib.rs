//! confix — a parser for a small nested-block configuration DSL.
//!
//! The language is line-oriented: `*` starts a comment, `key = value;`
//! assigns a scalar, `let name = value` defines a reusable constant
//! (referenced as `$(name)`), and `@{` / `}` on their own lines delimit
//! nested blocks. Parsing yields an insertion-ordered tree whose leaves
//! are non-negative integers or raw strings; nested blocks collect under
//! each node's `nested_dicts` list.
//!
//! ```rust
//! use confix::{ConfigParser, ConfigValue};
//!
//! let mut parser = ConfigParser::new();
//! let root = parser
//!     .parse([
//!         "* server section",
//!         "let host = localhost",
//!         "name = $(host);",
//!         "@{",
//!         "port = 8080;",
//!         "}",
//!     ])
//!     .unwrap();
//!
//! assert_eq!(root.get("name"), Some(&ConfigValue::String("localhost".into())));
//! assert_eq!(root.nested().map(|n| n.len()), Some(1));
//! ```

pub mod cli;
pub mod errors;
pub mod syntax;
pub mod value;

pub use errors::ParseError;
pub use syntax::parser::ConfigParser;
pub use value::{ConfigValue, Dict, NESTED_DICTS_KEY};
