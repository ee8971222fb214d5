//! Syntactic layer: line classification and the parser built on it.

pub mod line;
pub mod parser;

pub use line::{classify, Line};
pub use parser::ConfigParser;
