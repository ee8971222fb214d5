//! Defines the command-line arguments for the confix binary.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "confix",
    version,
    about = "Parse a nested-block configuration file and print it as JSON."
)]
pub struct ConfixArgs {
    /// The path to the configuration file to parse.
    #[arg(required = true)]
    pub file: PathBuf,

    /// Emit single-line JSON instead of the pretty-printed form.
    #[arg(long)]
    pub compact: bool,
}
