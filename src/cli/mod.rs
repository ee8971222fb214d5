//! The confix command-line interface.
//!
//! Reads a configuration file, parses it with a fresh [`ConfigParser`],
//! and prints the resulting tree as JSON on stdout. Any failure is
//! reported on stderr and the process exits non-zero; nothing is printed
//! on stdout in that case.

use clap::Parser;
use std::{fs, process};

use crate::cli::args::ConfixArgs;
use crate::errors::print_error;
use crate::syntax::ConfigParser;

pub mod args;

/// The main entry point for the CLI.
pub fn run() {
    let args = ConfixArgs::parse();

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", args.file.display(), e);
            process::exit(1);
        }
    };

    let mut parser = ConfigParser::new();
    let root = match parser.parse(source.lines()) {
        Ok(root) => root,
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    };

    let rendered = if args.compact {
        serde_json::to_string(&root)
    } else {
        serde_json::to_string_pretty(&root)
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
