//! # Shelf CLI
//!
//! The binary is thin: the CLI lives in `src/shelf/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Everything user-facing (argument parsing, logging setup, prompting,
//! rendering, exit codes) happens in the CLI layer. The library behind it
//! never touches the terminal.
//!
//! Terminal output is produced through the `outstanding` crate: templates
//! live in `src/shelf/cli/templates/` and are embedded at compile time.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
