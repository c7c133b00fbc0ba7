//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, prompts, exit
//! codes and output formatting.
//!
//! ### Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments defaults to `shelf list`.
//!
//! ### Deleting
//!
//! `shelf delete <id>` asks `Delete the book "T"? [y/N]` on stdin. Anything
//! other than `y`/`yes` cancels. `--yes` answers for you.
//!
//! ### Exit Codes
//!
//! Rejected input (an empty field, a zero year) exits with status 1 after
//! printing the error notification.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting through templates
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
