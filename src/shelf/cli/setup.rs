use clap::{Parser, Subcommand};
use shelf::model::BookId;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Keep track of the books you are reading", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the book data (overrides config and SHELF_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the shelf
    #[command(alias = "a", display_order = 1)]
    Add {
        title: String,
        author: String,
        year: u32,

        /// Put the book straight on the finished shelf
        #[arg(long)]
        finished: bool,
    },

    /// Show both shelves
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Show books whose title contains a keyword
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Keyword words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
    },

    /// Show a single book
    #[command(display_order = 10)]
    Show { id: BookId },

    /// Move books to the other shelf
    #[command(alias = "t", display_order = 11)]
    Toggle {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<BookId>,
    },

    /// Edit a book; omitted fields keep their current value
    #[command(alias = "e", display_order = 12)]
    Edit {
        id: BookId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        year: Option<u32>,
    },

    /// Delete a book (asks first)
    #[command(alias = "rm", display_order = 13)]
    Delete {
        id: BookId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show configuration
    #[command(display_order = 20)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Print the path of the data file
    #[command(display_order = 21)]
    Path,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print a sample shelf.toml with every key and its default
    Gen,
}
