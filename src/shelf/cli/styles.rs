//! # Terminal Styles
//!
//! Every style a template references must be registered here. An unknown
//! name renders with a `(!?)` prefix, even with colors off, which is how
//! template typos show up in tests.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADING: &str = "heading";
    pub const SHELF: &str = "shelf";
    pub const MUTED: &str = "muted";
    pub const BOOK_ID: &str = "book-id";
    pub const TITLE_UNFINISHED: &str = "title-unfinished";
    pub const TITLE_FINISHED: &str = "title-finished";
    pub const AUTHOR: &str = "author";
    pub const YEAR: &str = "year";
    pub const TIME: &str = "time";
    pub const LABEL: &str = "label";
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
    pub const INFO: &str = "info";
    pub const WARNING: &str = "warning";
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    let grey = Style::new().color256(rgb_to_ansi256((154, 154, 154)));
    Theme::new()
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::SHELF, Style::new().bold())
        .add(names::MUTED, grey.clone())
        .add(names::BOOK_ID, Style::new().yellow())
        .add(names::TITLE_UNFINISHED, Style::new().bold())
        .add(
            names::TITLE_FINISHED,
            Style::new().color256(rgb_to_ansi256((110, 170, 110))),
        )
        .add(names::AUTHOR, Style::new().cyan())
        .add(names::YEAR, grey.clone())
        .add(names::TIME, grey.italic())
        .add(names::LABEL, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::INFO, Style::new().blue())
        .add(names::WARNING, Style::new().yellow())
});
