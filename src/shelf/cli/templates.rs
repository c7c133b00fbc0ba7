//! # CLI Templates
//!
//! Output templates live in `templates/` as standalone files, which keeps
//! them easy to edit and diff, and are embedded here as string constants.
//!
//! Templates are minijinja based. Line breaks are explicit: every block tag
//! trims the newline that follows it (`-%}`), so each output line is exactly
//! one template line. Width math (truncation, padding) stays in Rust; the
//! templates only pick styles.
pub const SHELVES_TEMPLATE: &str = include_str!("templates/shelves.tmp");
pub const BOOK_TEMPLATE: &str = include_str!("templates/book.tmp");
pub const NOTIFICATIONS_TEMPLATE: &str = include_str!("templates/notifications.tmp");
pub const PROMPT_TEMPLATE: &str = include_str!("templates/prompt.tmp");
