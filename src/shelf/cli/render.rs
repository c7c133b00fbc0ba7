//! # Rendering Module
//!
//! Styled terminal output through the `outstanding` crate. Layout math
//! (width, truncation, padding) stays in Rust because it needs Unicode-aware
//! processing; templates only select styles.
//!
//! Every public renderer takes `use_color`: `None` detects the terminal,
//! `Some(false)` is what `--no-color` and the tests use.

use super::styles::{names, SHELF_THEME};
use super::templates::{BOOK_TEMPLATE, NOTIFICATIONS_TEMPLATE, PROMPT_TEMPLATE, SHELVES_TEMPLATE};
use chrono::{DateTime, Utc};
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use shelf::model::{Book, ReadStatus};
use shelf::notify::{Notification, Severity};
use shelf::shelves::{BookItem, ShelfView};
use unicode_width::UnicodeWidthStr;

pub const TITLE_WIDTH: usize = 36;
pub const AUTHOR_WIDTH: usize = 22;
pub const TIME_WIDTH: usize = 14;

#[derive(Serialize)]
struct BookLineData {
    id: String,
    title: String,
    title_padding: String,
    author: String,
    author_padding: String,
    year: u32,
    added: String,
}

#[derive(Serialize)]
struct ShelfData {
    label: &'static str,
    count: String,
    title_style: &'static str,
    empty_message: String,
    books: Vec<BookLineData>,
}

#[derive(Serialize)]
struct ShelvesData {
    heading: Option<String>,
    shelves: Vec<ShelfData>,
}

#[derive(Serialize)]
struct BookDetailData {
    id: String,
    title: String,
    author: String,
    year: u32,
    shelf: &'static str,
    added: Option<String>,
}

#[derive(Serialize)]
struct BookData {
    book: BookDetailData,
}

#[derive(Serialize)]
struct NotificationData {
    title: String,
    message: String,
    style: &'static str,
}

#[derive(Serialize)]
struct NotificationsData {
    notifications: Vec<NotificationData>,
}

#[derive(Serialize)]
struct PromptData<'a> {
    message: &'a str,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => render_with_color(template, data, ThemeChoice::from(&*SHELF_THEME), c),
        None => render(template, data, ThemeChoice::from(&*SHELF_THEME)),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders both shelves, unfinished first. `heading` goes above them (used
/// for search results).
pub fn render_shelves(view: &ShelfView, heading: Option<&str>, use_color: Option<bool>) -> String {
    let shelves = [ReadStatus::Unfinished, ReadStatus::Finished]
        .into_iter()
        .map(|status| shelf_data(status, view.shelf(status)))
        .collect();

    let data = ShelvesData {
        heading: heading.map(str::to_string),
        shelves,
    };
    render_template(SHELVES_TEMPLATE, &data, use_color)
}

fn shelf_data(status: ReadStatus, items: &[BookItem]) -> ShelfData {
    let title_style = match status {
        ReadStatus::Unfinished => names::TITLE_UNFINISHED,
        ReadStatus::Finished => names::TITLE_FINISHED,
    };
    ShelfData {
        label: status.label(),
        count: format!("({})", items.len()),
        title_style,
        empty_message: format!("No {} books.", status.label().to_lowercase()),
        books: items.iter().map(|item| book_line(&item.book)).collect(),
    }
}

fn book_line(book: &Book) -> BookLineData {
    let title = truncate_to_width(&book.title, TITLE_WIDTH);
    let author = truncate_to_width(&book.author, AUTHOR_WIDTH);
    BookLineData {
        id: book.id.to_string(),
        title_padding: " ".repeat(TITLE_WIDTH.saturating_sub(title.width())),
        author_padding: " ".repeat(AUTHOR_WIDTH.saturating_sub(author.width())),
        title,
        author,
        year: book.year,
        added: book.added_at().map(format_time_ago).unwrap_or_default(),
    }
}

pub fn render_book(book: &Book, use_color: Option<bool>) -> String {
    let data = BookData {
        book: BookDetailData {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            shelf: book.status().label(),
            added: book
                .added_at()
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string()),
        },
    };
    render_template(BOOK_TEMPLATE, &data, use_color)
}

pub fn render_notifications(notifications: &[Notification], use_color: Option<bool>) -> String {
    if notifications.is_empty() {
        return String::new();
    }

    let data = NotificationsData {
        notifications: notifications
            .iter()
            .map(|n| NotificationData {
                title: n.title.clone(),
                message: n.message.clone(),
                style: severity_style(n.severity),
            })
            .collect(),
    };
    render_template(NOTIFICATIONS_TEMPLATE, &data, use_color)
}

/// A CLI-only warning, rendered like a notification.
pub fn render_warning(message: &str, use_color: Option<bool>) -> String {
    let data = NotificationsData {
        notifications: vec![NotificationData {
            title: "Warning".to_string(),
            message: message.to_string(),
            style: names::WARNING,
        }],
    };
    render_template(NOTIFICATIONS_TEMPLATE, &data, use_color)
}

pub fn render_prompt(message: &str, use_color: Option<bool>) -> String {
    render_template(PROMPT_TEMPLATE, &PromptData { message }, use_color)
}

fn severity_style(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => names::SUCCESS,
        Severity::Error => names::ERROR,
        Severity::Info => names::INFO,
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
