use crate::error::{Result, ShelfError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable book identifier.
///
/// Ids are millisecond timestamps taken when the book is added, bumped past
/// the largest existing id when two books land in the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl BookId {
    /// Picks a fresh id: the current timestamp, or `max + 1` if the clock
    /// has not moved past the newest existing id. Fails when the newest id
    /// is already `i64::MAX`.
    pub fn fresh<'a, I>(existing: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a BookId>,
    {
        let now = Utc::now().timestamp_millis();
        match existing.into_iter().max() {
            Some(max) if max.0 >= now => max
                .0
                .checked_add(1)
                .map(BookId)
                .ok_or_else(|| ShelfError::Store(format!("no id left after {}", max))),
            _ => Ok(BookId(now)),
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(BookId)
            .map_err(|_| ShelfError::Api(format!("Invalid book id: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadStatus {
    Unfinished,
    Finished,
}

impl ReadStatus {
    pub fn from_complete(is_complete: bool) -> Self {
        if is_complete {
            ReadStatus::Finished
        } else {
            ReadStatus::Unfinished
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadStatus::Unfinished => "Unfinished",
            ReadStatus::Finished => "Finished",
        }
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single bookshelf record. Field names on disk match the persisted layout
/// (`isComplete` in camel case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: u32,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

impl Book {
    pub fn new(id: BookId, title: String, author: String, year: u32, is_complete: bool) -> Self {
        Self {
            id,
            title,
            author,
            year,
            is_complete,
        }
    }

    pub fn status(&self) -> ReadStatus {
        ReadStatus::from_complete(self.is_complete)
    }

    /// When the book was added, recovered from its timestamp id.
    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.id.0)
    }

    /// Checks the record invariants. Used when loading persisted data.
    pub fn check(&self) -> std::result::Result<(), String> {
        if self.title.trim().is_empty() {
            return Err(format!("book {} has an empty title", self.id));
        }
        if self.author.trim().is_empty() {
            return Err(format!("book {} has an empty author", self.id));
        }
        if self.year == 0 {
            return Err(format!("book {} has year 0", self.id));
        }
        Ok(())
    }
}

/// Raw field values for a book about to be added, as handed over by a UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub is_complete: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: u32,
        is_complete: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            is_complete,
        }
    }
}

/// Raw replacement values for an existing book's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub year: u32,
}

impl BookUpdate {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

/// Trimmed, non-empty fields ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidFields {
    pub title: String,
    pub author: String,
    pub year: u32,
}

pub(crate) fn validate_fields(title: &str, author: &str, year: u32) -> Result<ValidFields> {
    let title = title.trim();
    let author = author.trim();
    if title.is_empty() || author.is_empty() || year == 0 {
        return Err(ShelfError::Validation(
            "Please fill in all book fields!".to_string(),
        ));
    }
    Ok(ValidFields {
        title: title.to_string(),
        author: author.to_string(),
        year,
    })
}
