use crate::model::BookId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt data in slot '{slot}': {reason}")]
    CorruptStore { slot: String, reason: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("A confirmation is already pending")]
    ConfirmationPending,

    #[error("No confirmation is pending")]
    NoPendingConfirmation,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
