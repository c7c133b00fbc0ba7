//! # Confirmation
//!
//! A yes/no question whose two outcomes are fixed when it is asked. The
//! pending question lives in a [`ConfirmGate`]; answering it moves the token
//! out, so exactly one outcome is produced, exactly once.
//!
//! Only one question may be pending. Asking a second one before the first
//! is answered is rejected with [`ShelfError::ConfirmationPending`].

use crate::error::{Result, ShelfError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Confirm,
    Cancel,
}

impl Choice {
    /// Interprets a terminal answer. Only an explicit yes confirms.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Choice::Confirm,
            _ => Choice::Cancel,
        }
    }
}

/// A pending question and the two actions it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<A> {
    pub message: String,
    on_confirm: A,
    on_cancel: A,
}

impl<A> Confirmation<A> {
    pub fn new(message: impl Into<String>, on_confirm: A, on_cancel: A) -> Self {
        Self {
            message: message.into(),
            on_confirm,
            on_cancel,
        }
    }

    /// Consumes the confirmation and yields the chosen action.
    pub fn resolve(self, choice: Choice) -> A {
        match choice {
            Choice::Confirm => self.on_confirm,
            Choice::Cancel => self.on_cancel,
        }
    }
}

#[derive(Debug)]
pub struct ConfirmGate<A> {
    pending: Option<Confirmation<A>>,
}

impl<A> Default for ConfirmGate<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> ConfirmGate<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, confirmation: Confirmation<A>) -> Result<&Confirmation<A>> {
        if self.pending.is_some() {
            return Err(ShelfError::ConfirmationPending);
        }
        Ok(&*self.pending.insert(confirmation))
    }

    pub fn pending(&self) -> Option<&Confirmation<A>> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Answers the pending question and tears it down.
    pub fn resolve(&mut self, choice: Choice) -> Result<A> {
        self.pending
            .take()
            .map(|c| c.resolve(choice))
            .ok_or(ShelfError::NoPendingConfirmation)
    }
}
