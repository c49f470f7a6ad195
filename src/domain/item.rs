//! Lendable item domain model
//!
//! An item is either a book or a magazine. Both share the same lending
//! lifecycle and differ only in their descriptive field and loan period.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::id::{IdError, ItemId};

#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    #[error("Item is not available: {id} (due back {due})")]
    Unavailable { id: ItemId, due: NaiveDate },

    #[error("Item is already available: {0}")]
    AlreadyAvailable(ItemId),

    #[error("Due date for item {id} borrowed on {borrowed_on} is out of range")]
    DueDateOutOfRange { id: ItemId, borrowed_on: NaiveDate },
}

/// Variant of a catalog item with its descriptive field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Book { title: String },
    Magazine { issue: String },
}

impl ItemKind {
    /// Returns a display label for the variant
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "Book",
            ItemKind::Magazine { .. } => "Magazine",
        }
    }

    /// Returns the loan policy that applies to this variant
    pub fn policy(&self) -> LoanPolicy {
        LoanPolicy::for_kind(self)
    }
}

/// How long an item may be kept once borrowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    weeks: u32,
}

impl LoanPolicy {
    pub const BOOK: LoanPolicy = LoanPolicy { weeks: 4 };
    pub const MAGAZINE: LoanPolicy = LoanPolicy { weeks: 2 };

    pub fn for_kind(kind: &ItemKind) -> Self {
        match kind {
            ItemKind::Book { .. } => Self::BOOK,
            ItemKind::Magazine { .. } => Self::MAGAZINE,
        }
    }

    /// Loan length in weeks
    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    /// Loan length as a duration
    pub fn loan_period(&self) -> Duration {
        Duration::weeks(i64::from(self.weeks))
    }

    /// Due date for an item borrowed on `borrowed_on`, or None on calendar overflow
    pub fn due_date(&self, borrowed_on: NaiveDate) -> Option<NaiveDate> {
        borrowed_on.checked_add_signed(self.loan_period())
    }
}

/// A lendable catalog item
///
/// Availability is derived from the due date: an item is on the shelf
/// exactly when it has no due date.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    kind: ItemKind,
    due_date: Option<NaiveDate>,
}

impl Item {
    /// Creates an available item
    pub fn new(id: ItemId, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            due_date: None,
        }
    }

    /// Creates an available book
    pub fn book(id: impl AsRef<str>, title: impl Into<String>) -> Result<Self, IdError> {
        Ok(Self::new(
            ItemId::new(id)?,
            ItemKind::Book {
                title: title.into(),
            },
        ))
    }

    /// Creates an available magazine
    pub fn magazine(id: impl AsRef<str>, issue: impl Into<String>) -> Result<Self, IdError> {
        Ok(Self::new(
            ItemId::new(id)?,
            ItemKind::Magazine {
                issue: issue.into(),
            },
        ))
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Returns the title if this is a book
    pub fn title(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Book { title } => Some(title),
            ItemKind::Magazine { .. } => None,
        }
    }

    /// Returns the issue if this is a magazine
    pub fn issue(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Magazine { issue } => Some(issue),
            ItemKind::Book { .. } => None,
        }
    }

    /// Returns true if the item is on the shelf
    pub fn is_available(&self) -> bool {
        self.due_date.is_none()
    }

    /// Returns the due date while the item is checked out
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn policy(&self) -> LoanPolicy {
        self.kind.policy()
    }

    /// Checks the item out on `now` and returns its due date
    ///
    /// Leaves the item untouched on error.
    pub fn borrow(&mut self, now: NaiveDate) -> Result<NaiveDate, ItemError> {
        if let Some(due) = self.due_date {
            return Err(ItemError::Unavailable {
                id: self.id.clone(),
                due,
            });
        }

        let due = self
            .policy()
            .due_date(now)
            .ok_or_else(|| ItemError::DueDateOutOfRange {
                id: self.id.clone(),
                borrowed_on: now,
            })?;

        self.due_date = Some(due);
        Ok(due)
    }

    /// Puts a checked-out item back on the shelf
    pub fn give_back(&mut self) -> Result<(), ItemError> {
        if self.due_date.take().is_none() {
            return Err(ItemError::AlreadyAvailable(self.id.clone()));
        }
        Ok(())
    }

    /// One-line summary: variant, descriptive field, ID, availability, due date
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ItemKind::Book { title } => write!(f, "Book - {}", title)?,
            ItemKind::Magazine { issue } => write!(f, "Magazine - Issue: {}", issue)?,
        }

        write!(f, ", ID: {}, Available: {}", self.id, self.is_available())?;

        if let Some(due) = self.due_date {
            write!(f, ", Due Date: {}", due)?;
        }

        Ok(())
    }
}
