//! Catalog of lendable items
//!
//! Keeps items in insertion order and looks them up by case-insensitive ID.

use chrono::NaiveDate;
use thiserror::Error;

use super::id::ItemId;
use super::item::{Item, ItemError};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("An item with ID {0} already exists")]
    DuplicateId(ItemId),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl CatalogError {
    pub fn not_found(id: &str) -> Self {
        CatalogError::NotFound(id.to_string())
    }
}

/// An ordered, in-memory registry of items
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item, rejecting IDs already in the catalog
    pub fn add(&mut self, item: Item) -> Result<(), CatalogError> {
        if self.items.iter().any(|existing| existing.id() == item.id()) {
            return Err(CatalogError::DuplicateId(item.id().clone()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the item with the given ID and returns it
    ///
    /// Removing an unknown ID is a no-op.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id().matches(id))?;
        Some(self.items.remove(index))
    }

    /// All items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items currently checked out, in insertion order
    pub fn on_loan(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.is_available())
    }

    /// Finds an item by ID, ignoring case
    pub fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id().matches(id))
    }

    /// Finds an item by ID for in-place updates
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id().matches(id))
    }

    /// Looks up and borrows an item, returning it with its due date
    pub fn borrow(&mut self, id: &str, now: NaiveDate) -> Result<(&Item, NaiveDate), CatalogError> {
        let item = self
            .find_by_id_mut(id)
            .ok_or_else(|| CatalogError::not_found(id))?;
        let due = item.borrow(now)?;
        Ok((item, due))
    }

    /// Looks up and returns a borrowed item to the shelf
    pub fn give_back(&mut self, id: &str) -> Result<&Item, CatalogError> {
        let item = self
            .find_by_id_mut(id)
            .ok_or_else(|| CatalogError::not_found(id))?;
        item.give_back()?;
        Ok(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
