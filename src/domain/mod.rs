//! Domain models for the lending desk
//!
//! Contains the item lifecycle and catalog registry without any I/O concerns.

mod id;
mod item;
mod catalog;

pub use id::{IdError, ItemId};
pub use item::{Item, ItemError, ItemKind, LoanPolicy};
pub use catalog::{Catalog, CatalogError};
