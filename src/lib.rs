//! Lending Desk - an in-memory catalog of books and magazines
//!
//! Tracks which items are on the shelf, who has them out, and when they are
//! due back. Books are lent for four weeks and magazines for two. Nothing is
//! persisted: the catalog lives as long as the process.

pub mod domain;
pub mod desk;
pub mod config;
pub mod cli;

pub use domain::{Catalog, Item, ItemId, ItemKind, LoanPolicy};
pub use desk::{Desk, Request, Response, SharedDesk};
