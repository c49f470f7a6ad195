//! # Lending Desk
//!
//! Request/response layer between a presentation shell and the catalog.
//!
//! | Request | Response |
//! |---------|----------|
//! | `AddBook`, `AddMagazine` | `Added` |
//! | `Remove` | `Removed` (item or nothing) |
//! | `List` | `Listing` |
//! | `Find` | `Found` |
//! | `Borrow` | `Borrowed` with due date |
//! | `Return` | `Returned` |
//!
//! Use [`Desk`] from a single caller and [`SharedDesk`] when several
//! callers hold the same catalog.

mod clock;
mod request;
mod service;
mod shared;

pub use clock::{Clock, FixedClock, SystemClock};
pub use request::{ItemSummary, Request, Response};
pub use service::{Desk, DeskError};
pub use shared::SharedDesk;
