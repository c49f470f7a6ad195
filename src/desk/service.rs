//! The desk: single entry point the presentation layer talks to

use thiserror::Error;

use super::clock::{Clock, SystemClock};
use super::request::{ItemSummary, Request, Response};
use crate::domain::{Catalog, CatalogError, IdError, Item};

#[derive(Debug, Error, PartialEq)]
pub enum DeskError {
    #[error(transparent)]
    InvalidId(#[from] IdError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Desk is unusable: a previous request panicked while holding it")]
    Poisoned,
}

/// Owns the catalog and answers requests against it
#[derive(Debug, Default)]
pub struct Desk<C = SystemClock> {
    catalog: Catalog,
    clock: C,
}

impl Desk<SystemClock> {
    /// Creates a desk with an empty catalog that borrows on the system date
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Desk<C> {
    /// Creates a desk with an empty catalog and the given clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            catalog: Catalog::new(),
            clock,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Executes a request
    ///
    /// A failed request leaves the catalog exactly as it was.
    pub fn handle(&mut self, request: Request) -> Result<Response, DeskError> {
        match request {
            Request::AddBook { id, title } => self.add(Item::book(id, title)?),
            Request::AddMagazine { id, issue } => self.add(Item::magazine(id, issue)?),
            Request::Remove { id } => {
                let removed = self.catalog.remove(&id);
                Ok(Response::Removed {
                    item: removed.as_ref().map(ItemSummary::from),
                })
            }
            Request::List => Ok(Response::Listing {
                items: self.catalog.items().iter().map(ItemSummary::from).collect(),
            }),
            Request::Find { id } => {
                let item = self
                    .catalog
                    .find_by_id(&id)
                    .ok_or_else(|| CatalogError::not_found(&id))?;
                Ok(Response::Found {
                    item: ItemSummary::from(item),
                })
            }
            Request::Borrow { id, on } => {
                let now = on.unwrap_or_else(|| self.clock.today());
                let (item, due_date) = self.catalog.borrow(&id, now)?;
                Ok(Response::Borrowed {
                    item: ItemSummary::from(item),
                    due_date,
                })
            }
            Request::Return { id } => {
                let item = self.catalog.give_back(&id)?;
                Ok(Response::Returned {
                    item: ItemSummary::from(item),
                })
            }
        }
    }

    fn add(&mut self, item: Item) -> Result<Response, DeskError> {
        let summary = ItemSummary::from(&item);
        self.catalog.add(item)?;
        Ok(Response::Added { item: summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desk::clock::FixedClock;
    use crate::domain::ItemError;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn desk() -> Desk<FixedClock> {
        Desk::with_clock(FixedClock(date(2024, 1, 1)))
    }

    fn add_book(desk: &mut Desk<FixedClock>, id: &str, title: &str) {
        desk.handle(Request::AddBook {
            id: id.to_string(),
            title: title.to_string(),
        })
        .unwrap();
    }

    #[test]
    fn add_book_and_list() {
        let mut desk = desk();
        add_book(&mut desk, "B1", "Dune");

        let response = desk.handle(Request::List).unwrap();
        match response {
            Response::Listing { items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].id, "B1");
                assert!(items[0].available);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn empty_listing_is_not_an_error() {
        let mut desk = desk();
        assert_eq!(
            desk.handle(Request::List),
            Ok(Response::Listing { items: vec![] })
        );
    }

    #[test]
    fn add_with_blank_id_fails() {
        let mut desk = desk();
        let err = desk
            .handle(Request::AddMagazine {
                id: " ".to_string(),
                issue: "March".to_string(),
            })
            .unwrap_err();

        assert_eq!(err, DeskError::InvalidId(IdError::Empty));
        assert!(desk.catalog().is_empty());
    }

    #[test]
    fn add_duplicate_fails() {
        let mut desk = desk();
        add_book(&mut desk, "B1", "Dune");

        let err = desk
            .handle(Request::AddBook {
                id: "b1".to_string(),
                title: "Emma".to_string(),
            })
            .unwrap_err();

        assert!(matches!(
            err,
            DeskError::Catalog(CatalogError::DuplicateId(_))
        ));
        assert_eq!(desk.catalog().len(), 1);
    }

    #[test]
    fn borrow_defaults_to_clock_date() {
        let mut desk = desk();
        add_book(&mut desk, "B1", "Dune");

        let response = desk
            .handle(Request::Borrow {
                id: "b1".to_string(),
                on: None,
            })
            .unwrap();

        match response {
            Response::Borrowed { item, due_date } => {
                assert_eq!(due_date, date(2024, 1, 29));
                assert!(!item.available);
                assert_eq!(item.due_date, Some(due_date));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn borrow_on_explicit_date() {
        let mut desk = desk();
        desk.handle(Request::AddMagazine {
            id: "M1".to_string(),
            issue: "March".to_string(),
        })
        .unwrap();

        let response = desk
            .handle(Request::Borrow {
                id: "M1".to_string(),
                on: Some(date(2024, 3, 1)),
            })
            .unwrap();

        assert!(matches!(
            response,
            Response::Borrowed { due_date, .. } if due_date == date(2024, 3, 15)
        ));
    }

    #[test]
    fn borrow_twice_reports_unavailable() {
        let mut desk = desk();
        add_book(&mut desk, "B1", "Dune");
        let borrow = Request::Borrow {
            id: "B1".to_string(),
            on: None,
        };

        desk.handle(borrow.clone()).unwrap();
        let err = desk.handle(borrow).unwrap_err();

        assert!(matches!(
            err,
            DeskError::Catalog(CatalogError::Item(ItemError::Unavailable { .. }))
        ));
    }

    #[test]
    fn return_available_reports_already_available() {
        let mut desk = desk();
        add_book(&mut desk, "B1", "Dune");

        let err = desk
            .handle(Request::Return {
                id: "B1".to_string(),
            })
            .unwrap_err();

        assert!(matches!(
            err,
            DeskError::Catalog(CatalogError::Item(ItemError::AlreadyAvailable(_)))
        ));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut desk = desk();

        for request in [
            Request::Find { id: "nope".to_string() },
            Request::Borrow { id: "nope".to_string(), on: None },
            Request::Return { id: "nope".to_string() },
        ] {
            assert_eq!(
                desk.handle(request),
                Err(DeskError::Catalog(CatalogError::NotFound("nope".to_string())))
            );
        }
    }

    #[test]
    fn padded_ids_do_not_match() {
        let mut desk = desk();
        add_book(&mut desk, "B1", "Dune");

        let err = desk
            .handle(Request::Borrow { id: " B1 ".to_string(), on: None })
            .unwrap_err();
        assert_eq!(err, DeskError::Catalog(CatalogError::NotFound(" B1 ".to_string())));
        assert!(desk.catalog().find_by_id("B1").unwrap().is_available());
    }

    #[test]
    fn remove_reports_what_was_removed() {
        let mut desk = desk();
        add_book(&mut desk, "B1", "Dune");

        let response = desk.handle(Request::Remove { id: "b1".to_string() }).unwrap();
        assert!(matches!(response, Response::Removed { item: Some(ref i) } if i.id == "B1"));

        let response = desk.handle(Request::Remove { id: "b1".to_string() }).unwrap();
        assert_eq!(response, Response::Removed { item: None });
    }
}
