//! Desk shared between callers
//!
//! Borrow and return are check-then-act. Every request runs under one lock
//! so two callers can never both see an item as available.

use std::sync::{Arc, Mutex};

use super::clock::Clock;
use super::request::{Request, Response};
use super::service::{Desk, DeskError};
use crate::domain::Catalog;

/// Cloneable handle to a desk guarded by a single mutex
#[derive(Debug)]
pub struct SharedDesk<C> {
    inner: Arc<Mutex<Desk<C>>>,
}

impl<C> Clone for SharedDesk<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedDesk<C> {
    pub fn new(desk: Desk<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(desk)),
        }
    }

    /// Executes a request atomically
    pub fn handle(&self, request: Request) -> Result<Response, DeskError> {
        let mut desk = self.inner.lock().map_err(|_| DeskError::Poisoned)?;
        desk.handle(request)
    }

    /// Runs a read-only closure against the catalog under the lock
    pub fn with_catalog<R>(&self, f: impl FnOnce(&Catalog) -> R) -> Result<R, DeskError> {
        let desk = self.inner.lock().map_err(|_| DeskError::Poisoned)?;
        Ok(f(desk.catalog()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desk::clock::FixedClock;
    use chrono::NaiveDate;
    use std::thread;

    fn shared() -> SharedDesk<FixedClock> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        SharedDesk::new(Desk::with_clock(FixedClock(date)))
    }

    #[test]
    fn concurrent_borrows_have_one_winner() {
        let desk = shared();
        desk.handle(Request::AddBook {
            id: "B1".to_string(),
            title: "Dune".to_string(),
        })
        .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let desk = desk.clone();
                thread::spawn(move || {
                    desk.handle(Request::Borrow {
                        id: "B1".to_string(),
                        on: None,
                    })
                    .is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(desk.with_catalog(|c| c.on_loan().count()).unwrap(), 1);
    }

    #[test]
    fn clones_share_one_catalog() {
        let desk = shared();
        let other = desk.clone();

        other
            .handle(Request::AddMagazine {
                id: "M1".to_string(),
                issue: "March".to_string(),
            })
            .unwrap();

        assert_eq!(desk.with_catalog(|c| c.len()).unwrap(), 1);
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let desk = shared();
        let poisoner = desk.clone();

        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the desk");
        })
        .join();

        assert_eq!(desk.handle(Request::List), Err(DeskError::Poisoned));
    }
}
