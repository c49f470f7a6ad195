//! Requests accepted by the desk and the responses it produces

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Item, ItemKind};

/// An operation requested by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    AddBook { id: String, title: String },
    AddMagazine { id: String, issue: String },
    Remove { id: String },
    List,
    Find { id: String },
    /// Borrow an item; `on` defaults to the desk clock's today
    Borrow { id: String, on: Option<NaiveDate> },
    Return { id: String },
}

/// Snapshot of an item for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub id: String,
    #[serde(flatten)]
    pub kind: ItemKind,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub description: String,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().to_string(),
            kind: item.kind().clone(),
            available: item.is_available(),
            due_date: item.due_date(),
            description: item.describe(),
        }
    }
}

/// Outcome of a successful request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Response {
    Added { item: ItemSummary },
    /// `item` is None when nothing matched the ID
    Removed { item: Option<ItemSummary> },
    Listing { items: Vec<ItemSummary> },
    Found { item: ItemSummary },
    Borrowed { item: ItemSummary, due_date: NaiveDate },
    Returned { item: ItemSummary },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_borrowed_book() {
        let mut item = Item::book("B1", "Dune").unwrap();
        item.borrow(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap();

        let summary = ItemSummary::from(&item);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["id"], "B1");
        assert_eq!(json["kind"], "book");
        assert_eq!(json["title"], "Dune");
        assert_eq!(json["available"], false);
        assert_eq!(json["due_date"], "2024-01-29");
    }

    #[test]
    fn available_summary_omits_due_date() {
        let item = Item::magazine("M1", "March").unwrap();
        let json = serde_json::to_value(ItemSummary::from(&item)).unwrap();

        assert_eq!(json["issue"], "March");
        assert!(json.get("due_date").is_none());
    }

    #[test]
    fn response_is_tagged() {
        let response = Response::Listing { items: vec![] };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"result": "listing", "items": []}));
    }
}
