//! Frontend Models
//!
//! Data structures matching the documents held by the store.

use serde::{Deserialize, Serialize};

/// Expense item as stored in the `items` collection.
///
/// `id` is assigned by the store and is absent before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
}

/// Unsaved form input before submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub price: String,
}

/// Payload for a create request (no id, the store assigns one).
#[derive(Debug, PartialEq, Serialize)]
pub struct NewItemRecord<'a> {
    pub name: &'a str,
    pub price: f64,
}

impl Draft {
    /// Convert the draft into a create payload.
    ///
    /// Returns `None` when the trimmed name is empty, the price field is
    /// empty, or the price does not parse as a number. No request should be
    /// issued in that case and the draft stays as typed.
    pub fn record(&self) -> Option<NewItemRecord<'_>> {
        let name = self.name.trim();
        if name.is_empty() || self.price.trim().is_empty() {
            return None;
        }
        let price = self.price.trim().parse::<f64>().ok()?;
        Some(NewItemRecord { name, price })
    }
}

/// Sum of all item prices. Recomputed wholesale on every snapshot.
pub fn total_of(items: &[Item]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price: f64) -> Item {
        Item {
            id: Some(id.to_string()),
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn draft_record_parses_price() {
        let draft = Draft {
            name: "Coffee".to_string(),
            price: "3.5".to_string(),
        };
        let record = draft.record().expect("draft should convert");
        assert_eq!(record, NewItemRecord { name: "Coffee", price: 3.5 });
    }

    #[test]
    fn draft_record_trims_name() {
        let draft = Draft {
            name: "  Coffee  ".to_string(),
            price: "2".to_string(),
        };
        assert_eq!(draft.record().unwrap().name, "Coffee");
    }

    #[test]
    fn draft_record_rejects_empty_fields() {
        let no_name = Draft { name: "   ".to_string(), price: "3".to_string() };
        assert!(no_name.record().is_none());

        let no_price = Draft { name: "Tea".to_string(), price: "".to_string() };
        assert!(no_price.record().is_none());
    }

    #[test]
    fn draft_record_rejects_non_numeric_price() {
        let draft = Draft {
            name: "Tea".to_string(),
            price: "cheap".to_string(),
        };
        assert!(draft.record().is_none());
    }

    #[test]
    fn new_item_record_serializes_without_id() {
        let record = NewItemRecord { name: "Coffee", price: 3.5 };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Coffee", "price": 3.5 }));
    }

    #[test]
    fn item_deserializes_with_store_id() {
        let json = r#"{ "id": "abc", "name": "Coffee", "price": 3.5 }"#;
        let parsed: Item = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, item("abc", "Coffee", 3.5));
    }

    #[test]
    fn total_of_empty_is_zero() {
        assert_eq!(total_of(&[]), 0.0);
    }

    #[test]
    fn total_of_sums_prices() {
        let items = vec![item("a", "Lunch", 10.0), item("b", "Taxi", 15.5)];
        assert_eq!(total_of(&items), 25.5);
    }
}
