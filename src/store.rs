//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{total_of, Item};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached projection of the items collection, in subscription order
    pub items: Vec<Item>,
    /// Sum of all item prices, recomputed on every snapshot
    pub total: f64,
}

impl AppState {
    /// Replace the item list wholesale with a snapshot and recompute the
    /// total. Snapshots are never merged or patched in.
    pub fn apply_snapshot(&mut self, snapshot: Vec<Item>) {
        self.total = total_of(&snapshot);
        self.items = snapshot;
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply one subscription snapshot to the store
pub fn store_apply_snapshot(store: &AppStore, snapshot: Vec<Item>) {
    *store.total().write() = total_of(&snapshot);
    *store.items().write() = snapshot;
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
    fn snapshot_overwrites_list_and_recomputes_total() {
        let mut state = AppState::default();

        state.apply_snapshot(vec![item("a", "Coffee", 3.5)]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total, 3.5);

        state.apply_snapshot(vec![item("b", "Lunch", 10.0), item("c", "Taxi", 15.5)]);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].name, "Lunch");
        assert_eq!(state.total, 25.5);
    }

    #[test]
    fn empty_snapshot_clears_list_and_zeroes_total() {
        let mut state = AppState::default();
        state.apply_snapshot(vec![item("a", "Coffee", 3.5)]);

        state.apply_snapshot(vec![]);
        assert!(state.items.is_empty());
        assert_eq!(state.total, 0.0);
    }

    #[test]
    fn list_changes_only_through_snapshots() {
        // A delete request for an id, present or not, must not touch local
        // state; the list shrinks only when the next snapshot omits the id.
        let mut state = AppState::default();
        state.apply_snapshot(vec![item("abc", "Coffee", 3.5), item("def", "Tea", 2.0)]);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total, 5.5);

        state.apply_snapshot(vec![item("def", "Tea", 2.0)]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id.as_deref(), Some("def"));
        assert_eq!(state.total, 2.0);
    }
}
