//! Document Store Bridge
//!
//! Frontend bindings to the hosted document database. The host page installs
//! a `window.__EXPENSE_DB__` object wrapping the store SDK; everything here
//! goes through it. The live subscription is surfaced as an explicit channel
//! of full snapshots plus a teardown guard, rather than a bare callback.

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{Item, NewItemRecord};

/// Collection holding all expense items.
pub const ITEMS_COLLECTION: &str = "items";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__EXPENSE_DB__"], js_name = createDoc, catch)]
    async fn create_doc(collection: &str, record: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__EXPENSE_DB__"], js_name = deleteDoc, catch)]
    async fn delete_doc(collection: &str, id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__EXPENSE_DB__"], js_name = onCollection)]
    fn on_collection(collection: &str, callback: &js_sys::Function) -> js_sys::Function;
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

// ========================
// Store Requests
// ========================

/// Create one item document; the store assigns its id.
pub async fn create_item(record: &NewItemRecord<'_>) -> Result<(), String> {
    let js_record = serde_wasm_bindgen::to_value(record).map_err(|e| e.to_string())?;
    create_doc(ITEMS_COLLECTION, js_record)
        .await
        .map_err(js_error)?;
    Ok(())
}

/// Delete one item document by store-assigned id.
pub async fn delete_item(id: &str) -> Result<(), String> {
    delete_doc(ITEMS_COLLECTION, id).await.map_err(js_error)?;
    Ok(())
}

// ========================
// Live Subscription
// ========================

/// Full point-in-time copy of the items collection.
pub type Snapshot = Vec<Item>;

/// Ordered stream of snapshots; ends when the subscription is torn down.
pub type SnapshotStream = UnboundedReceiver<Snapshot>;

pub fn snapshot_channel() -> (UnboundedSender<Snapshot>, SnapshotStream) {
    mpsc::unbounded()
}

/// Owns the teardown of one live subscription.
///
/// Dropping the guard runs the teardown exactly once: it unsubscribes from
/// the store and releases the callback closure, which closes the snapshot
/// channel and ends the reader loop.
pub struct SubscriptionGuard {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl SubscriptionGuard {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

/// Open the standing subscription against the items collection.
///
/// The store invokes the callback with the full document set on every
/// change; each payload is decoded and forwarded down the channel in
/// delivery order. Payloads that fail to decode are logged and skipped.
pub fn subscribe_items() -> (SnapshotStream, SubscriptionGuard) {
    let (tx, rx) = snapshot_channel();

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |docs: JsValue| {
        match serde_wasm_bindgen::from_value::<Snapshot>(docs) {
            Ok(snapshot) => {
                let _ = tx.unbounded_send(snapshot);
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[DB] Dropping undecodable snapshot: {}", e).into(),
                );
            }
        }
    });

    let unsubscribe = on_collection(ITEMS_COLLECTION, callback.as_ref().unchecked_ref());

    let guard = SubscriptionGuard::new(move || {
        if let Err(e) = unsubscribe.call0(&JsValue::NULL) {
            web_sys::console::error_1(&format!("[DB] Unsubscribe failed: {:?}", e).into());
        }
        drop(callback);
    });

    (rx, guard)
}
