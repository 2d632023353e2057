//! Expense List Component
//!
//! Live list of expense items with per-row deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::db;
use crate::store::{use_app_store, AppStateStoreFields};

/// List of all expense items, in subscription-delivered order
#[component]
pub fn ExpenseList() -> impl IntoView {
    let store = use_app_store();

    // No optimistic removal: the row disappears when the next snapshot
    // arrives without it.
    let delete_item = move |id: String| {
        spawn_local(async move {
            if let Err(e) = db::delete_item(&id).await {
                web_sys::console::error_1(
                    &format!("[ExpenseList] Delete failed for {}: {}", id, e).into(),
                );
            }
        });
    };

    view! {
        <ul class="expense-list">
            <For
                each=move || store.items().get()
                key=|item| item.id.clone().unwrap_or_default()
                children=move |item| {
                    let name = item.name.clone();
                    let price = item.price;
                    view! {
                        <li class="expense-row">
                            <span class="expense-name">{name}</span>
                            <span class="expense-price">{format!("${}", price)}</span>
                            {item.id.clone().map(|id| view! {
                                <button
                                    class="delete-btn"
                                    on:click=move |_| delete_item(id.clone())
                                >
                                    "×"
                                </button>
                            })}
                        </li>
                    }
                }
            />
        </ul>
    }
}
