//! Total Row Component
//!
//! Running total over all items; hidden while the list is empty.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TotalRow() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || !store.items().get().is_empty()>
            <div class="total-row">
                <span class="total-label">"Total"</span>
                <span class="total-amount">{move || format!("${}", store.total().get())}</span>
            </div>
        </Show>
    }
}
