//! Expense Form Component
//!
//! Form for adding a new expense item with name and price.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::db;
use crate::models::Draft;

/// Form for creating new expense items
#[component]
pub fn ExpenseForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = Draft {
            name: name.get(),
            price: price.get(),
        };
        if draft.record().is_none() {
            web_sys::console::warn_1(
                &"[ExpenseForm] Draft needs a name and a numeric price".into(),
            );
            return;
        }

        spawn_local(async move {
            let record = match draft.record() {
                Some(record) => record,
                None => return,
            };
            match db::create_item(&record).await {
                Ok(()) => {
                    // Clear the draft only once the store confirmed the write
                    set_name.set(String::new());
                    set_price.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ExpenseForm] Create failed: {}", e).into(),
                    );
                }
            }
        });
    };

    view! {
        <form class="expense-form" on:submit=add_item>
            <input
                type="text"
                class="expense-name-input"
                placeholder="Enter Item"
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <input
                type="text"
                class="expense-price-input"
                placeholder="Enter $"
                prop:value=move || price.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_price.set(input.value());
                }
            />
            <button type="submit">"+"</button>
        </form>
    }
}
