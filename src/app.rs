//! Expense Tracker App
//!
//! Main application component: owns the store and the subscription loop.

use futures::StreamExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ExpenseForm, ExpenseList, TotalRow};
use crate::db;
use crate::store::{store_apply_snapshot, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(store);

    // Subscribe on mount; one-way transition from unsubscribed to
    // subscribed, no reconnection. The guard dropped in on_cleanup
    // unsubscribes and closes the snapshot channel, ending the loop.
    Effect::new(move |_| {
        let (mut snapshots, guard) = db::subscribe_items();
        spawn_local(async move {
            while let Some(snapshot) = snapshots.next().await {
                web_sys::console::log_1(
                    &format!("[App] Snapshot with {} items", snapshot.len()).into(),
                );
                store_apply_snapshot(&store, snapshot);
            }
        });
        let guard = leptos::__reexports::send_wrapper::SendWrapper::new(guard);
        on_cleanup(move || drop(guard));
    });

    view! {
        <main class="app-layout">
            <div class="app-panel">
                <h1>"Expense Tracker"</h1>
                <ExpenseForm />
                <ExpenseList />
                <TotalRow />
            </div>
        </main>
    }
}
