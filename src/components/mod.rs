//! UI Components
//!
//! Reusable Leptos components.

mod expense_form;
mod expense_list;
mod total_row;

pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use total_row::TotalRow;
