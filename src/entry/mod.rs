//! Budget entries: saved budget submissions.
//!
//! This module contains:
//! - The `BudgetEntry` model and the database functions for storing entries
//! - The `BudgetRepository` trait and its SQLite implementation
//! - The JSON endpoints for creating, listing and deleting entries
//! - The history page and its delete endpoint

mod core;
mod create_endpoint;
mod delete_endpoint;
mod history_delete_endpoint;
mod history_page;
mod list_endpoint;
mod repository;

pub use core::{BudgetEntry, EntryId, NewBudgetEntry, create_budget_entry_table};
pub use create_endpoint::create_budget_endpoint;
pub use delete_endpoint::delete_budget_endpoint;
pub use history_delete_endpoint::delete_history_entry_endpoint;
pub use history_page::get_history_page;
pub use list_endpoint::list_budgets_endpoint;
pub use repository::{BudgetRepository, SQLiteBudgetRepository};
