//! Defines the endpoint for deleting a budget entry from the history page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::entry::{
    delete_endpoint::parse_entry_id,
    repository::{BudgetRepository, SQLiteBudgetRepository},
};

/// A route handler for deleting a budget entry, asks HTMX to refresh the page
/// on success so that the table and charts are redrawn.
pub async fn delete_history_entry_endpoint(
    State(repository): State<SQLiteBudgetRepository>,
    Path(entry_id): Path<String>,
) -> Response {
    let entry_id = match parse_entry_id(&entry_id) {
        Ok(entry_id) => entry_id,
        Err(error) => return error.into_alert_response(),
    };

    match repository.delete(entry_id) {
        Ok(()) => {
            tracing::info!("Deleted budget entry {entry_id}");
            (HxRefresh(true), StatusCode::OK).into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete budget entry {entry_id}: {error}");
            error.into_alert_response()
        }
    }
}
