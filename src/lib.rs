//! A web app for planning a weekly budget.
//!
//! Income is compared against a user-declared baseline of weekly needs to pick
//! a spending mode (survival, stable or growth), and each mode suggests how the
//! week's income should be split between needs, wants and savings.
//!
//! This library provides a JSON API for storing budget entries and
//! classifying budgets, and serves the HTML pages for the planner and history.

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

pub mod budget;

mod alert;
mod app_state;
mod charts;
mod database_id;
mod db;
mod endpoints;
mod entry;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod planner;
mod routing;
mod status;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use entry::{
    BudgetEntry, BudgetRepository, EntryId, NewBudgetEntry, SQLiteBudgetRepository,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_local_offset;

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request body was missing fields that must be present.
    ///
    /// Holds the names of the missing fields in the order they are declared
    /// in the request body.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A request body could not be parsed, e.g., it was not valid JSON, a date
    /// was malformed, or a breakdown had an unknown category.
    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),

    /// A budget entry ID in a URL was not an integer.
    #[error("\"{0}\" is not a valid budget entry ID")]
    InvalidEntryId(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete a budget entry that does not exist.
    #[error("tried to delete budget entry {0}, which is not in the database")]
    DeleteMissingEntry(EntryId),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while serializing a struct as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The default buffer goal was not a positive number of weeks.
    #[error("the buffer goal must be a positive number of weeks, got {0}")]
    InvalidBufferGoalWeeks(f64),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent with an error response from the API.
#[derive(Debug, Serialize)]
struct ApiErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            Error::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required fields: {}", fields.join(", ")),
                Some(
                    "budget_date, paycheck, needs, wants, and savings are required".to_owned(),
                ),
            ),
            Error::InvalidRequestBody(details) => (
                StatusCode::BAD_REQUEST,
                "Invalid request body".to_owned(),
                Some(details),
            ),
            Error::InvalidEntryId(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid id parameter".to_owned(),
                Some("ID must be a valid number".to_owned()),
            ),
            Error::NotFound => (StatusCode::NOT_FOUND, "Not found".to_owned(), None),
            Error::DeleteMissingEntry(id) => (
                StatusCode::NOT_FOUND,
                "Budget entry not found".to_owned(),
                Some(format!("No budget entry with id {id} exists")),
            ),
            // Storage and other unexpected errors pass their message through.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                    Some(error.to_string()),
                )
            }
        };

        (status, Json(ApiErrorBody { error, message })).into_response()
    }
}

impl Error {
    /// Render the error as an alert for HTMX requests.
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidRequestBody(details) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid form".to_owned(),
                    details,
                },
            )
                .into_response(),
            Error::InvalidEntryId(id) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid budget entry".to_owned(),
                    details: format!("\"{id}\" is not a valid budget entry ID."),
                },
            )
                .into_response(),
            Error::DeleteMissingEntry(_) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete entry".to_owned(),
                    details: "The entry could not be found. \
                        Try refreshing the page to see if the entry has already been deleted."
                        .to_owned(),
                },
            )
                .into_response(),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                        ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details: "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                    },
                )
                    .into_response()
            }
        }
    }

    /// Render the error as a full error page.
    fn into_page_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::{Value, json};

    use crate::Error;

    async fn into_json(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        (status, serde_json::from_slice(&body).expect("body is not JSON"))
    }

    #[tokio::test]
    async fn missing_fields_is_bad_request() {
        let (status, body) = into_json(Error::MissingFields(vec!["paycheck", "wants"])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Missing required fields: paycheck, wants"));
    }

    #[tokio::test]
    async fn delete_missing_entry_is_not_found() {
        let (status, body) = into_json(Error::DeleteMissingEntry(42)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], json!("No budget entry with id 42 exists"));
    }

    #[tokio::test]
    async fn storage_errors_pass_message_through() {
        let (status, body) = into_json(Error::DatabaseLockError).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], json!("Internal server error"));
        assert_eq!(body["message"], json!("could not acquire the database lock"));
    }
}
