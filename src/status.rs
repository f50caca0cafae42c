//! A route for checking that the API is running.

use axum::Json;
use serde::Serialize;

/// The body of a status response.
#[derive(Debug, Serialize, PartialEq)]
pub struct Status {
    status: &'static str,
    message: &'static str,
}

/// Report that the API is up.
pub async fn get_status() -> Json<Status> {
    Json(Status {
        status: "ok",
        message: "Budget planner API is running!",
    })
}
