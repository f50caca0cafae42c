#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use rusqlite::Connection;

use crate::{AppState, budget::DEFAULT_BUFFER_GOAL_WEEKS, build_router};

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{
    assert_form_input, assert_form_input_with_value, assert_form_submit_button_with_text,
    assert_hx_endpoint, assert_input_disabled, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_content_type, assert_hx_refresh, assert_status_ok};

/// An app state backed by a fresh in-memory database.
pub(crate) fn get_test_state() -> AppState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");

    AppState::new(connection, "Etc/UTC", DEFAULT_BUFFER_GOAL_WEEKS)
        .expect("Could not create app state")
}

/// The connection shared by `state`, for setting up test data.
pub(crate) fn get_connection(state: &AppState) -> Arc<Mutex<Connection>> {
    state.db_connection.clone()
}

/// A test server running the full router over a fresh in-memory database.
pub(crate) fn get_test_server() -> TestServer {
    TestServer::try_new(build_router(get_test_state())).expect("Could not create test server")
}
