//! Application router configuration for the JSON API and the HTML pages.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    entry::{
        create_budget_endpoint, delete_budget_endpoint, delete_history_entry_endpoint,
        get_history_page, list_budgets_endpoint,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    planner::{
        classify_endpoint, get_planner_page, preview_planner_endpoint, submit_planner_endpoint,
    },
    status::get_status,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(endpoints::STATUS, get(get_status))
        .route(
            endpoints::BUDGETS,
            get(list_budgets_endpoint).post(create_budget_endpoint),
        )
        .route(endpoints::BUDGET, delete(delete_budget_endpoint))
        .route(endpoints::CLASSIFY, post(classify_endpoint));

    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::PLANNER_VIEW,
            get(get_planner_page).post(submit_planner_endpoint),
        )
        .route(endpoints::PLANNER_PREVIEW, post(preview_planner_endpoint))
        .route(endpoints::HISTORY_VIEW, get(get_history_page))
        .route(
            endpoints::HISTORY_ENTRY,
            delete(delete_history_entry_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    api_routes
        .merge(page_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the planner page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::PLANNER_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_planner() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::PLANNER_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{endpoints, test_utils::get_test_server};

    #[tokio::test]
    async fn status_reports_ok() {
        let server = get_test_server();

        let response = server.get(endpoints::STATUS).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "status": "ok",
            "message": "Budget planner API is running!"
        }));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("404"));
    }

    #[tokio::test]
    async fn error_page_is_served() {
        let server = get_test_server();

        let response = server.get(endpoints::INTERNAL_ERROR_VIEW).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn planner_page_is_served() {
        let server = get_test_server();

        let response = server.get(endpoints::PLANNER_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Save Plan"));
    }
}
