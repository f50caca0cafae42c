use axum::{Json, extract::State};

use crate::{
    Error,
    entry::{
        core::BudgetEntry,
        repository::{BudgetRepository, SQLiteBudgetRepository},
    },
};

/// A route handler that responds with every stored budget entry as JSON,
/// newest budget date first.
pub async fn list_budgets_endpoint(
    State(repository): State<SQLiteBudgetRepository>,
) -> Result<Json<Vec<BudgetEntry>>, Error> {
    repository
        .list()
        .inspect_err(|error| tracing::error!("Could not get budget entries: {error}"))
        .map(Json)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{endpoints, test_utils::get_test_server};

    #[tokio::test]
    async fn empty_database_gives_empty_list() {
        let server = get_test_server();

        let response = server.get(endpoints::BUDGETS).await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let server = get_test_server();

        for (budget_date, paycheck) in [("2025-01-04", 500), ("2025-01-11", 700)] {
            server
                .post(endpoints::BUDGETS)
                .json(&json!({
                    "budget_date": budget_date,
                    "paycheck": paycheck,
                    "needs": {},
                    "wants": {},
                    "savings": {}
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let entries: Value = server.get(endpoints::BUDGETS).await.json();

        assert_eq!(entries[0]["budget_date"], json!("2025-01-11"));
        assert_eq!(entries[0]["income"], json!(700.0));
        assert_eq!(entries[1]["budget_date"], json!("2025-01-04"));
        assert_eq!(entries[1]["notes"], Value::Null);
    }
}
