//! Defines the JSON endpoint for classifying a budget without storing it.

use axum::{Json, extract::rejection::JsonRejection};
use serde::Serialize;

use crate::{
    Error,
    budget::{BudgetInput, ClassificationResult, can_edit_wants, classify, coaching_tips},
};

/// A classification with the capabilities and advice that follow from it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub result: ClassificationResult,
    /// Whether wants may be entered in the result's mode.
    pub can_edit_wants: bool,
    pub coaching: Vec<&'static str>,
}

/// A route handler that classifies a [BudgetInput] sent as JSON.
pub async fn classify_endpoint(
    payload: Result<Json<BudgetInput>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, Error> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!("rejected classify body: {rejection}");
        Error::InvalidRequestBody(rejection.body_text())
    })?;

    let result = classify(&input);
    let coaching = coaching_tips(&result);

    Ok(Json(ClassifyResponse {
        can_edit_wants: can_edit_wants(result.mode),
        coaching,
        result,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{endpoints, test_utils::get_test_server};

    #[tokio::test]
    async fn classifies_growth_budget() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CLASSIFY)
            .json(&json!({
                "startingBalance": 0,
                "weeklyIncome": 1000,
                "baseline": 600,
                "wantsBreakdown": {"travel": "40"}
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["mode"], json!("growth"));
        assert_eq!(body["excess"], json!(400.0));
        assert_eq!(body["bufferGoal"], json!(2400.0));
        assert_eq!(body["isBufferFilling"], json!(true));
        assert_eq!(body["canEditWants"], json!(true));
        assert_eq!(body["actual"]["wantsTotal"], json!(40.0));
        assert!(!body["coaching"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stable_budget_cannot_edit_wants() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CLASSIFY)
            .json(&json!({
                "weeklyIncome": "600",
                "baseline": 600,
                "wantsBreakdown": {"travel": 40}
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["mode"], json!("stable"));
        assert_eq!(body["canEditWants"], json!(false));
        assert_eq!(body["actual"]["wantsTotal"], json!(0.0));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CLASSIFY)
            .text("{not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
