//! Defines the endpoint for storing a new budget entry.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, Serialize, de};
use time::{Date, macros::format_description};

use crate::{
    Error,
    budget::{NeedsBreakdown, SavingsBreakdown, WantsBreakdown, deserialize_optional_amount},
    entry::{
        core::{EntryId, NewBudgetEntry},
        repository::{BudgetRepository, SQLiteBudgetRepository},
    },
};

/// The JSON body for creating a budget entry.
///
/// Every field is optional here so that missing fields can be reported
/// together, see [CreateBudgetRequest::into_new_entry].
#[derive(Debug, Default, Deserialize)]
pub struct CreateBudgetRequest {
    /// The date as "YYYY-MM-DD". A blank string counts as missing.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub budget_date: Option<Date>,
    /// The starting balance. Defaults to zero.
    #[serde(
        default,
        rename = "totalMoney",
        deserialize_with = "deserialize_optional_amount"
    )]
    pub total_money: Option<f64>,
    /// The income for the week.
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub paycheck: Option<f64>,
    #[serde(default)]
    pub needs: Option<NeedsBreakdown>,
    #[serde(default)]
    pub wants: Option<WantsBreakdown>,
    #[serde(default)]
    pub savings: Option<SavingsBreakdown>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let text = text.trim();

    if text.is_empty() {
        return Ok(None);
    }

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|error| de::Error::custom(format!("invalid budget_date \"{text}\": {error}")))
}

impl CreateBudgetRequest {
    /// Check that the required fields are present.
    ///
    /// # Errors
    /// Returns [Error::MissingFields] naming every required field that is
    /// absent or null.
    pub fn into_new_entry(self) -> Result<NewBudgetEntry, Error> {
        let mut missing = Vec::new();

        if self.budget_date.is_none() {
            missing.push("budget_date");
        }
        if self.paycheck.is_none() {
            missing.push("paycheck");
        }
        if self.needs.is_none() {
            missing.push("needs");
        }
        if self.wants.is_none() {
            missing.push("wants");
        }
        if self.savings.is_none() {
            missing.push("savings");
        }

        match (
            self.budget_date,
            self.paycheck,
            self.needs,
            self.wants,
            self.savings,
        ) {
            (Some(budget_date), Some(paycheck), Some(needs), Some(wants), Some(savings)) => {
                Ok(NewBudgetEntry {
                    budget_date,
                    total_money: self.total_money.unwrap_or(0.0),
                    income: paycheck,
                    needs,
                    wants,
                    savings,
                    notes: None,
                }
                .notes(self.notes.as_deref()))
            }
            _ => Err(Error::MissingFields(missing)),
        }
    }
}

/// The JSON body sent after an entry is created.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateBudgetResponse {
    pub success: bool,
    pub id: EntryId,
    pub message: String,
}

/// A route handler for storing a budget entry, responds with `201 Created`
/// and the new entry's ID.
pub async fn create_budget_endpoint(
    State(repository): State<SQLiteBudgetRepository>,
    payload: Result<Json<CreateBudgetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBudgetResponse>), Error> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("rejected budget entry body: {rejection}");
        Error::InvalidRequestBody(rejection.body_text())
    })?;

    let new_entry = request.into_new_entry()?;

    let entry = repository
        .save(new_entry)
        .inspect_err(|error| tracing::error!("Could not store budget entry: {error}"))?;

    tracing::info!("Created budget entry {}", entry.id);

    Ok((
        StatusCode::CREATED,
        Json(CreateBudgetResponse {
            success: true,
            id: entry.id,
            message: "Budget entry created successfully".to_owned(),
        }),
    ))
}


#[cfg(test)]
mod endpoint_tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{endpoints, entry::create_endpoint::CreateBudgetResponse, test_utils::get_test_server};

    #[tokio::test]
    async fn creates_entry() {
        let server = get_test_server();

        let response = server
            .post(endpoints::BUDGETS)
            .json(&json!({
                "budget_date": "2025-06-01",
                "totalMoney": 1000,
                "paycheck": 800,
                "needs": {"food": 120, "rent": 300},
                "wants": {"travel": 40},
                "savings": {"emergency": 30},
                "notes": "first week"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: CreateBudgetResponse = response.json();
        assert_eq!(
            body,
            CreateBudgetResponse {
                success: true,
                id: 1,
                message: "Budget entry created successfully".to_owned(),
            }
        );

        let entries: Value = server.get(endpoints::BUDGETS).await.json();
        assert_eq!(entries[0]["income"], json!(800.0));
        assert_eq!(entries[0]["needs_data"]["rent"], json!(300.0));
        assert_eq!(entries[0]["wants_data"]["travel"], json!(40.0));
        assert_eq!(entries[0]["notes"], json!("first week"));
    }

    #[tokio::test]
    async fn missing_paycheck_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::BUDGETS)
            .json(&json!({
                "budget_date": "2025-06-01",
                "needs": {},
                "wants": {},
                "savings": {}
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        let error = body["error"].as_str().expect("error should be a string");
        assert!(error.contains("paycheck"), "got error {error:?}");
    }

    #[tokio::test]
    async fn empty_date_is_reported_as_missing() {
        let server = get_test_server();

        let response = server
            .post(endpoints::BUDGETS)
            .json(&json!({
                "budget_date": "",
                "paycheck": 500,
                "needs": {},
                "wants": {},
                "savings": {}
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], json!("Missing required fields: budget_date"));
    }

    #[tokio::test]
    async fn unknown_category_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::BUDGETS)
            .json(&json!({
                "budget_date": "2025-06-01",
                "paycheck": 500,
                "needs": {"yacht": 1000},
                "wants": {},
                "savings": {}
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], json!("Invalid request body"));
    }

    #[tokio::test]
    async fn malformed_date_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::BUDGETS)
            .json(&json!({
                "budget_date": "last tuesday",
                "paycheck": 500,
                "needs": {},
                "wants": {},
                "savings": {}
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
