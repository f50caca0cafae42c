//! Defines the endpoint for saving a plan from the planner form.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse, Response},
};

use crate::{
    Error,
    budget::classify,
    entry::{BudgetRepository, SQLiteBudgetRepository},
    planner::{form::PlannerForm, view::planner_result_view},
};

/// A route handler for saving the planner form.
///
/// Classifies the form, stores it as a budget entry and responds with the
/// result.
pub async fn submit_planner_endpoint(
    State(repository): State<SQLiteBudgetRepository>,
    form: Result<Form<PlannerForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("rejected planner form: {rejection}");
            return Error::InvalidRequestBody(rejection.body_text()).into_alert_response();
        }
    };

    let input = form.to_budget_input();
    let result = classify(&input);
    tracing::debug!("classified planner form as {}", result.mode);

    let entry = match repository.save(form.to_new_entry()) {
        Ok(entry) => entry,
        Err(error) => {
            tracing::error!("could not store budget entry: {error}");
            return error.into_alert_response();
        }
    };

    Html(
        planner_result_view(&result, input.weekly_income, &form.wants(), Some(entry.id))
            .into_string(),
    )
    .into_response()
}
