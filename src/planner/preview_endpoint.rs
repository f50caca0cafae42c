//! Defines the endpoint for previewing a plan without saving it.

use axum::{
    Form,
    extract::rejection::FormRejection,
    response::{Html, IntoResponse, Response},
};

use crate::{
    Error,
    budget::classify,
    planner::{form::PlannerForm, view::planner_result_view},
};

/// A route handler that classifies the planner form and responds with the
/// result. Nothing is stored.
pub async fn preview_planner_endpoint(form: Result<Form<PlannerForm>, FormRejection>) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("rejected planner form: {rejection}");
            return Error::InvalidRequestBody(rejection.body_text()).into_alert_response();
        }
    };

    let input = form.to_budget_input();
    let result = classify(&input);
    tracing::debug!("previewed planner form as {}", result.mode);

    Html(planner_result_view(&result, input.weekly_income, &form.wants(), None).into_string())
        .into_response()
}
