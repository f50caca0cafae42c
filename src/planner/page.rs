//! The planner page.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    charts::ECHARTS_SCRIPT_URL,
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    planner::{
        form::PlannerForm,
        view::{RESULT_CONTAINER_ID, planner_form_view},
    },
    timezone::get_local_offset,
};

/// The state needed to render the planner page.
#[derive(Debug, Clone)]
pub struct PlannerPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The buffer goal shown when the form is first loaded.
    pub default_buffer_goal_weeks: f64,
}

impl FromRef<AppState> for PlannerPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            default_buffer_goal_weeks: state.default_buffer_goal_weeks,
        }
    }
}

/// Renders the planner form, dated today in the local timezone.
pub async fn get_planner_page(State(state): State<PlannerPageState>) -> Response {
    let Some(local_offset) = get_local_offset(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_page_response();
    };

    let today = OffsetDateTime::now_utc().to_offset(local_offset).date();
    let mut form = PlannerForm::new(today);
    form.buffer_goal_weeks = state.default_buffer_goal_weeks.to_string();

    planner_view(&form).into_response()
}

fn planner_view(form: &PlannerForm) -> Markup {
    let nav_bar = NavBar::new(endpoints::PLANNER_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="mb-2 text-3xl font-bold" { "Plan Your Week" }

            p class="mb-6 text-gray-600 dark:text-gray-400"
            {
                "Enter this week's income and the least you need to get by. "
                "Your plan is saved to your history."
            }

            (planner_form_view(form))

            div id=(RESULT_CONTAINER_ID) class="w-full max-w-3xl mt-8" {}
        }
    };

    let head_elements = [
        dollar_input_styles(),
        HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
    ];

    base("Planner", &head_elements, &content)
}
