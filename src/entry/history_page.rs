//! The page listing saved budget entries.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    budget::Breakdown,
    charts::{BudgetChart, ECHARTS_SCRIPT_URL, charts_script, charts_view, income_chart, spending_chart},
    endpoints::{self, format_endpoint},
    entry::{
        core::BudgetEntry,
        repository::{BudgetRepository, SQLiteBudgetRepository},
    },
    html::{
        BUTTON_DELETE_STYLE, HeadElement, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency, link,
    },
    navigation::NavBar,
};

/// Renders the saved entries, newest first, with charts of income and spending.
pub async fn get_history_page(State(repository): State<SQLiteBudgetRepository>) -> Response {
    let entries = match repository.list() {
        Ok(entries) => entries,
        Err(error) => {
            tracing::error!("Could not get budget entries: {error}");
            return error.into_page_response();
        }
    };

    history_view(&entries).into_response()
}

fn history_view(entries: &[BudgetEntry]) -> Markup {
    let nav_bar = NavBar::new(endpoints::HISTORY_VIEW).into_html();

    let charts = if entries.is_empty() {
        Vec::new()
    } else {
        vec![
            BudgetChart {
                id: "income-chart",
                options: income_chart(entries).to_string(),
            },
            BudgetChart {
                id: "spending-chart",
                options: spending_chart(entries).to_string(),
            },
        ]
    };

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="mb-6 text-3xl font-bold" { "History" }

            @if entries.is_empty() {
                p id="no-entries" class="text-gray-600 dark:text-gray-400"
                {
                    "No budgets saved yet. "
                    (link(endpoints::PLANNER_VIEW, "Plan your first week"))
                    " to start your history."
                }
            } @else {
                (charts_view(&charts))
                (entries_table(entries))
            }
        }
    };

    let head_elements = if charts.is_empty() {
        Vec::new()
    } else {
        vec![
            HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
            charts_script(&charts),
        ]
    };

    base("History", &head_elements, &content)
}

fn entries_table(entries: &[BudgetEntry]) -> Markup {
    html! {
        div class="w-full overflow-x-auto rounded shadow-md"
        {
            table id="history-table" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Income" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Starting Balance" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Needs" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Wants" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Savings" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Notes" }
                        th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Actions" } }
                    }
                }

                tbody
                {
                    @for entry in entries {
                        (entry_row(entry))
                    }
                }
            }
        }
    }
}

fn entry_row(entry: &BudgetEntry) -> Markup {
    let delete_url = format_endpoint(endpoints::HISTORY_ENTRY, entry.id);
    let confirm_message = format!("Delete the budget for {}?", entry.budget_date);

    html! {
        tr class=(TABLE_ROW_STYLE) data-entry-id=(entry.id)
        {
            th scope="row" class={(TABLE_CELL_STYLE) " font-medium text-gray-900 whitespace-nowrap dark:text-white"}
            {
                (entry.budget_date.to_string())
            }
            td class=(TABLE_CELL_STYLE) { (format_currency(entry.income)) }
            td class=(TABLE_CELL_STYLE) { (format_currency(entry.total_money)) }
            td class=(TABLE_CELL_STYLE) { (format_currency(entry.needs_data.total())) }
            td class=(TABLE_CELL_STYLE) { (format_currency(entry.wants_data.total())) }
            td class=(TABLE_CELL_STYLE) { (format_currency(entry.savings_data.total())) }
            td class=(TABLE_CELL_STYLE) { (format_currency(entry.total_allocated())) }
            td class=(TABLE_CELL_STYLE) { (entry.notes.as_deref().unwrap_or("")) }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm=(confirm_message)
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}
