//! Templates for the planner form and the classification result.

use maud::{Markup, html};

use crate::{
    budget::{
        Breakdown, ClassificationResult, NeedsBreakdown, SavingsBreakdown, WantsBreakdown,
        can_edit_wants, coaching_tips, parse_amount, round_to_cents, share_of,
    },
    charts::{BudgetChart, allocation_chart, charts_inline_script, charts_view},
    endpoints,
    entry::EntryId,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_FIELDSET_STYLE, FORM_LABEL_STYLE, FORM_LEGEND_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, MODE_BADGE_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, dollar_input, format_currency, format_percent,
        loading_spinner,
    },
    planner::form::PlannerForm,
};

pub const WANTS_FIELDSET_ID: &str = "wants-fieldset";
pub const RESULT_CONTAINER_ID: &str = "planner-result";

/// The planner form.
///
/// Any change to the form previews the plan without saving it. The wants
/// fieldset starts disabled, it is unlocked by a preview in growth mode.
/// Only the save button stores the plan.
pub fn planner_form_view(form: &PlannerForm) -> Markup {
    let result_target = format!("#{RESULT_CONTAINER_ID}");

    html! {
        form
            hx-post=(endpoints::PLANNER_PREVIEW)
            hx-trigger="change delay:300ms, submit"
            hx-target=(result_target)
            hx-target-error="#alert-container"
            hx-swap="innerHTML"
            hx-indicator="#indicator"
            class="w-full max-w-3xl space-y-6"
        {
            fieldset class=(FORM_FIELDSET_STYLE)
            {
                legend class=(FORM_LEGEND_STYLE) { "This Week" }

                div
                {
                    label for="budget_date" class=(FORM_LABEL_STYLE) { "Date" }

                    input
                        type="date"
                        name="budget_date"
                        id="budget_date"
                        value=(form.budget_date.to_string())
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                (dollar_input("paycheck", "Weekly Income", amount_value(&form.paycheck), true))
                (dollar_input("baseline", "Baseline Weekly Needs", amount_value(&form.baseline), true))
                (dollar_input("total_money", "Starting Balance", amount_value(&form.total_money), false))

                div
                {
                    label for="buffer_goal_weeks" class=(FORM_LABEL_STYLE) { "Buffer Goal (Weeks)" }

                    input
                        type="number"
                        name="buffer_goal_weeks"
                        id="buffer_goal_weeks"
                        step="any"
                        min="0"
                        value=(form.buffer_goal_weeks)
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            (breakdown_fieldset("needs", "Needs", "needs-fieldset", Some(&form.needs()), false, false))
            (wants_fieldset(Some(&form.wants()), false, false))
            (breakdown_fieldset("savings", "Savings", "savings-fieldset", Some(&form.savings()), false, false))

            div
            {
                label for="notes" class=(FORM_LABEL_STYLE) { "Notes" }

                textarea
                    name="notes"
                    id="notes"
                    rows="3"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (form.notes)
                }
            }

            div class="flex gap-4"
            {
                button type="submit" class=(BUTTON_SECONDARY_STYLE)
                {
                    "Preview"
                }

                button
                    type="button"
                    id="indicator"
                    hx-post=(endpoints::PLANNER_VIEW)
                    hx-include="closest form"
                    class=(BUTTON_PRIMARY_STYLE)
                {
                    span class="htmx-indicator" { (loading_spinner()) }
                    "Save Plan"
                }
            }
        }
    }
}

/// The wants inputs, which may only be edited in growth mode.
///
/// Set `out_of_band` to replace the fieldset already on the page when it is
/// returned alongside a classification result.
pub fn wants_fieldset(wants: Option<&WantsBreakdown>, can_edit: bool, out_of_band: bool) -> Markup {
    breakdown_fieldset(
        "wants",
        "Wants",
        WANTS_FIELDSET_ID,
        wants,
        !can_edit,
        out_of_band,
    )
}

fn breakdown_fieldset<B: Breakdown>(
    group: &str,
    legend: &str,
    id: &str,
    breakdown: Option<&B>,
    disabled: bool,
    out_of_band: bool,
) -> Markup {
    let amounts = breakdown.map(Breakdown::amounts);

    html! {
        fieldset
            id=(id)
            class=(FORM_FIELDSET_STYLE)
            disabled[disabled]
            hx-swap-oob=[out_of_band.then_some("true")]
        {
            legend class=(FORM_LEGEND_STYLE) { (legend) }

            @if disabled {
                p class="sm:col-span-2 text-sm text-gray-500 dark:text-gray-400"
                {
                    "Wants unlock when your income puts you in growth mode."
                }
            }

            @for (index, category) in B::CATEGORIES.iter().enumerate() {
                @let value = amounts
                    .as_ref()
                    .and_then(|amounts| amounts.get(index).copied())
                    .filter(|amount| *amount > 0.0);

                (dollar_input(&format!("{group}_{}", category.key), category.label, value, false))
            }
        }
    }
}

/// Show a typed amount in a number input, blank if it is empty or not a
/// positive number.
fn amount_value(text: &str) -> Option<f64> {
    let amount = parse_amount(text);

    (amount > 0.0).then_some(amount)
}

/// The response to a preview or save: the result and the wants fieldset,
/// which is swapped out of band so that it is only editable in growth mode.
pub fn planner_result_view(
    result: &ClassificationResult,
    income: f64,
    wants: &WantsBreakdown,
    entry_id: Option<EntryId>,
) -> Markup {
    html! {
        (result_view(result, income, entry_id))
        (wants_fieldset(Some(wants), can_edit_wants(result.mode), true))
    }
}

/// The classification result, `entry_id` is set once the plan is saved.
pub fn result_view(result: &ClassificationResult, income: f64, entry_id: Option<EntryId>) -> Markup {
    let chart = BudgetChart {
        id: "allocation-chart",
        options: allocation_chart(result).to_string(),
    };
    let charts = [chart];

    html! {
        section id="result-summary" class="w-full max-w-3xl space-y-4"
        {
            div class="flex items-center gap-3"
            {
                h2 class="text-2xl font-semibold" { "Your Plan" }
                span class=(MODE_BADGE_STYLE) data-mode=(result.mode.as_str()) { (result.mode.to_string()) " mode" }
            }

            dl class="grid grid-cols-1 sm:grid-cols-3 gap-4"
            {
                div
                {
                    dt class="text-sm text-gray-500 dark:text-gray-400" { "Excess Income" }
                    dd class="text-lg font-semibold" { (format_currency(result.excess)) }
                }
                div
                {
                    dt class="text-sm text-gray-500 dark:text-gray-400" { "Buffer Goal" }
                    dd class="text-lg font-semibold" { (format_currency(result.buffer_goal)) }
                }
                div
                {
                    dt class="text-sm text-gray-500 dark:text-gray-400" { "Buffer" }
                    dd class="text-lg font-semibold"
                    {
                        @if result.is_buffer_filling { "Filling" } @else { "Full" }
                    }
                }
            }

            (allocation_table(result, income))
            (comparison_view(result))
            (charts_view(&charts))
            (charts_inline_script(&charts))
            (coaching_view(&coaching_tips(result)))

            p id="save-status" class="text-sm text-gray-500 dark:text-gray-400"
            {
                @if let Some(entry_id) = entry_id {
                    "Saved as entry #" (entry_id) ". "
                    a href=(endpoints::HISTORY_VIEW) class=(LINK_STYLE) { "View history" }
                } @else {
                    "Preview only. Press \"Save Plan\" to add this plan to your history."
                }
            }
        }
    }
}

fn allocation_table(result: &ClassificationResult, income: f64) -> Markup {
    let suggested = &result.suggested;
    let actual = &result.actual;

    html! {
        div class="overflow-x-auto rounded shadow-md"
        {
            table id="allocation-table" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Suggested" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "% of Income" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actual" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "% of Income" }
                    }
                }

                tbody
                {
                    (group_rows::<NeedsBreakdown>("Needs", suggested.needs_total, &suggested.needs_breakdown, actual.needs_total, &actual.needs_breakdown, income))
                    (group_rows::<WantsBreakdown>("Wants", suggested.wants_total, &suggested.wants_breakdown, actual.wants_total, &actual.wants_breakdown, income))
                    (group_rows::<SavingsBreakdown>("Savings", suggested.savings_total, &suggested.savings_breakdown, actual.savings_total, &actual.savings_breakdown, income))
                }
            }
        }
    }
}

fn group_rows<B: Breakdown>(
    label: &str,
    suggested_total: f64,
    suggested: &B,
    actual_total: f64,
    actual: &B,
    income: f64,
) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE) data-group=(label)
        {
            th scope="row" class={(TABLE_CELL_STYLE) " font-semibold text-gray-900 dark:text-white"} { (label) }
            td class=(TABLE_CELL_STYLE) { (format_currency(suggested_total)) }
            td class=(TABLE_CELL_STYLE) { (format_percent(share_of(suggested_total, income))) }
            td class=(TABLE_CELL_STYLE) { (format_currency(actual_total)) }
            td class=(TABLE_CELL_STYLE) { (format_percent(share_of(actual_total, income))) }
        }

        @for ((category, suggested_amount), actual_amount) in suggested.categories().into_iter().zip(actual.amounts()) {
            tr class=(TABLE_ROW_STYLE)
            {
                td class={(TABLE_CELL_STYLE) " pl-10"} { (category.label) }
                td class=(TABLE_CELL_STYLE) { (format_currency(suggested_amount)) }
                td class=(TABLE_CELL_STYLE) { (format_percent(share_of(suggested_amount, income))) }
                td class=(TABLE_CELL_STYLE) { (format_currency(actual_amount)) }
                td class=(TABLE_CELL_STYLE) { (format_percent(share_of(actual_amount, income))) }
            }
        }
    }
}

fn comparison_view(result: &ClassificationResult) -> Markup {
    let diffs = [
        ("Needs", result.comparison.needs_diff),
        ("Wants", result.comparison.wants_diff),
        ("Savings", result.comparison.savings_diff),
    ]
    .map(|(label, diff)| (label, round_to_cents(diff)));

    html! {
        ul id="comparison" class="grid grid-cols-1 sm:grid-cols-3 gap-4"
        {
            @for (label, diff) in diffs {
                li class="p-4 rounded bg-white dark:bg-gray-800 shadow"
                {
                    span class="block text-sm text-gray-500 dark:text-gray-400" { (label) }

                    @if diff > 0.0 {
                        span class="text-red-600 dark:text-red-400" { (format_currency(diff)) " over target" }
                    } @else if diff < 0.0 {
                        span class="text-green-600 dark:text-green-400" { (format_currency(diff.abs())) " under target" }
                    } @else {
                        span { "On target" }
                    }
                }
            }
        }
    }
}

fn coaching_view(tips: &[&str]) -> Markup {
    html! {
        section id="coaching" class="p-4 rounded bg-blue-50 dark:bg-gray-800"
        {
            h3 class="mb-2 text-lg font-semibold" { "Coaching" }

            ul class="list-disc pl-5 space-y-1"
            {
                @for tip in tips {
                    li { (tip) }
                }
            }
        }
    }
}
