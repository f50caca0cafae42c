//! ECharts visualizations for the planner and history pages.
//!
//! Charts are built with `charming` and serialized to the JSON options that
//! ECharts expects. The pages render an empty container per chart and a
//! script that initializes it:
//! - **Allocation**: suggested vs. actual totals for one classification
//! - **Income**: weekly income across saved entries
//! - **Spending**: needs, wants and savings per saved entry, stacked

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, EmphasisFocus, JsFunction,
        Tooltip, Trigger,
    },
    series::{Line, bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    budget::{Breakdown, ClassificationResult},
    entry::BudgetEntry,
    html::HeadElement,
};

/// Where pages with charts load the ECharts library from.
pub const ECHARTS_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// A chart with its HTML container ID and ECharts configuration.
pub struct BudgetChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for `charts`.
pub fn charts_view(charts: &[BudgetChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates the script that initializes `charts` once the page has loaded.
pub fn charts_script(charts: &[BudgetChart]) -> HeadElement {
    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        init_charts_js(charts)
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Generates an inline script that initializes `charts` immediately.
///
/// For fragments swapped in by HTMX, where `DOMContentLoaded` has already
/// fired. The script must come after the chart containers.
pub fn charts_inline_script(charts: &[BudgetChart]) -> Markup {
    html!(
        script { (PreEscaped(init_charts_js(charts))) }
    )
}

fn init_charts_js(charts: &[BudgetChart]) -> String {
    charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    if (!chartDom || typeof echarts === 'undefined') {{ return; }}
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Suggested vs. actual totals for needs, wants and savings.
pub fn allocation_chart(result: &ClassificationResult) -> Chart {
    let labels: Vec<String> = ["Needs", "Wants", "Savings"]
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();
    let suggested = vec![
        result.suggested.needs_total,
        result.suggested.wants_total,
        result.suggested.savings_total,
    ];
    let actual = vec![
        result.actual.needs_total,
        result.actual.wants_total,
        result.actual.savings_total,
    ];

    Chart::new()
        .title(
            Title::new()
                .text("Suggested vs. Actual")
                .subtext(format!("{} mode", result.mode))
                .left(20)
                .top("1%"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().left(250).top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(90)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Suggested").data(suggested))
        .series(bar::Bar::new().name("Actual").data(actual))
}

/// Weekly income over time.
///
/// `entries` may be in any order, the chart plots them by budget date.
pub fn income_chart(entries: &[BudgetEntry]) -> Chart {
    let entries = sorted_by_date(entries);
    let labels = date_labels(&entries);
    let values: Vec<f64> = entries.iter().map(|entry| entry.income).collect();

    Chart::new()
        .title(Title::new().text("Income").subtext("Per saved budget"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Income").data(values))
}

/// Needs, wants and savings per entry as a stacked bar chart.
pub fn spending_chart(entries: &[BudgetEntry]) -> Chart {
    let entries = sorted_by_date(entries);
    let labels = date_labels(&entries);

    let series_data: [(&str, Vec<f64>); 3] = [
        (
            "Needs",
            entries.iter().map(|entry| entry.needs_data.total()).collect(),
        ),
        (
            "Wants",
            entries.iter().map(|entry| entry.wants_data.total()).collect(),
        ),
        (
            "Savings",
            entries
                .iter()
                .map(|entry| entry.savings_data.total())
                .collect(),
        ),
    ];

    let mut chart = Chart::new()
        .title(
            Title::new()
                .text("Spending")
                .subtext("Grouped by category")
                .left(20)
                .top("1%"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().left(250).top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(90)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        );

    for (name, data) in series_data {
        chart = chart.series(
            bar::Bar::new()
                .name(name)
                .stack("Spending")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(data),
        );
    }

    chart
}

fn sorted_by_date(entries: &[BudgetEntry]) -> Vec<&BudgetEntry> {
    let mut sorted: Vec<&BudgetEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| (entry.budget_date, entry.id));
    sorted
}

fn date_labels(entries: &[&BudgetEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.budget_date.to_string())
        .collect()
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
