//! Classifies a budget submission and computes suggested targets.

use serde::{Deserialize, Deserializer, Serialize};

use crate::budget::{
    amount::{deserialize_amount, deserialize_optional_amount, sanitize_amount},
    breakdown::{Breakdown, NeedsBreakdown, SavingsBreakdown, WantsBreakdown},
    mode::Mode,
};

/// The number of weeks of baseline to hold as a buffer when none is given.
pub const DEFAULT_BUFFER_GOAL_WEEKS: f64 = 4.0;

/// Share of the excess income added to the needs target in growth mode.
const GROWTH_NEEDS_SHARE: f64 = 0.5;
/// Share of the excess income allocated to wants in growth mode.
const GROWTH_WANTS_SHARE: f64 = 0.3;
/// Share of the excess income allocated to savings in growth mode.
const GROWTH_SAVINGS_SHARE: f64 = 0.2;

/// The numbers needed to classify one submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    /// Money already on hand, held as a buffer and not spent.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub starting_balance: f64,
    /// Income for the week.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub weekly_income: f64,
    /// The user's minimum weekly needs.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub baseline: f64,
    /// How many weeks of baseline the buffer should cover.
    #[serde(
        default = "default_buffer_goal_weeks",
        deserialize_with = "deserialize_buffer_goal_weeks"
    )]
    pub buffer_goal_weeks: f64,
    #[serde(default)]
    pub needs_breakdown: NeedsBreakdown,
    #[serde(default)]
    pub wants_breakdown: WantsBreakdown,
    #[serde(default)]
    pub savings_breakdown: SavingsBreakdown,
}

impl BudgetInput {
    /// Create an input with sanitized amounts.
    ///
    /// Negative or non-finite amounts become zero and a non-positive
    /// `buffer_goal_weeks` falls back to [DEFAULT_BUFFER_GOAL_WEEKS].
    pub fn new(
        starting_balance: f64,
        weekly_income: f64,
        baseline: f64,
        buffer_goal_weeks: f64,
    ) -> Self {
        Self {
            starting_balance: sanitize_amount(starting_balance),
            weekly_income: sanitize_amount(weekly_income),
            baseline: sanitize_amount(baseline),
            buffer_goal_weeks: sanitize_buffer_goal_weeks(buffer_goal_weeks),
            needs_breakdown: NeedsBreakdown::default(),
            wants_breakdown: WantsBreakdown::default(),
            savings_breakdown: SavingsBreakdown::default(),
        }
    }

    /// Set the raw spending on needs.
    pub fn with_needs(mut self, needs: NeedsBreakdown) -> Self {
        self.needs_breakdown = needs;
        self
    }

    /// Set the raw spending on wants.
    pub fn with_wants(mut self, wants: WantsBreakdown) -> Self {
        self.wants_breakdown = wants;
        self
    }

    /// Set the raw amounts saved.
    pub fn with_savings(mut self, savings: SavingsBreakdown) -> Self {
        self.savings_breakdown = savings;
        self
    }
}

fn default_buffer_goal_weeks() -> f64 {
    DEFAULT_BUFFER_GOAL_WEEKS
}

fn sanitize_buffer_goal_weeks(weeks: f64) -> f64 {
    let weeks = sanitize_amount(weeks);

    if weeks > 0.0 {
        weeks
    } else {
        DEFAULT_BUFFER_GOAL_WEEKS
    }
}

fn deserialize_buffer_goal_weeks<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let weeks = deserialize_optional_amount(deserializer)?;

    Ok(sanitize_buffer_goal_weeks(weeks.unwrap_or(0.0)))
}

/// Totals and breakdowns for the three category groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub needs_total: f64,
    pub needs_breakdown: NeedsBreakdown,
    pub wants_total: f64,
    pub wants_breakdown: WantsBreakdown,
    pub savings_total: f64,
    pub savings_breakdown: SavingsBreakdown,
}

/// Actual minus suggested totals for each category group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub needs_diff: f64,
    pub wants_diff: f64,
    pub savings_diff: f64,
}

/// The outcome of classifying a [BudgetInput].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub mode: Mode,
    /// Income above the baseline, zero when income does not exceed it.
    pub excess: f64,
    /// The target buffer, `baseline × buffer_goal_weeks`.
    pub buffer_goal: f64,
    /// Whether the starting balance is still short of the buffer goal.
    pub is_buffer_filling: bool,
    pub suggested: Allocation,
    pub actual: Allocation,
    pub comparison: Comparison,
}

/// Classify `input` into a [Mode] and compare actual spending against the
/// targets that mode implies.
///
/// In survival and stable modes all income is suggested for needs and the
/// wants and savings targets are zero. Actual spending on wants is also
/// reported as zero in these modes, since wants cannot be entered.
///
/// In growth mode the needs target is the baseline plus half of the excess,
/// with 30% of the excess suggested for wants and 20% for savings.
pub fn classify(input: &BudgetInput) -> ClassificationResult {
    let mode = Mode::classify(input.weekly_income, input.baseline);
    let excess = (input.weekly_income - input.baseline).max(0.0);
    let buffer_goal = input.baseline * input.buffer_goal_weeks;
    let is_buffer_filling = input.starting_balance < buffer_goal;

    let suggested = match mode {
        Mode::Survival | Mode::Stable => Allocation {
            needs_total: input.weekly_income,
            needs_breakdown: NeedsBreakdown::split(input.weekly_income),
            wants_total: 0.0,
            wants_breakdown: WantsBreakdown::default(),
            savings_total: 0.0,
            savings_breakdown: SavingsBreakdown::default(),
        },
        Mode::Growth => {
            let needs_total = input.baseline + excess * GROWTH_NEEDS_SHARE;
            let wants_total = excess * GROWTH_WANTS_SHARE;
            let savings_total = excess * GROWTH_SAVINGS_SHARE;

            Allocation {
                needs_total,
                needs_breakdown: NeedsBreakdown::split(needs_total),
                wants_total,
                wants_breakdown: WantsBreakdown::split(wants_total),
                savings_total,
                savings_breakdown: SavingsBreakdown::split(savings_total, is_buffer_filling),
            }
        }
    };

    let wants_breakdown = match mode {
        Mode::Growth => input.wants_breakdown,
        Mode::Survival | Mode::Stable => WantsBreakdown::default(),
    };

    let actual = Allocation {
        needs_total: input.needs_breakdown.total(),
        needs_breakdown: input.needs_breakdown,
        wants_total: wants_breakdown.total(),
        wants_breakdown,
        savings_total: input.savings_breakdown.total(),
        savings_breakdown: input.savings_breakdown,
    };

    let comparison = Comparison {
        needs_diff: actual.needs_total - suggested.needs_total,
        wants_diff: actual.wants_total - suggested.wants_total,
        savings_diff: actual.savings_total - suggested.savings_total,
    };

    ClassificationResult {
        mode,
        excess,
        buffer_goal,
        is_buffer_filling,
        suggested,
        actual,
        comparison,
    }
}


#[cfg(test)]
mod invariant_tests {
    use crate::budget::{
        Mode, NeedsBreakdown, SavingsBreakdown, WantsBreakdown,
        classifier::{BudgetInput, classify},
    };

    fn sample_inputs() -> Vec<BudgetInput> {
        let needs = NeedsBreakdown {
            food: 80.0,
            rent: 300.0,
            utilities: 45.5,
            ..Default::default()
        };
        let wants = WantsBreakdown {
            hobbies: 33.3,
            ..Default::default()
        };
        let savings = SavingsBreakdown {
            retirement: 12.0,
            ..Default::default()
        };

        [0.0, 1.0, 250.0, 500.0, 1234.56]
            .into_iter()
            .flat_map(|baseline| {
                [0.0, 0.5, 449.0, 450.0, 550.0, 551.0, 999.99, 10_000.0]
                    .into_iter()
                    .map(move |income| {
                        BudgetInput::new(700.0, income, baseline, 4.0)
                            .with_needs(needs)
                            .with_wants(wants)
                            .with_savings(savings)
                    })
            })
            .collect()
    }

    #[test]
    fn non_growth_modes_suggest_no_wants_or_savings() {
        for input in sample_inputs() {
            let result = classify(&input);

            if result.mode != Mode::Growth {
                assert_eq!(result.suggested.wants_total, 0.0, "{input:?}");
                assert_eq!(result.suggested.savings_total, 0.0, "{input:?}");
                assert_eq!(result.suggested.needs_total, input.weekly_income);
            }
        }
    }

    #[test]
    fn growth_targets_account_for_all_excess() {
        for input in sample_inputs() {
            let result = classify(&input);

            if result.mode == Mode::Growth {
                let allocated = result.suggested.needs_total - input.baseline
                    + result.suggested.wants_total
                    + result.suggested.savings_total;

                assert!(
                    (allocated - result.excess).abs() < 1e-9,
                    "allocated {allocated}, excess {} for {input:?}",
                    result.excess
                );
            }
        }
    }

    #[test]
    fn comparison_is_actual_minus_suggested() {
        for input in sample_inputs() {
            let result = classify(&input);

            assert_eq!(
                result.comparison.needs_diff,
                result.actual.needs_total - result.suggested.needs_total
            );
            assert_eq!(
                result.comparison.wants_diff,
                result.actual.wants_total - result.suggested.wants_total
            );
            assert_eq!(
                result.comparison.savings_diff,
                result.actual.savings_total - result.suggested.savings_total
            );
        }
    }

    #[test]
    fn excess_is_never_negative() {
        for input in sample_inputs() {
            assert!(classify(&input).excess >= 0.0);
        }
    }
}
