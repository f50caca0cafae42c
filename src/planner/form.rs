//! The planner form data and its conversion into classifier input.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    budget::{BudgetInput, NeedsBreakdown, SavingsBreakdown, WantsBreakdown, parse_amount},
    entry::NewBudgetEntry,
};

/// The form data posted by the planner page.
///
/// Amounts are kept as the text the user typed and parsed leniently, so a
/// blank or garbled field counts as zero rather than rejecting the form.
/// Breakdown fields are named `<group>_<category>`, e.g. `needs_food`.
/// Disabled inputs are not posted, hence every amount has a default.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlannerForm {
    /// The date the budget applies to.
    pub budget_date: Date,
    #[serde(default)]
    pub total_money: String,
    #[serde(default)]
    pub paycheck: String,
    #[serde(default)]
    pub baseline: String,
    #[serde(default)]
    pub buffer_goal_weeks: String,
    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub needs_food: String,
    #[serde(default)]
    pub needs_rent: String,
    #[serde(default)]
    pub needs_utilities: String,
    #[serde(default)]
    pub needs_transportation: String,
    #[serde(default)]
    pub needs_health: String,
    #[serde(default)]
    pub needs_insurance: String,

    #[serde(default)]
    pub wants_dining_out: String,
    #[serde(default)]
    pub wants_entertainment: String,
    #[serde(default)]
    pub wants_shopping: String,
    #[serde(default)]
    pub wants_hobbies: String,
    #[serde(default)]
    pub wants_travel: String,

    #[serde(default)]
    pub savings_emergency: String,
    #[serde(default)]
    pub savings_retirement: String,
    #[serde(default)]
    pub savings_investments: String,
    #[serde(default)]
    pub savings_goals: String,
}

impl PlannerForm {
    /// An empty form for `budget_date`.
    pub fn new(budget_date: Date) -> Self {
        Self {
            budget_date,
            total_money: String::new(),
            paycheck: String::new(),
            baseline: String::new(),
            buffer_goal_weeks: String::new(),
            notes: String::new(),
            needs_food: String::new(),
            needs_rent: String::new(),
            needs_utilities: String::new(),
            needs_transportation: String::new(),
            needs_health: String::new(),
            needs_insurance: String::new(),
            wants_dining_out: String::new(),
            wants_entertainment: String::new(),
            wants_shopping: String::new(),
            wants_hobbies: String::new(),
            wants_travel: String::new(),
            savings_emergency: String::new(),
            savings_retirement: String::new(),
            savings_investments: String::new(),
            savings_goals: String::new(),
        }
    }

    pub fn needs(&self) -> NeedsBreakdown {
        NeedsBreakdown {
            food: parse_amount(&self.needs_food),
            rent: parse_amount(&self.needs_rent),
            utilities: parse_amount(&self.needs_utilities),
            transportation: parse_amount(&self.needs_transportation),
            health: parse_amount(&self.needs_health),
            insurance: parse_amount(&self.needs_insurance),
        }
    }

    pub fn wants(&self) -> WantsBreakdown {
        WantsBreakdown {
            dining_out: parse_amount(&self.wants_dining_out),
            entertainment: parse_amount(&self.wants_entertainment),
            shopping: parse_amount(&self.wants_shopping),
            hobbies: parse_amount(&self.wants_hobbies),
            travel: parse_amount(&self.wants_travel),
        }
    }

    pub fn savings(&self) -> SavingsBreakdown {
        SavingsBreakdown {
            emergency: parse_amount(&self.savings_emergency),
            retirement: parse_amount(&self.savings_retirement),
            investments: parse_amount(&self.savings_investments),
            goals: parse_amount(&self.savings_goals),
        }
    }

    /// The classifier input for this form.
    ///
    /// A blank or non-positive buffer goal falls back to the default.
    pub fn to_budget_input(&self) -> BudgetInput {
        BudgetInput::new(
            parse_amount(&self.total_money),
            parse_amount(&self.paycheck),
            parse_amount(&self.baseline),
            parse_amount(&self.buffer_goal_weeks),
        )
        .with_needs(self.needs())
        .with_wants(self.wants())
        .with_savings(self.savings())
    }

    /// The entry to store for this form.
    ///
    /// Wants are stored as the user entered them, regardless of mode.
    pub fn to_new_entry(&self) -> NewBudgetEntry {
        let mut entry = NewBudgetEntry::new(
            self.budget_date,
            parse_amount(&self.total_money),
            parse_amount(&self.paycheck),
        )
        .notes(Some(&self.notes));
        entry.needs = self.needs();
        entry.wants = self.wants();
        entry.savings = self.savings();

        entry
    }
}
