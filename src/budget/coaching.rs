//! Canned advice shown alongside a classification result.

use crate::budget::{amount::round_to_cents, classifier::ClassificationResult, mode::Mode};

const SURVIVAL_TIP: &str = "Your income is below your baseline this week. \
    Put every dollar towards needs and look for costs you can pause until income recovers.";
const STABLE_TIP: &str = "Your income covers your baseline. \
    Keep needs steady and hold off on wants until you have some income to spare.";
const GROWTH_TIP: &str = "You earned more than your baseline this week. \
    Half of the extra goes to needs, 30% to wants and 20% to savings.";

const BUFFER_FILLING_TIP: &str = "Your buffer is still filling. \
    Savings go to your emergency fund first.";
const BUFFER_FULL_TIP: &str = "Your buffer goal is met. \
    Spread your savings across retirement, investments and goals.";

const NEEDS_OVER_TIP: &str = "You spent more on needs than suggested.";
const WANTS_OVER_TIP: &str = "You spent more on wants than suggested.";
const SAVINGS_OVER_TIP: &str = "You saved more than suggested, nice work.";

/// Select the tips that apply to `result`, most important first.
///
/// Differences smaller than a cent count as on target.
pub fn coaching_tips(result: &ClassificationResult) -> Vec<&'static str> {
    let mut tips = vec![match result.mode {
        Mode::Survival => SURVIVAL_TIP,
        Mode::Stable => STABLE_TIP,
        Mode::Growth => GROWTH_TIP,
    }];

    if result.buffer_goal > 0.0 {
        tips.push(if result.is_buffer_filling {
            BUFFER_FILLING_TIP
        } else {
            BUFFER_FULL_TIP
        });
    }

    if round_to_cents(result.comparison.needs_diff) > 0.0 {
        tips.push(NEEDS_OVER_TIP);
    }

    if round_to_cents(result.comparison.wants_diff) > 0.0 {
        tips.push(WANTS_OVER_TIP);
    }

    if round_to_cents(result.comparison.savings_diff) > 0.0 {
        tips.push(SAVINGS_OVER_TIP);
    }

    tips
}

#[cfg(test)]
mod tests {
    use crate::budget::{
        BudgetInput, NeedsBreakdown, WantsBreakdown, classify,
        coaching::{
            BUFFER_FILLING_TIP, BUFFER_FULL_TIP, GROWTH_TIP, NEEDS_OVER_TIP, SURVIVAL_TIP,
            WANTS_OVER_TIP, coaching_tips,
        },
    };

    #[test]
    fn survival_with_overspent_needs() {
        let needs = NeedsBreakdown {
            rent: 450.0,
            ..Default::default()
        };
        let result = classify(&BudgetInput::new(0.0, 400.0, 500.0, 4.0).with_needs(needs));

        let tips = coaching_tips(&result);

        assert_eq!(tips, vec![SURVIVAL_TIP, BUFFER_FILLING_TIP, NEEDS_OVER_TIP]);
    }

    #[test]
    fn growth_with_full_buffer_and_overspent_wants() {
        let wants = WantsBreakdown {
            shopping: 500.0,
            ..Default::default()
        };
        let result = classify(&BudgetInput::new(5000.0, 800.0, 500.0, 4.0).with_wants(wants));

        let tips = coaching_tips(&result);

        assert_eq!(tips, vec![GROWTH_TIP, BUFFER_FULL_TIP, WANTS_OVER_TIP]);
    }

    #[test]
    fn no_buffer_tip_without_buffer_goal() {
        let result = classify(&BudgetInput::new(0.0, 0.0, 0.0, 4.0));

        let tips = coaching_tips(&result);

        assert_eq!(tips.len(), 1);
    }

    #[test]
    fn sub_cent_difference_is_not_overspending() {
        let needs = NeedsBreakdown {
            food: 33.1,
            rent: 66.2,
            ..Default::default()
        };
        let result = classify(&BudgetInput::new(0.0, 99.3, 200.0, 4.0).with_needs(needs));
        assert!(result.comparison.needs_diff > 0.0);

        let tips = coaching_tips(&result);

        assert_eq!(tips, vec![SURVIVAL_TIP, BUFFER_FILLING_TIP]);
    }
}
