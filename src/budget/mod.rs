//! Budget classification: spending modes, suggested targets and coaching.

mod amount;
mod breakdown;
mod classifier;
mod coaching;
mod mode;

pub use amount::{parse_amount, round_to_cents, share_of};
pub use breakdown::{Breakdown, Category, NeedsBreakdown, SavingsBreakdown, WantsBreakdown};
pub use classifier::{
    Allocation, BudgetInput, ClassificationResult, Comparison, DEFAULT_BUFFER_GOAL_WEEKS,
    classify,
};
pub use coaching::coaching_tips;
pub use mode::{Mode, can_edit_wants};

pub(crate) use amount::deserialize_optional_amount;
