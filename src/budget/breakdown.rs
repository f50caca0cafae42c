//! Fixed-key breakdowns of the needs, wants and savings category groups.
//!
//! Each group has a known set of sub-categories. When deserializing, missing
//! keys default to zero and unknown keys are rejected.

use serde::{Deserialize, Serialize};

use crate::budget::amount::deserialize_amount;

/// A sub-category within a category group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// The key used in JSON documents and form field names.
    pub key: &'static str,
    /// The human readable name.
    pub label: &'static str,
}

/// Shared behaviour of the three breakdown types.
pub trait Breakdown {
    /// The sub-categories of the group, in display order.
    const CATEGORIES: &'static [Category];

    /// The amount for each entry in [Breakdown::CATEGORIES], in the same order.
    fn amounts(&self) -> Vec<f64>;

    /// The sum of all sub-category amounts.
    fn total(&self) -> f64 {
        self.amounts().iter().sum()
    }

    /// Pairs each sub-category with its amount.
    fn categories(&self) -> Vec<(Category, f64)> {
        Self::CATEGORIES
            .iter()
            .copied()
            .zip(self.amounts())
            .collect()
    }
}

/// Essential spending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NeedsBreakdown {
    #[serde(deserialize_with = "deserialize_amount")]
    pub food: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub rent: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub utilities: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub transportation: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub health: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub insurance: f64,
}

impl NeedsBreakdown {
    /// How a needs target is divided between sub-categories. Sums to one.
    pub const TARGET_FRACTIONS: NeedsBreakdown = NeedsBreakdown {
        food: 0.25,
        rent: 0.40,
        utilities: 0.15,
        transportation: 0.10,
        health: 0.05,
        insurance: 0.05,
    };

    /// Divide `total` between the sub-categories using [Self::TARGET_FRACTIONS].
    pub fn split(total: f64) -> Self {
        let fractions = Self::TARGET_FRACTIONS;

        Self {
            food: total * fractions.food,
            rent: total * fractions.rent,
            utilities: total * fractions.utilities,
            transportation: total * fractions.transportation,
            health: total * fractions.health,
            insurance: total * fractions.insurance,
        }
    }
}

impl Breakdown for NeedsBreakdown {
    const CATEGORIES: &'static [Category] = &[
        Category {
            key: "food",
            label: "Food",
        },
        Category {
            key: "rent",
            label: "Rent",
        },
        Category {
            key: "utilities",
            label: "Utilities",
        },
        Category {
            key: "transportation",
            label: "Transportation",
        },
        Category {
            key: "health",
            label: "Health",
        },
        Category {
            key: "insurance",
            label: "Insurance",
        },
    ];

    fn amounts(&self) -> Vec<f64> {
        vec![
            self.food,
            self.rent,
            self.utilities,
            self.transportation,
            self.health,
            self.insurance,
        ]
    }
}

/// Discretionary spending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WantsBreakdown {
    #[serde(deserialize_with = "deserialize_amount")]
    pub dining_out: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub entertainment: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub shopping: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub hobbies: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub travel: f64,
}

impl WantsBreakdown {
    /// Divide `total` evenly between the five sub-categories.
    pub fn split(total: f64) -> Self {
        let share = total * 0.2;

        Self {
            dining_out: share,
            entertainment: share,
            shopping: share,
            hobbies: share,
            travel: share,
        }
    }
}

impl Breakdown for WantsBreakdown {
    const CATEGORIES: &'static [Category] = &[
        Category {
            key: "dining_out",
            label: "Dining out",
        },
        Category {
            key: "entertainment",
            label: "Entertainment",
        },
        Category {
            key: "shopping",
            label: "Shopping",
        },
        Category {
            key: "hobbies",
            label: "Hobbies",
        },
        Category {
            key: "travel",
            label: "Travel",
        },
    ];

    fn amounts(&self) -> Vec<f64> {
        vec![
            self.dining_out,
            self.entertainment,
            self.shopping,
            self.hobbies,
            self.travel,
        ]
    }
}

/// Money set aside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SavingsBreakdown {
    #[serde(deserialize_with = "deserialize_amount")]
    pub emergency: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub retirement: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub investments: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub goals: f64,
}

impl SavingsBreakdown {
    /// Divide a savings target between the sub-categories.
    ///
    /// While the buffer is still filling, half of `total` goes to the
    /// emergency fund and nothing to the rest. Otherwise `total` is split
    /// evenly four ways.
    pub fn split(total: f64, is_buffer_filling: bool) -> Self {
        if is_buffer_filling {
            Self {
                emergency: total * 0.5,
                ..Default::default()
            }
        } else {
            let share = total * 0.25;

            Self {
                emergency: share,
                retirement: share,
                investments: share,
                goals: share,
            }
        }
    }
}

impl Breakdown for SavingsBreakdown {
    const CATEGORIES: &'static [Category] = &[
        Category {
            key: "emergency",
            label: "Emergency fund",
        },
        Category {
            key: "retirement",
            label: "Retirement",
        },
        Category {
            key: "investments",
            label: "Investments",
        },
        Category {
            key: "goals",
            label: "Goals",
        },
    ];

    fn amounts(&self) -> Vec<f64> {
        vec![self.emergency, self.retirement, self.investments, self.goals]
    }
}
