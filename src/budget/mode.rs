//! The financial-health modes and how a submission is assigned one.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Income below this fraction of the baseline is survival mode.
const STABLE_LOWER_BOUND: f64 = 0.9;
/// Income above this fraction of the baseline is growth mode.
const STABLE_UPPER_BOUND: f64 = 1.1;

/// How weekly income compares to the baseline of weekly needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Income is short of the baseline, everything goes to needs.
    Survival,
    /// Income roughly covers the baseline, everything goes to needs.
    Stable,
    /// Income exceeds the baseline, the excess is split between needs, wants
    /// and savings.
    Growth,
}

impl Mode {
    /// Classify `weekly_income` against `baseline`.
    ///
    /// Both boundaries, `0.9 × baseline` and `1.1 × baseline`, are stable.
    pub fn classify(weekly_income: f64, baseline: f64) -> Self {
        if weekly_income < baseline * STABLE_LOWER_BOUND {
            Mode::Survival
        } else if weekly_income <= baseline * STABLE_UPPER_BOUND {
            Mode::Stable
        } else {
            Mode::Growth
        }
    }

    /// The name used in JSON and HTML.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Survival => "survival",
            Mode::Stable => "stable",
            Mode::Growth => "growth",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Mode::Survival => "Survival",
            Mode::Stable => "Stable",
            Mode::Growth => "Growth",
        };

        write!(f, "{label}")
    }
}

/// Whether spending on wants may be entered in `mode`.
pub fn can_edit_wants(mode: Mode) -> bool {
    mode == Mode::Growth
}
