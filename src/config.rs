use crate::LifeRule;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rows and columns of a simulation grid when none are given.
pub const DEFAULT_GRID_SIZE: usize = 100;

/// Which rule [`crate::step_with`] runs when both a table and a tree are supplied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RulePrecedence {
    #[default]
    TreeFirst,
    TableFirst,
}

/// How a generation is computed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StepConfig {
    pub precedence: RulePrecedence,
    /// Runs when neither a table nor a tree is supplied.
    pub fallback: LifeRule,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub step: StepConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
            step: StepConfig::default(),
        }
    }
}
