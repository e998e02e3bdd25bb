use crate::{Neighborhood, Rule, State, ALIVE, DEAD};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Live neighbor counts at which a dead cell is born in the fallback rule.
pub const DEFAULT_BIRTH: &[usize] = &[3];
/// Live neighbor counts at which a live cell survives in the fallback rule.
pub const DEFAULT_SURVIVAL: &[usize] = &[2, 3];

/// A two-state birth/survival rule over the Moore neighborhood.
///
/// This is what a grid runs when no table or tree rule is loaded. Any non-zero state counts as
/// alive; survivors keep their state and births become [`ALIVE`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LifeRule {
    pub birth: Vec<usize>,
    pub survival: Vec<usize>,
}

impl Default for LifeRule {
    /// Conway's Game of Life, B3/S23.
    fn default() -> Self {
        Self::new(DEFAULT_BIRTH, DEFAULT_SURVIVAL)
    }
}

impl LifeRule {
    pub fn new(birth: &[usize], survival: &[usize]) -> Self {
        Self {
            birth: birth.to_vec(),
            survival: survival.to_vec(),
        }
    }
}

impl Rule for LifeRule {
    #[inline]
    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::Moore
    }

    fn next_state(&self, current: State, neighbors: &[State]) -> State {
        let n = neighbors.iter().filter(|&&state| state != DEAD).count();
        if current != DEAD {
            if self.survival.contains(&n) {
                current
            } else {
                DEAD
            }
        } else if self.birth.contains(&n) {
            ALIVE
        } else {
            DEAD
        }
    }
}
