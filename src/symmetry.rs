//! Expansion of authored transitions into their symmetric equivalents.

use crate::{Direction, Error, NeumannDirection, Result, State};
use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The symmetry a transition table declares with `symmetries:`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Symmetry {
    /// Every transition is taken literally.
    #[default]
    None,
    /// Every ordering of the neighbor states is equivalent.
    Permute,
    /// The four quarter turns of the neighborhood are equivalent.
    Rotate4,
}

impl Symmetry {
    /// Reads the value of a `symmetries:` directive. Unknown values behave as `none`.
    pub fn from_declaration(value: &str) -> Self {
        match value.trim() {
            "none" => Symmetry::None,
            "permute" => Symmetry::Permute,
            "rotate4" => Symmetry::Rotate4,
            other => {
                debug!(declaration = %other, "unknown symmetries, treating as none");
                Symmetry::None
            }
        }
    }

    /// All neighbor tuples equivalent to `neighbors` under this symmetry, starting with
    /// `neighbors` itself.
    pub fn expand(self, neighbors: &[State]) -> Result<Vec<Vec<State>>> {
        match self {
            Symmetry::None => Ok(vec![neighbors.to_vec()]),
            Symmetry::Permute => Ok(permute(neighbors)),
            Symmetry::Rotate4 => rotate4(neighbors),
        }
    }
}

/// The distinct quarter-turn rotations of a von Neumann neighbor tuple (N, E, S, W).
///
/// Each turn moves the state in slot N to slot E, E to S, S to W and W to N. Identical rotations
/// are reported once, in the order they are first produced starting from the input.
///
/// Tuples of length 8 (Moore) are rejected with [`Error::UnsupportedNeighborhood`]. Any other
/// length is returned unchanged as the only rotation.
pub fn rotate4(neighbors: &[State]) -> Result<Vec<Vec<State>>> {
    match neighbors.len() {
        4 => {}
        8 => return Err(Error::UnsupportedNeighborhood(8)),
        _ => return Ok(vec![neighbors.to_vec()]),
    }

    let mut rotations: Vec<Vec<State>> = Vec::with_capacity(4);
    let mut rotated = neighbors.to_vec();
    for _ in 0..4 {
        let next = quarter_turn(&rotated);
        if !rotations.contains(&rotated) {
            rotations.push(rotated);
        }
        rotated = next;
    }
    Ok(rotations)
}

fn quarter_turn(neighbors: &[State]) -> Vec<State> {
    NeumannDirection::directions()
        .map(|dir| neighbors[usize::from(dir.quarter_counterclockwise())])
        .collect()
}

/// Every distinct value sequence obtained by permuting the positions of `neighbors`.
///
/// Positions are permuted, so repeated values collapse: `[1, 1, 2]` yields three tuples, not six.
/// The input itself comes first.
pub fn permute(neighbors: &[State]) -> Vec<Vec<State>> {
    let n = neighbors.len();
    (0..n)
        .permutations(n)
        .map(|order| order.into_iter().map(|ix| neighbors[ix]).collect::<Vec<_>>())
        .unique()
        .collect()
}
