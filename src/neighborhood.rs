use crate::{Direction, MooreDirection, NeumannDirection};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The most neighbors any supported neighborhood has.
pub const MAX_NEIGHBORS: usize = 8;

/// Which cells around a cell a rule observes.
///
/// The order of the neighbors is fixed and matters, because transition keys and tree paths
/// list the neighbor states in exactly this order:
///
/// * `VonNeumann`: N, E, S, W
/// * `Moore`: N, NE, E, SE, S, SW, W, NW
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Neighborhood {
    VonNeumann,
    #[default]
    Moore,
}

impl Neighborhood {
    /// Reads the value of a `neighborhood:` directive.
    ///
    /// Only `4` selects the von Neumann neighborhood numerically; every other count, and anything
    /// unparsable, falls back to Moore.
    pub fn from_declaration(value: &str) -> Self {
        match value.trim() {
            "Moore" => Neighborhood::Moore,
            "vonNeumann" => Neighborhood::VonNeumann,
            other => match other.parse::<usize>() {
                Ok(4) => Neighborhood::VonNeumann,
                Ok(8) => Neighborhood::Moore,
                _ => {
                    debug!(declaration = %other, "unknown neighborhood, using Moore");
                    Neighborhood::Moore
                }
            },
        }
    }

    /// Number of neighbors, which is also the number of neighbor states in a key.
    #[inline]
    pub fn size(self) -> usize {
        match self {
            Neighborhood::VonNeumann => NeumannDirection::total(),
            Neighborhood::Moore => MooreDirection::total(),
        }
    }

    /// The `(dx, dy)` offsets of the neighbors in key order.
    pub fn offsets(self) -> Vec<(isize, isize)> {
        match self {
            Neighborhood::VonNeumann => NeumannDirection::directions()
                .map(NeumannDirection::delta)
                .collect(),
            Neighborhood::Moore => MooreDirection::directions()
                .map(MooreDirection::delta)
                .collect(),
        }
    }

    /// Calls `f` with each neighbor offset in key order without allocating.
    #[inline]
    pub(crate) fn for_each_offset(self, f: impl FnMut((isize, isize))) {
        match self {
            Neighborhood::VonNeumann => NeumannDirection::directions()
                .map(NeumannDirection::delta)
                .for_each(f),
            Neighborhood::Moore => MooreDirection::directions()
                .map(MooreDirection::delta)
                .for_each(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations() {
        assert_eq!(Neighborhood::from_declaration("Moore"), Neighborhood::Moore);
        assert_eq!(
            Neighborhood::from_declaration(" vonNeumann "),
            Neighborhood::VonNeumann
        );
        assert_eq!(Neighborhood::from_declaration("4"), Neighborhood::VonNeumann);
        assert_eq!(Neighborhood::from_declaration("8"), Neighborhood::Moore);
        assert_eq!(Neighborhood::from_declaration("hexagonal"), Neighborhood::Moore);
        assert_eq!(Neighborhood::from_declaration("6"), Neighborhood::Moore);
    }

    #[test]
    fn offsets_in_key_order() {
        assert_eq!(
            Neighborhood::VonNeumann.offsets(),
            vec![(0, -1), (1, 0), (0, 1), (-1, 0)]
        );
        assert_eq!(
            Neighborhood::Moore.offsets(),
            vec![
                (0, -1),
                (1, -1),
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1)
            ]
        );
        assert_eq!(Neighborhood::Moore.size(), MAX_NEIGHBORS);
        assert_eq!(Neighborhood::VonNeumann.size(), 4);
    }
}
