use crate::Direction;
use enum_iterator::IntoEnumIterator;
use NeumannDirection::*;

/// The four orthogonal neighbors, in the order transition keys list them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
pub enum NeumannDirection {
    North,
    East,
    South,
    West,
}

impl Direction for NeumannDirection {
    type Directions = <NeumannDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        NeumannDirection::into_enum_iter()
    }

    #[inline]
    fn delta(self) -> (isize, isize) {
        match self {
            North => (0, -1),
            East => (1, 0),
            South => (0, 1),
            West => (-1, 0),
        }
    }
}

impl From<usize> for NeumannDirection {
    fn from(n: usize) -> Self {
        match n {
            0 => North,
            1 => East,
            2 => South,
            3 => West,
            _ => panic!("invalid integer conversion to NeumannDirection"),
        }
    }
}

impl From<NeumannDirection> for usize {
    fn from(dir: NeumannDirection) -> usize {
        match dir {
            North => 0,
            East => 1,
            South => 2,
            West => 3,
        }
    }
}
