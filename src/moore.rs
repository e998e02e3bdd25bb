use crate::Direction;
use enum_iterator::IntoEnumIterator;
use MooreDirection::*;

/// All eight surrounding cells, clockwise from north.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
pub enum MooreDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction for MooreDirection {
    type Directions = <MooreDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        MooreDirection::into_enum_iter()
    }

    #[inline]
    fn delta(self) -> (isize, isize) {
        match self {
            North => (0, -1),
            NorthEast => (1, -1),
            East => (1, 0),
            SouthEast => (1, 1),
            South => (0, 1),
            SouthWest => (-1, 1),
            West => (-1, 0),
            NorthWest => (-1, -1),
        }
    }
}

impl From<usize> for MooreDirection {
    fn from(n: usize) -> Self {
        match n {
            0 => North,
            1 => NorthEast,
            2 => East,
            3 => SouthEast,
            4 => South,
            5 => SouthWest,
            6 => West,
            7 => NorthWest,
            _ => panic!("invalid integer conversion to MooreDirection"),
        }
    }
}

impl From<MooreDirection> for usize {
    fn from(dir: MooreDirection) -> usize {
        match dir {
            North => 0,
            NorthEast => 1,
            East => 2,
            SouthEast => 3,
            South => 4,
            SouthWest => 5,
            West => 6,
            NorthWest => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_skips_the_diagonal() {
        assert_eq!(North.quarter_clockwise(), East);
        assert_eq!(NorthWest.quarter_clockwise(), NorthEast);
        assert_eq!(North.quarter_counterclockwise(), West);
    }

    #[test]
    fn deltas_surround_the_center() {
        let deltas: Vec<_> = MooreDirection::directions().map(MooreDirection::delta).collect();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
        for &(dx, dy) in &deltas {
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
        }
    }
}
