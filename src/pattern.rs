//! Loading of [RLE](https://conwaylife.com/wiki/Rle) patterns.

use crate::{Error, Result, State, DEAD};
use ca_formats::rle::Rle;
use ndarray::Array2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A decoded pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    pub width: usize,
    pub height: usize,
    /// The `rule = ...` annotation of the header, passed through untouched.
    pub rule: Option<String>,
    /// `height x width` states, dead where the pattern has no cell.
    pub cells: Array2<State>,
}

impl Pattern {
    /// Number of cells that are not dead.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&state| state != DEAD).count()
    }
}

/// Largest number of cells a decoded pattern may span, 4096 x 4096.
pub const MAX_PATTERN_CELLS: usize = 1 << 24;

/// Decodes RLE text into a pattern.
///
/// The size comes from the `x = .., y = ..` header. Without a header the pattern is just large
/// enough to hold every decoded cell. Cells outside the declared size are dropped. A pattern
/// spanning more than [`MAX_PATTERN_CELLS`] is rejected before anything is allocated.
pub fn parse_pattern_file(text: &str) -> Result<Pattern> {
    let rle = Rle::new(text)?;
    let (bounds, rule) = match rle.header_data() {
        Some(header) => (
            Some(checked_size(header.x, header.y)?),
            header.rule.clone(),
        ),
        None => (None, None),
    };

    let mut extent = (0, 0);
    let mut decoded = Vec::new();
    for cell in rle {
        let cell = cell?;
        let (x, y) = cell.position;
        if x < 0 || y < 0 {
            debug!(x, y, "dropping cell at negative position");
            continue;
        }
        let (x, y) = (x as u64, y as u64);
        match bounds {
            Some((width, height)) if x >= width as u64 || y >= height as u64 => {
                debug!(x, y, width, height, "dropping cell outside pattern bounds");
                continue;
            }
            Some(_) => {}
            None => {
                extent = (extent.0.max(x + 1), extent.1.max(y + 1));
                checked_size(extent.0, extent.1)?;
            }
        }
        decoded.push((x as usize, y as usize, State::from(cell.state)));
    }

    let (width, height) = match bounds {
        Some(size) => size,
        None => checked_size(extent.0, extent.1)?,
    };

    let mut cells = Array2::from_elem((height, width), DEAD);
    for (x, y, state) in decoded {
        if let Some(cell) = cells.get_mut((y, x)) {
            *cell = state;
        }
    }

    debug!(width, height, ?rule, "decoded pattern");
    Ok(Pattern {
        width,
        height,
        rule,
        cells,
    })
}

/// `(width, height)` as array dimensions, if the area stays within [`MAX_PATTERN_CELLS`].
fn checked_size(width: u64, height: u64) -> Result<(usize, usize)> {
    let too_large = || Error::PatternTooLarge { width, height };
    let w = usize::try_from(width).map_err(|_| too_large())?;
    let h = usize::try_from(height).map_err(|_| too_large())?;
    match w.checked_mul(h) {
        Some(area) if area <= MAX_PATTERN_CELLS => Ok((w, h)),
        _ => Err(too_large()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn glider() {
        let pattern = parse_pattern_file(
            "#N Glider\n\
             x = 3, y = 3, rule = B3/S23\n\
             bob$2bo$3o!",
        )
        .unwrap();
        assert_eq!(pattern.width, 3);
        assert_eq!(pattern.height, 3);
        assert_eq!(pattern.rule.as_deref(), Some("B3/S23"));
        let expected: Array2<State> = array![[0, 1, 0], [0, 0, 1], [1, 1, 1]];
        assert_eq!(pattern.cells, expected);
        assert_eq!(pattern.population(), 5);
    }

    #[test]
    fn multistate() {
        let pattern = parse_pattern_file(
            "x = 4, y = 2, rule = Wireworld\n\
             A2B$.C!",
        )
        .unwrap();
        let expected: Array2<State> = array![[1, 2, 2, 0], [0, 3, 0, 0]];
        assert_eq!(pattern.cells, expected);
    }

    #[test]
    fn header_size_wins_over_extent() {
        let pattern = parse_pattern_file("x = 5, y = 4\no!").unwrap();
        assert_eq!(pattern.cells.dim(), (4, 5));
        assert_eq!(pattern.population(), 1);
        assert_eq!(pattern.rule, None);
    }

    #[test]
    fn oversized_header_is_rejected() {
        assert!(matches!(
            parse_pattern_file("x = 4000000000, y = 4000000000\no!"),
            Err(Error::PatternTooLarge {
                width: 4000000000,
                height: 4000000000
            })
        ));
        assert!(parse_pattern_file("x = 100000, y = 100000\no!").is_err());
    }

    #[test]
    fn oversized_extent_is_rejected() {
        assert!(matches!(
            parse_pattern_file("o$99999999bo!"),
            Err(Error::PatternTooLarge { .. })
        ));
    }
}
