use crate::State;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A display color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The color of any state a rule file does not color.
pub const DEFAULT_COLOR: Rgb = Rgb::new(255, 255, 255);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0xRRGGBB`.
    #[inline]
    pub fn to_hex(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

/// Colors declared by the `@COLORS` section of a rule file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorMap {
    colors: BTreeMap<State, Rgb>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the body of a `@COLORS` section.
    ///
    /// Each line is `state r g b`; extra tokens are ignored. Comments, blank lines and lines whose
    /// first four tokens are not all numbers are skipped. Later lines win.
    pub fn parse(section: &str) -> Self {
        let mut map = Self::new();
        for line in section.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_color_line(line) {
                Some((state, color)) => map.insert(state, color),
                None => debug!(line = %line, "skipping malformed color line"),
            }
        }
        map
    }

    pub fn insert(&mut self, state: State, color: Rgb) {
        self.colors.insert(state, color);
    }

    pub fn get(&self, state: State) -> Option<Rgb> {
        self.colors.get(&state).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (State, Rgb)> + '_ {
        self.colors.iter().map(|(&state, &color)| (state, color))
    }
}

fn parse_color_line(line: &str) -> Option<(State, Rgb)> {
    let mut parts = line.split_whitespace();
    let state = parts.next()?.parse().ok()?;
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    Some((state, Rgb::new(r, g, b)))
}

/// The color to draw `state` with, falling back to [`DEFAULT_COLOR`].
pub fn resolve_color(state: State, colors: Option<&ColorMap>) -> Rgb {
    colors
        .and_then(|colors| colors.get(state))
        .unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_colors() {
        let colors = ColorMap::parse(
            "# comment\n\
             1 255 0 0\n\
             2 0 x 0\n\
             \n\
             3 0 0 255 extra\n\
             4 1 2\n\
             1 0 255 0",
        );
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get(1), Some(Rgb::new(0, 255, 0)));
        assert_eq!(colors.get(2), None);
        assert_eq!(colors.get(3), Some(Rgb::new(0, 0, 255)));
        assert_eq!(colors.get(4), None);
    }

    #[test]
    fn single_line() {
        let colors = ColorMap::parse("1 255 0 0");
        assert_eq!(colors.get(1), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn resolve_defaults_to_white() {
        let mut colors = ColorMap::new();
        colors.insert(1, Rgb::new(10, 20, 30));
        assert_eq!(resolve_color(1, Some(&colors)), Rgb::new(10, 20, 30));
        assert_eq!(resolve_color(2, Some(&colors)), DEFAULT_COLOR);
        assert_eq!(resolve_color(1, None), DEFAULT_COLOR);
        assert_eq!(DEFAULT_COLOR.to_hex(), 0xffffff);
        assert_eq!(Rgb::new(0x12, 0x34, 0x56).to_hex(), 0x123456);
    }
}
