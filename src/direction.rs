pub trait Direction: Sized + Copy + From<usize> + Into<usize> {
    type Directions: Iterator<Item = Self>;

    /// An iterator over all directions. They must rotate clockwise when iterating in order,
    /// starting from north, for all default impls to work. If your direction does not follow
    /// these rules then you must override the default impls.
    fn directions() -> Self::Directions;

    /// The offset `(dx, dy)` of the neighbor in this direction. `dy` grows downward.
    fn delta(self) -> (isize, isize);

    /// The total number of directions.
    #[inline]
    fn total() -> usize {
        Self::directions().count()
    }

    /// The direction a quarter turn clockwise from this one.
    #[inline]
    fn quarter_clockwise(self) -> Self {
        let mut n: usize = self.into();
        n += Self::total() / 4;
        n %= Self::total();
        n.into()
    }

    /// The direction a quarter turn counter-clockwise from this one.
    #[inline]
    fn quarter_counterclockwise(self) -> Self {
        let mut n: usize = self.into();
        n += Self::total() - Self::total() / 4;
        n %= Self::total();
        n.into()
    }
}
