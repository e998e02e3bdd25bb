use crate::{
    LifeRule, Neighborhood, Pattern, Rule, RulePrecedence, State, StepConfig, TableRule, TreeRule,
    DEAD, MAX_NEIGHBORS,
};
use ndarray::{Array2, ArrayView2, Zip};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A toroidal grid of cell states.
///
/// Neighbor lookups wrap around both edges. A generation never mutates the grid it was computed
/// from; [`Grid::step`] returns a new grid of the same dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    cells: Array2<State>,
}

/// Make an all-dead grid.
pub fn create_empty_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols)
}

impl Grid {
    /// Make an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), DEAD),
        }
    }

    /// Make a grid directly from a `rows x cols` array of states.
    pub fn from_cells(cells: Array2<State>) -> Self {
        Self { cells }
    }

    /// Make a grid exactly the size of a decoded pattern.
    pub fn from_pattern(pattern: &Pattern) -> Self {
        Self::from_cells(pattern.cells.clone())
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// `(rows, cols)`
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    #[inline]
    pub fn cells(&self) -> ArrayView2<'_, State> {
        self.cells.view()
    }

    pub fn into_cells(self) -> Array2<State> {
        self.cells
    }

    /// Get a cell's state, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<State> {
        self.cells.get((row, col)).copied()
    }

    /// Set a cell's state. Returns `false` if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, state: State) -> bool {
        match self.cells.get_mut((row, col)) {
            Some(cell) => {
                *cell = state;
                true
            }
            None => false,
        }
    }

    /// Number of cells that are not dead.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&state| state != DEAD).count()
    }

    /// Offset a position by `(dx, dy)`, wrapping around both edges.
    #[inline]
    pub fn wrap(&self, row: usize, col: usize, delta: (isize, isize)) -> (usize, usize) {
        let (rows, cols) = self.dim();
        let (dx, dy) = delta;
        (
            (row as isize + dy).rem_euclid(rows as isize) as usize,
            (col as isize + dx).rem_euclid(cols as isize) as usize,
        )
    }

    /// The states around a cell in neighborhood order.
    pub fn neighbor_states(
        &self,
        row: usize,
        col: usize,
        neighborhood: Neighborhood,
    ) -> Vec<State> {
        let mut neighbors = [DEAD; MAX_NEIGHBORS];
        let count = self.gather(row, col, neighborhood, &mut neighbors);
        neighbors[..count].to_vec()
    }

    #[inline]
    fn gather(
        &self,
        row: usize,
        col: usize,
        neighborhood: Neighborhood,
        out: &mut [State; MAX_NEIGHBORS],
    ) -> usize {
        let mut count = 0;
        neighborhood.for_each_offset(|delta| {
            out[count] = self.cells[self.wrap(row, col, delta)];
            count += 1;
        });
        count
    }

    /// Compute the next generation in parallel.
    ///
    /// Every cell is computed from this grid, never from cells of the generation being built.
    pub fn step<R>(&self, rule: &R) -> Grid
    where
        R: Rule + Sync + ?Sized,
    {
        let neighborhood = rule.neighborhood();
        let cells = Zip::indexed(&self.cells).par_map_collect(|(row, col), &current| {
            let mut neighbors = [DEAD; MAX_NEIGHBORS];
            let count = self.gather(row, col, neighborhood, &mut neighbors);
            rule.next_state(current, &neighbors[..count])
        });
        Grid { cells }
    }

    /// Copy the non-dead cells of `pattern` into this grid, centered. Cells that land outside
    /// the grid are dropped; nothing wraps. Returns how many cells were placed.
    pub fn place_centered(&mut self, pattern: ArrayView2<'_, State>) -> usize {
        let (rows, cols) = self.dim();
        let (height, width) = pattern.dim();
        let offset_y = (rows as isize - height as isize).div_euclid(2);
        let offset_x = (cols as isize - width as isize).div_euclid(2);

        let mut placed = 0;
        for ((y, x), &state) in pattern.indexed_iter() {
            if state == DEAD {
                continue;
            }
            let row = y as isize + offset_y;
            let col = x as isize + offset_x;
            if row >= 0 && col >= 0 && self.set(row as usize, col as usize, state) {
                placed += 1;
            }
        }
        placed
    }
}

/// The rule one generation runs, chosen from whatever rules are loaded.
#[derive(Copy, Clone, Debug)]
pub enum ActiveRule<'a> {
    Table(&'a TableRule),
    Tree(&'a TreeRule),
    Fallback(&'a LifeRule),
}

impl<'a> ActiveRule<'a> {
    /// Picks the rule to run. When both a table and a tree are given `precedence` decides;
    /// when neither is, the fallback runs.
    pub fn select(
        table: Option<&'a TableRule>,
        tree: Option<&'a TreeRule>,
        config: &'a StepConfig,
    ) -> Self {
        match (table, tree) {
            (Some(table), Some(tree)) => match config.precedence {
                RulePrecedence::TreeFirst => ActiveRule::Tree(tree),
                RulePrecedence::TableFirst => ActiveRule::Table(table),
            },
            (Some(table), None) => ActiveRule::Table(table),
            (None, Some(tree)) => ActiveRule::Tree(tree),
            (None, None) => ActiveRule::Fallback(&config.fallback),
        }
    }
}

impl Rule for ActiveRule<'_> {
    #[inline]
    fn neighborhood(&self) -> Neighborhood {
        match self {
            ActiveRule::Table(rule) => rule.neighborhood(),
            ActiveRule::Tree(rule) => rule.neighborhood(),
            ActiveRule::Fallback(rule) => rule.neighborhood(),
        }
    }

    #[inline]
    fn next_state(&self, current: State, neighbors: &[State]) -> State {
        match self {
            ActiveRule::Table(rule) => rule.next_state(current, neighbors),
            ActiveRule::Tree(rule) => rule.next_state(current, neighbors),
            ActiveRule::Fallback(rule) => rule.next_state(current, neighbors),
        }
    }
}

/// Compute the next generation with the default [`StepConfig`].
pub fn step(grid: &Grid, table: Option<&TableRule>, tree: Option<&TreeRule>) -> Grid {
    step_with(grid, table, tree, &StepConfig::default())
}

/// Compute the next generation, picking the rule as [`ActiveRule::select`] does.
pub fn step_with(
    grid: &Grid,
    table: Option<&TableRule>,
    tree: Option<&TreeRule>,
    config: &StepConfig,
) -> Grid {
    grid.step(&ActiveRule::select(table, tree, config))
}
