//! Rulegrid runs cellular automata described by rule files on toroidal grids.
//!
//! A rule file (`.rule`) declares the number of states, the neighborhood, colors for each state
//! and the transition logic, either as an explicit table or as a decision tree. Patterns are
//! loaded from RLE. Each generation is computed from an immutable snapshot of the previous one,
//! in parallel.
//!
//! ```
//! use rulegrid::{parse_rule_file, step, Grid};
//!
//! let doc = parse_rule_file(
//!     "@RULE\nSpread\n@TABLE\nneighborhood: vonNeumann\nsymmetries: rotate4\n0,1,0,0,0,1",
//! )
//! .unwrap();
//! let mut grid = Grid::new(5, 5);
//! grid.set(2, 2, 1);
//! let next = step(&grid, doc.table.as_ref(), doc.tree.as_ref());
//! assert_eq!(next.population(), 5);
//! ```

mod colors;
mod config;
mod direction;
mod error;
mod grid;
mod life;
mod moore;
mod neighborhood;
mod neumann;
mod pattern;
mod rule_file;
mod simulation;
mod symmetry;
mod table;
mod tree;

pub use colors::*;
pub use config::*;
pub use direction::*;
pub use error::*;
pub use grid::*;
pub use life::*;
pub use moore::*;
pub use neighborhood::*;
pub use neumann::*;
pub use pattern::*;
pub use rule_file::{parse_rule_file, RuleDocument, DEFAULT_N_STATES};
pub use simulation::*;
pub use symmetry::*;
pub use table::*;
pub use tree::*;

/// The state of a single cell.
pub type State = u32;

/// The background state. Grids start out filled with it.
pub const DEAD: State = 0;

/// The state cells are born into under the fallback [`LifeRule`].
pub const ALIVE: State = 1;

/// Defines how a cell's next state follows from its current state and its neighbors.
///
/// This enforces a rule in that all new cells are only produced from old board state. This
/// prevents the update order from breaking the simulation.
pub trait Rule {
    /// The neighbors this rule observes, which fixes the length and order of `neighbors` passed
    /// to [`Rule::next_state`].
    fn neighborhood(&self) -> Neighborhood;

    /// At this stage, everything is immutable, and the next state of one cell is computed.
    fn next_state(&self, current: State, neighbors: &[State]) -> State;
}
