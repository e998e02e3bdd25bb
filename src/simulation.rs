use crate::{
    parse_pattern_file, parse_rule_file, resolve_color, step_with, ColorMap, Grid, Pattern,
    Result, Rgb, RuleDocument, SimulationConfig, State, TableRule, TreeRule,
};
use tracing::debug;

/// A running simulation: the grid, the loaded rules and colors, and the generation count.
///
/// Whatever drives the simulation calls [`Simulation::tick`] once per generation. Failed imports
/// leave the simulation untouched.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    generation: u64,
    table: Option<TableRule>,
    tree: Option<TreeRule>,
    colors: Option<ColorMap>,
    document: Option<RuleDocument>,
    pattern: Option<Pattern>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Simulation {
    /// An empty grid with no rules loaded.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            grid: Grid::new(config.rows, config.cols),
            config,
            generation: 0,
            table: None,
            tree: None,
            colors: None,
            document: None,
            pattern: None,
        }
    }

    /// Advance one generation.
    pub fn tick(&mut self) {
        self.grid = step_with(
            &self.grid,
            self.table.as_ref(),
            self.tree.as_ref(),
            &self.config.step,
        );
        self.generation += 1;
    }

    /// Empty the grid and restart the generation count. Rules and colors stay loaded.
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.config.rows, self.config.cols);
        self.generation = 0;
        debug!("cleared grid");
    }

    /// Load a rule file.
    ///
    /// A table in the file replaces the active rule and unloads any tree; otherwise a tree does
    /// the same and unloads any table. A file with neither keeps the current rules. Colors are
    /// only replaced when the file has a `@COLORS` section.
    pub fn import_rule_file(&mut self, text: &str) -> Result<&RuleDocument> {
        let document = parse_rule_file(text)?;

        if let Some(colors) = &document.colors {
            self.colors = Some(colors.clone());
        }
        if let Some(table) = &document.table {
            self.table = Some(table.clone());
            self.tree = None;
        } else if let Some(tree) = &document.tree {
            self.tree = Some(tree.clone());
            self.table = None;
        }

        debug!(
            name = ?document.name,
            table = document.table.is_some(),
            tree = document.tree.is_some(),
            colors = document.colors.is_some(),
            "imported rule file"
        );
        Ok(&*self.document.insert(document))
    }

    /// Load an RLE pattern into a fresh grid, centered, and restart the generation count.
    pub fn import_pattern(&mut self, text: &str) -> Result<&Pattern> {
        let pattern = parse_pattern_file(text)?;

        let mut grid = Grid::new(self.config.rows, self.config.cols);
        let placed = grid.place_centered(pattern.cells.view());
        self.grid = grid;
        self.generation = 0;

        debug!(
            width = pattern.width,
            height = pattern.height,
            placed,
            "imported pattern"
        );
        Ok(&*self.pattern.insert(pattern))
    }

    /// Set a single cell, as a user editing the grid would. Returns `false` if out of bounds.
    pub fn set_cell(&mut self, row: usize, col: usize, state: State) -> bool {
        self.grid.set(row, col, state)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn table(&self) -> Option<&TableRule> {
        self.table.as_ref()
    }

    pub fn tree(&self) -> Option<&TreeRule> {
        self.tree.as_ref()
    }

    pub fn colors(&self) -> Option<&ColorMap> {
        self.colors.as_ref()
    }

    /// The last rule file successfully imported.
    pub fn document(&self) -> Option<&RuleDocument> {
        self.document.as_ref()
    }

    /// The last pattern successfully imported.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// The color a renderer should draw `state` with.
    pub fn color_of(&self, state: State) -> Rgb {
        resolve_color(state, self.colors.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, DEFAULT_COLOR};

    fn small() -> Simulation {
        Simulation::new(SimulationConfig {
            rows: 8,
            cols: 8,
            ..SimulationConfig::default()
        })
    }

    #[test]
    fn starts_empty() {
        let sim = Simulation::default();
        assert_eq!(sim.grid().dim(), (100, 100));
        assert_eq!(sim.generation(), 0);
        assert!(sim.table().is_none() && sim.tree().is_none());
        assert_eq!(sim.color_of(1), DEFAULT_COLOR);
    }

    #[test]
    fn failed_import_changes_nothing() {
        let mut sim = small();
        sim.import_rule_file("@COLORS\n1 1 2 3\n@TREE\n00=1").unwrap();
        let err = sim
            .import_rule_file(
                "@COLORS\n1 9 9 9\n@TABLE\nsymmetries: rotate4\n0,0,0,0,0,0,0,0,0,1",
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedNeighborhood(8)));
        assert!(sim.tree().is_some());
        assert!(sim.table().is_none());
        assert_eq!(sim.color_of(1), Rgb::new(1, 2, 3));
    }

    #[test]
    fn rules_without_colors_keep_colors() {
        let mut sim = small();
        sim.import_rule_file("@COLORS\n2 0 0 255").unwrap();
        sim.import_rule_file("@TABLE\n0,1,1,1,0,0,0,0,0,1").unwrap();
        assert_eq!(sim.color_of(2), Rgb::new(0, 0, 255));
        assert!(sim.table().is_some());
    }

    #[test]
    fn tick_counts_generations() {
        let mut sim = small();
        sim.set_cell(0, 0, 1);
        sim.tick();
        sim.tick();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid().population(), 0);
        sim.clear();
        assert_eq!(sim.generation(), 0);
    }
}
