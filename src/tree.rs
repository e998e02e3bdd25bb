use crate::rule_file::{Header, DEFAULT_N_STATES};
use crate::{Neighborhood, Rule, State, DEAD};
use boolinator::Boolinator;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter::once;
use tracing::debug;

/// A node of a decision tree rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TreeNode {
    /// Descends by the next state of the lookup path.
    Branch(BTreeMap<State, TreeNode>),
    /// The state a fully matched path yields.
    Leaf(State),
}

impl Default for TreeNode {
    fn default() -> Self {
        TreeNode::Branch(BTreeMap::new())
    }
}

impl TreeNode {
    /// Children of this node, turning a leaf into an empty branch first.
    fn children_mut(&mut self) -> &mut BTreeMap<State, TreeNode> {
        match self {
            TreeNode::Branch(children) => children,
            leaf => {
                *leaf = TreeNode::default();
                leaf.children_mut()
            }
        }
    }
}

/// A rule given as a decision tree.
///
/// A lookup branches on the current state first and then on each neighbor state in neighborhood
/// order. Unlike a [`crate::TableRule`], a path the tree does not contain yields [`DEAD`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeRule {
    pub n_states: State,
    pub neighborhood: Neighborhood,
    root: TreeNode,
}

impl Default for TreeRule {
    fn default() -> Self {
        Self::new(Neighborhood::Moore)
    }
}

impl TreeRule {
    /// A tree without any paths, under which every cell dies.
    pub fn new(neighborhood: Neighborhood) -> Self {
        Self {
            n_states: DEFAULT_N_STATES,
            neighborhood,
            root: TreeNode::default(),
        }
    }

    /// Parses the body of a `@TREE` section.
    ///
    /// Path lines look like `<digits>=<value>[,<value>...]`, one digit per level. A single value
    /// stores a leaf at the end of the path. Several values store a branch whose children `0..k`
    /// are leaves holding each value, so `0101=0,1` gives the results for a last neighbor of
    /// state 0 and 1. Lines that do not parse are skipped.
    pub fn parse(section: &str) -> Self {
        let mut header = Header::default();
        let mut paths = Vec::new();

        for line in section.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') || header.directive(line) {
                continue;
            }
            match parse_path(line) {
                Some(path) => paths.push(path),
                None => debug!(line = %line, "skipping malformed tree line"),
            }
        }

        let mut tree = Self::new(header.neighborhood);
        tree.n_states = header.n_states;
        for (path, values) in paths {
            tree.insert(&path, &values);
        }
        debug!(paths = tree.leaf_count(), "compiled decision tree");
        tree
    }

    /// Stores `values` at the end of `path`, reusing any nodes already on the way.
    pub fn insert(&mut self, path: &[State], values: &[State]) {
        let (last, prefix) = match path.split_last() {
            Some(split) => split,
            None => return,
        };
        let mut node = &mut self.root;
        for &key in prefix {
            node = node.children_mut().entry(key).or_default();
        }
        let target = match values {
            [] => return,
            &[result] => TreeNode::Leaf(result),
            values => TreeNode::Branch(
                (0..)
                    .zip(values.iter().map(|&value| TreeNode::Leaf(value)))
                    .collect(),
            ),
        };
        node.children_mut().insert(*last, target);
    }

    /// Walks the tree for this configuration.
    pub fn evaluate(&self, current: State, neighbors: &[State]) -> State {
        let mut node = &self.root;
        for key in once(current).chain(neighbors.iter().copied()) {
            node = match node {
                TreeNode::Branch(children) => match children.get(&key) {
                    Some(child) => child,
                    None => return DEAD,
                },
                TreeNode::Leaf(_) => return DEAD,
            };
        }
        match node {
            TreeNode::Leaf(result) => *result,
            TreeNode::Branch(_) => DEAD,
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf(_) => 1,
                TreeNode::Branch(children) => children.values().map(count).sum(),
            }
        }
        count(&self.root)
    }
}

impl Rule for TreeRule {
    #[inline]
    fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    #[inline]
    fn next_state(&self, current: State, neighbors: &[State]) -> State {
        self.evaluate(current, neighbors)
    }
}

/// Splits a `<digits>=<values>` line into its path and values.
fn parse_path(line: &str) -> Option<(Vec<State>, Vec<State>)> {
    let (path, values) = line.split_once('=')?;
    let path = path.trim();
    let path = (!path.is_empty() && path.bytes().all(|b| b.is_ascii_digit()))
        .as_some_from(|| {
            path.chars()
                .filter_map(|c| c.to_digit(10))
                .collect::<Vec<State>>()
        })?;
    let values = values
        .split(',')
        .map(|value| value.trim().parse().ok())
        .collect::<Option<Vec<State>>>()?;
    Some((path, values))
}
