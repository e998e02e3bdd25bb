use crate::rule_file::{Header, DEFAULT_N_STATES};
use crate::{Neighborhood, Result, Rule, State, Symmetry, MAX_NEIGHBORS};
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Shortest line that can hold a transition: a von Neumann rule in single-digit form.
const MIN_TRANSITION_LEN: usize = 6;

/// A rule given as an explicit transition table.
///
/// Keys are the current state followed by the neighbor states in neighborhood order. A
/// configuration with no entry keeps its current state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableRule {
    pub n_states: State,
    pub neighborhood: Neighborhood,
    pub symmetry: Symmetry,
    transitions: HashMap<Vec<State>, State>,
}

impl Default for TableRule {
    fn default() -> Self {
        Self::new(Neighborhood::Moore)
    }
}

impl TableRule {
    /// An empty table, under which every cell keeps its state.
    pub fn new(neighborhood: Neighborhood) -> Self {
        Self {
            n_states: DEFAULT_N_STATES,
            neighborhood,
            symmetry: Symmetry::None,
            transitions: HashMap::new(),
        }
    }

    /// Parses the body of a `@TABLE` section and applies its declared symmetry.
    ///
    /// Transition lines are either comma separated (`0,1,0,0,0,2`) or one digit per state
    /// (`010002`). Lines that do not parse, or whose neighbor count does not match the declared
    /// neighborhood, are skipped. When two lines produce the same key the later one wins.
    pub fn parse(section: &str) -> Result<Self> {
        let mut header = Header::default();
        let mut symmetry = Symmetry::None;
        let mut authored = Vec::new();

        for line in section.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') || header.directive(line) {
                continue;
            }
            if let Some(value) = line.strip_prefix("symmetries:") {
                symmetry = Symmetry::from_declaration(value);
                continue;
            }
            if line.len() < MIN_TRANSITION_LEN {
                debug!(line = %line, "skipping short table line");
                continue;
            }
            match parse_transition(line) {
                Some(transition) => authored.push(transition),
                None => debug!(line = %line, "skipping malformed transition"),
            }
        }

        let mut table = Self::new(header.neighborhood);
        table.n_states = header.n_states;
        table.symmetry = symmetry;

        let arity = table.neighborhood.size() + 1;
        authored.retain(|(key, _)| {
            let fits = key.len() == arity;
            if !fits {
                debug!(
                    ?key,
                    expected = arity - 1,
                    "skipping transition with wrong neighbor count"
                );
            }
            fits
        });

        // Expanded in parallel, inserted in authored order so later lines win.
        let expanded = authored
            .par_iter()
            .map(|(key, next)| {
                symmetry
                    .expand(&key[1..])
                    .map(|variants| (key[0], variants, *next))
            })
            .collect::<Result<Vec<_>>>()?;
        for (current, variants, next) in expanded {
            for neighbors in variants {
                table.insert(current, &neighbors, next);
            }
        }

        debug!(
            transitions = table.len(),
            ?symmetry,
            "compiled transition table"
        );
        Ok(table)
    }

    /// Sets the state a cell in `current` with the given neighbors moves to.
    pub fn insert(&mut self, current: State, neighbors: &[State], next: State) {
        let mut key = Vec::with_capacity(neighbors.len() + 1);
        key.push(current);
        key.extend_from_slice(neighbors);
        self.transitions.insert(key, next);
    }

    /// The state the table maps this configuration to, if it has an entry.
    pub fn get(&self, current: State, neighbors: &[State]) -> Option<State> {
        if neighbors.len() > MAX_NEIGHBORS {
            return None;
        }
        let mut key = [0; MAX_NEIGHBORS + 1];
        key[0] = current;
        key[1..=neighbors.len()].copy_from_slice(neighbors);
        self.transitions.get(&key[..=neighbors.len()]).copied()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// All entries as `(key, next)` where `key` starts with the current state.
    pub fn transitions(&self) -> impl Iterator<Item = (&[State], State)> + '_ {
        self.transitions
            .iter()
            .map(|(key, &next)| (key.as_slice(), next))
    }
}

impl Rule for TableRule {
    #[inline]
    fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    #[inline]
    fn next_state(&self, current: State, neighbors: &[State]) -> State {
        self.get(current, neighbors).unwrap_or(current)
    }
}

/// Splits a transition line into its key and next state.
fn parse_transition(line: &str) -> Option<(Vec<State>, State)> {
    let mut tokens: Vec<State> = if line.contains(',') {
        line.split(',')
            .map(|token| token.trim().parse().ok())
            .collect::<Option<_>>()?
    } else {
        line.chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<_>>()?
    };
    let next = tokens.pop()?;
    (!tokens.is_empty()).then(|| (tokens, next))
}
