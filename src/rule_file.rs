//! Parsing of `.rule` documents.
//!
//! A document is a sequence of sections, each introduced by a line starting with `@` followed by
//! the section name. Recognized sections are `RULE`, `COLORS`, `TABLE` and `TREE`; anything else
//! is kept verbatim in [`RuleDocument::sections`].

use crate::{ColorMap, Neighborhood, Result, State, TableRule, TreeRule};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Number of states a table or tree has when it does not say.
pub const DEFAULT_N_STATES: State = 2;

const KNOWN_SECTIONS: [&str; 4] = ["RULE", "COLORS", "TABLE", "TREE"];

/// Everything a rule file declares.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleDocument {
    /// Trimmed body of `@RULE`.
    pub name: Option<String>,
    pub colors: Option<ColorMap>,
    pub table: Option<TableRule>,
    pub tree: Option<TreeRule>,
    /// Raw body of every section by name, including ones this crate does not interpret.
    pub sections: BTreeMap<String, String>,
}

/// Parses a rule file.
///
/// Malformed lines are skipped rather than reported. The only failure is a table asking for
/// `rotate4` symmetry on a Moore neighborhood, see [`crate::rotate4`].
pub fn parse_rule_file(text: &str) -> Result<RuleDocument> {
    let sections = split_sections(text);

    for name in sections.keys() {
        if !KNOWN_SECTIONS.contains(&name.as_str()) {
            debug!(section = %name, "keeping unrecognized section");
        }
    }

    let name = sections
        .get("RULE")
        .map(|body| body.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_owned);
    let colors = section_body(&sections, "COLORS").map(ColorMap::parse);
    let table = section_body(&sections, "TABLE")
        .map(TableRule::parse)
        .transpose()?;
    let tree = section_body(&sections, "TREE").map(TreeRule::parse);

    Ok(RuleDocument {
        name,
        colors,
        table,
        tree,
        sections,
    })
}

/// Splits a document into section bodies. Lines are trimmed; text before the first header is
/// dropped and a repeated section replaces the earlier one.
fn split_sections(text: &str) -> BTreeMap<String, String> {
    let mut sections = BTreeMap::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines().map(str::trim) {
        if let Some(header) = line.strip_prefix('@') {
            if let Some((name, lines)) = current.take() {
                sections.insert(name, lines.join("\n"));
            }
            let name = header.split(' ').next().unwrap_or_default();
            current = Some((name.to_owned(), Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }
    if let Some((name, lines)) = current {
        sections.insert(name, lines.join("\n"));
    }

    sections
}

fn section_body<'a>(sections: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    sections
        .get(name)
        .map(String::as_str)
        .filter(|body| !body.is_empty())
}

/// The `n_states:` and `neighborhood:` directives shared by tables and trees.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Header {
    pub n_states: State,
    pub neighborhood: Neighborhood,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            n_states: DEFAULT_N_STATES,
            neighborhood: Neighborhood::Moore,
        }
    }
}

impl Header {
    /// Applies `line` if it is a header directive, returning whether it was one.
    pub fn directive(&mut self, line: &str) -> bool {
        if let Some(value) = line.strip_prefix("n_states:") {
            match value.trim().parse() {
                Ok(n_states) => self.n_states = n_states,
                Err(_) => debug!(value = %value.trim(), "ignoring unparsable n_states"),
            }
            true
        } else if let Some(value) = line.strip_prefix("neighborhood:") {
            self.neighborhood = Neighborhood::from_declaration(value);
            true
        } else {
            false
        }
    }
}
