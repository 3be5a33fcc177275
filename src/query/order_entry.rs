use serde::Deserialize;

use crate::query::{Identifier, Operand};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    #[serde(alias = "ASC")]
    Asc,
    #[serde(alias = "DESC")]
    Desc,
}

/// ORDER BY entry. `name` is checked by the order planner, not here, so a
/// nameless entry surfaces as a request error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub quoted: bool,
    #[serde(default)]
    pub agg: Option<String>,
    #[serde(default)]
    pub args: Option<Vec<Operand>>,
    #[serde(default)]
    pub dir: Option<Direction>,
}

impl OrderEntry {
    pub fn new(name: &str) -> Self {
        Self { name: Some(name.to_string()), ..Default::default() }
    }

    pub fn with_dir(mut self, dir: Direction) -> Self {
        self.dir = Some(dir);
        self
    }

    pub fn direction(&self) -> Direction {
        self.dir.unwrap_or_default()
    }

    /// Column view of the entry, `None` when it has no name.
    pub fn to_identifier(&self) -> Option<Identifier> {
        let name = self.name.clone()?;
        Some(Identifier {
            name,
            from: self.from.clone(),
            quoted: self.quoted,
            agg: self.agg.clone(),
            alias: None,
            args: self.args.clone(),
        })
    }
}
