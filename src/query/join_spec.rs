use std::fmt;

use serde::Deserialize;

use crate::query::{Filter, TableRef};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
    FullOuter,
}

impl JoinType {
    /// Missing or unrecognized types fall back to an inner join.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|value| value.to_ascii_lowercase()).as_deref() {
            Some("left") => JoinType::Left,
            Some("right") => JoinType::Right,
            Some("fullouter") | Some("full") => JoinType::FullOuter,
            _ => JoinType::Inner,
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
            JoinType::Right => write!(f, "RIGHT JOIN"),
            JoinType::FullOuter => write!(f, "FULL OUTER JOIN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JoinSpec {
    #[serde(flatten)]
    pub target: TableRef,
    #[serde(rename = "type", default)]
    pub join_type: Option<String>,
    pub on: Filter,
}

impl JoinSpec {
    pub fn new(target: TableRef, on: Filter) -> Self {
        Self { target, join_type: None, on }
    }

    pub fn with_type(mut self, join_type: &str) -> Self {
        self.join_type = Some(join_type.to_string());
        self
    }
}
