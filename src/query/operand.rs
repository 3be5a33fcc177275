use serde::Deserialize;

use crate::query::{IdentRef, Identifier};

/// `{ "value": ".." }`. Any other key makes the object fail to match.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiteralValue {
    pub value: String,
}

/// One side of a comparison.
///
/// A bare string is a literal only when it is already single-quoted; anything
/// else is a column reference and goes through identifier validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(serde_json::Number),
    Bool(bool),
    /// Raw text to be escaped and quoted as a string literal.
    Value(LiteralValue),
    Ident(IdentRef),
    /// Right-hand side of `in`/`notin`.
    List(Vec<Operand>),
}

impl Operand {
    pub fn value(text: &str) -> Self {
        Operand::Value(LiteralValue { value: text.to_string() })
    }

    pub fn column(name: &str, from: &str) -> Self {
        Operand::Ident(IdentRef::Ref(Identifier::from(name, from)))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Ident(IdentRef::from(value))
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Number(value.into())
    }
}

impl From<Identifier> for Operand {
    fn from(value: Identifier) -> Self {
        Operand::Ident(IdentRef::Ref(value))
    }
}
