use std::fmt;

use crate::sql::CompileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "AND"),
            LogicalOp::Or => write!(f, "OR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    ILike,
    In,
    NotIn,
}

impl ComparatorOp {
    /// Operators whose right operand is a parenthesized list.
    pub fn takes_list(&self) -> bool {
        matches!(self, ComparatorOp::In | ComparatorOp::NotIn)
    }
}

impl fmt::Display for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparatorOp::Eq => write!(f, "="),
            ComparatorOp::NotEq => write!(f, "<>"),
            ComparatorOp::Lt => write!(f, "<"),
            ComparatorOp::LtEq => write!(f, "<="),
            ComparatorOp::Gt => write!(f, ">"),
            ComparatorOp::GtEq => write!(f, ">="),
            ComparatorOp::Like => write!(f, "LIKE"),
            ComparatorOp::NotLike => write!(f, "NOT LIKE"),
            ComparatorOp::ILike => write!(f, "ILIKE"),
            ComparatorOp::In => write!(f, "IN"),
            ComparatorOp::NotIn => write!(f, "NOT IN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    IsNull,
    NotNull,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::IsNull => write!(f, "IS NULL"),
            UnaryOp::NotNull => write!(f, "IS NOT NULL"),
        }
    }
}

/// Operator tag of a filter node, as keyed in the query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTag {
    Logical(LogicalOp),
    Compare(ComparatorOp),
    Unary(UnaryOp),
}

impl TryFrom<&str> for FilterTag {
    type Error = CompileError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "and" => Ok(FilterTag::Logical(LogicalOp::And)),
            "or" => Ok(FilterTag::Logical(LogicalOp::Or)),
            "eq" => Ok(FilterTag::Compare(ComparatorOp::Eq)),
            "ne" | "neq" => Ok(FilterTag::Compare(ComparatorOp::NotEq)),
            "lt" => Ok(FilterTag::Compare(ComparatorOp::Lt)),
            "lte" => Ok(FilterTag::Compare(ComparatorOp::LtEq)),
            "gt" => Ok(FilterTag::Compare(ComparatorOp::Gt)),
            "gte" => Ok(FilterTag::Compare(ComparatorOp::GtEq)),
            "like" => Ok(FilterTag::Compare(ComparatorOp::Like)),
            "notlike" => Ok(FilterTag::Compare(ComparatorOp::NotLike)),
            "ilike" => Ok(FilterTag::Compare(ComparatorOp::ILike)),
            "in" => Ok(FilterTag::Compare(ComparatorOp::In)),
            "notin" => Ok(FilterTag::Compare(ComparatorOp::NotIn)),
            "isnull" => Ok(FilterTag::Unary(UnaryOp::IsNull)),
            "notnull" => Ok(FilterTag::Unary(UnaryOp::NotNull)),
            _ => CompileError::request(format!("unknown filter operator '{}'", value)).err(),
        }
    }
}
