use serde::Deserialize;
use serde_json::Value;

use crate::{query::{ComparatorOp, FilterTag, LogicalOp, Operand, UnaryOp}, sql::CompileError};

/// Boolean expression tree of a WHERE/HAVING/ON clause.
///
/// In a query document every node is a single-key object keyed by its
/// operator tag: `{"and": [..]}`, `{"eq": [a, b]}`, `{"notnull": a}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum Filter {
    Logical { op: LogicalOp, children: Vec<Filter> },
    Compare { op: ComparatorOp, left: Operand, right: Operand },
    Unary { op: UnaryOp, operand: Operand },
}

impl Filter {
    pub fn and(children: Vec<Filter>) -> Self {
        Filter::Logical { op: LogicalOp::And, children }
    }

    pub fn or(children: Vec<Filter>) -> Self {
        Filter::Logical { op: LogicalOp::Or, children }
    }

    pub fn compare(op: ComparatorOp, left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Filter::Compare { op, left: left.into(), right: right.into() }
    }

    pub fn eq(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::compare(ComparatorOp::Eq, left, right)
    }

    pub fn is_null(operand: impl Into<Operand>) -> Self {
        Filter::Unary { op: UnaryOp::IsNull, operand: operand.into() }
    }

    pub fn not_null(operand: impl Into<Operand>) -> Self {
        Filter::Unary { op: UnaryOp::NotNull, operand: operand.into() }
    }

    fn operand(value: Value) -> Result<Operand, CompileError> {
        serde_json::from_value(value).map_err(|err| CompileError::request(format!("invalid filter operand: {}", err)))
    }
}

impl TryFrom<Value> for Filter {
    type Error = CompileError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return CompileError::request("filter must be an object").err();
        };
        if map.len() != 1 {
            return CompileError::request(format!("filter must have exactly one operator, found {}", map.len())).err();
        }
        let Some((tag, args)) = map.into_iter().next() else {
            return CompileError::request("filter must have exactly one operator").err();
        };

        match FilterTag::try_from(tag.as_str())? {
            FilterTag::Logical(op) => {
                let Value::Array(items) = args else {
                    return CompileError::request(format!("'{}' expects a list of filters", tag)).err();
                };
                let children = items.into_iter().map(Filter::try_from).collect::<Result<Vec<_>, _>>()?;
                Ok(Filter::Logical { op, children })
            },
            FilterTag::Compare(op) => {
                let items = match args {
                    Value::Array(items) if items.len() == 2 => items,
                    _ => return CompileError::request(format!("'{}' expects exactly two operands", tag)).err(),
                };
                let mut items = items.into_iter();
                let (Some(left), Some(right)) = (items.next(), items.next()) else {
                    return CompileError::request(format!("'{}' expects exactly two operands", tag)).err();
                };
                Ok(Filter::Compare { op, left: Self::operand(left)?, right: Self::operand(right)? })
            },
            FilterTag::Unary(op) => {
                let operand = match args {
                    Value::Array(mut items) if items.len() == 1 => items.remove(0),
                    Value::Array(_) => return CompileError::request(format!("'{}' expects exactly one operand", tag)).err(),
                    other => other,
                };
                Ok(Filter::Unary { op, operand: Self::operand(operand)? })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{query::{ComparatorOp, Filter, Operand}, sql::CompileError};

    fn parse(value: serde_json::Value) -> Result<Filter, CompileError> {
        Filter::try_from(value)
    }

    #[test]
    pub fn test_filter_compare() {
        let result = parse(json!({ "gte": ["age", 18] })).expect("Failed to parse filter");
        assert_eq!(result, Filter::compare(ComparatorOp::GtEq, "age", 18i64));
    }

    #[test]
    pub fn test_filter_nested() {
        let result = parse(json!({
            "and": [
                { "eq": [{ "name": "C1", "from": "BASE" }, { "name": "C1", "from": "T" }] },
                { "or": [{ "notnull": "c2" }, { "isnull": ["c3"] }] }
            ]
        })).expect("Failed to parse filter");

        assert_eq!(result, Filter::and(vec![
            Filter::eq(Operand::column("C1", "BASE"), Operand::column("C1", "T")),
            Filter::or(vec![Filter::not_null("c2"), Filter::is_null("c3")]),
        ]));
    }

    #[test]
    pub fn test_filter_unknown_operator() {
        match parse(json!({ "between": ["a", 1] })) {
            Err(CompileError::Request(message)) => assert!(message.contains("between")),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_filter_wrong_arity() {
        assert!(parse(json!({ "eq": ["a"] })).is_err());
        assert!(parse(json!({ "eq": ["a", "b", "c"] })).is_err());
        assert!(parse(json!({ "notnull": ["a", "b"] })).is_err());
        assert!(parse(json!({ "and": "a" })).is_err());
    }

    #[test]
    pub fn test_filter_wrong_shape() {
        assert!(parse(json!("a = 1")).is_err());
        assert!(parse(json!({})).is_err());
        assert!(parse(json!({ "eq": ["a", 1], "gt": ["b", 2] })).is_err());
    }

    #[test]
    pub fn test_filter_deserialize() {
        let result: Filter = serde_json::from_value(json!({ "lt": ["x", "'z'"] })).expect("Failed to parse filter");
        assert_eq!(result, Filter::compare(ComparatorOp::Lt, "x", "'z'"));

        let result = serde_json::from_value::<Filter>(json!({ "nope": ["x", 1] }));
        assert!(result.is_err());
    }
}
