use crate::{
    compiler::SelectPlanner,
    query::{Direction, OrderEntry},
    sql::CompileError,
};

pub struct OrderPlanner;

impl OrderPlanner {
    pub fn plan_entry(entry: &OrderEntry) -> Result<String, CompileError> {
        let Some(identifier) = entry.to_identifier() else {
            return CompileError::request("order entry without a name").err();
        };

        let expression = SelectPlanner::column_expression(&identifier)?;
        let direction = match entry.direction() {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };

        Ok(format!("{} {} NULLS LAST", expression, direction))
    }

    /// `None` for a missing or empty order list.
    pub fn plan(order: Option<&[OrderEntry]>) -> Result<Option<String>, CompileError> {
        let Some(order) = order.filter(|order| !order.is_empty()) else {
            return Ok(None);
        };

        let entries = order.iter().map(Self::plan_entry).collect::<Result<Vec<_>, _>>()?;
        Ok(Some(entries.join(", ")))
    }
}
