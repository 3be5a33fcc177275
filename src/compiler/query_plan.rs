/// One fragment per clause, each carrying its own keyword. Absent clauses are
/// `None` and leave no trace in the statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPlan {
    pub select: String,
    pub from: String,
    pub joins: Option<Vec<String>>,
    pub filter: Option<String>,
    pub group_by: Option<String>,
    pub having: Option<String>,
    pub order: Option<String>,
    pub limit: String,
    pub offset: Option<String>,
}

impl QueryPlan {
    /// Clauses in statement order.
    pub fn clauses(&self) -> Vec<&str> {
        let mut clauses = vec![self.select.as_str(), self.from.as_str()];
        if let Some(joins) = &self.joins {
            clauses.extend(joins.iter().map(String::as_str));
        }
        clauses.extend([&self.filter, &self.group_by, &self.having, &self.order].into_iter().flatten().map(String::as_str));
        clauses.push(self.limit.as_str());
        if let Some(offset) = &self.offset {
            clauses.push(offset.as_str());
        }
        clauses
    }

    pub fn to_sql(&self) -> String {
        format!("{};", self.clauses().join("\n"))
    }
}
