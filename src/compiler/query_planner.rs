use crate::{
    compiler::{CompileContext, CompiledQuery, FilterCompiler, FilterOptions, JoinPlanner, OrderPlanner, QueryPlan, SelectPlanner, TableResolver},
    query::QueryDefinition,
    sql::CompileError,
};

pub struct QueryPlanner;

impl QueryPlanner {
    /// Compile every clause of `query`. The access type is taken from the
    /// query itself, overriding the one in `ctx`.
    pub fn plan_query(query: &QueryDefinition, ctx: &CompileContext) -> Result<QueryPlan, CompileError> {
        let ctx = ctx.as_access_type(query.access_type());

        let select_plan = SelectPlanner::plan(&query.columns)?;
        let group_by = select_plan.group_by_list();

        // GROUP BY already makes rows distinct.
        let select = match query.distinct && group_by.is_none() {
            true => format!("SELECT DISTINCT {}", select_plan.select_list()),
            false => format!("SELECT {}", select_plan.select_list()),
        };

        let table = TableResolver::resolve(&query.table, &ctx)?;
        let joins = JoinPlanner::plan(query.joins.as_deref(), &ctx)?;

        let filter = query.filter.as_ref()
            .map(|filter| FilterCompiler::compile(filter, FilterOptions::default()))
            .transpose()?;
        let having = query.having.as_ref()
            .map(|having| FilterCompiler::compile(having, FilterOptions::having()))
            .transpose()?;
        let order = OrderPlanner::plan(query.order.as_deref())?;

        let limit = query.limit.unwrap_or(ctx.config.default_limit);
        let offset = query.offset.filter(|offset| *offset != 0);

        Ok(QueryPlan {
            select,
            from: format!("FROM {}", table.with_alias),
            joins,
            filter: filter.map(|filter| format!("WHERE {}", filter)),
            group_by: group_by.map(|group_by| format!("GROUP BY {}", group_by)),
            having: having.map(|having| format!("HAVING {}", having)),
            order: order.map(|order| format!("ORDER BY {}", order)),
            limit: format!("LIMIT {}", limit),
            offset: offset.map(|offset| format!("OFFSET {}", offset)),
        })
    }

    pub fn generate_query(query: &QueryDefinition, ctx: &CompileContext) -> Result<CompiledQuery, CompileError> {
        let plan = Self::plan_query(query, ctx)?;

        tracing::debug!(
            table = %query.table.table.name(),
            columns = query.columns.len(),
            joins = plan.joins.as_ref().map_or(0, Vec::len),
            filtered = plan.filter.is_some(),
            grouped = plan.group_by.is_some(),
            "compiled query"
        );

        Ok(CompiledQuery::new(plan.to_sql()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        compiler::{CompileContext, CompilerConfig, QueryPlanner},
        query::QueryDefinition,
        sql::CompileError,
    };

    fn query(value: serde_json::Value) -> QueryDefinition {
        QueryDefinition::from_value(value).expect("Failed to parse query definition")
    }

    #[test]
    pub fn test_default_limit_and_no_offset() {
        let config = CompilerConfig::new().with_default_limit(100);
        let ctx = CompileContext::new(&config);

        let result = QueryPlanner::generate_query(&query(json!({ "table": "t", "columns": ["a"], "offset": 0 })), &ctx)
            .expect("Failed to generate query");

        assert_eq!(result.sql, "SELECT A\nFROM T\nLIMIT 100;");
    }

    #[test]
    pub fn test_distinct() {
        let config = CompilerConfig::new();
        let ctx = CompileContext::new(&config);

        let result = QueryPlanner::generate_query(&query(json!({ "table": "t", "columns": ["a", "b"], "distinct": true, "limit": 5, "offset": 10 })), &ctx)
            .expect("Failed to generate query");

        assert_eq!(result.sql, "SELECT DISTINCT A, B\nFROM T\nLIMIT 5\nOFFSET 10;");
    }

    #[test]
    pub fn test_distinct_dropped_with_group_by() {
        let config = CompilerConfig::new();
        let ctx = CompileContext::new(&config);

        let plan = QueryPlanner::plan_query(&query(json!({
            "table": "t",
            "columns": ["a", { "name": "b", "agg": "sum" }],
            "distinct": true
        })), &ctx).expect("Failed to plan query");

        assert_eq!(plan.select, "SELECT A, SUM(B)");
        assert_eq!(plan.group_by.as_deref(), Some("GROUP BY 1"));
    }

    #[test]
    pub fn test_failure_returns_no_sql() {
        let config = CompilerConfig::new();
        let ctx = CompileContext::new(&config);

        let result = QueryPlanner::generate_query(&query(json!({
            "table": "t",
            "columns": ["a"],
            "order": [{ "name": "a" }, { "dir": "desc" }]
        })), &ctx);

        assert!(matches!(result, Err(CompileError::Request(_))));
    }
}
