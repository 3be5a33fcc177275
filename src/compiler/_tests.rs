#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::{
        access::{AccessControl, AccessType, AllowList, AllowLists},
        compiler::CompilerConfig,
        query::QueryDefinition,
    };

    pub fn config() -> CompilerConfig {
        CompilerConfig::from("analytics", "public").with_default_limit(500)
    }

    pub fn access() -> AccessControl {
        let service = AllowList::from_json(r#"{
            "ANALYTICS": {
                "PUBLIC": { "ORDERS": true, "CUSTOMERS": true, "PAYROLL": false },
                "STAGING": { "*": true }
            },
            "*": { "SHARED": { "*": true } }
        }"#).expect("Failed to parse service allow-list");
        let caller = AllowList::from_json(r#"{
            "ANALYTICS": { "PUBLIC": { "ORDERS": true } }
        }"#).expect("Failed to parse caller allow-list");

        AccessControl::ready(
            AllowLists::new()
                .with(AccessType::Service, service)
                .with(AccessType::Caller, caller),
        )
    }

    pub fn sales_by_region() -> Value {
        json!({
            "table": "orders",
            "tableAlias": "o",
            "columns": [
                { "name": "region", "from": "c" },
                { "name": "created_at", "from": "o", "agg": "date_trunc", "args": ["'month'"], "alias": "month" },
                { "name": "amount", "from": "o", "agg": "sum", "alias": "total" },
                { "name": "*", "agg": "count", "alias": "orders" }
            ],
            "joins": [{
                "table": "customers",
                "tableAlias": "c",
                "type": "left",
                "on": { "eq": [{ "name": "id", "from": "c" }, { "name": "customer_id", "from": "o" }] }
            }],
            "filter": {
                "and": [
                    { "gte": [{ "name": "created_at", "from": "o" }, "'2024-01-01'"] },
                    { "in": [{ "name": "status", "from": "o" }, ["'paid'", "'shipped'"]] },
                    { "notnull": { "name": "region", "from": "c" } }
                ]
            },
            "having": { "gt": [{ "name": "amount", "from": "o", "agg": "sum" }, 1000] },
            "order": [
                { "name": "amount", "from": "o", "agg": "sum", "dir": "desc" },
                { "name": "region", "from": "c" }
            ],
            "limit": 50,
            "offset": 100
        })
    }

    pub fn query(value: Value) -> QueryDefinition {
        QueryDefinition::from_value(value).expect("Failed to parse query definition")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        access::{AccessControl, AccessError},
        compiler::{_tests::fixtures, CompileContext, QueryPlanner},
        sql::CompileError,
    };

    #[test]
    pub fn test_full_statement() {
        let config = fixtures::config();
        let access = fixtures::access();
        let ctx = CompileContext::new(&config).with_access(&access).checking_table_access(true);

        let result = QueryPlanner::generate_query(&fixtures::query(fixtures::sales_by_region()), &ctx)
            .expect("Failed to generate query");

        let expected = [
            "SELECT C.REGION, DATE_TRUNC('month', O.CREATED_AT) AS MONTH, SUM(O.AMOUNT) AS TOTAL, COUNT(*) AS ORDERS",
            "FROM ORDERS AS O",
            "LEFT JOIN CUSTOMERS AS C ON (C.ID = O.CUSTOMER_ID)",
            "WHERE (O.CREATED_AT >= '2024-01-01' AND O.STATUS IN ('paid', 'shipped') AND C.REGION IS NOT NULL)",
            "GROUP BY 1, 2",
            "HAVING SUM(O.AMOUNT) > 1000",
            "ORDER BY SUM(O.AMOUNT) DESC NULLS LAST, C.REGION ASC NULLS LAST",
            "LIMIT 50",
            "OFFSET 100;",
        ].join("\n");

        assert_eq!(result.sql, expected);
        assert!(result.columns.is_none());
        assert!(result.query_id.is_none());
    }

    #[test]
    pub fn test_compilation_is_deterministic() {
        let config = fixtures::config();
        let ctx = CompileContext::new(&config);
        let query = fixtures::query(fixtures::sales_by_region());

        let first = QueryPlanner::generate_query(&query, &ctx).expect("Failed to generate query");
        let second = QueryPlanner::generate_query(&query, &ctx).expect("Failed to generate query");
        let reparsed = QueryPlanner::generate_query(&fixtures::query(fixtures::sales_by_region()), &ctx)
            .expect("Failed to generate query");

        assert_eq!(first.sql, second.sql);
        assert_eq!(first.sql, reparsed.sql);
    }

    #[test]
    pub fn test_denied_join_target() {
        let config = fixtures::config();
        let access = fixtures::access();
        let ctx = CompileContext::new(&config).with_access(&access).checking_table_access(true);

        let result = QueryPlanner::generate_query(&fixtures::query(json!({
            "table": "orders",
            "columns": ["id"],
            "joins": [{ "table": "payroll", "on": { "eq": [{ "name": "id", "from": "payroll" }, { "name": "id", "from": "orders" }] } }]
        })), &ctx);

        match result {
            Err(CompileError::Access(AccessError::TableNotAllowed { table, .. })) => assert_eq!(table, "PAYROLL"),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_caller_identity_uses_caller_allow_list() {
        let config = fixtures::config();
        let access = fixtures::access();
        let ctx = CompileContext::new(&config).with_access(&access).checking_table_access(true);

        let as_service = fixtures::query(json!({ "table": "customers", "columns": ["id"] }));
        QueryPlanner::generate_query(&as_service, &ctx).expect("Failed to generate query");

        let as_caller = fixtures::query(json!({ "table": "customers", "columns": ["id"], "asCaller": true }));
        match QueryPlanner::generate_query(&as_caller, &ctx) {
            Err(CompileError::Access(AccessError::UnknownTable { table, .. })) => assert_eq!(table, "CUSTOMERS"),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_wildcard_schema_on_other_database() {
        let config = fixtures::config();
        let access = fixtures::access();
        let ctx = CompileContext::new(&config).with_access(&access).checking_table_access(true);

        let result = QueryPlanner::generate_query(&fixtures::query(json!({
            "table": "rates", "db": "finance", "schema": "shared", "columns": ["code"]
        })), &ctx).expect("Failed to generate query");

        assert_eq!(result.sql, "SELECT CODE\nFROM FINANCE.SHARED.RATES\nLIMIT 500;");
    }

    #[test]
    pub fn test_uninitialized_access_control() {
        let config = fixtures::config();
        let access = AccessControl::new();
        let ctx = CompileContext::new(&config).with_access(&access).checking_table_access(true);

        let result = QueryPlanner::generate_query(&fixtures::query(json!({ "table": "orders", "columns": ["id"] })), &ctx);

        assert_eq!(result, Err(CompileError::Access(AccessError::NotInitialized)));
    }

    #[test]
    pub fn test_injection_attempts_fail() {
        let config = fixtures::config();
        let ctx = CompileContext::new(&config);

        let attempts = [
            json!({ "table": "orders; DROP TABLE orders", "columns": ["id"] }),
            json!({ "table": "orders", "columns": ["id FROM payroll --"] }),
            json!({ "table": "orders", "columns": ["id"], "filter": { "eq": ["id", "1 OR 1=1"] } }),
            json!({ "table": "orders", "columns": [{ "name": "x\" FROM payroll --", "quoted": true }] }),
            json!({ "table": "orders", "columns": ["id"], "order": [{ "name": "id; --" }] }),
            json!({ "table": "orders", "tableAlias": "o WHERE 1=1", "columns": ["id"] }),
        ];

        for attempt in attempts {
            match QueryPlanner::generate_query(&fixtures::query(attempt), &ctx) {
                Err(CompileError::InvalidIdentifier(_)) => {},
                _ => panic!(),
            }
        }
    }

    #[test]
    pub fn test_literal_cannot_escape_its_quotes() {
        let config = fixtures::config();
        let ctx = CompileContext::new(&config);

        let result = QueryPlanner::generate_query(&fixtures::query(json!({
            "table": "orders",
            "columns": ["id"],
            "filter": { "eq": ["note", "'x\\' OR 1=1 --'"] }
        })), &ctx).expect("Failed to generate query");

        assert_eq!(result.sql, "SELECT ID\nFROM ORDERS\nWHERE NOTE = 'x\\' OR 1=1 --'\nLIMIT 500;");
    }
}
