use crate::{
    access::ReadRequest,
    compiler::CompileContext,
    query::{IdentRef, TableRef},
    sql::{CompileError, IdentRenderer},
};

/// A table reference resolved against the configured defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTable {
    /// `DB.SCHEMA.TABLE`, only the parts the query gave.
    pub path: String,
    /// `path [AS ALIAS]`
    pub with_alias: String,
    /// `path` completed with the default database/schema.
    pub default_path: String,
    /// `SCHEMA.TABLE` (schema defaulted), database left out.
    pub path_id: String,
    pub db: Option<String>,
    pub schema: Option<String>,
    pub alias: Option<String>,
    /// Allow-list key of the table: uppercase, or verbatim when quoted.
    pub table_key: String,
}

pub struct TableResolver;

impl TableResolver {
    fn render_table(table: &IdentRef) -> Result<(String, String), CompileError> {
        match table {
            IdentRef::Bare(name) => {
                let rendered = IdentRenderer::render_name(name, false)?;
                Ok((rendered.clone(), rendered))
            },
            IdentRef::Ref(identifier) => {
                if identifier.from.is_some() || identifier.agg.is_some() || identifier.args.is_some() {
                    return CompileError::request(format!("table '{}' cannot take from/agg/args", identifier.name)).err();
                }
                let rendered = IdentRenderer::render_name(&identifier.name, identifier.quoted)?;
                let key = match identifier.quoted {
                    true => identifier.name.clone(),
                    false => rendered.clone(),
                };
                Ok((rendered, key))
            },
        }
    }

    fn render_optional(name: Option<&String>) -> Result<Option<String>, CompileError> {
        name.map(|name| IdentRenderer::render_name(name, false)).transpose()
    }

    fn join_path(parts: [Option<&String>; 3]) -> String {
        parts.into_iter().flatten().cloned().collect::<Vec<_>>().join(".")
    }

    pub fn resolve(table_ref: &TableRef, ctx: &CompileContext) -> Result<ResolvedTable, CompileError> {
        if table_ref.db.is_some() && table_ref.schema.is_none() {
            return CompileError::request(format!("database without a schema for table '{}'", table_ref.table.name())).err();
        }

        let (table, table_key) = Self::render_table(&table_ref.table)?;
        let db = Self::render_optional(table_ref.db.as_ref())?;
        let schema = Self::render_optional(table_ref.schema.as_ref())?;
        let alias = Self::render_optional(table_ref.table_alias.as_ref())?;

        let default_db = match &db {
            Some(db) => Some(db.clone()),
            None => Self::render_optional(ctx.config.default_database.as_ref())?,
        };
        let default_schema = match &schema {
            Some(schema) => Some(schema.clone()),
            None => Self::render_optional(ctx.config.default_schema.as_ref())?,
        };

        let path = Self::join_path([db.as_ref(), schema.as_ref(), Some(&table)]);
        let with_alias = match &alias {
            Some(alias) => format!("{} AS {}", path, alias),
            None => path.clone(),
        };
        let default_path = Self::join_path([default_db.as_ref(), default_schema.as_ref(), Some(&table)]);
        let path_id = Self::join_path([None, default_schema.as_ref(), Some(&table)]);

        if ctx.check_table_access {
            ctx.access.can_read(&ReadRequest {
                db: default_db.as_deref(),
                schema: default_schema.as_deref(),
                table: Some(&table_key),
                access: ctx.access_type,
            })?;
        }

        Ok(ResolvedTable { path, with_alias, default_path, path_id, db, schema, alias, table_key })
    }
}
