use crate::{
    compiler::{CompileContext, FilterCompiler, FilterOptions, TableResolver},
    query::{Filter, JoinSpec, JoinType},
    sql::CompileError,
};

pub struct JoinPlanner;

impl JoinPlanner {
    pub fn plan_join(join: &JoinSpec, ctx: &CompileContext) -> Result<String, CompileError> {
        let target = TableResolver::resolve(&join.target, ctx)?;
        let join_type = JoinType::parse(join.join_type.as_deref());
        let condition = FilterCompiler::compile(&join.on, FilterOptions::default())?;

        // Logical nodes come back parenthesized already.
        let condition = match &join.on {
            Filter::Logical { .. } => condition,
            _ => format!("({})", condition),
        };

        Ok(format!("{} {} ON {}", join_type, target.with_alias, condition))
    }

    /// `None` when there is nothing to join, so no JOIN clause is rendered.
    pub fn plan(joins: Option<&[JoinSpec]>, ctx: &CompileContext) -> Result<Option<Vec<String>>, CompileError> {
        let Some(joins) = joins.filter(|joins| !joins.is_empty()) else {
            return Ok(None);
        };

        let planned = joins.iter().map(|join| Self::plan_join(join, ctx)).collect::<Result<Vec<_>, _>>()?;
        Ok(Some(planned))
    }
}
