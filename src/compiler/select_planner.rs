use crate::{
    compiler::FilterCompiler,
    query::{IdentRef, Identifier},
    sql::{CompileError, IdentRenderer},
};

/// Row-wise functions that wrap a column without collapsing rows. Every other
/// `agg` is taken as an aggregate.
const SCALAR_FUNCTIONS: [&str; 16] = [
    "DATE_TRUNC",
    "DATE_PART",
    "TRUNC",
    "ROUND",
    "FLOOR",
    "CEIL",
    "ABS",
    "TO_CHAR",
    "TO_DATE",
    "TO_VARCHAR",
    "UPPER",
    "LOWER",
    "TRIM",
    "LENGTH",
    "COALESCE",
    "NULLIF",
];

const STAR: &str = "*";

/// SELECT list fragments plus the implicit grouping they imply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectPlan {
    pub columns: Vec<String>,
    /// Same length as `columns`; true where the column is not aggregated.
    pub not_aggregated: Vec<bool>,
    /// 1-based positions to group by, present only when some column is
    /// aggregated and some is not.
    pub group_by: Option<Vec<usize>>,
}

impl SelectPlan {
    pub fn select_list(&self) -> String {
        self.columns.join(", ")
    }

    pub fn group_by_list(&self) -> Option<String> {
        self.group_by.as_ref().map(|positions| {
            positions.iter().map(|position| position.to_string()).collect::<Vec<_>>().join(", ")
        })
    }
}

pub struct SelectPlanner;

impl SelectPlanner {
    pub fn is_aggregate(agg: &str) -> bool {
        let upper = agg.to_ascii_uppercase();
        !SCALAR_FUNCTIONS.contains(&upper.as_str())
    }

    pub fn is_aggregated(identifier: &Identifier) -> bool {
        identifier.agg.as_deref().is_some_and(Self::is_aggregate)
    }

    fn star_expression(identifier: &Identifier) -> Result<String, CompileError> {
        match (&identifier.agg, &identifier.from, &identifier.args) {
            (None, None, None) => Ok(STAR.to_string()),
            (None, Some(from), None) => Ok(format!("{}.{}", IdentRenderer::render_name(from, false)?, STAR)),
            (Some(agg), None, None) if agg.eq_ignore_ascii_case("count") => Ok("COUNT(*)".to_string()),
            _ => CompileError::invalid_identifier(STAR).err(),
        }
    }

    /// Column text without its alias: `NAME`, `FROM.NAME`, `AGG(args.., NAME)`
    /// or one of the `*` forms.
    pub fn column_expression(identifier: &Identifier) -> Result<String, CompileError> {
        if identifier.name == STAR && !identifier.quoted {
            return Self::star_expression(identifier);
        }

        let base = IdentRenderer::render_identifier(identifier)?;

        let Some(agg) = &identifier.agg else {
            if identifier.args.is_some() {
                return CompileError::request(format!("column '{}' has args but no agg", identifier.name)).err();
            }
            return Ok(base);
        };

        let function = IdentRenderer::render_name(agg, false)?;
        let mut args = match &identifier.args {
            Some(args) => args.iter().map(FilterCompiler::render_operand).collect::<Result<Vec<_>, _>>()?,
            None => vec![],
        };
        args.push(base);

        Ok(format!("{}({})", function, args.join(", ")))
    }

    pub fn column_to_sql(column: &IdentRef) -> Result<String, CompileError> {
        let identifier = column.to_identifier();
        let expression = Self::column_expression(&identifier)?;
        match &identifier.alias {
            Some(alias) => Ok(format!("{} AS {}", expression, IdentRenderer::render_name(alias, identifier.quoted)?)),
            None => Ok(expression),
        }
    }

    pub fn plan(columns: &[IdentRef]) -> Result<SelectPlan, CompileError> {
        if columns.is_empty() {
            return CompileError::request("a query needs at least one column").err();
        }

        let mut plan = SelectPlan::default();
        for column in columns {
            plan.columns.push(Self::column_to_sql(column)?);
            let aggregated = match column {
                IdentRef::Bare(_) => false,
                IdentRef::Ref(identifier) => Self::is_aggregated(identifier),
            };
            plan.not_aggregated.push(!aggregated);
        }

        if plan.not_aggregated.contains(&false) {
            let positions = plan.not_aggregated.iter()
                .enumerate()
                .filter(|(_, not_aggregated)| **not_aggregated)
                .map(|(index, _)| index + 1)
                .collect::<Vec<_>>();
            if !positions.is_empty() {
                plan.group_by = Some(positions);
            }
        }

        Ok(plan)
    }
}
