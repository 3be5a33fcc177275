use crate::{
    compiler::SelectPlanner,
    query::{Filter, IdentRef, Operand},
    sql::{CompileError, IdentRenderer, SqlLiteral},
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterOptions {
    /// Set when compiling a HAVING clause. Compiles the same as WHERE for now;
    /// aggregate-only operand checks would hook in here.
    pub is_having: bool,
}

impl FilterOptions {
    pub fn having() -> Self {
        Self { is_having: true }
    }
}

pub struct FilterCompiler;

impl FilterCompiler {
    /// SQL text of one operand. A bare string is a literal only when it is
    /// already single-quoted; otherwise it is a column name.
    pub fn render_operand(operand: &Operand) -> Result<String, CompileError> {
        match operand {
            Operand::Number(number) => Ok(number.to_string()),
            Operand::Bool(true) => Ok("TRUE".to_string()),
            Operand::Bool(false) => Ok("FALSE".to_string()),
            Operand::Value(literal) => Ok(SqlLiteral::quote(&literal.value)),
            Operand::Ident(IdentRef::Bare(text)) => match SqlLiteral::as_sql_literal(text) {
                Some(literal) => Ok(literal),
                None => IdentRenderer::render_name(text, false),
            },
            Operand::Ident(IdentRef::Ref(identifier)) => SelectPlanner::column_expression(identifier),
            Operand::List(_) => CompileError::request("a list operand is only valid on the right of 'in'/'notin'").err(),
        }
    }

    fn render_column(operand: &Operand) -> Result<String, CompileError> {
        match operand {
            Operand::Ident(IdentRef::Bare(name)) => IdentRenderer::render_name(name, false),
            Operand::Ident(IdentRef::Ref(identifier)) => SelectPlanner::column_expression(identifier),
            _ => CompileError::request("null checks expect a column").err(),
        }
    }

    fn render_list(operand: &Operand) -> Result<String, CompileError> {
        let Operand::List(items) = operand else {
            return CompileError::request("'in'/'notin' expect a list on the right").err();
        };
        if items.is_empty() {
            return CompileError::request("'in'/'notin' expect a non-empty list").err();
        }
        let rendered = items.iter().map(Self::render_operand).collect::<Result<Vec<_>, _>>()?;
        Ok(format!("({})", rendered.join(", ")))
    }

    pub fn compile(filter: &Filter, options: FilterOptions) -> Result<String, CompileError> {
        if options.is_having {
            tracing::trace!("compiling HAVING filter");
        }
        Self::compile_node(filter, options)
    }

    fn compile_node(filter: &Filter, options: FilterOptions) -> Result<String, CompileError> {
        match filter {
            Filter::Logical { op, children } => {
                if children.is_empty() {
                    return CompileError::request(format!("'{}' needs at least one filter", op)).err();
                }
                let compiled = children.iter()
                    .map(|child| Self::compile_node(child, options))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("({})", compiled.join(&format!(" {} ", op))))
            },
            Filter::Compare { op, left, right } => {
                let left = Self::render_operand(left)?;
                let right = match op.takes_list() {
                    true => Self::render_list(right)?,
                    false => Self::render_operand(right)?,
                };
                Ok(format!("{} {} {}", left, op, right))
            },
            Filter::Unary { op, operand } => Ok(format!("{} {}", Self::render_column(operand)?, op)),
        }
    }
}
