use once_cell::sync::Lazy;
use regex::Regex;

use crate::{query::{IdentRef, Identifier}, sql::CompileError};

static UNQUOTED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_$]*$").expect("unquoted identifier grammar must compile")
});

pub struct IdentRenderer;

impl IdentRenderer {
    pub fn validate_unquoted_name(name: &str) -> Result<(), CompileError> {
        if UNQUOTED_NAME.is_match(name) {
            return Ok(());
        }
        CompileError::invalid_identifier(name).err()
    }

    /// Anything goes between double quotes except a double quote.
    pub fn validate_quoted_name(name: &str) -> Result<(), CompileError> {
        if name.contains('"') {
            return CompileError::invalid_identifier(name).err();
        }
        Ok(())
    }

    /// Uppercased and validated, or kept as-is and wrapped in `"` when quoted.
    pub fn render_name(name: &str, quoted: bool) -> Result<String, CompileError> {
        if name.is_empty() {
            return CompileError::invalid_identifier(name).err();
        }

        if quoted {
            Self::validate_quoted_name(name)?;
            return Ok(format!("\"{}\"", name));
        }

        let upper = name.to_uppercase();
        Self::validate_unquoted_name(&upper)?;
        Ok(upper)
    }

    /// SQL text of a column reference, `FROM.NAME` when a source alias is given.
    pub fn render(ident: &IdentRef) -> Result<String, CompileError> {
        match ident {
            IdentRef::Bare(name) => Self::render_name(name, false),
            IdentRef::Ref(identifier) => Self::render_identifier(identifier),
        }
    }

    /// Name and source prefix only; `agg`/`args`/`alias` belong to the select
    /// planner.
    pub fn render_identifier(identifier: &Identifier) -> Result<String, CompileError> {
        let base = Self::render_name(&identifier.name, identifier.quoted)?;
        match &identifier.from {
            Some(from) => Ok(format!("{}.{}", Self::render_name(from, false)?, base)),
            None => Ok(base),
        }
    }
}
