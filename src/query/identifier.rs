use serde::Deserialize;

/// Structured column/table reference as it arrives in a query document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Identifier {
    pub name: String,
    /// Alias of the source table used as prefix (`FROM.NAME`).
    #[serde(default)]
    pub from: Option<String>,
    /// Keep the name's case and wrap it in double quotes instead of uppercasing.
    #[serde(default)]
    pub quoted: bool,
    /// Function applied around the rendered name.
    #[serde(default)]
    pub agg: Option<String>,
    /// Output name when used in a SELECT list.
    #[serde(default)]
    pub alias: Option<String>,
    /// Extra positional arguments placed before the column inside `agg(...)`.
    #[serde(default)]
    pub args: Option<Vec<crate::query::Operand>>,
}

impl Identifier {
    pub fn named(name: &str) -> Self {
        Self { name: name.to_string(), ..Default::default() }
    }

    pub fn from(name: &str, from: &str) -> Self {
        Self { name: name.to_string(), from: Some(from.to_string()), ..Default::default() }
    }
}

/// Either a bare name or a structured reference. Every call site resolves it
/// through `IdentRenderer::render`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdentRef {
    Bare(String),
    Ref(Identifier),
}

impl IdentRef {
    pub fn name(&self) -> &str {
        match self {
            IdentRef::Bare(name) => name,
            IdentRef::Ref(identifier) => &identifier.name,
        }
    }

    /// The structured view; bare names carry no `from`/`agg`/`alias`.
    pub fn to_identifier(&self) -> Identifier {
        match self {
            IdentRef::Bare(name) => Identifier::named(name),
            IdentRef::Ref(identifier) => identifier.clone(),
        }
    }
}

impl From<&str> for IdentRef {
    fn from(value: &str) -> Self {
        IdentRef::Bare(value.to_string())
    }
}

impl From<Identifier> for IdentRef {
    fn from(value: Identifier) -> Self {
        IdentRef::Ref(value)
    }
}
