/// Rendering of single-quoted SQL string literals.
///
/// The target dialect treats `\` as the escape character inside string
/// literals, so both backslashes and quotes have to be escaped.
pub struct SqlLiteral;

impl SqlLiteral {
    /// Safe inner content of a single-quoted literal. Backslashes are doubled
    /// before quotes get their `\` prefix, otherwise the prefix itself would be
    /// doubled.
    pub fn escape_string_body(text: &str) -> String {
        text.replace('\\', "\\\\").replace('\'', "\\'")
    }

    /// Inverse of `escape_string_body`.
    pub fn unescape_string_body(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(current) = chars.next() {
            if current == '\\' {
                match chars.next() {
                    Some(escaped) => result.push(escaped),
                    None => result.push(current),
                }
            } else {
                result.push(current);
            }
        }
        result
    }

    /// Quote `text` as a complete literal.
    pub fn quote(text: &str) -> String {
        format!("'{}'", Self::escape_string_body(text))
    }

    /// Classifies `text` as an already-quoted literal (`'...'`) and returns it
    /// re-escaped, or `None` when it is not one and must be treated as a name.
    ///
    /// Escape sequences already present in the body are kept verbatim; only
    /// bare inner quotes gain a `\`. A dangling backslash at the end is doubled
    /// so it can never swallow the closing quote.
    pub fn as_sql_literal(text: &str) -> Option<String> {
        if text.len() < 2 || !text.starts_with('\'') || !text.ends_with('\'') {
            return None;
        }

        let body = &text[1..text.len() - 1];
        let mut result = String::with_capacity(text.len() + 2);
        result.push('\'');

        let mut chars = body.chars();
        while let Some(current) = chars.next() {
            match current {
                '\\' => match chars.next() {
                    Some(escaped) => {
                        result.push('\\');
                        result.push(escaped);
                    },
                    None => result.push_str("\\\\"),
                },
                '\'' => result.push_str("\\'"),
                other => result.push(other),
            }
        }

        result.push('\'');
        Some(result)
    }
}
