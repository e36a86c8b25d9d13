//! Template substitution for `input`-type options.
//!
//! Substitution is textual: the template is serialized, placeholders are
//! replaced, and the result is re-parsed. This lets an int/bool field turn
//! a quoted `"{name}"` placeholder into a bare JSON token, which a tree
//! walk over string leaves could not express without changing the template
//! format the catalogs already ship.

use serde_json::Value;

use crate::catalog::{FieldType, InputField};
use crate::error::TemplateError;
use crate::values::FieldValues;

/// Substitutes every `{field}` placeholder in the template, coercing each
/// replacement per the field's `pipeline_type`.
///
/// The effective raw value of a field is the stored value if present and
/// non-empty, else the field's declared default, else the empty string.
/// Fails closed: a result that no longer parses as JSON is an error the
/// caller is expected to log and drop, not propagate.
pub fn substitute(
    template: &Value,
    fields: &[InputField],
    values: &FieldValues,
) -> Result<Value, TemplateError> {
    let mut text = template.to_string();

    for field in fields {
        let raw = values
            .get(&field.name)
            .filter(|value| !value.is_empty())
            .cloned()
            .or_else(|| field.default.clone())
            .unwrap_or_default();
        let token = format!("{{{}}}", field.name);

        match field.pipeline_type {
            FieldType::Int => {
                let numeric = if raw.is_empty() { "0".to_string() } else { raw };
                text = replace_bare(&text, &token, &numeric);
            }
            FieldType::Bool => {
                let literal = if is_truthy(&raw) { "true" } else { "false" };
                text = replace_bare(&text, &token, literal);
            }
            FieldType::String => {
                text = text.replace(&token, &raw);
            }
        }
    }

    serde_json::from_str(&text).map_err(TemplateError::from)
}

/// Replaces both the quoted and the bare form of a placeholder with a bare
/// token. Both passes are always applied; older templates carry the bare
/// form for int/bool fields.
fn replace_bare(text: &str, token: &str, replacement: &str) -> String {
    let quoted = format!("\"{token}\"");
    text.replace(&quoted, replacement).replace(token, replacement)
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "y"
    )
}
