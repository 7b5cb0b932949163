//! Shape normalization applied while decoding API responses.
//!
//! The generation backend is fed by an LLM, so list-like fields sometimes
//! arrive as a bare string and text fields sometimes arrive as a list. Both
//! are folded into one strict shape here; nothing downstream re-checks.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, a sequence, or null and produce a sequence of strings.
pub(crate) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(into_text).collect(),
        other => vec![into_text(other)],
    })
}

/// Accept any scalar or a sequence and produce a single string.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::Array(items) => items
            .into_iter()
            .map(into_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => into_text(other),
    })
}

fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "one_or_many")]
        items: Vec<String>,
        #[serde(deserialize_with = "text")]
        label: String,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_single_string_becomes_one_element_sequence() {
        let p = probe(r#"{"items": "only one", "label": "x"}"#);
        assert_eq!(p.items, vec!["only one"]);
    }

    #[test]
    fn test_sequence_is_kept_in_order() {
        let p = probe(r#"{"items": ["a", "b", "c"], "label": "x"}"#);
        assert_eq!(p.items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_null_becomes_empty_sequence() {
        let p = probe(r#"{"items": null, "label": null}"#);
        assert!(p.items.is_empty());
        assert_eq!(p.label, "");
    }

    #[test]
    fn test_non_string_scalars_are_stringified() {
        let p = probe(r#"{"items": [1, true, "x"], "label": 42}"#);
        assert_eq!(p.items, vec!["1", "true", "x"]);
        assert_eq!(p.label, "42");
    }

    #[test]
    fn test_list_in_text_field_is_joined() {
        let p = probe(r#"{"items": [], "label": ["Revenue up", "Churn down"]}"#);
        assert_eq!(p.label, "Revenue up, Churn down");
    }
}
