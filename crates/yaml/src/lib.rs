//! YAML form of canonical JSON documents.
//!
//! This crate knows nothing about record types. It rewrites between the JSON value model
//! (object, array, string, number, bool, null) and block-style YAML, in both directions:
//! - object key order survives in both directions;
//! - numbers keep their text exactly: only canonical number text (a 64-bit decimal integer or
//!   the shortest round-trip form of a double) crosses in either direction, anything else fails;
//!   numeric-looking strings are quoted so they stay strings;
//! - anchors, aliases, tags, directives and multi-document streams are neither produced nor
//!   accepted, and tab indentation is a parse error;
//! - YAML values with no JSON equivalent (non-string keys, `.inf`, `.nan`, `0x1F`, `+5`) fail
//!   rather than being guessed.
//!
//! A *labeled snippet* wraps one value under a single named root key, e.g.
//!
//! ```yaml
//! ontologyClass:
//!   id: HP:0012828
//!   label: Severe
//! ```

mod convert;
mod guard;

pub use convert::{json_value_to_yaml_value, yaml_value_to_json};

/// Any JSON value, with insertion-ordered objects.
pub type JsonValue = serde_json::Value;

/// Errors returned by the YAML bridge.
#[derive(Debug, thiserror::Error)]
pub enum YamlError {
    /// The YAML parser rejected the text.
    #[error("invalid YAML: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// A line is indented with a tab.
    #[error("invalid YAML: tab character used for indentation on line {line}")]
    TabIndentation { line: usize },

    /// Valid YAML that falls outside the JSON value model (anchors, tags, directives, ...).
    #[error("unsupported YAML on line {line}: {message}")]
    UnsupportedSyntax { line: usize, message: String },

    /// A parsed value has no JSON equivalent.
    #[error("YAML value at {path} has no JSON equivalent: {message}")]
    Unrepresentable { path: String, message: String },

    /// The YAML emitter failed.
    #[error("failed to render YAML: {0}")]
    Emit(#[source] serde_yaml::Error),

    /// JSON input is malformed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A labeled snippet does not have the expected single root key.
    #[error("expected a snippet labeled '{expected}', found {found}")]
    LabelMismatch { expected: String, found: String },
}

impl YamlError {
    /// Whether the error is a syntax problem in the input text (as opposed to a value that
    /// parsed but cannot be represented).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            YamlError::Parse(_)
                | YamlError::TabIndentation { .. }
                | YamlError::UnsupportedSyntax { .. }
                | YamlError::Json(_)
        )
    }
}

/// Type alias for Results that can fail with a [`YamlError`].
pub type YamlResult<T> = Result<T, YamlError>;

// ============================================================================
// JSON -> YAML
// ============================================================================

/// Rewrites JSON text as block-style YAML.
///
/// # Errors
///
/// Returns [`YamlError::Json`] if `json` is not well-formed and [`YamlError::Unrepresentable`]
/// for a number whose text YAML cannot carry unchanged.
pub fn json_to_yaml(json: &str) -> YamlResult<String> {
    let value: JsonValue = serde_json::from_str(json)?;
    json_value_to_yaml(&value)
}

/// Renders a JSON value as block-style YAML.
///
/// # Errors
///
/// Returns [`YamlError::Unrepresentable`] for a number whose text YAML cannot carry unchanged.
pub fn json_value_to_yaml(value: &JsonValue) -> YamlResult<String> {
    serde_yaml::to_string(&json_value_to_yaml_value(value)?).map_err(YamlError::Emit)
}

/// Renders `value` as YAML wrapped under a single root key named `label`.
pub fn labeled_snippet_value(label: &str, value: &JsonValue) -> YamlResult<String> {
    let mut root = serde_json::Map::new();
    root.insert(label.to_owned(), value.clone());
    json_value_to_yaml(&JsonValue::Object(root))
}

/// Rewrites JSON text as a labeled YAML snippet.
///
/// # Errors
///
/// Returns [`YamlError::Json`] if `json` is not well-formed.
pub fn labeled_snippet(label: &str, json: &str) -> YamlResult<String> {
    let value: JsonValue = serde_json::from_str(json)?;
    labeled_snippet_value(label, &value)
}

// ============================================================================
// YAML -> JSON
// ============================================================================

/// Parses YAML text into a JSON value.
///
/// # Errors
///
/// - [`YamlError::TabIndentation`] / [`YamlError::UnsupportedSyntax`] from the pre-parse guard,
///   including numbers not written in canonical JSON form,
/// - [`YamlError::Parse`] for anything the YAML parser rejects, including multiple documents,
/// - [`YamlError::Unrepresentable`] for values with no JSON equivalent.
pub fn parse_yaml(yaml: &str) -> YamlResult<JsonValue> {
    guard::check(yaml)?;
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(YamlError::Parse)?;
    yaml_value_to_json(&value)
}

/// Rewrites YAML text as compact JSON text.
pub fn yaml_to_json(yaml: &str) -> YamlResult<String> {
    Ok(parse_yaml(yaml)?.to_string())
}

/// Rewrites YAML text as JSON text indented by two spaces.
pub fn yaml_to_json_pretty(yaml: &str) -> YamlResult<String> {
    Ok(format!("{:#}", parse_yaml(yaml)?))
}

/// Reads a labeled snippet and returns the value under `label`.
///
/// # Errors
///
/// Returns [`YamlError::LabelMismatch`] unless the document is a mapping with exactly one key,
/// equal to `label`.
pub fn read_labeled_snippet(label: &str, yaml: &str) -> YamlResult<JsonValue> {
    let document = parse_yaml(yaml)?;
    let found = match document {
        JsonValue::Object(mut root) if root.len() == 1 => match root.remove(label) {
            Some(value) => return Ok(value),
            None => root
                .keys()
                .map(|key| format!("'{key}'"))
                .collect::<Vec<_>>()
                .join(", "),
        },
        JsonValue::Object(root) if root.is_empty() => "an empty mapping".to_owned(),
        JsonValue::Object(root) => format!(
            "{} root keys ({})",
            root.len(),
            root.keys().cloned().collect::<Vec<_>>().join(", ")
        ),
        _ => "a document that is not a mapping".to_owned(),
    };
    tracing::debug!(label, %found, "labeled snippet rejected");
    Err(YamlError::LabelMismatch {
        expected: label.to_owned(),
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_becomes_block_yaml() {
        let json = r#"{"id":"HP:0012828","label":"Severe"}"#;
        assert_eq!(json_to_yaml(json).unwrap(), "id: HP:0012828\nlabel: Severe\n");
    }

    #[test]
    fn nested_lists_use_block_sequences() {
        let value = json!({
            "id": "p1",
            "phenotypicFeatures": [
                {"type": {"id": "HP:0001250", "label": "Seizure"}},
                {"type": {"id": "HP:0000252", "label": "Microcephaly"}, "excluded": true}
            ]
        });
        let expected = "\
id: p1
phenotypicFeatures:
- type:
    id: HP:0001250
    label: Seizure
- type:
    id: HP:0000252
    label: Microcephaly
  excluded: true
";
        assert_eq!(json_value_to_yaml(&value).unwrap(), expected);
    }

    #[test]
    fn numeric_looking_strings_stay_strings() {
        let value = json!({"version": "2.0", "pos": "12345", "count": 3, "ratio": 0.5});
        let yaml = json_value_to_yaml(&value).unwrap();
        assert_eq!(yaml, "version: '2.0'\npos: '12345'\ncount: 3\nratio: 0.5\n");
        assert_eq!(parse_yaml(&yaml).unwrap(), value);
    }

    #[test]
    fn round_trip_keeps_key_order_and_number_forms() {
        let json = r#"{"z":1,"a":{"y":2.0,"b":[true,false,null]},"m":"x","e":""}"#;
        let yaml = json_to_yaml(json).unwrap();
        assert_eq!(yaml_to_json(&yaml).unwrap(), json);
    }

    #[test]
    fn numbers_cross_with_their_text_or_not_at_all() {
        let err = json_to_yaml(r#"{"n":123456789012345678901234}"#).unwrap_err();
        assert!(matches!(err, YamlError::Unrepresentable { ref path, .. } if path == "n"), "{err:?}");
        assert!(json_to_yaml(r#"{"n":1.0e2,"m":1.5}"#).is_err());

        let json = r#"{"int":9007199254740993,"float":1e-7,"value":280.0}"#;
        let yaml = json_to_yaml(json).unwrap();
        assert_eq!(yaml, "int: 9007199254740993\nfloat: 1e-7\nvalue: 280.0\n");
        assert_eq!(yaml_to_json(&yaml).unwrap(), json);
    }

    #[test]
    fn yaml_only_numbers_are_refused() {
        for text in ["n: 0x1F\n", "m: +5\n", "r: 1.50\n"] {
            let err = parse_yaml(text).unwrap_err();
            assert!(matches!(err, YamlError::UnsupportedSyntax { line: 1, .. }), "{text}: {err:?}");
        }
        assert_eq!(parse_yaml("o: 1_000\n").unwrap(), json!({"o": "1_000"}));
    }

    #[test]
    fn empty_collections_round_trip() {
        let value = json!({"list": [], "map": {}});
        let yaml = json_value_to_yaml(&value).unwrap();
        assert_eq!(parse_yaml(&yaml).unwrap(), value);
    }

    #[test]
    fn tab_indentation_is_a_parse_error() {
        let err = parse_yaml("subject:\n\tid: p1\n").unwrap_err();
        assert!(matches!(err, YamlError::TabIndentation { line: 2 }), "{err:?}");
        assert!(err.is_parse_error());
    }

    #[test]
    fn bad_indentation_is_a_parse_error() {
        let err = parse_yaml("a:\n  b: 1\n c: 2\n").unwrap_err();
        assert!(matches!(err, YamlError::Parse(_)), "{err:?}");
    }

    #[test]
    fn anchors_are_refused() {
        let err = parse_yaml("a: &x 1\nb: *x\n").unwrap_err();
        assert!(matches!(err, YamlError::UnsupportedSyntax { line: 1, .. }), "{err:?}");
    }

    #[test]
    fn non_string_keys_are_unrepresentable() {
        let err = parse_yaml("subject:\n  1: one\n").unwrap_err();
        match err {
            YamlError::Unrepresentable { path, .. } => assert_eq!(path, "subject"),
            other => panic!("expected Unrepresentable, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_numbers_are_unrepresentable() {
        let err = parse_yaml("values:\n- 1.5\n- .inf\n").unwrap_err();
        match err {
            YamlError::Unrepresentable { path, .. } => assert_eq!(path, "values[1]"),
            other => panic!("expected Unrepresentable, got {other:?}"),
        }
    }

    #[test]
    fn labeled_snippet_wraps_and_unwraps() {
        let snippet = labeled_snippet("ontologyClass", r#"{"id":"HP:0012828","label":"Severe"}"#)
            .unwrap();
        assert_eq!(
            snippet,
            "ontologyClass:\n  id: HP:0012828\n  label: Severe\n"
        );
        assert_eq!(
            read_labeled_snippet("ontologyClass", &snippet).unwrap(),
            json!({"id": "HP:0012828", "label": "Severe"})
        );
    }

    #[test]
    fn labeled_snippet_with_wrong_label_is_rejected() {
        let err = read_labeled_snippet("phenopacket", "family:\n  id: f1\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a snippet labeled 'phenopacket', found 'family'"
        );

        let err = read_labeled_snippet("phenopacket", "a: 1\nb: 2\n").unwrap_err();
        assert!(matches!(err, YamlError::LabelMismatch { .. }));
    }
}
