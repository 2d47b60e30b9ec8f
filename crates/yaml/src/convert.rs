//! Value-level conversion between `serde_json` and `serde_yaml` trees.

use serde_json::{Map, Number};
use serde_yaml::{Mapping, Value as YamlValue};

use crate::{JsonValue, YamlError, YamlResult};

/// Converts a JSON value into the equivalent YAML value.
///
/// # Errors
///
/// Returns [`YamlError::Unrepresentable`] for a number whose text would change on the way
/// through YAML, such as `1.50`, `1e2` or an integer beyond 64 bits. Numbers are carried in
/// canonical text only: decimal integers and the shortest round-trip form of floats.
pub fn json_value_to_yaml_value(value: &JsonValue) -> YamlResult<YamlValue> {
    to_yaml(value, &Location::Root)
}

fn to_yaml(value: &JsonValue, location: &Location<'_>) -> YamlResult<YamlValue> {
    Ok(match value {
        JsonValue::Null => YamlValue::Null,
        JsonValue::Bool(flag) => YamlValue::Bool(*flag),
        JsonValue::Number(number) => number_to_yaml(number, location)?,
        JsonValue::String(text) => YamlValue::String(text.clone()),
        JsonValue::Array(items) => YamlValue::Sequence(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| to_yaml(item, &Location::Index(location, index)))
                .collect::<YamlResult<_>>()?,
        ),
        JsonValue::Object(entries) => {
            let mut mapping = Mapping::with_capacity(entries.len());
            for (key, item) in entries {
                let item = to_yaml(item, &Location::Key(location, key))?;
                mapping.insert(YamlValue::String(key.clone()), item);
            }
            YamlValue::Mapping(mapping)
        }
    })
}

fn number_to_yaml(number: &Number, location: &Location<'_>) -> YamlResult<YamlValue> {
    let text = number.to_string();
    if canonical_number(&text).as_deref() != Some(text.as_str()) {
        return Err(unrepresentable(
            location,
            format!("number {text} cannot be written without changing its text"),
        ));
    }
    Ok(if let Some(int) = number.as_i64() {
        YamlValue::Number(int.into())
    } else if let Some(int) = number.as_u64() {
        YamlValue::Number(int.into())
    } else {
        YamlValue::Number(number.as_f64().unwrap_or(f64::NAN).into())
    })
}

/// The text a number keeps through both directions of the bridge: the decimal form of a 64-bit
/// integer, otherwise the shortest round-trip form of a finite double. `None` when `text` is
/// neither.
pub(crate) fn canonical_number(text: &str) -> Option<String> {
    if let Ok(int) = text.parse::<i64>() {
        return Some(int.to_string());
    }
    if let Ok(int) = text.parse::<u64>() {
        return Some(int.to_string());
    }
    let float = text.parse::<f64>().ok().filter(|float| float.is_finite())?;
    Number::from_f64(float).map(|number| number.to_string())
}

/// Converts a parsed YAML value into JSON.
///
/// # Errors
///
/// Returns [`YamlError::Unrepresentable`] for non-string mapping keys, non-finite numbers and
/// tagged values. The error path names the offending value (or, for a key, its mapping).
pub fn yaml_value_to_json(value: &YamlValue) -> YamlResult<JsonValue> {
    to_json(value, &Location::Root)
}

/// Where a value sits, rendered like `subject.phenotypicFeatures[0]`.
enum Location<'a> {
    Root,
    Key(&'a Location<'a>, &'a str),
    Index(&'a Location<'a>, usize),
}

impl Location<'_> {
    fn render(&self) -> String {
        match self {
            Location::Root => "<root>".to_owned(),
            Location::Key(Location::Root, key) => (*key).to_owned(),
            Location::Key(parent, key) => format!("{}.{key}", parent.render()),
            Location::Index(parent, index) => format!("{}[{index}]", parent.render()),
        }
    }
}

fn unrepresentable(location: &Location<'_>, message: impl Into<String>) -> YamlError {
    YamlError::Unrepresentable {
        path: location.render(),
        message: message.into(),
    }
}

fn to_json(value: &YamlValue, location: &Location<'_>) -> YamlResult<JsonValue> {
    match value {
        YamlValue::Null => Ok(JsonValue::Null),
        YamlValue::Bool(flag) => Ok(JsonValue::Bool(*flag)),
        YamlValue::Number(number) => {
            if let Some(int) = number.as_i64() {
                Ok(JsonValue::from(int))
            } else if let Some(int) = number.as_u64() {
                Ok(JsonValue::from(int))
            } else {
                let float = number.as_f64().unwrap_or(f64::NAN);
                Number::from_f64(float)
                    .map(JsonValue::Number)
                    .ok_or_else(|| unrepresentable(location, format!("{number} is not finite")))
            }
        }
        YamlValue::String(text) => Ok(JsonValue::String(text.clone())),
        YamlValue::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| to_json(item, &Location::Index(location, index)))
            .collect::<YamlResult<Vec<_>>>()
            .map(JsonValue::Array),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, item) in mapping {
                let YamlValue::String(key) = key else {
                    return Err(unrepresentable(
                        location,
                        format!("mapping key {} is not a string", describe(key)),
                    ));
                };
                let item = to_json(item, &Location::Key(location, key))?;
                object.insert(key.clone(), item);
            }
            Ok(JsonValue::Object(object))
        }
        YamlValue::Tagged(tagged) => Err(unrepresentable(
            location,
            format!("tagged value {} is not supported", tagged.tag),
        )),
    }
}

fn describe(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => "null".to_owned(),
        YamlValue::Bool(flag) => flag.to_string(),
        YamlValue::Number(number) => number.to_string(),
        YamlValue::String(text) => format!("'{text}'"),
        YamlValue::Sequence(_) => "a sequence".to_owned(),
        YamlValue::Mapping(_) => "a mapping".to_owned(),
        YamlValue::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
