//! Decoding primitives called by the generated record impls.
//!
//! Every function takes the [`FieldPath`] of the value it is looking at, so errors can say where
//! in the document they happened.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

use super::{FieldPath, JsonMap};
use crate::bytes::Bytes;
use crate::reflect::{Element, MessageType, Oneof, OneofAlternative, ProtoEnum};
use crate::timestamp::{Timestamp, TimestampError};
use crate::{CodecError, CodecResult};

/// Largest magnitude below which every integer is exactly representable as a double.
const MAX_SAFE_INTEGER: u64 = 1 << 53;

// ============================================================================
// Object access
// ============================================================================

/// Finds a field's value in its parent object, trying the JSON name first and the schema name
/// second. Returns the value with its path.
///
/// # Errors
///
/// An explicit `null` is rejected: absence is expressed by leaving the key out.
pub fn lookup<'v>(
    object: &'v JsonMap,
    name: &str,
    json_name: &str,
    path: &FieldPath,
) -> CodecResult<Option<(&'v Value, FieldPath)>> {
    let found = object
        .get(json_name)
        .map(|value| (value, json_name))
        .or_else(|| object.get(name).map(|value| (value, name)));

    match found {
        None => Ok(None),
        Some((Value::Null, key)) => Err(CodecError::mismatch(
            &path.field(key),
            "null is not a valid value; omit the key instead",
        )),
        Some((value, key)) => Ok(Some((value, path.field(key)))),
    }
}

/// Reads a single value, or `None` when its key is absent.
pub fn read_element<T: Element>(
    object: &JsonMap,
    name: &str,
    json_name: &str,
    path: &FieldPath,
) -> CodecResult<Option<T>> {
    match lookup(object, name, json_name, path)? {
        Some((value, path)) => T::decode(value, &path).map(Some),
        None => Ok(None),
    }
}

/// Reads a oneof group whose alternatives sit directly in `object`.
///
/// # Errors
///
/// Fails with [`CodecError::MalformedOneof`] when keys for two alternatives are present.
pub fn read_oneof<T: Oneof>(
    object: &JsonMap,
    group: &'static str,
    path: &FieldPath,
) -> CodecResult<Option<T>> {
    let mut selected: Option<(&'static OneofAlternative, &Value, FieldPath)> = None;
    for alternative in T::ALTERNATIVES {
        let Some((value, value_path)) =
            lookup(object, alternative.name, alternative.json_name, path)?
        else {
            continue;
        };
        if let Some((first, _, _)) = &selected {
            return Err(CodecError::MalformedOneof {
                path: path.to_string(),
                group,
                first: first.json_name,
                second: alternative.json_name,
            });
        }
        selected = Some((alternative, value, value_path));
    }

    match selected {
        Some((alternative, value, value_path)) => {
            T::decode_alternative(alternative, value, &value_path).map(Some)
        }
        None => Ok(None),
    }
}

/// Decodes a record from a JSON object. Keys the record does not declare are skipped.
pub fn decode_message<M: MessageType>(value: &Value, path: &FieldPath) -> CodecResult<M> {
    let object = value.as_object().ok_or_else(|| {
        CodecError::mismatch(
            path,
            format!(
                "expected an object for {}, found {}",
                M::DESCRIPTOR.name(),
                kind_of(value)
            ),
        )
    })?;

    for key in object.keys() {
        if !M::DESCRIPTOR.claims_key(key) {
            tracing::debug!(
                record = M::DESCRIPTOR.full_name,
                path = %path.field(key),
                "ignoring unknown key"
            );
        }
    }

    M::decode_object(object, path)
}

pub fn decode_list<T: Element>(value: &Value, path: &FieldPath) -> CodecResult<Vec<T>> {
    let items = value.as_array().ok_or_else(|| {
        CodecError::mismatch(path, format!("expected an array, found {}", kind_of(value)))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| T::decode(item, &path.index(index)))
        .collect()
}

pub fn decode_map<T: Element>(value: &Value, path: &FieldPath) -> CodecResult<BTreeMap<String, T>> {
    let entries = value.as_object().ok_or_else(|| {
        CodecError::mismatch(path, format!("expected an object, found {}", kind_of(value)))
    })?;

    entries
        .iter()
        .map(|(key, item)| Ok((key.clone(), T::decode(item, &path.key(key))?)))
        .collect()
}

// ============================================================================
// Scalars
// ============================================================================

pub fn decode_string(value: &Value, path: &FieldPath) -> CodecResult<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(expected(path, "a string", other)),
    }
}

pub fn decode_bool(value: &Value, path: &FieldPath) -> CodecResult<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        other => Err(expected(path, "a boolean", other)),
    }
}

/// int32 accepts a JSON number or a decimal string.
pub fn decode_i32(value: &Value, path: &FieldPath) -> CodecResult<i32> {
    let wide = match value {
        Value::Number(number) => integral(number, path)?,
        Value::String(text) => text
            .parse::<i64>()
            .map_err(|_| CodecError::mismatch(path, format!("'{text}' is not an integer")))?,
        other => return Err(expected(path, "an integer", other)),
    };
    i32::try_from(wide)
        .map_err(|_| CodecError::mismatch(path, format!("{wide} is out of range for int32")))
}

/// int64 is written as a decimal string but a JSON number is accepted too.
pub fn decode_i64(value: &Value, path: &FieldPath) -> CodecResult<i64> {
    match value {
        Value::String(text) => text
            .parse::<i64>()
            .map_err(|_| CodecError::mismatch(path, format!("'{text}' is not an int64"))),
        Value::Number(number) => integral(number, path),
        other => Err(expected(path, "an int64 string or number", other)),
    }
}

/// double accepts a JSON number, a numeric string, or one of `NaN`, `Infinity`, `-Infinity`.
///
/// # Errors
///
/// An integer beyond ±2^53 has no exact double and fails with [`CodecError::PrecisionLoss`].
pub fn decode_f64(value: &Value, path: &FieldPath) -> CodecResult<f64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                exact_double(int.unsigned_abs(), path)?;
                Ok(int as f64)
            } else if let Some(int) = number.as_u64() {
                exact_double(int, path)?;
                Ok(int as f64)
            } else {
                let float = number
                    .as_f64()
                    .ok_or_else(|| CodecError::mismatch(path, format!("{number} is not a double")))?;
                let integer_text = !number.to_string().contains(['.', 'e', 'E']);
                if integer_text && float.abs() > MAX_SAFE_INTEGER as f64 {
                    return Err(CodecError::precision_loss(
                        path,
                        format!("{number} has no exact double representation"),
                    ));
                }
                Ok(float)
            }
        }
        Value::String(text) => match text.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|parsed| parsed.is_finite())
                .ok_or_else(|| CodecError::mismatch(path, format!("'{other}' is not a double"))),
        },
        other => Err(expected(path, "a number", other)),
    }
}

/// Bytes are base64; the URL-safe alphabet is accepted as well as the standard one.
pub fn decode_bytes(value: &Value, path: &FieldPath) -> CodecResult<Bytes> {
    match value {
        Value::String(text) => STANDARD
            .decode(text)
            .or_else(|_| URL_SAFE.decode(text))
            .map(Bytes::from)
            .map_err(|_| CodecError::mismatch(path, "not valid base64")),
        other => Err(expected(path, "a base64 string", other)),
    }
}

pub fn decode_timestamp(value: &Value, path: &FieldPath) -> CodecResult<Timestamp> {
    match value {
        Value::String(text) => Timestamp::parse(text).map_err(|err| match err {
            TimestampError::PrecisionLoss { .. } => CodecError::precision_loss(path, err.to_string()),
            TimestampError::Invalid(_) | TimestampError::OutOfRange(_) => {
                CodecError::mismatch(path, err.to_string())
            }
        }),
        other => Err(expected(path, "an RFC 3339 string", other)),
    }
}

/// Enumerations are written by name; the number is accepted as well.
pub fn decode_enum<E: ProtoEnum>(value: &Value, path: &FieldPath) -> CodecResult<E> {
    match value {
        Value::String(name) => E::from_str_name(name).ok_or_else(|| {
            CodecError::mismatch(path, format!("'{name}' is not a value of {}", E::FULL_NAME))
        }),
        Value::Number(number) => number
            .as_i64()
            .and_then(|wide| i32::try_from(wide).ok())
            .and_then(E::from_number)
            .ok_or_else(|| {
                CodecError::mismatch(path, format!("{number} is not a value of {}", E::FULL_NAME))
            }),
        other => Err(expected(path, "an enum name", other)),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Describes a JSON value's type for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn expected(path: &FieldPath, wanted: &str, found: &Value) -> CodecError {
    CodecError::mismatch(path, format!("expected {wanted}, found {}", kind_of(found)))
}

/// An integral JSON number as i64. Floats are accepted only when they hold an exact integer.
fn integral(number: &Number, path: &FieldPath) -> CodecResult<i64> {
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    if number.is_u64() {
        return Err(CodecError::mismatch(path, format!("{number} is out of range for int64")));
    }

    let float = number.as_f64().unwrap_or(f64::NAN);
    if float.fract() != 0.0 || !float.is_finite() {
        return Err(CodecError::mismatch(path, format!("{number} is not an integer")));
    }
    if float.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(CodecError::precision_loss(
            path,
            format!("{number} is beyond the exactly representable integer range"),
        ));
    }
    Ok(float as i64)
}

fn exact_double(magnitude: u64, path: &FieldPath) -> CodecResult<()> {
    if magnitude > MAX_SAFE_INTEGER {
        return Err(CodecError::precision_loss(
            path,
            format!("{magnitude} has no exact double representation"),
        ));
    }
    Ok(())
}
