use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Number, Value};

use super::{JsonMap, PresencePolicy};
use crate::reflect::{Cardinality, FieldDescriptor, FieldValue, Message};

/// Encodes a record into an object whose keys follow the descriptor's field order.
pub(super) fn encode_message(message: &dyn Message, policy: PresencePolicy) -> JsonMap {
    let descriptor = message.descriptor();
    let mut object = JsonMap::new();

    for field in descriptor.fields {
        if field.kind.is_oneof() {
            let Some(case) = message.oneof_case(field.name) else {
                continue;
            };
            let key = field
                .alternatives()
                .iter()
                .find(|alternative| alternative.name == case)
                .map_or(case, |alternative| alternative.json_name);
            object.insert(key.to_owned(), encode_value(&message.get(field.name), policy));
            continue;
        }

        let value = message.get(field.name);
        if should_emit(field, &value, policy) {
            object.insert(field.json_name.to_owned(), encode_value(&value, policy));
        }
    }

    object
}

/// Records, timestamps, lists and maps are written when present or non-empty. Scalars and enums
/// follow the presence policy.
fn should_emit(field: &FieldDescriptor, value: &FieldValue<'_>, policy: PresencePolicy) -> bool {
    if field.cardinality != Cardinality::Singular || field.kind.has_presence() {
        return !value.is_absent() && !value.is_default();
    }
    match policy {
        PresencePolicy::IncludeDefaults => true,
        PresencePolicy::ExplicitOnly => !value.is_default(),
    }
}

fn encode_value(value: &FieldValue<'_>, policy: PresencePolicy) -> Value {
    match value {
        FieldValue::Absent => Value::Null,
        FieldValue::String(text) => Value::String((*text).to_owned()),
        FieldValue::Int32(int) => Value::from(*int),
        FieldValue::Int64(int) => Value::String(int.to_string()),
        FieldValue::Double(float) => encode_double(*float),
        FieldValue::Bool(flag) => Value::Bool(*flag),
        FieldValue::Bytes(bytes) => Value::String(STANDARD.encode(bytes)),
        FieldValue::Enum(value) => Value::String(value.name.to_owned()),
        FieldValue::Timestamp(timestamp) => Value::String(timestamp.to_canonical_string()),
        FieldValue::Message(message) => Value::Object(encode_message(*message, policy)),
        FieldValue::List(items) => Value::Array(
            items
                .iter()
                .map(|item| encode_value(item, policy))
                .collect(),
        ),
        FieldValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| ((*key).to_owned(), encode_value(item, policy)))
                .collect(),
        ),
    }
}

fn encode_double(float: f64) -> Value {
    match Number::from_f64(float) {
        Some(number) => Value::Number(number),
        None if float.is_nan() => Value::String("NaN".to_owned()),
        None if float.is_sign_positive() => Value::String("Infinity".to_owned()),
        None => Value::String("-Infinity".to_owned()),
    }
}
