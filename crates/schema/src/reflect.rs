//! Reflective field model shared by every record type.
//!
//! Each record type carries a `const` [`MessageDescriptor`]: its fields in declaration order,
//! each with a kind and a cardinality. Codecs never match on concrete record types; they walk the
//! descriptor and read values through [`Message::get`] and [`Message::oneof_case`].
//!
//! The descriptor tables and accessors are generated by the [`message!`](crate::message),
//! [`oneof!`](crate::oneof) and [`proto_enum!`](crate::proto_enum) macros. The traits below are
//! what those macros implement, and what the field types plugged into them must provide:
//!
//! - [`Element`]: something that can be a single value (a scalar, an enum, a timestamp, a record).
//! - [`Optional`]: something with presence, held as `Option<T>` (records, timestamps, oneofs).
//! - [`Field`]: anything that can sit in a record field (scalars, enums, `Option<T: Optional>`,
//!   `Vec<T: Element>`, `BTreeMap<String, T: Element>`).

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::bytes::Bytes;
use crate::json::decode;
use crate::json::{FieldPath, JsonMap};
use crate::timestamp::Timestamp;
use crate::CodecResult;

// ============================================================================
// Descriptors
// ============================================================================

/// How many values a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    Singular,
    Repeated,
    Map,
}

/// Scalar value types. None of these has an "unset" state distinct from its zero value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Int32,
    Int64,
    Double,
    Bool,
    Bytes,
}

/// What a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarType),
    /// A closed enumeration, named by its fully qualified name.
    Enum(&'static str),
    Timestamp,
    /// A nested record, named by its fully qualified name.
    Message(&'static str),
    /// A group of alternatives of which at most one is set.
    Oneof(&'static [OneofAlternative]),
}

impl FieldKind {
    /// Whether an unset value is distinguishable from a zero value.
    pub fn has_presence(self) -> bool {
        matches!(
            self,
            FieldKind::Timestamp | FieldKind::Message(_) | FieldKind::Oneof(_)
        )
    }

    pub fn is_oneof(self) -> bool {
        matches!(self, FieldKind::Oneof(_))
    }
}

/// One alternative of a oneof group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OneofAlternative {
    pub name: &'static str,
    pub json_name: &'static str,
    pub kind: FieldKind,
}

/// One entry of a record's field table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Schema (snake_case) name. For a oneof this is the group name.
    pub name: &'static str,
    /// JSON (lowerCamelCase) name. Unused for a oneof group, whose alternatives carry their own.
    pub json_name: &'static str,
    pub kind: FieldKind,
    pub cardinality: Cardinality,
}

impl FieldDescriptor {
    /// Alternatives of a oneof group; empty for any other field.
    pub fn alternatives(&self) -> &'static [OneofAlternative] {
        match self.kind {
            FieldKind::Oneof(alternatives) => alternatives,
            _ => &[],
        }
    }
}

/// Field table of one record type.
#[derive(Debug, PartialEq, Eq)]
pub struct MessageDescriptor {
    pub full_name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    /// The unqualified type name, e.g. `OntologyClass`.
    pub fn name(&self) -> &'static str {
        self.full_name
            .rsplit('.')
            .next()
            .unwrap_or(self.full_name)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Names of the oneof groups, in declaration order.
    pub fn oneof_groups(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|field| field.kind.is_oneof())
            .map(|field| field.name)
    }

    /// Whether a JSON object key belongs to this record, under either spelling.
    pub fn claims_key(&self, key: &str) -> bool {
        self.fields.iter().any(|field| match field.kind {
            FieldKind::Oneof(alternatives) => alternatives
                .iter()
                .any(|alternative| alternative.name == key || alternative.json_name == key),
            _ => field.name == key || field.json_name == key,
        })
    }
}

// ============================================================================
// Values
// ============================================================================

/// An enumeration value as seen through reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub name: &'static str,
    pub number: i32,
}

/// A borrowed view of one field's value.
#[derive(Clone, Debug)]
pub enum FieldValue<'a> {
    /// An unset record, timestamp or oneof.
    Absent,
    String(&'a str),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Bool(bool),
    Bytes(&'a [u8]),
    Enum(EnumValue),
    Timestamp(&'a Timestamp),
    Message(&'a dyn Message),
    List(Vec<FieldValue<'a>>),
    Map(Vec<(&'a str, FieldValue<'a>)>),
}

impl<'a> FieldValue<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Whether the value equals its type's zero value (empty for lists and maps).
    ///
    /// `-0.0` is not a zero value: its bit pattern differs, and dropping it would change the
    /// decoded value.
    pub fn is_default(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::String(value) => value.is_empty(),
            FieldValue::Int32(value) => *value == 0,
            FieldValue::Int64(value) => *value == 0,
            FieldValue::Double(value) => value.to_bits() == 0,
            FieldValue::Bool(value) => !*value,
            FieldValue::Bytes(value) => value.is_empty(),
            FieldValue::Enum(value) => value.number == 0,
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Map(entries) => entries.is_empty(),
            FieldValue::Timestamp(_) | FieldValue::Message(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::String(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&'a dyn Message> {
        match self {
            FieldValue::Message(message) => Some(*message),
            _ => None,
        }
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Object-safe reflective access to a record.
pub trait Message: fmt::Debug + Send + Sync {
    fn descriptor(&self) -> &'static MessageDescriptor;

    /// The value of a field, by schema name.
    ///
    /// Unset scalars read as their zero value; unset records, timestamps and oneofs read as
    /// [`FieldValue::Absent`]. For a oneof group this is the value of the active alternative.
    ///
    /// # Panics
    ///
    /// Panics if the record has no field of that name.
    fn get(&self, field: &str) -> FieldValue<'_>;

    /// The schema name of the active alternative of a oneof group, if any.
    ///
    /// # Panics
    ///
    /// Panics if `group` is not a oneof group of this record.
    fn oneof_case(&self, group: &str) -> Option<&'static str>;
}

/// A concrete record type that can be constructed by the decoder.
pub trait MessageType: Message + Clone + Default + PartialEq + Sized + 'static {
    const DESCRIPTOR: &'static MessageDescriptor;

    /// Builds a value from a JSON object whose shape has not been checked yet.
    fn decode_object(object: &JsonMap, path: &FieldPath) -> CodecResult<Self>;
}

/// A closed enumeration with a zero default.
pub trait ProtoEnum: Copy + Default + Sized + 'static {
    const FULL_NAME: &'static str;

    fn number(self) -> i32;
    fn as_str_name(self) -> &'static str;
    fn from_number(number: i32) -> Option<Self>;
    fn from_str_name(name: &str) -> Option<Self>;
}

/// A single value: the payload of a singular field, a list item, a map value or a oneof
/// alternative.
pub trait Element: Sized {
    const KIND: FieldKind;

    fn reflect(&self) -> FieldValue<'_>;
    fn decode(value: &Value, path: &FieldPath) -> CodecResult<Self>;
}

/// A value type with presence, stored as `Option<Self>`.
pub trait Optional: Sized {
    const KIND: FieldKind;

    fn reflect(&self) -> FieldValue<'_>;

    fn case(&self) -> Option<&'static str> {
        None
    }

    /// Reads the value from its parent object, or `None` when no key for it is present.
    fn read_present(
        object: &JsonMap,
        name: &'static str,
        json_name: &'static str,
        path: &FieldPath,
    ) -> CodecResult<Option<Self>>;
}

/// The group behaviour of a oneof enum.
pub trait Oneof: Sized {
    const ALTERNATIVES: &'static [OneofAlternative];

    /// Schema name of the populated alternative.
    fn case(&self) -> &'static str;
    fn reflect(&self) -> FieldValue<'_>;
    fn decode_alternative(
        alternative: &'static OneofAlternative,
        value: &Value,
        path: &FieldPath,
    ) -> CodecResult<Self>;
}

/// Anything that can be declared as a record field.
pub trait Field: Default + Sized {
    const KIND: FieldKind;
    const CARDINALITY: Cardinality = Cardinality::Singular;

    fn reflect(&self) -> FieldValue<'_>;

    fn case(&self) -> Option<&'static str> {
        None
    }

    /// Reads the field from its parent object; absent keys yield the default value.
    fn read(
        object: &JsonMap,
        name: &'static str,
        json_name: &'static str,
        path: &FieldPath,
    ) -> CodecResult<Self>;
}

#[doc(hidden)]
#[track_caller]
pub fn unknown_field(descriptor: &MessageDescriptor, field: &str) -> ! {
    panic!("{} has no field named '{field}'", descriptor.full_name)
}

#[doc(hidden)]
#[track_caller]
pub fn not_a_oneof(descriptor: &MessageDescriptor, group: &str) -> ! {
    panic!("'{group}' is not a oneof group of {}", descriptor.full_name)
}

// ============================================================================
// Scalar implementations
// ============================================================================

impl Element for String {
    const KIND: FieldKind = FieldKind::Scalar(ScalarType::String);

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::String(self)
    }

    fn decode(value: &Value, path: &FieldPath) -> CodecResult<Self> {
        decode::decode_string(value, path)
    }
}

impl Element for i32 {
    const KIND: FieldKind = FieldKind::Scalar(ScalarType::Int32);

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::Int32(*self)
    }

    fn decode(value: &Value, path: &FieldPath) -> CodecResult<Self> {
        decode::decode_i32(value, path)
    }
}

impl Element for i64 {
    const KIND: FieldKind = FieldKind::Scalar(ScalarType::Int64);

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::Int64(*self)
    }

    fn decode(value: &Value, path: &FieldPath) -> CodecResult<Self> {
        decode::decode_i64(value, path)
    }
}

impl Element for f64 {
    const KIND: FieldKind = FieldKind::Scalar(ScalarType::Double);

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::Double(*self)
    }

    fn decode(value: &Value, path: &FieldPath) -> CodecResult<Self> {
        decode::decode_f64(value, path)
    }
}

impl Element for bool {
    const KIND: FieldKind = FieldKind::Scalar(ScalarType::Bool);

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }

    fn decode(value: &Value, path: &FieldPath) -> CodecResult<Self> {
        decode::decode_bool(value, path)
    }
}

impl Element for Bytes {
    const KIND: FieldKind = FieldKind::Scalar(ScalarType::Bytes);

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::Bytes(self.as_slice())
    }

    fn decode(value: &Value, path: &FieldPath) -> CodecResult<Self> {
        decode::decode_bytes(value, path)
    }
}

impl Element for Timestamp {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(self)
    }

    fn decode(value: &Value, path: &FieldPath) -> CodecResult<Self> {
        decode::decode_timestamp(value, path)
    }
}

impl Optional for Timestamp {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(self)
    }

    fn read_present(
        object: &JsonMap,
        name: &'static str,
        json_name: &'static str,
        path: &FieldPath,
    ) -> CodecResult<Option<Self>> {
        decode::read_element(object, name, json_name, path)
    }
}

macro_rules! scalar_fields {
    ($($ty:ty),* $(,)?) => {$(
        impl Field for $ty {
            const KIND: FieldKind = <$ty as Element>::KIND;

            fn reflect(&self) -> FieldValue<'_> {
                Element::reflect(self)
            }

            fn read(
                object: &JsonMap,
                name: &'static str,
                json_name: &'static str,
                path: &FieldPath,
            ) -> CodecResult<Self> {
                Ok(decode::read_element(object, name, json_name, path)?.unwrap_or_default())
            }
        }
    )*};
}

scalar_fields!(String, i32, i64, f64, bool, Bytes);

// ============================================================================
// Container implementations
// ============================================================================

impl<T: Optional> Field for Option<T> {
    const KIND: FieldKind = T::KIND;

    fn reflect(&self) -> FieldValue<'_> {
        match self {
            Some(value) => Optional::reflect(value),
            None => FieldValue::Absent,
        }
    }

    fn case(&self) -> Option<&'static str> {
        self.as_ref().and_then(|value| Optional::case(value))
    }

    fn read(
        object: &JsonMap,
        name: &'static str,
        json_name: &'static str,
        path: &FieldPath,
    ) -> CodecResult<Self> {
        T::read_present(object, name, json_name, path)
    }
}

impl<T: Element> Field for Vec<T> {
    const KIND: FieldKind = T::KIND;
    const CARDINALITY: Cardinality = Cardinality::Repeated;

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::List(self.iter().map(|item| Element::reflect(item)).collect())
    }

    fn read(
        object: &JsonMap,
        name: &'static str,
        json_name: &'static str,
        path: &FieldPath,
    ) -> CodecResult<Self> {
        match decode::lookup(object, name, json_name, path)? {
            Some((value, path)) => decode::decode_list(value, &path),
            None => Ok(Vec::new()),
        }
    }
}

impl<T: Element> Field for BTreeMap<String, T> {
    const KIND: FieldKind = T::KIND;
    const CARDINALITY: Cardinality = Cardinality::Map;

    fn reflect(&self) -> FieldValue<'_> {
        FieldValue::Map(
            self.iter()
                .map(|(key, value)| (key.as_str(), Element::reflect(value)))
                .collect(),
        )
    }

    fn read(
        object: &JsonMap,
        name: &'static str,
        json_name: &'static str,
        path: &FieldPath,
    ) -> CodecResult<Self> {
        match decode::lookup(object, name, json_name, path)? {
            Some((value, path)) => decode::decode_map(value, &path),
            None => Ok(BTreeMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v2::{
        Age, File, Individual, OntologyClass, PhenotypicFeature, Sex, TimeElement,
        TimeElementKind,
    };

    #[test]
    fn descriptor_preserves_declaration_order() {
        let names: Vec<_> = PhenotypicFeature::DESCRIPTOR
            .fields
            .iter()
            .map(|field| field.name)
            .collect();
        assert_eq!(
            names,
            [
                "description",
                "type",
                "excluded",
                "severity",
                "modifiers",
                "onset",
                "resolution",
                "evidence"
            ]
        );
    }

    #[test]
    fn descriptor_reports_kind_and_cardinality() {
        let descriptor = PhenotypicFeature::DESCRIPTOR;

        let excluded = descriptor.field("excluded").expect("field exists");
        assert_eq!(excluded.kind, FieldKind::Scalar(ScalarType::Bool));
        assert_eq!(excluded.cardinality, Cardinality::Singular);

        let modifiers = descriptor.field("modifiers").expect("field exists");
        assert_eq!(
            modifiers.kind,
            FieldKind::Message("org.phenopackets.schema.v2.core.OntologyClass")
        );
        assert_eq!(modifiers.cardinality, Cardinality::Repeated);

        let attributes = File::DESCRIPTOR.field("file_attributes").expect("field exists");
        assert_eq!(attributes.cardinality, Cardinality::Map);
        assert_eq!(attributes.json_name, "fileAttributes");
    }

    #[test]
    fn oneof_group_lists_every_alternative() {
        let element = TimeElement::DESCRIPTOR.field("element").expect("group exists");
        let names: Vec<_> = element.alternatives().iter().map(|a| a.json_name).collect();
        assert_eq!(
            names,
            [
                "gestationalAge",
                "age",
                "ageRange",
                "ontologyClass",
                "timestamp",
                "interval"
            ]
        );
        assert_eq!(
            TimeElement::DESCRIPTOR.oneof_groups().collect::<Vec<_>>(),
            ["element"]
        );
    }

    #[test]
    fn get_returns_zero_values_for_unset_scalars_and_absent_for_messages() {
        let individual = Individual::default();
        assert_eq!(individual.get("id").as_str(), Some(""));
        assert!(individual.get("id").is_default());
        assert!(individual.get("vital_status").is_absent());
        assert!(individual.get("date_of_birth").is_absent());
        assert!(matches!(
            individual.get("sex"),
            FieldValue::Enum(EnumValue { name: "UNKNOWN_SEX", number: 0 })
        ));
    }

    #[test]
    fn get_reads_populated_values() {
        let individual = Individual {
            id: "patient-1".into(),
            sex: Sex::Female,
            taxonomy: Some(OntologyClass::new("NCBITaxon:9606", "human")),
            ..Default::default()
        };
        assert_eq!(individual.get("id").as_str(), Some("patient-1"));
        let taxonomy = individual.get("taxonomy").as_message().expect("present");
        assert_eq!(taxonomy.get("label").as_str(), Some("human"));
    }

    #[test]
    fn oneof_case_reports_active_alternative() {
        let unset = TimeElement::default();
        assert_eq!(unset.oneof_case("element"), None);
        assert!(unset.get("element").is_absent());

        let age = TimeElement {
            element: Some(TimeElementKind::Age(Age::new("P14Y"))),
        };
        assert_eq!(age.oneof_case("element"), Some("age"));
        let payload = age.get("element").as_message().expect("age payload");
        assert_eq!(payload.get("iso8601duration").as_str(), Some("P14Y"));
    }

    #[test]
    #[should_panic(expected = "has no field named 'nope'")]
    fn get_with_unknown_field_is_fatal() {
        let _ = OntologyClass::default().get("nope");
    }

    #[test]
    #[should_panic(expected = "is not a oneof group")]
    fn oneof_case_on_plain_field_is_fatal() {
        let _ = TimeElement::default().oneof_case("age");
    }

    #[test]
    #[should_panic(expected = "is not a oneof group")]
    fn oneof_case_on_scalar_field_is_fatal() {
        let _ = OntologyClass::default().oneof_case("id");
    }

    #[test]
    fn negative_zero_is_not_a_default_value() {
        assert!(FieldValue::Double(0.0).is_default());
        assert!(!FieldValue::Double(-0.0).is_default());
    }

    #[test]
    fn claims_key_accepts_both_spellings() {
        assert!(Individual::DESCRIPTOR.claims_key("alternateIds"));
        assert!(Individual::DESCRIPTOR.claims_key("alternate_ids"));
        assert!(TimeElement::DESCRIPTOR.claims_key("ageRange"));
        assert!(!TimeElement::DESCRIPTOR.claims_key("element"));
        assert!(!Individual::DESCRIPTOR.claims_key("favouriteColour"));
    }
}
