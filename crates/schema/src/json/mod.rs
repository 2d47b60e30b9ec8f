//! Canonical JSON form of records.
//!
//! Encoding walks a record's descriptor table, so object keys come out in declaration order and
//! the output for a given value and [`PresencePolicy`] is always byte-identical. Decoding accepts
//! both schema and JSON key spellings, skips unknown keys and is all-or-nothing: any error
//! discards the partially built record.

pub mod decode;
mod encode;
mod path;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::reflect::{Message, MessageType};
use crate::CodecResult;

pub use path::FieldPath;

/// A JSON object with insertion-ordered keys.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Any JSON value.
pub type JsonValue = serde_json::Value;

/// Which scalar fields are written when they hold their zero value.
///
/// Scalars carry no presence bit, so the policy is applied to every scalar and enum field
/// alike. Records, timestamps, oneofs, lists and maps are written only when present or
/// non-empty, under either policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresencePolicy {
    /// Omit scalars equal to their zero value. A scalar explicitly set to zero decodes as unset,
    /// which is indistinguishable anyway.
    #[default]
    ExplicitOnly,
    /// Write every scalar, zero or not.
    IncludeDefaults,
}

impl PresencePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            PresencePolicy::ExplicitOnly => "explicit-only",
            PresencePolicy::IncludeDefaults => "include-defaults",
        }
    }
}

impl fmt::Display for PresencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "explicit-only" | "explicit" => Ok(PresencePolicy::ExplicitOnly),
            "include-defaults" | "defaults" => Ok(PresencePolicy::IncludeDefaults),
            other => Err(format!(
                "unknown presence policy '{other}' (expected 'explicit-only' or 'include-defaults')"
            )),
        }
    }
}

/// Encodes a record as a JSON value.
pub fn to_value(message: &dyn Message, policy: PresencePolicy) -> JsonValue {
    JsonValue::Object(encode::encode_message(message, policy))
}

/// Encodes a record as compact JSON text.
pub fn to_string(message: &dyn Message, policy: PresencePolicy) -> String {
    to_value(message, policy).to_string()
}

/// Encodes a record as JSON text indented by two spaces.
pub fn to_string_pretty(message: &dyn Message, policy: PresencePolicy) -> String {
    format!("{:#}", to_value(message, policy))
}

/// Decodes a record from JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Parse`](crate::CodecError::Parse) for malformed text, and the
/// structural variants for well-formed text that does not fit `M`.
pub fn from_str<M: MessageType>(text: &str) -> CodecResult<M> {
    let value: JsonValue = serde_json::from_str(text)?;
    from_value(&value)
}

/// Decodes a record from an already parsed JSON value.
pub fn from_value<M: MessageType>(value: &JsonValue) -> CodecResult<M> {
    decode::decode_message(value, &FieldPath::root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::Bytes;
    use crate::timestamp::Timestamp;
    use crate::v2::{
        Age, AgeRange, Diagnosis, Disease, File, GenomicInterpretation, Individual,
        Interpretation, MetaData, OntologyClass, Phenopacket, PhenotypicFeature, Resource, Sex,
        TimeElement, TimeElementKind, VcfRecord,
    };
    use crate::CodecError;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    message! {
        /// Exercises every scalar type in one place.
        pub struct ScalarSample = "test.ScalarSample" {
            text: String => ("text", "text"),
            small: i32 => ("small", "small"),
            large: i64 => ("large", "large"),
            ratio: f64 => ("ratio", "ratio"),
            flag: bool => ("flag", "flag"),
            blob: Bytes => ("blob", "blob"),
            sex: Sex => ("sex", "sex"),
            when: Option<Timestamp> => ("when", "when"),
            counts: BTreeMap<String, i64> => ("counts", "counts"),
        }
    }

    fn severe() -> OntologyClass {
        OntologyClass::new("HP:0012828", "Severe")
    }

    fn feature(id: &str, label: &str) -> PhenotypicFeature {
        PhenotypicFeature {
            r#type: Some(OntologyClass::new(id, label)),
            ..Default::default()
        }
    }

    #[test]
    fn ontology_class_encodes_compactly_and_round_trips() {
        let text = to_string(&severe(), PresencePolicy::ExplicitOnly);
        assert_eq!(text, r#"{"id":"HP:0012828","label":"Severe"}"#);
        assert_eq!(from_str::<OntologyClass>(&text).unwrap(), severe());
    }

    #[test]
    fn oneof_alternative_is_keyed_by_its_own_name() {
        let onset = TimeElement {
            element: Some(TimeElementKind::Age(Age::new("P14Y"))),
        };
        let text = to_string(&onset, PresencePolicy::ExplicitOnly);
        assert_eq!(text, r#"{"age":{"iso8601Duration":"P14Y"}}"#);
        assert_eq!(from_str::<TimeElement>(&text).unwrap(), onset);
    }

    #[test]
    fn populated_oneof_writes_exactly_one_key() {
        let onset = TimeElement {
            element: Some(TimeElementKind::AgeRange(AgeRange {
                start: Some(Age::new("P5Y")),
                end: Some(Age::new("P10Y")),
            })),
        };
        let value = to_value(&onset, PresencePolicy::IncludeDefaults);
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("ageRange"));
    }

    #[test]
    fn unset_oneof_writes_nothing() {
        let text = to_string(&TimeElement::default(), PresencePolicy::IncludeDefaults);
        assert_eq!(text, "{}");
    }

    #[test]
    fn repeated_fields_keep_their_order() {
        let record = Phenopacket {
            id: "ordered".into(),
            phenotypic_features: vec![
                feature("HP:0001250", "Seizure"),
                feature("HP:0001263", "Global developmental delay"),
                feature("HP:0000252", "Microcephaly"),
            ],
            ..Default::default()
        };
        let text = to_string(&record, PresencePolicy::ExplicitOnly);
        let decoded: Phenopacket = from_str(&text).unwrap();
        let ids: Vec<_> = decoded
            .phenotypic_features
            .iter()
            .map(|feature| feature.r#type.as_ref().unwrap().id.as_str())
            .collect();
        assert_eq!(ids, ["HP:0001250", "HP:0001263", "HP:0000252"]);
        assert_eq!(decoded, record);
    }

    #[test]
    fn map_fields_round_trip_as_a_set_of_pairs() {
        let file = File {
            uri: "file:///data/genome.vcf.gz".into(),
            individual_to_file_identifiers: BTreeMap::from([
                ("patient-1".to_owned(), "NA12345".to_owned()),
                ("patient-2".to_owned(), "NA12346".to_owned()),
            ]),
            ..Default::default()
        };
        let reordered = r#"{
            "uri": "file:///data/genome.vcf.gz",
            "individualToFileIdentifiers": {"patient-2": "NA12346", "patient-1": "NA12345"}
        }"#;
        assert_eq!(from_str::<File>(reordered).unwrap(), file);

        let text = to_string(&file, PresencePolicy::ExplicitOnly);
        assert_eq!(from_str::<File>(&text).unwrap(), file);
    }

    #[test]
    fn encoding_is_deterministic() {
        let record = Phenopacket {
            id: "deterministic".into(),
            subject: Some(Individual {
                id: "patient-1".into(),
                sex: Sex::Male,
                ..Default::default()
            }),
            phenotypic_features: vec![feature("HP:0001250", "Seizure")],
            ..Default::default()
        };
        for policy in [PresencePolicy::ExplicitOnly, PresencePolicy::IncludeDefaults] {
            assert_eq!(to_string(&record, policy), to_string(&record, policy));
            assert_eq!(
                to_string_pretty(&record, policy),
                to_string_pretty(&record, policy)
            );
        }
    }

    #[test]
    fn keys_follow_declaration_order() {
        let record = Phenopacket {
            id: "order".into(),
            meta_data: Some(MetaData {
                created_by: "curator".into(),
                ..Default::default()
            }),
            subject: Some(Individual {
                id: "patient-1".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = to_value(&record, PresencePolicy::ExplicitOnly);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["id", "subject", "metaData"]);
    }

    #[test]
    fn explicit_only_omits_zero_scalars() {
        let feature = PhenotypicFeature {
            r#type: Some(severe()),
            excluded: false,
            ..Default::default()
        };
        assert_eq!(
            to_string(&feature, PresencePolicy::ExplicitOnly),
            r#"{"type":{"id":"HP:0012828","label":"Severe"}}"#
        );
    }

    #[test]
    fn include_defaults_writes_every_scalar_but_no_absent_records() {
        let feature = PhenotypicFeature {
            r#type: Some(severe()),
            ..Default::default()
        };
        assert_eq!(
            to_string(&feature, PresencePolicy::IncludeDefaults),
            r#"{"description":"","type":{"id":"HP:0012828","label":"Severe"},"excluded":false}"#
        );
    }

    #[test]
    fn include_defaults_output_decodes_to_the_same_value() {
        let individual = Individual {
            id: "patient-1".into(),
            ..Default::default()
        };
        let text = to_string(&individual, PresencePolicy::IncludeDefaults);
        assert!(text.contains(r#""sex":"UNKNOWN_SEX""#));
        assert_eq!(from_str::<Individual>(&text).unwrap(), individual);
    }

    #[test]
    fn scalar_forms_follow_the_wire_conventions() {
        let sample = ScalarSample {
            text: "a".into(),
            small: -7,
            large: 9_007_199_254_740_993,
            ratio: 0.5,
            flag: true,
            blob: Bytes::from(vec![0xfb, 0xff]),
            sex: Sex::Female,
            when: Timestamp::from_unix(1_621_000_000, 120_000_000),
            counts: BTreeMap::from([("b".to_owned(), 2), ("a".to_owned(), 1)]),
        };
        let text = to_string(&sample, PresencePolicy::ExplicitOnly);
        assert_eq!(
            text,
            concat!(
                r#"{"text":"a","small":-7,"large":"9007199254740993","ratio":0.5,"flag":true,"#,
                r#""blob":"+/8=","sex":"FEMALE","when":"2021-05-14T13:46:40.120Z","#,
                r#""counts":{"a":"1","b":"2"}}"#
            )
        );
        assert_eq!(from_str::<ScalarSample>(&text).unwrap(), sample);
    }

    #[test]
    fn non_finite_doubles_are_written_as_strings() {
        for (ratio, expected) in [
            (f64::INFINITY, r#"{"ratio":"Infinity"}"#),
            (f64::NEG_INFINITY, r#"{"ratio":"-Infinity"}"#),
        ] {
            let sample = ScalarSample {
                ratio,
                ..Default::default()
            };
            let text = to_string(&sample, PresencePolicy::ExplicitOnly);
            assert_eq!(text, expected);
            assert_eq!(from_str::<ScalarSample>(&text).unwrap(), sample);
        }

        let nan = ScalarSample {
            ratio: f64::NAN,
            ..Default::default()
        };
        let text = to_string(&nan, PresencePolicy::ExplicitOnly);
        assert_eq!(text, r#"{"ratio":"NaN"}"#);
        assert!(from_str::<ScalarSample>(&text).unwrap().ratio.is_nan());
    }

    #[test]
    fn negative_zero_survives_explicit_only() {
        let sample = ScalarSample {
            ratio: -0.0,
            ..Default::default()
        };
        let text = to_string(&sample, PresencePolicy::ExplicitOnly);
        assert_eq!(text, r#"{"ratio":-0.0}"#);
        let decoded: ScalarSample = from_str(&text).unwrap();
        assert!(decoded.ratio.is_sign_negative());
    }

    #[test]
    fn decode_accepts_schema_names_and_prefers_json_names() {
        let text = r#"{"alternate_ids": ["a"], "alternateIds": ["b"], "id": "x"}"#;
        let individual: Individual = from_str(text).unwrap();
        assert_eq!(individual.alternate_ids, ["b"]);

        let text = r#"{"time_at_last_encounter": {"age": {"iso8601duration": "P3M"}}}"#;
        let individual: Individual = from_str(text).unwrap();
        assert_eq!(
            individual.time_at_last_encounter,
            Some(TimeElement {
                element: Some(TimeElementKind::Age(Age::new("P3M")))
            })
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let text = r#"{"id":"HP:0012828","label":"Severe","synonyms":["grave"],"extra":{"a":1}}"#;
        assert_eq!(from_str::<OntologyClass>(text).unwrap(), severe());
    }

    #[test]
    fn two_alternatives_of_one_group_are_rejected() {
        let text = r#"{"onset": {"age": {"iso8601Duration": "P1Y"}, "ontologyClass": {"id": "HP:0003577"}}}"#;
        let err = from_str::<PhenotypicFeature>(text).unwrap_err();
        match err {
            CodecError::MalformedOneof {
                path,
                group,
                first,
                second,
            } => {
                assert_eq!(path, "onset");
                assert_eq!(group, "element");
                assert_eq!(first, "age");
                assert_eq!(second, "ontologyClass");
            }
            other => panic!("expected MalformedOneof, got {other:?}"),
        }
    }

    #[test]
    fn nested_oneof_conflict_reports_its_path() {
        let text = r#"{
            "interpretations": [{
                "id": "i1",
                "diagnosis": {
                    "genomicInterpretations": [{
                        "gene": {"valueId": "HGNC:1100", "symbol": "BRCA1"},
                        "variantInterpretation": {"acmgPathogenicityClassification": "PATHOGENIC"}
                    }]
                }
            }]
        }"#;
        let err = from_str::<Phenopacket>(text).unwrap_err();
        assert!(matches!(err, CodecError::MalformedOneof { group: "call", .. }));
        assert_eq!(
            err.path(),
            Some("interpretations[0].diagnosis.genomicInterpretations[0]")
        );
    }

    #[test]
    fn wrong_json_type_is_a_schema_mismatch() {
        let err = from_str::<PhenotypicFeature>(r#"{"excluded": "yes"}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaMismatch { .. }), "{err:?}");
        assert_eq!(err.path(), Some("excluded"));

        let err = from_str::<Phenopacket>(r#"{"phenotypicFeatures": {"type": {}}}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaMismatch { .. }), "{err:?}");

        let err = from_str::<Phenopacket>(r#"["not", "an", "object"]"#).unwrap_err();
        assert_eq!(err.path(), Some("<root>"));
    }

    #[test]
    fn mismatch_inside_a_list_names_the_index() {
        let text = r#"{"phenotypicFeatures": [{"type": {"id": "HP:1"}}, {"type": {"id": 7}}]}"#;
        let err = from_str::<Phenopacket>(text).unwrap_err();
        assert_eq!(err.path(), Some("phenotypicFeatures[1].type.id"));
    }

    #[test]
    fn explicit_null_is_rejected() {
        let err = from_str::<OntologyClass>(r#"{"id": null}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaMismatch { .. }), "{err:?}");
        assert_eq!(err.path(), Some("id"));
    }

    #[test]
    fn unknown_enum_names_are_rejected_and_numbers_accepted() {
        let err = from_str::<Individual>(r#"{"sex": "ROBOT"}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaMismatch { .. }));

        let individual: Individual = from_str(r#"{"sex": 2}"#).unwrap();
        assert_eq!(individual.sex, Sex::Male);
    }

    #[test]
    fn timestamps_beyond_nanoseconds_lose_precision() {
        let text = r#"{"created": "2021-05-14T13:46:40.1234567891Z"}"#;
        let err = from_str::<MetaData>(text).unwrap_err();
        assert!(matches!(err, CodecError::PrecisionLoss { .. }), "{err:?}");
        assert_eq!(err.path(), Some("created"));
    }

    #[test]
    fn timestamps_keep_nanoseconds_and_normalise_offsets() {
        let text = r#"{"created": "2021-05-14T15:46:40.000000001+02:00"}"#;
        let meta: MetaData = from_str(text).unwrap();
        assert_eq!(
            to_string(&meta, PresencePolicy::ExplicitOnly),
            r#"{"created":"2021-05-14T13:46:40.000000001Z"}"#
        );
    }

    #[test]
    fn double_given_an_unrepresentable_integer_loses_precision() {
        let err = from_str::<ScalarSample>(r#"{"ratio": 9007199254740993}"#).unwrap_err();
        assert!(matches!(err, CodecError::PrecisionLoss { .. }), "{err:?}");

        let sample: ScalarSample = from_str(r#"{"ratio": 9007199254740992}"#).unwrap();
        assert_eq!(sample.ratio, 9_007_199_254_740_992.0);
    }

    #[test]
    fn int64_accepts_numbers_and_strings() {
        let sample: ScalarSample = from_str(r#"{"large": 42}"#).unwrap();
        assert_eq!(sample.large, 42);
        let sample: ScalarSample = from_str(r#"{"large": "-42"}"#).unwrap();
        assert_eq!(sample.large, -42);

        let err = from_str::<ScalarSample>(r#"{"large": "4.2"}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaMismatch { .. }));
    }

    #[test]
    fn int32_out_of_range_is_a_mismatch() {
        let err = from_str::<ScalarSample>(r#"{"small": 2147483648}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaMismatch { .. }), "{err:?}");
    }

    #[test]
    fn vcf_position_is_written_as_a_string() {
        let record = VcfRecord {
            chrom: "chr1".into(),
            pos: 12_345,
            ..Default::default()
        };
        assert_eq!(
            to_string(&record, PresencePolicy::ExplicitOnly),
            r#"{"chrom":"chr1","pos":"12345"}"#
        );
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = from_str::<OntologyClass>(r#"{"id": "HP:1""#).unwrap_err();
        assert!(matches!(err, CodecError::Parse(_)));
    }

    #[test]
    fn deep_aggregate_round_trips_under_both_policies() {
        let record = Phenopacket {
            id: "deep".into(),
            interpretations: vec![Interpretation {
                id: "interpretation-1".into(),
                diagnosis: Some(Diagnosis {
                    disease: Some(OntologyClass::new("OMIM:164400", "Spinocerebellar ataxia 1")),
                    genomic_interpretations: vec![GenomicInterpretation {
                        subject_or_biosample_id: "patient-1".into(),
                        ..Default::default()
                    }],
                }),
                ..Default::default()
            }],
            diseases: vec![Disease {
                term: Some(OntologyClass::new("OMIM:164400", "Spinocerebellar ataxia 1")),
                onset: Some(TimeElement {
                    element: Some(TimeElementKind::Timestamp(
                        Timestamp::from_unix(1_621_000_000, 0).unwrap(),
                    )),
                }),
                ..Default::default()
            }],
            meta_data: Some(MetaData {
                resources: vec![Resource {
                    id: "hp".into(),
                    namespace_prefix: "HP".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        };
        for policy in [PresencePolicy::ExplicitOnly, PresencePolicy::IncludeDefaults] {
            let text = to_string_pretty(&record, policy);
            assert_eq!(from_str::<Phenopacket>(&text).unwrap(), record);
        }
    }

    #[test]
    fn presence_policy_parses_from_text() {
        assert_eq!(
            "include_defaults".parse::<PresencePolicy>(),
            Ok(PresencePolicy::IncludeDefaults)
        );
        assert_eq!(
            "Explicit-Only".parse::<PresencePolicy>(),
            Ok(PresencePolicy::ExplicitOnly)
        );
        assert!("sometimes".parse::<PresencePolicy>().is_err());
        assert_eq!(PresencePolicy::default(), PresencePolicy::ExplicitOnly);
    }
}
