//! Round-trip verification of typed records.
//!
//! For a record `m` the verifier checks, in order:
//! 1. encoding twice gives byte-identical JSON;
//! 2. `decode(encode(m)) == m`;
//! 3. JSON rewritten as YAML and back is the same JSON, key order included, and decodes to `m`;
//! 4. the canonical hash of the labeled YAML snippet.
//!
//! The first failing check is reported as [`PhenopacketError::RoundTripMismatch`].

use std::fmt;

use phenopackets_schema::{json, Message, MessageType, PresencePolicy};

use crate::hash::canonical_hash;
use crate::{PhenopacketError, PhenopacketResult};

/// What a successful round trip produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundTripReport {
    pub label: String,
    /// Compact JSON under the requested policy.
    pub json: String,
    /// The same JSON rewritten as YAML.
    pub yaml: String,
    /// Canonical hash; independent of the requested policy.
    pub hash: String,
}

/// A record that can be round-tripped without knowing its concrete type.
pub trait RoundTrip: fmt::Debug + Send + Sync {
    fn as_message(&self) -> &dyn Message;

    fn verify(&self, policy: PresencePolicy, label: &str) -> PhenopacketResult<RoundTripReport>;
}

impl<M: MessageType> RoundTrip for M {
    fn as_message(&self) -> &dyn Message {
        self
    }

    fn verify(&self, policy: PresencePolicy, label: &str) -> PhenopacketResult<RoundTripReport> {
        verify_message(self, policy, label)
    }
}

fn mismatch(label: &str, stage: &'static str, detail: impl Into<String>) -> PhenopacketError {
    PhenopacketError::RoundTripMismatch {
        sample: label.to_owned(),
        stage,
        detail: detail.into(),
    }
}

fn decode_stage<M: MessageType>(
    label: &str,
    stage: &'static str,
    value: &json::JsonValue,
    original: &M,
    policy: PresencePolicy,
) -> PhenopacketResult<()> {
    let decoded: M = json::from_value(value).map_err(|err| mismatch(label, stage, err.to_string()))?;
    if decoded != *original {
        return Err(mismatch(
            label,
            stage,
            format!(
                "decoded record differs from the original; it re-encodes as {}",
                json::to_string(&decoded, policy)
            ),
        ));
    }
    Ok(())
}

/// Round-trips `message` through JSON and YAML under `policy` and computes its canonical hash.
///
/// # Arguments
///
/// * `message` - The record to check.
/// * `policy` - Presence policy for the JSON and YAML round trips.
/// * `label` - Root key of the labeled YAML snippet that is hashed; also names the record in
///   errors.
///
/// # Errors
///
/// Returns [`PhenopacketError::RoundTripMismatch`] naming the first stage that failed.
pub fn verify_message<M: MessageType>(
    message: &M,
    policy: PresencePolicy,
    label: &str,
) -> PhenopacketResult<RoundTripReport> {
    let value = json::to_value(message, policy);
    let text = value.to_string();
    if json::to_string(message, policy) != text {
        return Err(mismatch(label, "determinism", "encoding twice gave different JSON"));
    }

    decode_stage(label, "json", &value, message, policy)?;

    let yaml = phenopackets_yaml::json_value_to_yaml(&value)
        .map_err(|err| mismatch(label, "yaml", err.to_string()))?;
    let back = phenopackets_yaml::parse_yaml(&yaml)
        .map_err(|err| mismatch(label, "yaml", err.to_string()))?;
    if back.to_string() != text {
        return Err(mismatch(
            label,
            "yaml",
            format!("YAML rewrote {text} as {back}"),
        ));
    }
    decode_stage(label, "yaml", &back, message, policy)?;

    let hash = canonical_hash(label, message)?;
    tracing::debug!(label, %hash, "round trip verified");

    Ok(RoundTripReport {
        label: label.to_owned(),
        json: text,
        yaml,
        hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use phenopackets_schema::v2::{
        Age, OntologyClass, PhenotypicFeature, TimeElement, TimeElementKind,
    };
    use pretty_assertions::assert_eq;

    fn feature() -> PhenotypicFeature {
        PhenotypicFeature {
            r#type: Some(OntologyClass::new("HP:0001250", "Seizure")),
            onset: Some(TimeElement::age("P14Y")),
            ..Default::default()
        }
    }

    #[test]
    fn report_carries_json_yaml_and_hash() {
        let report = verify_message(&feature(), PresencePolicy::ExplicitOnly, "phenotypicFeature")
            .unwrap();
        assert_eq!(
            report.json,
            r#"{"type":{"id":"HP:0001250","label":"Seizure"},"onset":{"age":{"iso8601Duration":"P14Y"}}}"#
        );
        assert_eq!(
            report.yaml,
            "type:\n  id: HP:0001250\n  label: Seizure\nonset:\n  age:\n    iso8601Duration: P14Y\n"
        );
        assert_eq!(report.hash.len(), 64);
    }

    #[test]
    fn hash_ignores_the_round_trip_policy() {
        let explicit = verify_message(&feature(), PresencePolicy::ExplicitOnly, "f").unwrap();
        let defaults = verify_message(&feature(), PresencePolicy::IncludeDefaults, "f").unwrap();
        assert_ne!(explicit.json, defaults.json);
        assert_eq!(explicit.hash, defaults.hash);
    }

    #[test]
    fn trait_objects_verify_like_concrete_types() {
        let boxed: Box<dyn RoundTrip> = Box::new(TimeElement {
            element: Some(TimeElementKind::Age(Age::new("P3M"))),
        });
        let report = boxed.verify(PresencePolicy::ExplicitOnly, "timeElement").unwrap();
        assert_eq!(report.json, r#"{"age":{"iso8601Duration":"P3M"}}"#);
        assert_eq!(
            boxed.as_message().descriptor().full_name,
            "org.phenopackets.schema.v2.core.TimeElement"
        );
    }

    #[test]
    fn mismatch_names_sample_and_stage() {
        let err = mismatch("p1", "yaml", "boom");
        assert_eq!(
            err.to_string(),
            "round trip of 'p1' failed at the yaml stage: boom"
        );
    }
}
