//! Building blocks shared by every other record: ontology terms, references, ages and time.

use std::collections::BTreeMap;

use phenopackets_types::{Curie, Iso8601Duration, TextError};

use crate::json::FieldPath;
use crate::timestamp::Timestamp;
use crate::{CodecError, CodecResult};

message! {
    /// A term from a controlled vocabulary, e.g. `HP:0012828` "Severe".
    pub struct OntologyClass = "org.phenopackets.schema.v2.core.OntologyClass" {
        /// Conventionally a CURIE; not checked when encoding or decoding.
        id: String => ("id", "id"),
        label: String => ("label", "label"),
    }
}

impl OntologyClass {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Parses the id as a CURIE.
    ///
    /// # Errors
    ///
    /// Returns [`TextError`] when the id is empty or not of the form `prefix:local_id`.
    pub fn curie(&self) -> Result<Curie, TextError> {
        Curie::parse(&self.id)
    }
}

message! {
    /// A pointer to something outside the record, such as a publication.
    pub struct ExternalReference = "org.phenopackets.schema.v2.core.ExternalReference" {
        id: String => ("id", "id"),
        reference: String => ("reference", "reference"),
        description: String => ("description", "description"),
    }
}

message! {
    pub struct Evidence = "org.phenopackets.schema.v2.core.Evidence" {
        evidence_code: Option<OntologyClass> => ("evidence_code", "evidenceCode"),
        reference: Option<ExternalReference> => ("reference", "reference"),
    }
}

message! {
    pub struct Procedure = "org.phenopackets.schema.v2.core.Procedure" {
        code: Option<OntologyClass> => ("code", "code"),
        body_site: Option<OntologyClass> => ("body_site", "bodySite"),
        performed: Option<TimeElement> => ("performed", "performed"),
    }
}

message! {
    pub struct GestationalAge = "org.phenopackets.schema.v2.core.GestationalAge" {
        weeks: i32 => ("weeks", "weeks"),
        days: i32 => ("days", "days"),
    }
}

message! {
    /// An age written as an ISO 8601 duration, e.g. `P14Y`. Decoding checks the syntax.
    pub struct Age = "org.phenopackets.schema.v2.core.Age" {
        iso8601duration: String => ("iso8601duration", "iso8601Duration") check duration_text,
    }
}

/// Empty text is the unset scalar and passes.
fn duration_text(text: &str, path: &FieldPath) -> CodecResult<()> {
    if text.is_empty() {
        return Ok(());
    }
    Iso8601Duration::parse(text)
        .map(drop)
        .map_err(|err| CodecError::mismatch(path, err.to_string()))
}

impl Age {
    pub fn new(duration: impl Into<String>) -> Self {
        Self {
            iso8601duration: duration.into(),
        }
    }

    /// Checks the duration text syntactically.
    pub fn duration(&self) -> Result<Iso8601Duration, TextError> {
        Iso8601Duration::parse(&self.iso8601duration)
    }
}

message! {
    pub struct AgeRange = "org.phenopackets.schema.v2.core.AgeRange" {
        start: Option<Age> => ("start", "start"),
        end: Option<Age> => ("end", "end"),
    }
}

message! {
    pub struct TimeInterval = "org.phenopackets.schema.v2.core.TimeInterval" {
        start: Option<Timestamp> => ("start", "start"),
        end: Option<Timestamp> => ("end", "end"),
    }
}

oneof! {
    /// The ways a point or span in a patient's life can be written down.
    pub enum TimeElementKind {
        GestationalAge(GestationalAge) => ("gestational_age", "gestationalAge"),
        Age(Age) => ("age", "age"),
        AgeRange(AgeRange) => ("age_range", "ageRange"),
        OntologyClass(OntologyClass) => ("ontology_class", "ontologyClass"),
        Timestamp(Timestamp) => ("timestamp", "timestamp"),
        Interval(TimeInterval) => ("interval", "interval"),
    }
}

message! {
    pub struct TimeElement = "org.phenopackets.schema.v2.core.TimeElement" {
        element: Option<TimeElementKind> => ("element", "element"),
    }
}

impl TimeElement {
    pub fn age(duration: impl Into<String>) -> Self {
        Self {
            element: Some(TimeElementKind::Age(Age::new(duration))),
        }
    }
}

message! {
    /// A file reference, typically a VCF or BAM.
    pub struct File = "org.phenopackets.schema.v2.core.File" {
        uri: String => ("uri", "uri"),
        /// Maps record identifiers to identifiers used inside the file (e.g. VCF sample names).
        individual_to_file_identifiers: BTreeMap<String, String>
            => ("individual_to_file_identifiers", "individualToFileIdentifiers"),
        file_attributes: BTreeMap<String, String> => ("file_attributes", "fileAttributes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ontology_class_id_parses_as_curie() {
        let severe = OntologyClass::new("HP:0012828", "Severe");
        let curie = severe.curie().unwrap();
        assert_eq!(curie.prefix(), "HP");
        assert_eq!(curie.local_id(), "0012828");

        assert!(OntologyClass::new("severe", "Severe").curie().is_err());
    }

    #[test]
    fn age_duration_is_checked_on_request() {
        assert!(Age::new("P14Y").duration().is_ok());
        assert!(Age::new("fourteen").duration().is_err());
    }

    #[test]
    fn malformed_age_duration_fails_to_decode() {
        let err = crate::json::from_str::<TimeElement>(r#"{"age":{"iso8601Duration":"banana"}}"#)
            .unwrap_err();
        match err {
            CodecError::SchemaMismatch { path, message } => {
                assert_eq!(path, "age.iso8601Duration");
                assert!(message.contains("'banana' is not an ISO 8601 duration"), "{message}");
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }

        let range = crate::json::from_str::<AgeRange>(r#"{"start":{"iso8601Duration":"P5Y"}}"#)
            .unwrap();
        assert_eq!(range.start, Some(Age::new("P5Y")));
        assert_eq!(crate::json::from_str::<Age>("{}").unwrap(), Age::default());
    }

    #[test]
    fn time_element_age_shortcut() {
        assert_eq!(
            TimeElement::age("P3M"),
            TimeElement {
                element: Some(TimeElementKind::Age(Age::new("P3M")))
            }
        );
    }
}
