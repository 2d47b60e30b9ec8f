use super::{Evidence, OntologyClass, TimeElement};

message! {
    /// An observed (or explicitly excluded) phenotype.
    pub struct PhenotypicFeature = "org.phenopackets.schema.v2.core.PhenotypicFeature" {
        description: String => ("description", "description"),
        r#type: Option<OntologyClass> => ("type", "type"),
        /// `true` when the feature was looked for and found absent.
        excluded: bool => ("excluded", "excluded"),
        severity: Option<OntologyClass> => ("severity", "severity"),
        modifiers: Vec<OntologyClass> => ("modifiers", "modifiers"),
        onset: Option<TimeElement> => ("onset", "onset"),
        resolution: Option<TimeElement> => ("resolution", "resolution"),
        evidence: Vec<Evidence> => ("evidence", "evidence"),
    }
}
