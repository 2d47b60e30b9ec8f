use super::{OntologyClass, TimeElement};

message! {
    /// A diagnosed (or excluded) disease.
    pub struct Disease = "org.phenopackets.schema.v2.core.Disease" {
        term: Option<OntologyClass> => ("term", "term"),
        excluded: bool => ("excluded", "excluded"),
        onset: Option<TimeElement> => ("onset", "onset"),
        resolution: Option<TimeElement> => ("resolution", "resolution"),
        disease_stage: Vec<OntologyClass> => ("disease_stage", "diseaseStage"),
        clinical_tnm_finding: Vec<OntologyClass> => ("clinical_tnm_finding", "clinicalTnmFinding"),
        primary_site: Option<OntologyClass> => ("primary_site", "primarySite"),
        laterality: Option<OntologyClass> => ("laterality", "laterality"),
    }
}
