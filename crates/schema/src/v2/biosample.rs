use super::{File, Measurement, OntologyClass, PhenotypicFeature, Procedure, TimeElement};

message! {
    /// A sample taken from an individual, e.g. a tumour biopsy.
    pub struct Biosample = "org.phenopackets.schema.v2.core.Biosample" {
        id: String => ("id", "id"),
        individual_id: String => ("individual_id", "individualId"),
        derived_from_id: String => ("derived_from_id", "derivedFromId"),
        description: String => ("description", "description"),
        sampled_tissue: Option<OntologyClass> => ("sampled_tissue", "sampledTissue"),
        sample_type: Option<OntologyClass> => ("sample_type", "sampleType"),
        phenotypic_features: Vec<PhenotypicFeature> => ("phenotypic_features", "phenotypicFeatures"),
        measurements: Vec<Measurement> => ("measurements", "measurements"),
        taxonomy: Option<OntologyClass> => ("taxonomy", "taxonomy"),
        time_of_collection: Option<TimeElement> => ("time_of_collection", "timeOfCollection"),
        histological_diagnosis: Option<OntologyClass>
            => ("histological_diagnosis", "histologicalDiagnosis"),
        tumor_progression: Option<OntologyClass> => ("tumor_progression", "tumorProgression"),
        tumor_grade: Option<OntologyClass> => ("tumor_grade", "tumorGrade"),
        pathological_stage: Option<OntologyClass> => ("pathological_stage", "pathologicalStage"),
        pathological_tnm_finding: Vec<OntologyClass>
            => ("pathological_tnm_finding", "pathologicalTnmFinding"),
        diagnostic_markers: Vec<OntologyClass> => ("diagnostic_markers", "diagnosticMarkers"),
        procedure: Option<Procedure> => ("procedure", "procedure"),
        files: Vec<File> => ("files", "files"),
        material_sample: Option<OntologyClass> => ("material_sample", "materialSample"),
        sample_processing: Option<OntologyClass> => ("sample_processing", "sampleProcessing"),
        sample_storage: Option<OntologyClass> => ("sample_storage", "sampleStorage"),
    }
}
