//! Root records: a single patient, a family and a cohort.

use super::{
    Biosample, Disease, File, Individual, Interpretation, Measurement, MedicalAction, MetaData,
    Pedigree, PhenotypicFeature,
};

message! {
    /// Everything known about one individual: phenotype, diagnoses, samples and provenance.
    pub struct Phenopacket = "org.phenopackets.schema.v2.Phenopacket" {
        id: String => ("id", "id"),
        subject: Option<Individual> => ("subject", "subject"),
        phenotypic_features: Vec<PhenotypicFeature> => ("phenotypic_features", "phenotypicFeatures"),
        measurements: Vec<Measurement> => ("measurements", "measurements"),
        biosamples: Vec<Biosample> => ("biosamples", "biosamples"),
        interpretations: Vec<Interpretation> => ("interpretations", "interpretations"),
        diseases: Vec<Disease> => ("diseases", "diseases"),
        medical_actions: Vec<MedicalAction> => ("medical_actions", "medicalActions"),
        files: Vec<File> => ("files", "files"),
        meta_data: Option<MetaData> => ("meta_data", "metaData"),
    }
}

message! {
    /// A proband and their relatives, with a pedigree linking them.
    pub struct Family = "org.phenopackets.schema.v2.Family" {
        id: String => ("id", "id"),
        proband: Option<Phenopacket> => ("proband", "proband"),
        relatives: Vec<Phenopacket> => ("relatives", "relatives"),
        consanguinous_parents: bool => ("consanguinous_parents", "consanguinousParents"),
        pedigree: Option<Pedigree> => ("pedigree", "pedigree"),
        files: Vec<File> => ("files", "files"),
        meta_data: Option<MetaData> => ("meta_data", "metaData"),
    }
}

message! {
    /// A group of unrelated individuals studied together.
    pub struct Cohort = "org.phenopackets.schema.v2.Cohort" {
        id: String => ("id", "id"),
        description: String => ("description", "description"),
        members: Vec<Phenopacket> => ("members", "members"),
        files: Vec<File> => ("files", "files"),
        meta_data: Option<MetaData> => ("meta_data", "metaData"),
    }
}

impl Phenopacket {
    /// The schema version declared in the record's metadata, if any.
    pub fn schema_version(&self) -> Option<&str> {
        self.meta_data
            .as_ref()
            .map(|meta| meta.phenopacket_schema_version.as_str())
            .filter(|version| !version.is_empty())
    }
}
