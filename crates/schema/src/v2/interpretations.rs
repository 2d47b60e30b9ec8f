//! Diagnoses and the genomic findings that support them.

use super::{GeneDescriptor, OntologyClass, VariationDescriptor};

message! {
    pub struct Interpretation = "org.phenopackets.schema.v2.core.Interpretation" {
        id: String => ("id", "id"),
        progress_status: interpretation::ProgressStatus => ("progress_status", "progressStatus"),
        diagnosis: Option<Diagnosis> => ("diagnosis", "diagnosis"),
        summary: String => ("summary", "summary"),
    }
}

pub mod interpretation {
    proto_enum! {
        pub enum ProgressStatus = "org.phenopackets.schema.v2.core.Interpretation.ProgressStatus" {
            UnknownProgress = 0 => "UNKNOWN_PROGRESS",
            InProgress = 1 => "IN_PROGRESS",
            Completed = 2 => "COMPLETED",
            Solved = 3 => "SOLVED",
            Unsolved = 4 => "UNSOLVED",
        }
    }
}

message! {
    pub struct Diagnosis = "org.phenopackets.schema.v2.core.Diagnosis" {
        disease: Option<OntologyClass> => ("disease", "disease"),
        genomic_interpretations: Vec<GenomicInterpretation>
            => ("genomic_interpretations", "genomicInterpretations"),
    }
}

oneof! {
    /// What a genomic interpretation points at: a whole gene or a specific variant.
    pub enum InterpretationCall {
        Gene(GeneDescriptor) => ("gene", "gene"),
        VariantInterpretation(VariantInterpretation)
            => ("variant_interpretation", "variantInterpretation"),
    }
}

message! {
    pub struct GenomicInterpretation = "org.phenopackets.schema.v2.core.GenomicInterpretation" {
        subject_or_biosample_id: String => ("subject_or_biosample_id", "subjectOrBiosampleId"),
        interpretation_status: genomic_interpretation::InterpretationStatus
            => ("interpretation_status", "interpretationStatus"),
        call: Option<InterpretationCall> => ("call", "call"),
    }
}

pub mod genomic_interpretation {
    proto_enum! {
        pub enum InterpretationStatus =
            "org.phenopackets.schema.v2.core.GenomicInterpretation.InterpretationStatus"
        {
            UnknownStatus = 0 => "UNKNOWN_STATUS",
            Rejected = 1 => "REJECTED",
            Candidate = 2 => "CANDIDATE",
            Contributory = 3 => "CONTRIBUTORY",
            Causative = 4 => "CAUSATIVE",
        }
    }
}

proto_enum! {
    pub enum AcmgPathogenicityClassification =
        "org.phenopackets.schema.v2.core.AcmgPathogenicityClassification"
    {
        NotProvided = 0 => "NOT_PROVIDED",
        Benign = 1 => "BENIGN",
        LikelyBenign = 2 => "LIKELY_BENIGN",
        UncertainSignificance = 3 => "UNCERTAIN_SIGNIFICANCE",
        LikelyPathogenic = 4 => "LIKELY_PATHOGENIC",
        Pathogenic = 5 => "PATHOGENIC",
    }
}

proto_enum! {
    pub enum TherapeuticActionability =
        "org.phenopackets.schema.v2.core.TherapeuticActionability"
    {
        UnknownActionability = 0 => "UNKNOWN_ACTIONABILITY",
        NotActionable = 1 => "NOT_ACTIONABLE",
        Actionable = 2 => "ACTIONABLE",
    }
}

message! {
    pub struct VariantInterpretation = "org.phenopackets.schema.v2.core.VariantInterpretation" {
        acmg_pathogenicity_classification: AcmgPathogenicityClassification
            => ("acmg_pathogenicity_classification", "acmgPathogenicityClassification"),
        therapeutic_actionability: TherapeuticActionability
            => ("therapeutic_actionability", "therapeuticActionability"),
        variation_descriptor: Option<VariationDescriptor>
            => ("variation_descriptor", "variationDescriptor"),
    }
}
