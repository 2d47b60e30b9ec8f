//! Record types of phenopacket schema v2.
//!
//! Enumerations and helper records that belong to one parent live in a module named after that
//! parent, e.g. [`vital_status::Status`] or [`pedigree::Person`].

mod base;
mod biosample;
mod disease;
mod individual;
mod interpretations;
mod measurement;
mod medical_action;
mod meta_data;
pub mod pedigree;
mod phenopackets;
mod phenotypic_feature;
mod vrsatile;

pub use base::*;
pub use biosample::*;
pub use disease::*;
pub use individual::*;
pub use interpretations::*;
pub use measurement::*;
pub use medical_action::*;
pub use meta_data::*;
pub use pedigree::Pedigree;
pub use phenopackets::*;
pub use phenotypic_feature::*;
pub use vrsatile::*;

use crate::reflect::{MessageDescriptor, MessageType};

/// Schema version tag written into `MetaData.phenopacket_schema_version`.
pub const SCHEMA_VERSION: &str = "2.0";

/// Every record type of this version, in catalog order.
pub const DESCRIPTORS: &[&MessageDescriptor] = &[
    OntologyClass::DESCRIPTOR,
    ExternalReference::DESCRIPTOR,
    Evidence::DESCRIPTOR,
    Procedure::DESCRIPTOR,
    GestationalAge::DESCRIPTOR,
    Age::DESCRIPTOR,
    AgeRange::DESCRIPTOR,
    TimeInterval::DESCRIPTOR,
    TimeElement::DESCRIPTOR,
    File::DESCRIPTOR,
    MetaData::DESCRIPTOR,
    Resource::DESCRIPTOR,
    Update::DESCRIPTOR,
    Individual::DESCRIPTOR,
    VitalStatus::DESCRIPTOR,
    PhenotypicFeature::DESCRIPTOR,
    Measurement::DESCRIPTOR,
    Value::DESCRIPTOR,
    ComplexValue::DESCRIPTOR,
    Quantity::DESCRIPTOR,
    TypedQuantity::DESCRIPTOR,
    ReferenceRange::DESCRIPTOR,
    Disease::DESCRIPTOR,
    Biosample::DESCRIPTOR,
    Interpretation::DESCRIPTOR,
    Diagnosis::DESCRIPTOR,
    GenomicInterpretation::DESCRIPTOR,
    VariantInterpretation::DESCRIPTOR,
    GeneDescriptor::DESCRIPTOR,
    VariationDescriptor::DESCRIPTOR,
    Expression::DESCRIPTOR,
    VcfRecord::DESCRIPTOR,
    MedicalAction::DESCRIPTOR,
    Treatment::DESCRIPTOR,
    DoseInterval::DESCRIPTOR,
    RadiationTherapy::DESCRIPTOR,
    TherapeuticRegimen::DESCRIPTOR,
    Pedigree::DESCRIPTOR,
    pedigree::Person::DESCRIPTOR,
    Phenopacket::DESCRIPTOR,
    Family::DESCRIPTOR,
    Cohort::DESCRIPTOR,
];
