//! Treatments, procedures and regimens applied to an individual.

use super::{ExternalReference, OntologyClass, Procedure, Quantity, TimeElement, TimeInterval};

oneof! {
    pub enum MedicalActionKind {
        Procedure(Procedure) => ("procedure", "procedure"),
        Treatment(Treatment) => ("treatment", "treatment"),
        RadiationTherapy(RadiationTherapy) => ("radiation_therapy", "radiationTherapy"),
        TherapeuticRegimen(TherapeuticRegimen) => ("therapeutic_regimen", "therapeuticRegimen"),
    }
}

message! {
    pub struct MedicalAction = "org.phenopackets.schema.v2.core.MedicalAction" {
        action: Option<MedicalActionKind> => ("action", "action"),
        treatment_target: Option<OntologyClass> => ("treatment_target", "treatmentTarget"),
        treatment_intent: Option<OntologyClass> => ("treatment_intent", "treatmentIntent"),
        response_to_treatment: Option<OntologyClass>
            => ("response_to_treatment", "responseToTreatment"),
        adverse_events: Vec<OntologyClass> => ("adverse_events", "adverseEvents"),
        treatment_termination_reason: Option<OntologyClass>
            => ("treatment_termination_reason", "treatmentTerminationReason"),
    }
}

message! {
    /// A drug given to the individual.
    pub struct Treatment = "org.phenopackets.schema.v2.core.Treatment" {
        agent: Option<OntologyClass> => ("agent", "agent"),
        route_of_administration: Option<OntologyClass>
            => ("route_of_administration", "routeOfAdministration"),
        dose_intervals: Vec<DoseInterval> => ("dose_intervals", "doseIntervals"),
        drug_type: DrugType => ("drug_type", "drugType"),
        cumulative_dose: Option<Quantity> => ("cumulative_dose", "cumulativeDose"),
    }
}

message! {
    pub struct DoseInterval = "org.phenopackets.schema.v2.core.DoseInterval" {
        quantity: Option<Quantity> => ("quantity", "quantity"),
        schedule_frequency: Option<OntologyClass> => ("schedule_frequency", "scheduleFrequency"),
        interval: Option<TimeInterval> => ("interval", "interval"),
    }
}

proto_enum! {
    pub enum DrugType = "org.phenopackets.schema.v2.core.DrugType" {
        UnknownDrugType = 0 => "UNKNOWN_DRUG_TYPE",
        Prescription = 1 => "PRESCRIPTION",
        EhrMedicationList = 2 => "EHR_MEDICATION_LIST",
        AdministrationRelatedToProcedure = 3 => "ADMINISTRATION_RELATED_TO_PROCEDURE",
    }
}

message! {
    pub struct RadiationTherapy = "org.phenopackets.schema.v2.core.RadiationTherapy" {
        modality: Option<OntologyClass> => ("modality", "modality"),
        body_site: Option<OntologyClass> => ("body_site", "bodySite"),
        /// Total dose in grays.
        dosage: i32 => ("dosage", "dosage"),
        fractions: i32 => ("fractions", "fractions"),
    }
}

oneof! {
    pub enum RegimenIdentifier {
        ExternalReference(ExternalReference) => ("external_reference", "externalReference"),
        OntologyClass(OntologyClass) => ("ontology_class", "ontologyClass"),
    }
}

message! {
    pub struct TherapeuticRegimen = "org.phenopackets.schema.v2.core.TherapeuticRegimen" {
        identifier: Option<RegimenIdentifier> => ("identifier", "identifier"),
        start_time: Option<TimeElement> => ("start_time", "startTime"),
        end_time: Option<TimeElement> => ("end_time", "endTime"),
        regimen_status: therapeutic_regimen::RegimenStatus => ("regimen_status", "regimenStatus"),
    }
}

pub mod therapeutic_regimen {
    proto_enum! {
        pub enum RegimenStatus = "org.phenopackets.schema.v2.core.TherapeuticRegimen.RegimenStatus" {
            UnknownStatus = 0 => "UNKNOWN_STATUS",
            Started = 1 => "STARTED",
            Completed = 2 => "COMPLETED",
            Discontinued = 3 => "DISCONTINUED",
        }
    }
}
