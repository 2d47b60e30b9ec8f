//! Laboratory and clinical measurements.

use super::{OntologyClass, Procedure, TimeElement};

oneof! {
    pub enum MeasurementValue {
        Value(Value) => ("value", "value"),
        ComplexValue(ComplexValue) => ("complex_value", "complexValue"),
    }
}

message! {
    pub struct Measurement = "org.phenopackets.schema.v2.core.Measurement" {
        description: String => ("description", "description"),
        assay: Option<OntologyClass> => ("assay", "assay"),
        measurement_value: Option<MeasurementValue> => ("measurement_value", "measurementValue"),
        time_observed: Option<TimeElement> => ("time_observed", "timeObserved"),
        procedure: Option<Procedure> => ("procedure", "procedure"),
    }
}

oneof! {
    pub enum ValueKind {
        Quantity(Quantity) => ("quantity", "quantity"),
        OntologyClass(OntologyClass) => ("ontology_class", "ontologyClass"),
    }
}

message! {
    /// A single measured value: a quantity or an ordinal/categorical term.
    pub struct Value = "org.phenopackets.schema.v2.core.Value" {
        value: Option<ValueKind> => ("value", "value"),
    }
}

message! {
    /// Several quantities measured together, e.g. systolic and diastolic blood pressure.
    pub struct ComplexValue = "org.phenopackets.schema.v2.core.ComplexValue" {
        typed_quantities: Vec<TypedQuantity> => ("typed_quantities", "typedQuantities"),
    }
}

message! {
    pub struct Quantity = "org.phenopackets.schema.v2.core.Quantity" {
        unit: Option<OntologyClass> => ("unit", "unit"),
        value: f64 => ("value", "value"),
        reference_range: Option<ReferenceRange> => ("reference_range", "referenceRange"),
    }
}

message! {
    pub struct TypedQuantity = "org.phenopackets.schema.v2.core.TypedQuantity" {
        r#type: Option<OntologyClass> => ("type", "type"),
        quantity: Option<Quantity> => ("quantity", "quantity"),
    }
}

message! {
    pub struct ReferenceRange = "org.phenopackets.schema.v2.core.ReferenceRange" {
        unit: Option<OntologyClass> => ("unit", "unit"),
        low: f64 => ("low", "low"),
        high: f64 => ("high", "high"),
    }
}
