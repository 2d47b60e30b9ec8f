//! Family structure in the shape of a PED file.

use super::Sex;

message! {
    pub struct Pedigree = "org.phenopackets.schema.v2.core.Pedigree" {
        persons: Vec<Person> => ("persons", "persons"),
    }
}

message! {
    /// One row of a PED file. Parent ids are `0` or empty when unknown.
    pub struct Person = "org.phenopackets.schema.v2.core.Pedigree.Person" {
        family_id: String => ("family_id", "familyId"),
        individual_id: String => ("individual_id", "individualId"),
        paternal_id: String => ("paternal_id", "paternalId"),
        maternal_id: String => ("maternal_id", "maternalId"),
        sex: Sex => ("sex", "sex"),
        affected_status: AffectedStatus => ("affected_status", "affectedStatus"),
    }
}

proto_enum! {
    pub enum AffectedStatus = "org.phenopackets.schema.v2.core.Pedigree.Person.AffectedStatus" {
        Missing = 0 => "MISSING",
        Unaffected = 1 => "UNAFFECTED",
        Affected = 2 => "AFFECTED",
    }
}

impl Pedigree {
    /// Members of the pedigree marked as affected, in pedigree order.
    pub fn affected(&self) -> impl Iterator<Item = &Person> {
        self.persons
            .iter()
            .filter(|person| person.affected_status == AffectedStatus::Affected)
    }
}
