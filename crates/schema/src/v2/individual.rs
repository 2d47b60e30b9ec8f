//! The subject of a record.

use super::{OntologyClass, TimeElement};
use crate::timestamp::Timestamp;

message! {
    pub struct Individual = "org.phenopackets.schema.v2.core.Individual" {
        id: String => ("id", "id"),
        alternate_ids: Vec<String> => ("alternate_ids", "alternateIds"),
        date_of_birth: Option<Timestamp> => ("date_of_birth", "dateOfBirth"),
        time_at_last_encounter: Option<TimeElement>
            => ("time_at_last_encounter", "timeAtLastEncounter"),
        vital_status: Option<VitalStatus> => ("vital_status", "vitalStatus"),
        sex: Sex => ("sex", "sex"),
        karyotypic_sex: KaryotypicSex => ("karyotypic_sex", "karyotypicSex"),
        gender: Option<OntologyClass> => ("gender", "gender"),
        taxonomy: Option<OntologyClass> => ("taxonomy", "taxonomy"),
    }
}

message! {
    pub struct VitalStatus = "org.phenopackets.schema.v2.core.VitalStatus" {
        status: vital_status::Status => ("status", "status"),
        time_of_death: Option<TimeElement> => ("time_of_death", "timeOfDeath"),
        cause_of_death: Option<OntologyClass> => ("cause_of_death", "causeOfDeath"),
        survival_time_in_days: i32 => ("survival_time_in_days", "survivalTimeInDays"),
    }
}

pub mod vital_status {
    proto_enum! {
        pub enum Status = "org.phenopackets.schema.v2.core.VitalStatus.Status" {
            UnknownStatus = 0 => "UNKNOWN_STATUS",
            Alive = 1 => "ALIVE",
            Deceased = 2 => "DECEASED",
        }
    }
}

proto_enum! {
    /// Phenotypic sex.
    pub enum Sex = "org.phenopackets.schema.v2.core.Sex" {
        UnknownSex = 0 => "UNKNOWN_SEX",
        Female = 1 => "FEMALE",
        Male = 2 => "MALE",
        OtherSex = 3 => "OTHER_SEX",
    }
}

proto_enum! {
    /// Chromosomal sex.
    pub enum KaryotypicSex = "org.phenopackets.schema.v2.core.KaryotypicSex" {
        UnknownKaryotype = 0 => "UNKNOWN_KARYOTYPE",
        Xx = 1 => "XX",
        Xy = 2 => "XY",
        Xo = 3 => "XO",
        Xxy = 4 => "XXY",
        Xxx = 5 => "XXX",
        Xxyy = 6 => "XXYY",
        Xxxy = 7 => "XXXY",
        Xxxx = 8 => "XXXX",
        Xyy = 9 => "XYY",
        OtherKaryotype = 10 => "OTHER_KARYOTYPE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::ProtoEnum;

    #[test]
    fn enum_names_and_numbers_agree() {
        assert_eq!(Sex::Male.as_str_name(), "MALE");
        assert_eq!(Sex::from_number(3), Some(Sex::OtherSex));
        assert_eq!(KaryotypicSex::from_str_name("XXYY"), Some(KaryotypicSex::Xxyy));
        assert_eq!(KaryotypicSex::OtherKaryotype.number(), 10);
        assert_eq!(vital_status::Status::from_number(7), None);
    }

    #[test]
    fn first_variant_is_the_default() {
        assert_eq!(Sex::default(), Sex::UnknownSex);
        assert_eq!(vital_status::Status::default().to_string(), "UNKNOWN_STATUS");
    }
}
