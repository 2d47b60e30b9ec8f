//! Text formats and root record kinds understood by the service.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use phenopackets_schema::v2::{Cohort, Family, Phenopacket};
use phenopackets_schema::{MessageDescriptor, MessageType};

use crate::constants::{JSON_EXTENSIONS, YAML_EXTENSIONS};
use crate::{PhenopacketError, PhenopacketResult};

/// A textual encoding of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Infers the format from a file extension, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        if JSON_EXTENSIONS.contains(&extension.as_str()) {
            Some(Format::Json)
        } else if YAML_EXTENSIONS.contains(&extension.as_str()) {
            Some(Format::Yaml)
        } else {
            None
        }
    }

    /// Infers the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`PhenopacketError::InvalidInput`] when the path has no recognised extension.
    pub fn from_path(path: &Path) -> PhenopacketResult<Self> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(Format::from_extension)
            .ok_or_else(|| {
                PhenopacketError::InvalidInput(format!(
                    "cannot infer format of '{}'; expected a .json, .yaml or .yml file",
                    path.display()
                ))
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = PhenopacketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_extension(s.trim()).ok_or_else(|| {
            PhenopacketError::InvalidInput(format!(
                "unknown format '{s}' (expected 'json' or 'yaml')"
            ))
        })
    }
}

/// Root record types that can be read and written on their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecordKind {
    #[default]
    Phenopacket,
    Family,
    Cohort,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Phenopacket, RecordKind::Family, RecordKind::Cohort];

    /// Root key used for labeled YAML snippets of this kind.
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Phenopacket => "phenopacket",
            RecordKind::Family => "family",
            RecordKind::Cohort => "cohort",
        }
    }

    pub fn descriptor(self) -> &'static MessageDescriptor {
        match self {
            RecordKind::Phenopacket => Phenopacket::DESCRIPTOR,
            RecordKind::Family => Family::DESCRIPTOR,
            RecordKind::Cohort => Cohort::DESCRIPTOR,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordKind {
    type Err = PhenopacketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RecordKind::ALL
            .into_iter()
            .find(|kind| {
                kind.label().eq_ignore_ascii_case(wanted) || kind.descriptor().full_name == wanted
            })
            .ok_or_else(|| {
                PhenopacketError::InvalidInput(format!(
                    "unknown record kind '{wanted}' (expected phenopacket, family or cohort)"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_parse_from_names_and_extensions() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("YAML".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        assert!("toml".parse::<Format>().is_err());

        assert_eq!(Format::from_path(Path::new("case/p1.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("p1.YML")).unwrap(), Format::Yaml);
        assert!(Format::from_path(Path::new("README")).is_err());
    }

    #[test]
    fn record_kinds_parse_from_label_or_full_name() {
        assert_eq!("family".parse::<RecordKind>().unwrap(), RecordKind::Family);
        assert_eq!("Cohort".parse::<RecordKind>().unwrap(), RecordKind::Cohort);
        assert_eq!(
            "org.phenopackets.schema.v2.Phenopacket"
                .parse::<RecordKind>()
                .unwrap(),
            RecordKind::Phenopacket
        );
        assert!("biosample".parse::<RecordKind>().is_err());
    }

    #[test]
    fn labels_are_distinct() {
        assert_eq!(RecordKind::Phenopacket.to_string(), "phenopacket");
        assert_eq!(RecordKind::Family.label(), "family");
        assert_eq!(
            RecordKind::Cohort.descriptor().full_name,
            "org.phenopackets.schema.v2.Cohort"
        );
    }
}
