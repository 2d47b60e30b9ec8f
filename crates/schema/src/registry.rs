//! Which record types exist for which schema version.
//!
//! A registry is built once per process and only read afterwards, so it can be shared between
//! threads without locking.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::json::{JsonValue, FieldPath};
use crate::reflect::MessageDescriptor;
use crate::{v2, CodecError, CodecResult};

/// Phenopacket schema major versions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SchemaVersion {
    V1,
    #[default]
    V2,
}

impl SchemaVersion {
    pub const LATEST: SchemaVersion = SchemaVersion::V2;

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVersion::V1 => "1.0",
            SchemaVersion::V2 => "2.0",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "1.0" | "1.0.0" => Ok(SchemaVersion::V1),
            "2" | "2.0" | "2.0.0" => Ok(SchemaVersion::V2),
            other => Err(CodecError::UnsupportedSchemaVersion(other.to_owned())),
        }
    }
}

impl TryFrom<String> for SchemaVersion {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SchemaVersion> for String {
    fn from(version: SchemaVersion) -> Self {
        version.as_str().to_owned()
    }
}

/// Read-only lookup of the record types governed by one schema version.
#[derive(Debug)]
pub struct Registry {
    version: SchemaVersion,
    by_name: BTreeMap<&'static str, &'static MessageDescriptor>,
}

static V2_REGISTRY: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Returns the registry for `version`.
    ///
    /// # Errors
    ///
    /// Only v2 record types are shipped; asking for v1 fails with
    /// [`CodecError::UnsupportedSchemaVersion`].
    pub fn for_version(version: SchemaVersion) -> CodecResult<&'static Registry> {
        match version {
            SchemaVersion::V2 => Ok(V2_REGISTRY.get_or_init(|| Registry::build(version, v2::DESCRIPTORS))),
            SchemaVersion::V1 => Err(CodecError::UnsupportedSchemaVersion(
                version.as_str().to_owned(),
            )),
        }
    }

    fn build(version: SchemaVersion, descriptors: &[&'static MessageDescriptor]) -> Self {
        let by_name = descriptors
            .iter()
            .map(|descriptor| (descriptor.full_name, *descriptor))
            .collect();
        Self { version, by_name }
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Looks a record type up by fully qualified name.
    pub fn descriptor(&self, full_name: &str) -> Option<&'static MessageDescriptor> {
        self.by_name.get(full_name).copied()
    }

    /// All record types, sorted by fully qualified name.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static MessageDescriptor> + '_ {
        self.by_name.values().copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Reads `metaData.phenopacketSchemaVersion` from a root record's JSON, if it is there.
///
/// # Errors
///
/// Fails with [`CodecError::SchemaMismatch`] when the tag is not a string and with
/// [`CodecError::UnsupportedSchemaVersion`] when it names no known version.
pub fn declared_version(document: &JsonValue) -> CodecResult<Option<SchemaVersion>> {
    let Some(meta) = document
        .get("metaData")
        .or_else(|| document.get("meta_data"))
    else {
        return Ok(None);
    };
    let Some(tag) = meta
        .get("phenopacketSchemaVersion")
        .or_else(|| meta.get("phenopacket_schema_version"))
    else {
        return Ok(None);
    };

    match tag {
        JsonValue::String(text) if text.is_empty() => Ok(None),
        JsonValue::String(text) => text.parse().map(Some),
        _ => Err(CodecError::mismatch(
            &FieldPath::root()
                .field("metaData")
                .field("phenopacketSchemaVersion"),
            "expected a version string",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::MessageType;
    use serde_json::json;

    #[test]
    fn versions_parse_from_short_and_long_forms() {
        for text in ["2", "2.0", "2.0.0", " 2.0 "] {
            assert_eq!(text.parse::<SchemaVersion>().unwrap(), SchemaVersion::V2);
        }
        assert_eq!("1.0".parse::<SchemaVersion>().unwrap(), SchemaVersion::V1);
        assert!(matches!(
            "3.0".parse::<SchemaVersion>(),
            Err(CodecError::UnsupportedSchemaVersion(v)) if v == "3.0"
        ));
    }

    #[test]
    fn v2_registry_knows_every_catalog_type() {
        let registry = Registry::for_version(SchemaVersion::V2).unwrap();
        assert_eq!(registry.version(), SchemaVersion::V2);
        assert_eq!(registry.len(), v2::DESCRIPTORS.len());
        assert_eq!(
            registry.descriptor("org.phenopackets.schema.v2.Phenopacket"),
            Some(v2::Phenopacket::DESCRIPTOR)
        );
        assert!(registry.descriptor("org.phenopackets.schema.v1.Phenopacket").is_none());
    }

    #[test]
    fn registry_is_built_once() {
        let first = Registry::for_version(SchemaVersion::V2).unwrap();
        let second = Registry::for_version(SchemaVersion::V2).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn v1_has_no_registry() {
        let err = Registry::for_version(SchemaVersion::V1).unwrap_err();
        assert_eq!(err.to_string(), "unsupported schema version: 1.0");
    }

    #[test]
    fn declared_version_reads_meta_data() {
        let document = json!({"id": "p1", "metaData": {"phenopacketSchemaVersion": "2.0"}});
        assert_eq!(declared_version(&document).unwrap(), Some(SchemaVersion::V2));

        let untagged = json!({"id": "p1", "metaData": {"createdBy": "someone"}});
        assert_eq!(declared_version(&untagged).unwrap(), None);

        let bogus = json!({"metaData": {"phenopacketSchemaVersion": 2}});
        assert!(matches!(
            declared_version(&bogus),
            Err(CodecError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn descriptor_names_are_unique() {
        let mut names: Vec<_> = v2::DESCRIPTORS.iter().map(|d| d.full_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), v2::DESCRIPTORS.len());
    }
}
