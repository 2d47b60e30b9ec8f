//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup (from explicit values, environment values or
//! a YAML file) and then passed into [`PhenopacketService`](crate::PhenopacketService). Nothing in
//! this crate reads environment variables while converting records.

use std::path::Path;

use phenopackets_schema::{PresencePolicy, SchemaVersion};
use serde::Deserialize;

use crate::constants::{DEFAULT_PRESENCE_POLICY, LATEST_SCHEMA_VERSION};
use crate::{PhenopacketError, PhenopacketResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    presence_policy: PresencePolicy,
    schema_version: SchemaVersion,
    yaml_label: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            presence_policy: DEFAULT_PRESENCE_POLICY,
            schema_version: LATEST_SCHEMA_VERSION,
            yaml_label: None,
        }
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `yaml_label` overrides the root key of labeled YAML output; when `None` the record kind's
    /// own label is used.
    pub fn new(
        presence_policy: PresencePolicy,
        schema_version: SchemaVersion,
        yaml_label: Option<String>,
    ) -> PhenopacketResult<Self> {
        let yaml_label = match yaml_label {
            Some(label) if label.trim().is_empty() => {
                return Err(PhenopacketError::InvalidInput(
                    "yaml_label cannot be empty".into(),
                ));
            }
            other => other,
        };

        Ok(Self {
            presence_policy,
            schema_version,
            yaml_label,
        })
    }

    pub fn presence_policy(&self) -> PresencePolicy {
        self.presence_policy
    }

    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    pub fn yaml_label(&self) -> Option<&str> {
        self.yaml_label.as_deref()
    }

    /// Returns a copy with a different presence policy.
    pub fn with_presence_policy(mut self, presence_policy: PresencePolicy) -> Self {
        self.presence_policy = presence_policy;
        self
    }

    /// Parses a YAML configuration document.
    ///
    /// Every key is optional; unknown keys are rejected. Errors name the offending key path.
    ///
    /// ```yaml
    /// presence_policy: include-defaults
    /// schema_version: "2.0"
    /// yaml_label: packet
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PhenopacketError::Config`] for malformed YAML, unknown keys and values that do
    /// not parse, and [`PhenopacketError::InvalidInput`] for an empty label.
    pub fn from_yaml_str(text: &str) -> PhenopacketResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(text);
        let file: ConfigFile = match serde_path_to_error::deserialize(deserializer) {
            Ok(file) => file,
            Err(err) => {
                let path = err.path().to_string();
                let path = if path.is_empty() || path == "." {
                    "<root>".to_owned()
                } else {
                    path
                };
                return Err(PhenopacketError::Config {
                    path,
                    message: err.into_inner().to_string(),
                });
            }
        };

        let schema_version = file
            .schema_version
            .map(|raw| {
                raw.to_text().parse::<SchemaVersion>().map_err(|err| PhenopacketError::Config {
                    path: "schema_version".into(),
                    message: err.to_string(),
                })
            })
            .transpose()?
            .unwrap_or(LATEST_SCHEMA_VERSION);

        Self::new(
            file.presence_policy.unwrap_or(DEFAULT_PRESENCE_POLICY),
            schema_version,
            file.yaml_label,
        )
    }

    /// Reads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PhenopacketError::FileRead`] if the file cannot be read, otherwise as
    /// [`CoreConfig::from_yaml_str`].
    pub fn from_yaml_file(path: &Path) -> PhenopacketResult<Self> {
        let text = std::fs::read_to_string(path).map_err(PhenopacketError::FileRead)?;
        tracing::debug!(path = %path.display(), "loading configuration file");
        Self::from_yaml_str(&text)
    }
}

/// On-disk configuration. Mirrors [`CoreConfig`] with every field optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    presence_policy: Option<PresencePolicy>,
    #[serde(default)]
    schema_version: Option<VersionText>,
    #[serde(default)]
    yaml_label: Option<String>,
}

/// `schema_version: 2.0` arrives as a float unless quoted; accept both spellings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionText {
    Text(String),
    Number(f64),
}

impl VersionText {
    fn to_text(&self) -> String {
        match self {
            VersionText::Text(text) => text.clone(),
            VersionText::Number(number) if number.fract() == 0.0 => format!("{number:.1}"),
            VersionText::Number(number) => number.to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the presence policy from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_PRESENCE_POLICY`].
pub fn presence_policy_from_env_value(value: Option<String>) -> PhenopacketResult<PresencePolicy> {
    let parsed = non_empty(value)
        .map(|v| v.parse::<PresencePolicy>())
        .transpose()
        .map_err(PhenopacketError::InvalidInput)?;

    Ok(parsed.unwrap_or(DEFAULT_PRESENCE_POLICY))
}

/// Parse the schema version from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the latest supported version.
pub fn schema_version_from_env_value(value: Option<String>) -> PhenopacketResult<SchemaVersion> {
    let parsed = non_empty(value)
        .map(|v| v.parse::<SchemaVersion>())
        .transpose()?;

    Ok(parsed.unwrap_or(LATEST_SCHEMA_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_explicit_only_v2() {
        let config = CoreConfig::default();
        assert_eq!(config.presence_policy(), PresencePolicy::ExplicitOnly);
        assert_eq!(config.schema_version(), SchemaVersion::V2);
        assert_eq!(config.yaml_label(), None);
    }

    #[test]
    fn empty_label_is_rejected() {
        let err = CoreConfig::new(PresencePolicy::ExplicitOnly, SchemaVersion::V2, Some("  ".into()))
            .unwrap_err();
        assert!(matches!(err, PhenopacketError::InvalidInput(_)));
    }

    #[test]
    fn env_values_fall_back_to_defaults() {
        assert_eq!(
            presence_policy_from_env_value(None).unwrap(),
            PresencePolicy::ExplicitOnly
        );
        assert_eq!(
            presence_policy_from_env_value(Some("   ".into())).unwrap(),
            PresencePolicy::ExplicitOnly
        );
        assert_eq!(
            presence_policy_from_env_value(Some(" include_defaults ".into())).unwrap(),
            PresencePolicy::IncludeDefaults
        );
        assert!(presence_policy_from_env_value(Some("sometimes".into())).is_err());

        assert_eq!(schema_version_from_env_value(None).unwrap(), SchemaVersion::V2);
        assert_eq!(
            schema_version_from_env_value(Some("1.0".into())).unwrap(),
            SchemaVersion::V1
        );
        assert!(matches!(
            schema_version_from_env_value(Some("9".into())),
            Err(PhenopacketError::Codec(_))
        ));
    }

    #[test]
    fn yaml_config_parses_every_key() {
        let config = CoreConfig::from_yaml_str(
            "presence_policy: include-defaults\nschema_version: 2.0\nyaml_label: packet\n",
        )
        .unwrap();
        assert_eq!(config.presence_policy(), PresencePolicy::IncludeDefaults);
        assert_eq!(config.schema_version(), SchemaVersion::V2);
        assert_eq!(config.yaml_label(), Some("packet"));

        let quoted = CoreConfig::from_yaml_str("schema_version: '1.0'\n").unwrap();
        assert_eq!(quoted.schema_version(), SchemaVersion::V1);
        assert_eq!(quoted.presence_policy(), PresencePolicy::ExplicitOnly);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let err = CoreConfig::from_yaml_str("presence_policy: explicit-only\ncolour: blue\n")
            .unwrap_err();
        match err {
            PhenopacketError::Config { message, .. } => {
                assert!(message.contains("unknown field `colour`"), "{message}");
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn bad_values_report_their_key() {
        let err = CoreConfig::from_yaml_str("presence_policy: sometimes\n").unwrap_err();
        match err {
            PhenopacketError::Config { path, .. } => assert_eq!(path, "presence_policy"),
            other => panic!("expected Config error, got {other:?}"),
        }

        let err = CoreConfig::from_yaml_str("schema_version: '3.0'\n").unwrap_err();
        match err {
            PhenopacketError::Config { path, message } => {
                assert_eq!(path, "schema_version");
                assert_eq!(message, "unsupported schema version: 3.0");
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn config_file_is_read_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "yaml_label: example").unwrap();
        let config = CoreConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.yaml_label(), Some("example"));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            CoreConfig::from_yaml_file(&missing),
            Err(PhenopacketError::FileRead(_))
        ));
    }
}
