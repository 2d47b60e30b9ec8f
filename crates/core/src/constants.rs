//! Constants used throughout the phenopackets core crate.

use phenopackets_schema::{PresencePolicy, SchemaVersion};

/// Environment variable selecting the scalar presence policy.
pub const PRESENCE_ENV: &str = "PHENOPACKETS_PRESENCE";

/// Environment variable selecting the schema version that governs decoding.
pub const SCHEMA_VERSION_ENV: &str = "PHENOPACKETS_SCHEMA_VERSION";

/// Environment variable pointing at an optional YAML configuration file.
pub const CONFIG_FILE_ENV: &str = "PHENOPACKETS_CONFIG";

/// Presence policy used when nothing is configured.
pub const DEFAULT_PRESENCE_POLICY: PresencePolicy = PresencePolicy::ExplicitOnly;

/// Latest supported schema version.
pub const LATEST_SCHEMA_VERSION: SchemaVersion = SchemaVersion::LATEST;

/// Presence policy of the canonical form that hashes are computed over.
pub const CANONICAL_PRESENCE_POLICY: PresencePolicy = PresencePolicy::ExplicitOnly;

/// File extensions recognised as JSON.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// File extensions recognised as YAML.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
