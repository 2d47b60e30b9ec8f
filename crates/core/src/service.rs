//! Format conversion over typed records.
//!
//! Every conversion goes through the typed record: text is parsed, checked against the
//! configured schema version, decoded into the record type and re-encoded. Conversion therefore
//! validates structure and normalises the output to the canonical form.

use std::path::Path;

use phenopackets_schema::json::{self, JsonValue};
use phenopackets_schema::registry::declared_version;
use phenopackets_schema::v2::{Cohort, Family, Phenopacket};
use phenopackets_schema::{CodecError, Message, MessageType, Registry};

use crate::config::CoreConfig;
use crate::format::{Format, RecordKind};
use crate::hash::canonical_hash;
use crate::{PhenopacketError, PhenopacketResult};

/// Service for encoding, decoding and converting records.
#[derive(Clone, Debug, Default)]
pub struct PhenopacketService {
    config: CoreConfig,
}

impl PhenopacketService {
    /// Creates a new instance of PhenopacketService.
    pub fn new(config: CoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Root key for labeled YAML of `kind`: the configured label if there is one.
    pub fn label_for(&self, kind: RecordKind) -> &str {
        self.config.yaml_label().unwrap_or(kind.label())
    }

    // ========================================================================
    // ENCODE
    // ========================================================================

    /// Encodes a record as pretty JSON or block YAML under the configured presence policy.
    ///
    /// # Errors
    ///
    /// Fails only if the YAML emitter fails.
    pub fn encode(&self, message: &dyn Message, format: Format) -> PhenopacketResult<String> {
        let policy = self.config.presence_policy();
        match format {
            Format::Json => Ok(json::to_string_pretty(message, policy)),
            Format::Yaml => {
                let value = json::to_value(message, policy);
                Ok(phenopackets_yaml::json_value_to_yaml(&value)?)
            }
        }
    }

    /// Encodes a record as a YAML snippet under a single root key.
    pub fn labeled_yaml(&self, label: &str, message: &dyn Message) -> PhenopacketResult<String> {
        let value = json::to_value(message, self.config.presence_policy());
        Ok(phenopackets_yaml::labeled_snippet_value(label, &value)?)
    }

    // ========================================================================
    // DECODE
    // ========================================================================

    /// Parses JSON or YAML text into a JSON value without interpreting it.
    pub fn parse(&self, text: &str, format: Format) -> PhenopacketResult<JsonValue> {
        match format {
            Format::Json => serde_json::from_str(text)
                .map_err(|err| PhenopacketError::Codec(CodecError::Parse(err))),
            Format::Yaml => Ok(phenopackets_yaml::parse_yaml(text)?),
        }
    }

    /// Decodes a record of type `M`.
    ///
    /// # Errors
    ///
    /// - parse errors from the JSON or YAML layer,
    /// - [`CodecError::UnsupportedSchemaVersion`] when the configured version has no registry or
    ///   the document declares a different version,
    /// - the structural [`CodecError`] variants when the text does not fit `M`.
    pub fn decode<M: MessageType>(&self, text: &str, format: Format) -> PhenopacketResult<M> {
        let value = self.parse(text, format)?;
        self.decode_value(&value)
    }

    /// Decodes a record of type `M` from an already parsed value.
    pub fn decode_value<M: MessageType>(&self, value: &JsonValue) -> PhenopacketResult<M> {
        self.check_schema_version(value)?;
        Ok(json::from_value(value)?)
    }

    /// Decodes a labeled YAML snippet whose root key must be `label`.
    pub fn decode_labeled<M: MessageType>(&self, label: &str, yaml: &str) -> PhenopacketResult<M> {
        let value = phenopackets_yaml::read_labeled_snippet(label, yaml)?;
        self.decode_value(&value)
    }

    /// Decodes a root record of the given kind.
    pub fn decode_kind(
        &self,
        kind: RecordKind,
        text: &str,
        format: Format,
    ) -> PhenopacketResult<Box<dyn Message>> {
        Ok(match kind {
            RecordKind::Phenopacket => Box::new(self.decode::<Phenopacket>(text, format)?),
            RecordKind::Family => Box::new(self.decode::<Family>(text, format)?),
            RecordKind::Cohort => Box::new(self.decode::<Cohort>(text, format)?),
        })
    }

    fn check_schema_version(&self, value: &JsonValue) -> PhenopacketResult<()> {
        let configured = self.config.schema_version();
        Registry::for_version(configured)?;

        match declared_version(value)? {
            Some(declared) if declared != configured => {
                tracing::warn!(%declared, %configured, "document declares a different schema version");
                Err(CodecError::UnsupportedSchemaVersion(declared.as_str().to_owned()).into())
            }
            _ => Ok(()),
        }
    }

    // ========================================================================
    // CONVERT
    // ========================================================================

    /// Converts a root record between formats by decoding and re-encoding it.
    pub fn convert(
        &self,
        kind: RecordKind,
        text: &str,
        from: Format,
        to: Format,
    ) -> PhenopacketResult<String> {
        let record = self.decode_kind(kind, text, from)?;
        self.encode(record.as_ref(), to)
    }

    /// Checks that `text` decodes as a record of the given kind.
    pub fn validate(&self, kind: RecordKind, text: &str, format: Format) -> PhenopacketResult<()> {
        self.decode_kind(kind, text, format).map(|_| ())
    }

    /// Decodes a root record and renders it as a labeled YAML snippet.
    pub fn snippet(&self, kind: RecordKind, text: &str, format: Format) -> PhenopacketResult<String> {
        let record = self.decode_kind(kind, text, format)?;
        self.labeled_yaml(self.label_for(kind), record.as_ref())
    }

    /// Decodes a root record and returns its canonical hash.
    pub fn hash(&self, kind: RecordKind, text: &str, format: Format) -> PhenopacketResult<String> {
        let record = self.decode_kind(kind, text, format)?;
        canonical_hash(self.label_for(kind), record.as_ref())
    }

    /// Converts one file into another, inferring both formats from the extensions.
    ///
    /// # Errors
    ///
    /// Returns [`PhenopacketError::InvalidInput`] for unrecognised extensions,
    /// [`PhenopacketError::FileRead`]/[`PhenopacketError::FileWrite`] for I/O failures and
    /// otherwise as [`PhenopacketService::convert`]. Nothing is written when decoding fails.
    pub fn convert_file(
        &self,
        kind: RecordKind,
        input: &Path,
        output: &Path,
    ) -> PhenopacketResult<()> {
        let from = Format::from_path(input)?;
        let to = Format::from_path(output)?;
        let text = std::fs::read_to_string(input).map_err(PhenopacketError::FileRead)?;

        let mut converted = self.convert(kind, &text, from, to)?;
        if !converted.ends_with('\n') {
            converted.push('\n');
        }
        std::fs::write(output, converted).map_err(PhenopacketError::FileWrite)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            %from,
            %to,
            "converted {kind}"
        );
        Ok(())
    }
}
