use phenopackets_schema::{CodecError, TimestampError};
use phenopackets_yaml::YamlError;

#[derive(Debug, thiserror::Error)]
pub enum PhenopacketError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Yaml(#[from] YamlError),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error("invalid configuration at {path}: {message}")]
    Config { path: String, message: String },

    #[error("failed to read file: {0}")]
    FileRead(std::io::Error),

    #[error("failed to write file: {0}")]
    FileWrite(std::io::Error),

    #[error("round trip of '{sample}' failed at the {stage} stage: {detail}")]
    RoundTripMismatch {
        sample: String,
        stage: &'static str,
        detail: String,
    },
}

impl PhenopacketError {
    /// Whether the input text itself could not be parsed (as opposed to parsing into the
    /// wrong shape).
    pub fn is_parse_error(&self) -> bool {
        match self {
            PhenopacketError::Codec(CodecError::Parse(_)) => true,
            PhenopacketError::Yaml(err) => err.is_parse_error(),
            _ => false,
        }
    }
}

pub type PhenopacketResult<T> = std::result::Result<T, PhenopacketError>;
