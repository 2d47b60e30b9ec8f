//! # Phenopackets Core
//!
//! Everything above the codecs:
//! - [`CoreConfig`]: presence policy, schema version and YAML label, resolved once at startup;
//! - [`PhenopacketService`]: schema-aware encode, decode and conversion between JSON and YAML;
//! - [`hash`]: the canonical labeled-YAML form and its SHA-256;
//! - [`verify`] and [`corpus`]: round-trip verification over a corpus that reaches every record
//!   type and every oneof alternative.
//!
//! **No codec logic here**: the field model and JSON codec live in `phenopackets-schema`, the
//! YAML rewrite in `phenopackets-yaml`.

pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod format;
pub mod hash;
pub mod service;
pub mod verify;

pub use config::CoreConfig;
pub use error::{PhenopacketError, PhenopacketResult};
pub use format::{Format, RecordKind};
pub use service::PhenopacketService;
pub use verify::{verify_message, RoundTrip, RoundTripReport};

pub use phenopackets_schema as schema;
pub use phenopackets_yaml as yaml;
