//! Typed phenopacket records and their canonical JSON form.
//!
//! This crate owns three things:
//! - the reflective field model ([`reflect`]): every record type exposes an ordered descriptor
//!   table plus `get`/`oneof_case` accessors, generated at compile time by [`message!`],
//!   [`oneof!`] and [`proto_enum!`];
//! - the canonical JSON codec ([`json`]), which walks that model under an explicit
//!   [`PresencePolicy`];
//! - the v2 record catalog ([`v2`]) and the per-version [`Registry`].
//!
//! YAML lives in `phenopackets-yaml` and never needs to know about record types: it rewrites
//! the JSON this crate produces.

#[macro_use]
mod macros;

pub mod bytes;
pub mod error;
pub mod json;
pub mod reflect;
pub mod registry;
pub mod timestamp;
pub mod v2;

pub use bytes::Bytes;
pub use error::{CodecError, CodecResult};
pub use json::{FieldPath, PresencePolicy};
pub use reflect::{
    Cardinality, FieldDescriptor, FieldKind, FieldValue, Message, MessageDescriptor, MessageType,
    OneofAlternative, ProtoEnum, ScalarType,
};
pub use registry::{Registry, SchemaVersion};
pub use timestamp::{Timestamp, TimestampError};
