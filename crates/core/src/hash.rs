//! Canonical YAML form and its SHA-256 digest.
//!
//! The canonical form of a record is its labeled YAML snippet encoded under
//! [`CANONICAL_PRESENCE_POLICY`]. Any change to field order, default emission or number
//! formatting changes the digest, which is what the pinned corpus hashes are there to catch.

use phenopackets_schema::{json, Message};
use sha2::{Digest, Sha256};

use crate::constants::CANONICAL_PRESENCE_POLICY;
use crate::PhenopacketResult;

/// Renders `message` as its canonical labeled YAML snippet.
///
/// # Errors
///
/// Fails only if the YAML emitter fails.
pub fn canonical_yaml(label: &str, message: &dyn Message) -> PhenopacketResult<String> {
    let value = json::to_value(message, CANONICAL_PRESENCE_POLICY);
    Ok(phenopackets_yaml::labeled_snippet_value(label, &value)?)
}

/// Lowercase hex SHA-256 of the canonical labeled YAML of `message`.
pub fn canonical_hash(label: &str, message: &dyn Message) -> PhenopacketResult<String> {
    Ok(sha256_hex(canonical_yaml(label, message)?.as_bytes()))
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use phenopackets_schema::v2::OntologyClass;
    use pretty_assertions::assert_eq;

    #[test]
    fn sha256_of_known_input() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn canonical_yaml_is_a_labeled_snippet() {
        let severe = OntologyClass::new("HP:0012828", "Severe");
        assert_eq!(
            canonical_yaml("ontologyClass", &severe).unwrap(),
            "ontologyClass:\n  id: HP:0012828\n  label: Severe\n"
        );
    }

    #[test]
    fn hash_depends_on_label_and_content() {
        let severe = OntologyClass::new("HP:0012828", "Severe");
        let mild = OntologyClass::new("HP:0012825", "Mild");
        let first = canonical_hash("ontologyClass", &severe).unwrap();
        assert_eq!(first, canonical_hash("ontologyClass", &severe).unwrap());
        assert_eq!(first.len(), 64);
        assert_ne!(first, canonical_hash("severity", &severe).unwrap());
        assert_ne!(first, canonical_hash("ontologyClass", &mild).unwrap());
    }
}
