//! Provenance of a record: who made it, when, and which vocabularies it uses.

use phenopackets_types::Curie;

use super::ExternalReference;
use crate::timestamp::Timestamp;

message! {
    /// Provenance block carried by every root record.
    pub struct MetaData = "org.phenopackets.schema.v2.core.MetaData" {
        created: Option<Timestamp> => ("created", "created"),
        created_by: String => ("created_by", "createdBy"),
        submitted_by: String => ("submitted_by", "submittedBy"),
        /// Vocabularies referenced by the record's ontology terms.
        resources: Vec<Resource> => ("resources", "resources"),
        updates: Vec<Update> => ("updates", "updates"),
        phenopacket_schema_version: String
            => ("phenopacket_schema_version", "phenopacketSchemaVersion"),
        external_references: Vec<ExternalReference>
            => ("external_references", "externalReferences"),
    }
}

impl MetaData {
    /// The resource declaring `prefix`, compared case-sensitively.
    pub fn resource_for_prefix(&self, prefix: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|resource| resource.namespace_prefix == prefix)
    }

    /// Expands a CURIE into a full IRI through the resource that declares its prefix.
    ///
    /// Returns `None` when no resource declares the prefix or the resource has no IRI prefix.
    pub fn resolve_iri(&self, curie: &Curie) -> Option<String> {
        let resource = self.resource_for_prefix(curie.prefix())?;
        if resource.iri_prefix.is_empty() {
            return None;
        }
        Some(format!("{}{}", resource.iri_prefix, curie.local_id()))
    }
}

message! {
    /// A versioned vocabulary, e.g. the Human Phenotype Ontology.
    pub struct Resource = "org.phenopackets.schema.v2.core.Resource" {
        id: String => ("id", "id"),
        name: String => ("name", "name"),
        url: String => ("url", "url"),
        version: String => ("version", "version"),
        namespace_prefix: String => ("namespace_prefix", "namespacePrefix"),
        iri_prefix: String => ("iri_prefix", "iriPrefix"),
    }
}

message! {
    pub struct Update = "org.phenopackets.schema.v2.core.Update" {
        timestamp: Option<Timestamp> => ("timestamp", "timestamp"),
        updated_by: String => ("updated_by", "updatedBy"),
        comment: String => ("comment", "comment"),
    }
}
