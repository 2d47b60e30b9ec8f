//! Gene and variant descriptors from the GA4GH VRSATILE framework.
//!
//! The VRS `variation` object and free-form `extensions` are not modelled.

use super::OntologyClass;

message! {
    pub struct GeneDescriptor = "org.ga4gh.vrsatile.v1.GeneDescriptor" {
        /// Official gene identifier, e.g. `HGNC:3477`.
        value_id: String => ("value_id", "valueId"),
        symbol: String => ("symbol", "symbol"),
        description: String => ("description", "description"),
        alternate_ids: Vec<String> => ("alternate_ids", "alternateIds"),
        xrefs: Vec<String> => ("xrefs", "xrefs"),
        alternate_symbols: Vec<String> => ("alternate_symbols", "alternateSymbols"),
    }
}

proto_enum! {
    pub enum MoleculeContext = "org.ga4gh.vrsatile.v1.MoleculeContext" {
        UnspecifiedMoleculeContext = 0 => "unspecified_molecule_context",
        Genomic = 1 => "genomic",
        Transcript = 2 => "transcript",
        Protein = 3 => "protein",
    }
}

message! {
    pub struct VariationDescriptor = "org.ga4gh.vrsatile.v1.VariationDescriptor" {
        id: String => ("id", "id"),
        label: String => ("label", "label"),
        description: String => ("description", "description"),
        gene_context: Option<GeneDescriptor> => ("gene_context", "geneContext"),
        expressions: Vec<Expression> => ("expressions", "expressions"),
        vcf_record: Option<VcfRecord> => ("vcf_record", "vcfRecord"),
        xrefs: Vec<String> => ("xrefs", "xrefs"),
        alternate_labels: Vec<String> => ("alternate_labels", "alternateLabels"),
        molecule_context: MoleculeContext => ("molecule_context", "moleculeContext"),
        structural_type: Option<OntologyClass> => ("structural_type", "structuralType"),
        vrs_ref_allele_seq: String => ("vrs_ref_allele_seq", "vrsRefAlleleSeq"),
        allelic_state: Option<OntologyClass> => ("allelic_state", "allelicState"),
    }
}

message! {
    /// A variant written in some nomenclature, e.g. HGVS.
    pub struct Expression = "org.ga4gh.vrsatile.v1.Expression" {
        syntax: String => ("syntax", "syntax"),
        value: String => ("value", "value"),
        version: String => ("version", "version"),
    }
}

message! {
    /// One VCF line's worth of variant description.
    pub struct VcfRecord = "org.ga4gh.vrsatile.v1.VcfRecord" {
        genome_assembly: String => ("genome_assembly", "genomeAssembly"),
        chrom: String => ("chrom", "chrom"),
        pos: i64 => ("pos", "pos"),
        id: String => ("id", "id"),
        r#ref: String => ("ref", "ref"),
        alt: String => ("alt", "alt"),
        qual: String => ("qual", "qual"),
        filter: String => ("filter", "filter"),
        info: String => ("info", "info"),
    }
}
