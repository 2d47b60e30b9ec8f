//! Named sample records used for round-trip verification and pinned canonical hashes.
//!
//! Between them the samples contain every v2 record type and every alternative of every oneof
//! group at least once. The `phenopacket` sample is the deep aggregate: a record root carrying
//! nested subjects, ordered observations, interpretations down to VCF level, map fields and
//! provenance.

use std::collections::BTreeMap;

use phenopackets_schema::v2::pedigree::{AffectedStatus, Person};
use phenopackets_schema::v2::{
    genomic_interpretation, interpretation, therapeutic_regimen, vital_status,
    AcmgPathogenicityClassification, Age, AgeRange, Biosample, Cohort, ComplexValue, Diagnosis,
    Disease, DoseInterval, DrugType, Evidence, Expression, ExternalReference, Family, File,
    GeneDescriptor, GenomicInterpretation, GestationalAge, Individual, Interpretation,
    InterpretationCall, KaryotypicSex, Measurement, MeasurementValue, MedicalAction,
    MedicalActionKind, MetaData, MoleculeContext, OntologyClass, Pedigree, Phenopacket,
    PhenotypicFeature, Procedure, Quantity, RadiationTherapy, ReferenceRange, RegimenIdentifier,
    Resource, Sex, TherapeuticActionability, TherapeuticRegimen, TimeElement, TimeElementKind,
    TimeInterval, Treatment, TypedQuantity, Update, Value, ValueKind, VariantInterpretation,
    VariationDescriptor, VcfRecord, VitalStatus, SCHEMA_VERSION,
};
use phenopackets_schema::{MessageType, PresencePolicy, Timestamp};

use crate::verify::{RoundTrip, RoundTripReport};
use crate::{PhenopacketError, PhenopacketResult};

/// One named record of the corpus.
#[derive(Debug)]
pub struct Sample {
    /// Unique, kebab-case.
    pub name: &'static str,
    /// Root key of the labeled YAML snippet.
    pub label: &'static str,
    pub record: Box<dyn RoundTrip>,
}

impl Sample {
    fn new<M: MessageType>(name: &'static str, label: &'static str, record: M) -> Self {
        Self {
            name,
            label,
            record: Box::new(record),
        }
    }

    /// Round-trips the record; a mismatch is reported under the sample's name.
    pub fn verify(&self, policy: PresencePolicy) -> PhenopacketResult<RoundTripReport> {
        self.record
            .verify(policy, self.label)
            .map_err(|err| match err {
                PhenopacketError::RoundTripMismatch { stage, detail, .. } => {
                    PhenopacketError::RoundTripMismatch {
                        sample: self.name.to_owned(),
                        stage,
                        detail,
                    }
                }
                other => other,
            })
    }
}

/// Builds the full corpus, in a fixed order.
///
/// # Errors
///
/// Fails only if one of the built-in timestamps does not parse.
pub fn corpus() -> PhenopacketResult<Vec<Sample>> {
    let mut samples = vec![Sample::new(
        "ontology-class",
        "ontologyClass",
        term("HP:0012828", "Severe"),
    )];
    samples.extend(time_elements()?);
    samples.extend(measurements()?);
    samples.extend(medical_actions()?);
    samples.extend(genomic_interpretations());
    samples.push(Sample::new("biosample", "biosample", biosample()));
    samples.push(Sample::new("phenopacket", "phenopacket", phenopacket()?));
    samples.push(Sample::new("family", "family", family()?));
    samples.push(Sample::new("cohort", "cohort", cohort()));
    Ok(samples)
}

/// Looks one sample up by name.
pub fn sample(name: &str) -> PhenopacketResult<Option<Sample>> {
    Ok(corpus()?.into_iter().find(|sample| sample.name == name))
}

// ============================================================================
// Helpers
// ============================================================================

fn term(id: &str, label: &str) -> OntologyClass {
    OntologyClass::new(id, label)
}

fn at(text: &str) -> PhenopacketResult<Timestamp> {
    Ok(Timestamp::parse(text)?)
}

fn element(kind: TimeElementKind) -> TimeElement {
    TimeElement {
        element: Some(kind),
    }
}

fn quantity(unit: OntologyClass, value: f64) -> Quantity {
    Quantity {
        unit: Some(unit),
        value,
        ..Default::default()
    }
}

fn individual(id: &str, sex: Sex) -> Individual {
    Individual {
        id: id.into(),
        sex,
        ..Default::default()
    }
}

fn homo_sapiens() -> OntologyClass {
    term("NCBITaxon:9606", "Homo sapiens")
}

fn brca1() -> GeneDescriptor {
    GeneDescriptor {
        value_id: "HGNC:1100".into(),
        symbol: "BRCA1".into(),
        ..Default::default()
    }
}

fn string_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

// ============================================================================
// Oneof alternatives
// ============================================================================

fn time_elements() -> PhenopacketResult<Vec<Sample>> {
    Ok(vec![
        Sample::new(
            "time-element-gestational-age",
            "timeElement",
            element(TimeElementKind::GestationalAge(GestationalAge {
                weeks: 33,
                days: 2,
            })),
        ),
        Sample::new("time-element-age", "timeElement", TimeElement::age("P14Y")),
        Sample::new(
            "time-element-age-range",
            "timeElement",
            element(TimeElementKind::AgeRange(AgeRange {
                start: Some(Age::new("P5Y")),
                end: Some(Age::new("P10Y")),
            })),
        ),
        Sample::new(
            "time-element-ontology-class",
            "timeElement",
            element(TimeElementKind::OntologyClass(term(
                "HP:0003577",
                "Congenital onset",
            ))),
        ),
        Sample::new(
            "time-element-timestamp",
            "timeElement",
            element(TimeElementKind::Timestamp(at("2021-05-14T13:46:40Z")?)),
        ),
        Sample::new(
            "time-element-interval",
            "timeElement",
            element(TimeElementKind::Interval(TimeInterval {
                start: Some(at("2021-05-14T13:46:40Z")?),
                end: Some(at("2021-05-15T13:46:40Z")?),
            })),
        ),
    ])
}

fn measurements() -> PhenopacketResult<Vec<Sample>> {
    let ng_per_dl = term("UCUM:ng/dL", "nanogram per deciliter");
    let mm_hg = term("NCIT:C49670", "Millimeter of Mercury");

    let testosterone = Measurement {
        description: "Serum testosterone".into(),
        assay: Some(term("LOINC:2986-8", "Testosterone")),
        measurement_value: Some(MeasurementValue::Value(Value {
            value: Some(ValueKind::Quantity(Quantity {
                unit: Some(ng_per_dl.clone()),
                value: 280.0,
                reference_range: Some(ReferenceRange {
                    unit: Some(ng_per_dl),
                    low: 240.0,
                    high: 950.0,
                }),
            })),
        })),
        time_observed: Some(TimeElement::age("P43Y")),
        procedure: Some(Procedure {
            code: Some(term("NCIT:C25294", "Laboratory Procedure")),
            ..Default::default()
        }),
    };

    let eosinophils = Measurement {
        assay: Some(term("LOINC:26450-7", "Eosinophils in blood")),
        measurement_value: Some(MeasurementValue::Value(Value {
            value: Some(ValueKind::OntologyClass(term("NCIT:C14165", "Normal"))),
        })),
        ..Default::default()
    };

    let blood_pressure = Measurement {
        assay: Some(term("CMO:0000003", "blood pressure")),
        measurement_value: Some(MeasurementValue::ComplexValue(ComplexValue {
            typed_quantities: vec![
                TypedQuantity {
                    r#type: Some(term("NCIT:C25298", "Systolic Blood Pressure")),
                    quantity: Some(quantity(mm_hg.clone(), 120.0)),
                },
                TypedQuantity {
                    r#type: Some(term("NCIT:C25299", "Diastolic Blood Pressure")),
                    quantity: Some(quantity(mm_hg, 80.0)),
                },
            ],
        })),
        time_observed: Some(element(TimeElementKind::Timestamp(at(
            "2021-05-14T13:46:40Z",
        )?))),
        ..Default::default()
    };

    Ok(vec![
        Sample::new("measurement-quantity", "measurement", testosterone),
        Sample::new("measurement-ontology-value", "measurement", eosinophils),
        Sample::new("measurement-complex-value", "measurement", blood_pressure),
    ])
}

fn medical_actions() -> PhenopacketResult<Vec<Sample>> {
    let milligram = term("UO:0000022", "milligram");

    let procedure = MedicalAction {
        action: Some(MedicalActionKind::Procedure(Procedure {
            code: Some(term("NCIT:C5189", "Radical Cystoprostatectomy")),
            body_site: Some(term("UBERON:0001256", "wall of urinary bladder")),
            performed: Some(TimeElement::age("P66Y")),
        })),
        ..Default::default()
    };

    let treatment = MedicalAction {
        action: Some(MedicalActionKind::Treatment(Treatment {
            agent: Some(term("DrugCentral:1610", "cisplatin")),
            route_of_administration: Some(term(
                "NCIT:C38276",
                "Intravenous Route of Administration",
            )),
            dose_intervals: vec![DoseInterval {
                quantity: Some(quantity(milligram.clone(), 30.0)),
                schedule_frequency: Some(term("NCIT:C64496", "Twice Daily")),
                interval: Some(TimeInterval {
                    start: Some(at("2020-03-15T13:00:00Z")?),
                    end: Some(at("2020-03-25T09:00:00Z")?),
                }),
            }],
            drug_type: DrugType::Prescription,
            cumulative_dose: Some(quantity(milligram, 600.0)),
        })),
        treatment_target: Some(term("NCIT:C39853", "Infiltrating Urothelial Carcinoma")),
        treatment_intent: Some(term("NCIT:C62220", "Cure")),
        response_to_treatment: Some(term("NCIT:C123584", "Favorable")),
        adverse_events: vec![term("HP:0025637", "Vasospasm")],
        treatment_termination_reason: Some(term("NCIT:C41331", "Adverse Event")),
    };

    let radiation = MedicalAction {
        action: Some(MedicalActionKind::RadiationTherapy(RadiationTherapy {
            modality: Some(term("NCIT:C28039", "Carbon-Ion Radiotherapy")),
            body_site: Some(term("UBERON:0002037", "cerebellum")),
            dosage: 3000,
            fractions: 20,
        })),
        ..Default::default()
    };

    let trial = MedicalAction {
        action: Some(MedicalActionKind::TherapeuticRegimen(TherapeuticRegimen {
            identifier: Some(RegimenIdentifier::ExternalReference(ExternalReference {
                id: "NCT04576091".into(),
                reference: "https://clinicaltrials.gov/ct2/show/NCT04576091".into(),
                description: "CAR T-cell trial".into(),
            })),
            start_time: Some(TimeElement::age("P56Y")),
            regimen_status: therapeutic_regimen::RegimenStatus::Started,
            ..Default::default()
        })),
        ..Default::default()
    };

    let chemotherapy = MedicalAction {
        action: Some(MedicalActionKind::TherapeuticRegimen(TherapeuticRegimen {
            identifier: Some(RegimenIdentifier::OntologyClass(term(
                "NCIT:C10894",
                "Carboplatin/Paclitaxel",
            ))),
            start_time: Some(element(TimeElementKind::Timestamp(at(
                "2020-01-10T00:00:00Z",
            )?))),
            end_time: Some(element(TimeElementKind::Timestamp(at(
                "2020-06-10T00:00:00Z",
            )?))),
            regimen_status: therapeutic_regimen::RegimenStatus::Completed,
        })),
        ..Default::default()
    };

    Ok(vec![
        Sample::new("medical-action-procedure", "medicalAction", procedure),
        Sample::new("medical-action-treatment", "medicalAction", treatment),
        Sample::new("medical-action-radiation-therapy", "medicalAction", radiation),
        Sample::new("medical-action-regimen-reference", "medicalAction", trial),
        Sample::new("medical-action-regimen-term", "medicalAction", chemotherapy),
    ])
}

fn genomic_interpretations() -> Vec<Sample> {
    let gene = GenomicInterpretation {
        subject_or_biosample_id: "patient-1".into(),
        interpretation_status: genomic_interpretation::InterpretationStatus::Candidate,
        call: Some(InterpretationCall::Gene(GeneDescriptor {
            description: "BRCA1 DNA repair associated".into(),
            alternate_ids: vec!["ensembl:ENSG00000012048".into()],
            xrefs: vec!["NCBIGene:672".into()],
            alternate_symbols: vec!["RNF53".into()],
            ..brca1()
        })),
    };

    let variant = GenomicInterpretation {
        subject_or_biosample_id: "patient-1".into(),
        interpretation_status: genomic_interpretation::InterpretationStatus::Causative,
        call: Some(InterpretationCall::VariantInterpretation(
            VariantInterpretation {
                acmg_pathogenicity_classification: AcmgPathogenicityClassification::Pathogenic,
                therapeutic_actionability: TherapeuticActionability::Actionable,
                variation_descriptor: Some(VariationDescriptor {
                    id: "var-1".into(),
                    label: "BRCA1 frameshift".into(),
                    gene_context: Some(brca1()),
                    expressions: vec![Expression {
                        syntax: "hgvs.c".into(),
                        value: "NM_007294.4:c.5266dup".into(),
                        ..Default::default()
                    }],
                    vcf_record: Some(VcfRecord {
                        genome_assembly: "GRCh38".into(),
                        chrom: "chr17".into(),
                        pos: 43_057_063,
                        r#ref: "G".into(),
                        alt: "GC".into(),
                        qual: "60".into(),
                        filter: "PASS".into(),
                        ..Default::default()
                    }),
                    xrefs: vec!["ClinVar:17677".into()],
                    alternate_labels: vec!["c.5266dupC".into()],
                    molecule_context: MoleculeContext::Genomic,
                    structural_type: Some(term("SO:0001059", "sequence_alteration")),
                    vrs_ref_allele_seq: "G".into(),
                    allelic_state: Some(term("GENO:0000135", "heterozygous")),
                    ..Default::default()
                }),
            },
        )),
    };

    vec![
        Sample::new("genomic-interpretation-gene", "genomicInterpretation", gene),
        Sample::new("genomic-interpretation-variant", "genomicInterpretation", variant),
    ]
}

// ============================================================================
// Aggregates
// ============================================================================

fn biosample() -> Biosample {
    Biosample {
        id: "sample-1".into(),
        individual_id: "patient-1".into(),
        derived_from_id: "sample-0".into(),
        description: "Bladder tumor biopsy".into(),
        sampled_tissue: Some(term("UBERON:0001256", "wall of urinary bladder")),
        sample_type: Some(term("NCIT:C43412", "Tumor Tissue")),
        phenotypic_features: vec![PhenotypicFeature {
            r#type: Some(term("NCIT:C35941", "Flat Urothelial Carcinoma")),
            ..Default::default()
        }],
        measurements: vec![Measurement {
            assay: Some(term("NCIT:C60819", "Tumor size")),
            measurement_value: Some(MeasurementValue::Value(Value {
                value: Some(ValueKind::Quantity(quantity(
                    term("UCUM:mm", "millimeter"),
                    15.5,
                ))),
            })),
            ..Default::default()
        }],
        taxonomy: Some(homo_sapiens()),
        time_of_collection: Some(TimeElement::age("P52Y2M")),
        histological_diagnosis: Some(term("NCIT:C39853", "Infiltrating Urothelial Carcinoma")),
        tumor_progression: Some(term("NCIT:C84509", "Primary Malignant Neoplasm")),
        tumor_grade: Some(term("NCIT:C36136", "Grade 3 Lesion")),
        pathological_stage: Some(term("NCIT:C28054", "Stage II")),
        pathological_tnm_finding: vec![
            term("NCIT:C48726", "T2b Stage Finding"),
            term("NCIT:C48705", "N0 Stage Finding"),
        ],
        diagnostic_markers: vec![term("NCIT:C68748", "HER2/Neu Positive")],
        procedure: Some(Procedure {
            code: Some(term("NCIT:C5189", "Radical Cystoprostatectomy")),
            ..Default::default()
        }),
        files: vec![File {
            uri: "file:///data/genomes/sample1.bam".into(),
            individual_to_file_identifiers: string_map(&[("sample-1", "BS-1")]),
            file_attributes: string_map(&[("genomeAssembly", "GRCh38"), ("fileFormat", "BAM")]),
        }],
        material_sample: Some(term("EFO:0009655", "abnormal sample")),
        sample_processing: Some(term("NCIT:C25398", "Formalin Fixation")),
        sample_storage: Some(term("NCIT:C141401", "Frozen")),
    }
}

fn phenopacket() -> PhenopacketResult<Phenopacket> {
    let case_report = ExternalReference {
        id: "PMID:30808312".into(),
        description: "Example case report".into(),
        ..Default::default()
    };
    let breast_ovarian_cancer = term("OMIM:604370", "Breast-ovarian cancer familial 1");

    Ok(Phenopacket {
        id: "example-1".into(),
        subject: Some(Individual {
            id: "patient-1".into(),
            alternate_ids: vec!["MRN-1".into()],
            date_of_birth: Some(at("1998-01-01T00:00:00Z")?),
            time_at_last_encounter: Some(TimeElement::age("P23Y")),
            vital_status: Some(VitalStatus {
                status: vital_status::Status::Deceased,
                time_of_death: Some(TimeElement::age("P23Y")),
                cause_of_death: Some(term("MONDO:0007254", "breast cancer")),
                survival_time_in_days: 180,
            }),
            sex: Sex::Female,
            karyotypic_sex: KaryotypicSex::Xx,
            taxonomy: Some(homo_sapiens()),
            ..Default::default()
        }),
        phenotypic_features: vec![
            PhenotypicFeature {
                description: "Recurrent seizures".into(),
                r#type: Some(term("HP:0001250", "Seizure")),
                severity: Some(term("HP:0012828", "Severe")),
                modifiers: vec![term("HP:0031796", "Recurrent")],
                onset: Some(TimeElement::age("P2Y")),
                resolution: Some(TimeElement::age("P5Y")),
                evidence: vec![Evidence {
                    evidence_code: Some(term(
                        "ECO:0000033",
                        "author statement supported by traceable reference",
                    )),
                    reference: Some(case_report.clone()),
                }],
                ..Default::default()
            },
            PhenotypicFeature {
                r#type: Some(term("HP:0000252", "Microcephaly")),
                excluded: true,
                ..Default::default()
            },
            PhenotypicFeature {
                r#type: Some(term("HP:0001263", "Global developmental delay")),
                onset: Some(element(TimeElementKind::OntologyClass(term(
                    "HP:0011463",
                    "Childhood onset",
                )))),
                ..Default::default()
            },
        ],
        measurements: vec![Measurement {
            assay: Some(term("LOINC:718-7", "Hemoglobin")),
            measurement_value: Some(MeasurementValue::Value(Value {
                value: Some(ValueKind::Quantity(quantity(
                    term("UCUM:g/dL", "gram per deciliter"),
                    13.5,
                ))),
            })),
            ..Default::default()
        }],
        biosamples: vec![Biosample {
            id: "sample-1".into(),
            individual_id: "patient-1".into(),
            sampled_tissue: Some(term("UBERON:0000178", "blood")),
            taxonomy: Some(homo_sapiens()),
            ..Default::default()
        }],
        interpretations: vec![Interpretation {
            id: "interpretation-1".into(),
            progress_status: interpretation::ProgressStatus::Solved,
            diagnosis: Some(Diagnosis {
                disease: Some(breast_ovarian_cancer.clone()),
                genomic_interpretations: vec![GenomicInterpretation {
                    subject_or_biosample_id: "patient-1".into(),
                    interpretation_status: genomic_interpretation::InterpretationStatus::Causative,
                    call: Some(InterpretationCall::VariantInterpretation(
                        VariantInterpretation {
                            acmg_pathogenicity_classification:
                                AcmgPathogenicityClassification::Pathogenic,
                            variation_descriptor: Some(VariationDescriptor {
                                id: "var-1".into(),
                                gene_context: Some(brca1()),
                                molecule_context: MoleculeContext::Genomic,
                                allelic_state: Some(term("GENO:0000135", "heterozygous")),
                                ..Default::default()
                            }),
                            ..Default::default()
                        },
                    )),
                }],
            }),
            summary: "Pathogenic BRCA1 variant".into(),
        }],
        diseases: vec![Disease {
            term: Some(breast_ovarian_cancer),
            onset: Some(TimeElement::age("P20Y")),
            disease_stage: vec![term("NCIT:C27971", "Stage IV")],
            clinical_tnm_finding: vec![term("NCIT:C48732", "T4 Stage Finding")],
            primary_site: Some(term("UBERON:0000310", "breast")),
            laterality: Some(term("HP:0012834", "Right")),
            ..Default::default()
        }],
        medical_actions: vec![MedicalAction {
            action: Some(MedicalActionKind::Procedure(Procedure {
                code: Some(term("NCIT:C51585", "Biopsy of Breast")),
                performed: Some(TimeElement::age("P21Y")),
                ..Default::default()
            })),
            ..Default::default()
        }],
        files: vec![File {
            uri: "file:///data/genomes/patient1.vcf.gz".into(),
            individual_to_file_identifiers: string_map(&[("patient-1", "NA12345")]),
            file_attributes: string_map(&[("genomeAssembly", "GRCh38"), ("fileFormat", "VCF")]),
        }],
        meta_data: Some(MetaData {
            created: Some(at("2021-05-14T13:46:40.120Z")?),
            created_by: "curator-1".into(),
            submitted_by: "lab-1".into(),
            resources: vec![
                Resource {
                    id: "hp".into(),
                    name: "human phenotype ontology".into(),
                    url: "http://purl.obolibrary.org/obo/hp.owl".into(),
                    version: "2023-10-09".into(),
                    namespace_prefix: "HP".into(),
                    iri_prefix: "http://purl.obolibrary.org/obo/HP_".into(),
                },
                Resource {
                    id: "geno".into(),
                    name: "Genotype Ontology".into(),
                    url: "http://purl.obolibrary.org/obo/geno.owl".into(),
                    version: "2022-03-05".into(),
                    namespace_prefix: "GENO".into(),
                    iri_prefix: "http://purl.obolibrary.org/obo/GENO_".into(),
                },
            ],
            updates: vec![Update {
                timestamp: Some(at("2022-01-01T00:00:00Z")?),
                updated_by: "curator-2".into(),
                comment: "Added interpretation".into(),
            }],
            phenopacket_schema_version: SCHEMA_VERSION.into(),
            external_references: vec![case_report],
        }),
    })
}

fn family() -> PhenopacketResult<Family> {
    let person = |individual_id: &str, sex: Sex, affected_status: AffectedStatus| Person {
        family_id: "family-1".into(),
        individual_id: individual_id.into(),
        sex,
        affected_status,
        ..Default::default()
    };

    Ok(Family {
        id: "family-1".into(),
        proband: Some(Phenopacket {
            id: "proband-1".into(),
            subject: Some(individual("patient-1", Sex::Male)),
            phenotypic_features: vec![PhenotypicFeature {
                r#type: Some(term("HP:0001250", "Seizure")),
                ..Default::default()
            }],
            ..Default::default()
        }),
        relatives: vec![
            Phenopacket {
                id: "relative-1".into(),
                subject: Some(individual("mother-1", Sex::Female)),
                ..Default::default()
            },
            Phenopacket {
                id: "relative-2".into(),
                subject: Some(individual("father-1", Sex::Male)),
                ..Default::default()
            },
        ],
        consanguinous_parents: true,
        pedigree: Some(Pedigree {
            persons: vec![
                Person {
                    paternal_id: "father-1".into(),
                    maternal_id: "mother-1".into(),
                    ..person("patient-1", Sex::Male, AffectedStatus::Affected)
                },
                person("mother-1", Sex::Female, AffectedStatus::Unaffected),
                person("father-1", Sex::Male, AffectedStatus::Unaffected),
            ],
        }),
        files: vec![File {
            uri: "file:///data/genomes/family1.vcf.gz".into(),
            individual_to_file_identifiers: string_map(&[
                ("patient-1", "NA12345"),
                ("mother-1", "NA12347"),
                ("father-1", "NA12346"),
            ]),
            ..Default::default()
        }],
        meta_data: Some(MetaData {
            created: Some(at("2021-05-14T13:46:40Z")?),
            created_by: "curator-1".into(),
            phenopacket_schema_version: SCHEMA_VERSION.into(),
            ..Default::default()
        }),
    })
}

fn cohort() -> Cohort {
    let breast_cancer = term("MONDO:0007254", "breast cancer");

    Cohort {
        id: "cohort-1".into(),
        description: "Two unrelated probands".into(),
        members: vec![
            Phenopacket {
                id: "member-1".into(),
                subject: Some(individual("patient-1", Sex::Female)),
                diseases: vec![Disease {
                    term: Some(breast_cancer.clone()),
                    ..Default::default()
                }],
                ..Default::default()
            },
            Phenopacket {
                id: "member-2".into(),
                subject: Some(individual("patient-2", Sex::OtherSex)),
                diseases: vec![Disease {
                    term: Some(breast_cancer),
                    excluded: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
        meta_data: Some(MetaData {
            created_by: "curator-1".into(),
            phenopacket_schema_version: SCHEMA_VERSION.into(),
            ..Default::default()
        }),
        ..Default::default()
    }
}
