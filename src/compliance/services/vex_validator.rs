use crate::compliance::domain::{SbomDocument, VexDocument, VexReport, VulnerabilityEntry};
use std::collections::HashSet;

/// VEX structural validator.
///
/// Mode A (no SBOM supplied) checks schema completeness: required
/// top-level fields, a non-empty vulnerabilities sequence, and the
/// required per-entry and per-analysis fields. Mode B (SBOM supplied)
/// additionally cross-references every affected component against the
/// SBOM's `bom-ref` set.
///
/// All errors are collected before reporting; ordering follows document
/// traversal order, so the same input always yields the same report.
pub struct VexValidator;

impl VexValidator {
    /// Mode A: schema completeness only.
    pub fn validate(vex: &VexDocument) -> VexReport {
        Self::validate_against(vex, None)
    }

    /// Mode A or B depending on whether an SBOM is supplied.
    pub fn validate_against(vex: &VexDocument, sbom: Option<&SbomDocument>) -> VexReport {
        let mut errors = Vec::new();

        Self::check_top_level(vex, &mut errors);

        let entries = vex.entries();
        if entries.is_empty() {
            errors.push("No vulnerabilities found in VEX".to_string());
        }

        let known_refs = sbom.map(|document| document.component_refs());
        for entry in entries {
            Self::check_entry(entry, known_refs.as_ref(), &mut errors);
        }

        VexReport { errors }
    }

    fn check_top_level(vex: &VexDocument, errors: &mut Vec<String>) {
        // Key presence only: an empty bomFormat passes the structural
        // check, matching the completeness rules elsewhere being about
        // presence at this level.
        if vex.bom_format.is_none() {
            errors.push("Missing required top-level field 'bomFormat'".to_string());
        }
        if vex.spec_version.is_none() {
            errors.push("Missing required top-level field 'specVersion'".to_string());
        }
        if vex.vulnerabilities.is_none() {
            errors.push("Missing required top-level field 'vulnerabilities'".to_string());
        }
    }

    fn check_entry(
        entry: &VulnerabilityEntry,
        known_refs: Option<&HashSet<&str>>,
        errors: &mut Vec<String>,
    ) {
        let id = entry.id_or_unknown();

        if entry.id.is_none() {
            errors.push(format!("Vulnerability '{}' missing 'id'", id));
        }
        if entry.affects.is_none() {
            errors.push(format!("Vulnerability '{}' missing 'affects'", id));
        }
        if entry.analysis.is_none() {
            errors.push(format!("Vulnerability '{}' missing 'analysis'", id));
        }

        // A missing analysis block also reports both required sub-fields.
        let state = entry.analysis.as_ref().and_then(|a| a.state.as_ref());
        let justification = entry
            .analysis
            .as_ref()
            .and_then(|a| a.justification.as_ref());
        if state.is_none() {
            errors.push(format!("Vulnerability '{}' missing 'analysis.state'", id));
        }
        if justification.is_none() {
            errors.push(format!(
                "Vulnerability '{}' missing 'analysis.justification'",
                id
            ));
        }

        let affects = entry.affects.as_deref().unwrap_or(&[]);
        if affects.is_empty() {
            errors.push(format!("Vulnerability '{}' has no affected components", id));
        }

        for affect in affects {
            match affect.bom_ref.as_deref() {
                None => {
                    errors.push(format!(
                        "Vulnerability '{}' affected component missing 'ref'",
                        id
                    ));
                }
                Some(reference) => {
                    if let Some(known) = known_refs {
                        if !known.contains(reference) {
                            errors.push(format!(
                                "Vulnerability '{}' references component not present in SBOM: '{}'",
                                id, reference
                            ));
                        }
                    }
                }
            }
        }
    }
}
