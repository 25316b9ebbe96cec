/// Missing-field finding for one element (component, metadata block, or
/// tool), naming the element and every field it lacks.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingFields {
    /// Element name, falling back to the literal "unknown"
    pub name: String,
    /// Dotted field paths, e.g. "supplier.name" or "purl.type"
    pub fields: Vec<String>,
}

impl MissingFields {
    pub fn new(name: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Result of the NTIA minimal-elements validation.
///
/// Constructed fresh per validation pass; a clean document produces a
/// report with no findings. There is no warning tier here, the validator
/// is binary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NtiaReport {
    /// Findings for dependency components and `metadata.component`,
    /// in document order
    pub component_findings: Vec<MissingFields>,
    /// Findings for `metadata.tools`, in document order
    pub tool_findings: Vec<MissingFields>,
}

impl NtiaReport {
    pub fn is_compliant(&self) -> bool {
        self.component_findings.is_empty() && self.tool_findings.is_empty()
    }

    /// Total number of offending elements.
    pub fn finding_count(&self) -> usize {
        self.component_findings.len() + self.tool_findings.len()
    }
}

/// Result of the VEX structural validation (either mode).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VexReport {
    /// One attributable line per missing field or unresolved reference,
    /// in document traversal order
    pub errors: Vec<String>,
}

impl VexReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ntia_report_is_compliant() {
        let report = NtiaReport::default();
        assert!(report.is_compliant());
        assert_eq!(report.finding_count(), 0);
    }

    #[test]
    fn test_component_finding_breaks_compliance() {
        let report = NtiaReport {
            component_findings: vec![MissingFields::new("requests", vec!["purl".to_string()])],
            tool_findings: vec![],
        };
        assert!(!report.is_compliant());
        assert_eq!(report.finding_count(), 1);
    }

    #[test]
    fn test_tool_finding_breaks_compliance() {
        let report = NtiaReport {
            component_findings: vec![],
            tool_findings: vec![MissingFields::new("unknown", vec!["version".to_string()])],
        };
        assert!(!report.is_compliant());
        assert_eq!(report.finding_count(), 1);
    }

    #[test]
    fn test_vex_report_validity() {
        assert!(VexReport::default().is_valid());

        let report = VexReport {
            errors: vec!["Vulnerability 'unknown' missing 'id'".to_string()],
        };
        assert!(!report.is_valid());
    }
}
