use super::is_blank;
use crate::compliance::domain::{
    Component, MissingFields, NtiaReport, Purl, SbomDocument, Tool,
};

/// NTIA minimal-elements validator.
///
/// Walks every dependency component, the application-level
/// `metadata.component`, and the tool list, and reports each element that
/// lacks a required field. The check is binary: any finding fails the
/// document.
pub struct NtiaValidator;

impl NtiaValidator {
    /// Validates an SBOM against the minimal-elements rules.
    ///
    /// The returned report enumerates every offending element in document
    /// order; validation never stops at the first finding.
    pub fn validate(sbom: &SbomDocument) -> NtiaReport {
        let mut report = NtiaReport::default();

        for component in &sbom.components {
            let missing = Self::validate_component(component);
            if !missing.is_empty() {
                let name = component.name.as_deref().unwrap_or("unknown");
                report
                    .component_findings
                    .push(MissingFields::new(name, missing));
            }
        }

        // metadata.component is always required; when the whole block is
        // absent it is checked as an empty component so each identity field
        // shows up as a finding.
        let empty = Component::empty();
        let application = sbom
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.component.as_ref())
            .unwrap_or(&empty);
        let missing = Self::validate_identity(application);
        if !missing.is_empty() {
            report
                .component_findings
                .push(MissingFields::new("metadata.component", missing));
        }

        let tools = sbom
            .metadata
            .as_ref()
            .map(|metadata| metadata.tools.as_slice())
            .unwrap_or(&[]);
        report.tool_findings = Self::validate_tools(tools);

        report
    }

    /// Name/version/type/supplier.name checks shared by dependency
    /// components and the metadata component.
    fn validate_identity(component: &Component) -> Vec<String> {
        let mut missing = Vec::new();

        if is_blank(component.name.as_deref()) {
            missing.push("name".to_string());
        }
        if is_blank(component.version.as_deref()) {
            missing.push("version".to_string());
        }
        if is_blank(component.component_type.as_ref().map(|t| t.as_str())) {
            missing.push("type".to_string());
        }
        if is_blank(component.supplier_name()) {
            missing.push("supplier.name".to_string());
        }

        missing
    }

    /// Full dependency-component check: identity fields plus the purl
    /// requirement for libraries. Applications are exempt from purl.
    fn validate_component(component: &Component) -> Vec<String> {
        let mut missing = Self::validate_identity(component);

        if component.is_library() {
            match &component.purl {
                None => missing.push("purl".to_string()),
                Some(Purl::Raw(value)) => {
                    if value.is_empty() {
                        missing.push("purl".to_string());
                    }
                }
                Some(Purl::Reference(reference)) => {
                    // An object carrying neither identity field counts as a
                    // missing purl rather than two missing sub-fields.
                    if reference.purl_type.is_none() && reference.name.is_none() {
                        missing.push("purl".to_string());
                    } else {
                        if is_blank(reference.purl_type.as_deref()) {
                            missing.push("purl.type".to_string());
                        }
                        if is_blank(reference.name.as_deref()) {
                            missing.push("purl.name".to_string());
                        }
                    }
                }
            }
        }

        missing
    }

    fn validate_tools(tools: &[Tool]) -> Vec<MissingFields> {
        let mut findings = Vec::new();

        for tool in tools {
            let mut missing = Vec::new();
            if is_blank(tool.name.as_deref()) {
                missing.push("name".to_string());
            }
            if is_blank(tool.version.as_deref()) {
                missing.push("version".to_string());
            }
            if !missing.is_empty() {
                let name = tool.name.as_deref().unwrap_or("unknown");
                findings.push(MissingFields::new(name, missing));
            }
        }

        findings
    }
}
