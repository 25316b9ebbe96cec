use super::component::Component;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Parsed SBOM document, CycloneDX-shaped.
///
/// Immutable once deserialized; validators only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SbomDocument {
    #[serde(rename = "bomFormat", skip_serializing_if = "Option::is_none")]
    pub bom_format: Option<String>,
    #[serde(rename = "specVersion", skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SbomMetadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl SbomDocument {
    /// The set of `bom-ref` values across the dependency components.
    ///
    /// This is the reference universe a VEX document may point into;
    /// `metadata.component` (the application itself) is not part of it.
    pub fn component_refs(&self) -> HashSet<&str> {
        self.components
            .iter()
            .filter_map(|component| component.bom_ref.as_deref())
            .collect()
    }
}

/// SBOM metadata block: the application-level component plus the tools
/// that produced the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SbomMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

/// A tool descriptor from `metadata.tools`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
