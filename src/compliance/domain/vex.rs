use super::sbom::Tool;
use serde::{Deserialize, Serialize};

/// Parsed VEX document, CycloneDX-shaped.
///
/// The required top-level fields are modeled as optional so the structural
/// validator can report their absence instead of failing deserialization.
/// The same struct serializes generated documents; absent fields are
/// skipped on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VexDocument {
    #[serde(rename = "bomFormat", skip_serializing_if = "Option::is_none")]
    pub bom_format: Option<String>,
    #[serde(rename = "specVersion", skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(rename = "serialNumber", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<VexMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vulnerabilities: Option<Vec<VulnerabilityEntry>>,
}

impl VexDocument {
    /// The vulnerability entries, empty when the field is absent.
    pub fn entries(&self) -> &[VulnerabilityEntry] {
        self.vulnerabilities.as_deref().unwrap_or(&[])
    }
}

/// VEX metadata block (timestamp + producing tools).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VexMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

/// One reported vulnerability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<VulnerabilitySource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affects: Option<Vec<Affect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl VulnerabilityEntry {
    /// Identifier for report lines, falling back to the literal "unknown".
    pub fn id_or_unknown(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }

    /// The authoritative severity literal: `ratings[0].severity`.
    pub fn severity_literal(&self) -> Option<&str> {
        self.ratings.first().and_then(|rating| rating.severity.as_deref())
    }
}

/// Advisory origin of a vulnerability entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilitySource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A severity rating. Only the first entry of `ratings` is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// A reference to a component affected by a vulnerability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affect {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub bom_ref: Option<String>,
}

/// Exploitability analysis for a vulnerability entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The recognized VEX analysis states.
///
/// `analysis.state` stays a raw string in the document model; the policy
/// evaluator parses the lower-cased value through here and turns anything
/// unrecognized into a violation carrying the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VexState {
    Affected,
    NotAffected,
    Fixed,
    UnderInvestigation,
}

impl VexState {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "affected" => Some(VexState::Affected),
            "not_affected" => Some(VexState::NotAffected),
            "fixed" => Some(VexState::Fixed),
            "under_investigation" => Some(VexState::UnderInvestigation),
            _ => None,
        }
    }
}
