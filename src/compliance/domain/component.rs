use serde::{Deserialize, Serialize};

/// A software unit listed in an SBOM, either the application itself
/// (`metadata.component`) or a dependency (`components[]`).
///
/// Every field the validators test for presence is optional: an absent key
/// and an empty string are equivalent for the completeness checks, but the
/// model keeps them distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "bom-ref", skip_serializing_if = "Option::is_none")]
    pub bom_ref: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<Purl>,
}

impl Component {
    /// An all-absent component. Used to validate a document whose
    /// `metadata.component` is missing entirely: every identity field of
    /// the empty component reports as missing.
    pub fn empty() -> Self {
        Self {
            bom_ref: None,
            component_type: None,
            name: None,
            version: None,
            supplier: None,
            purl: None,
        }
    }

    pub fn is_library(&self) -> bool {
        matches!(self.component_type, Some(ComponentType::Library))
    }

    /// Supplier name, if a supplier object with a name is present.
    pub fn supplier_name(&self) -> Option<&str> {
        self.supplier.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// Component type. CycloneDX defines more types than the gate
/// distinguishes; everything that is not an application or a library is
/// carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentType {
    Application,
    Library,
    Other(String),
}

impl ComponentType {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::Application => "application",
            ComponentType::Library => "library",
            ComponentType::Other(value) => value,
        }
    }
}

impl From<String> for ComponentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "application" => ComponentType::Application,
            "library" => ComponentType::Library,
            _ => ComponentType::Other(value),
        }
    }
}

impl From<ComponentType> for String {
    fn from(value: ComponentType) -> Self {
        value.as_str().to_string()
    }
}

/// Component supplier. Only the name matters to the minimal elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Package URL reference.
///
/// Documents carry either an opaque purl string ("pkg:pypi/requests@2.31.0")
/// or a structured object with the decomposed fields; the untagged variant
/// accepts both without a discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Purl {
    Reference(PurlReference),
    Raw(String),
}

/// Structured purl object. Only `type` and `name` are required by the
/// minimal elements; the rest of the PackageURL fields are passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurlReference {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub purl_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
