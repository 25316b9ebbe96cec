use serde::{Deserialize, Serialize};

/// Raw vulnerability feed, the input of VEX generation.
///
/// This is the flat scanner-output shape, one record per finding. Identity
/// fields are required; a feed record without them cannot be turned into a
/// usable VEX entry, so deserialization rejects it outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityFeed {
    #[serde(default)]
    pub vulnerabilities: Vec<FeedEntry>,
}

/// One finding from the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub cve: String,
    pub severity: String,
    pub package: String,
    pub installed_version: String,
    pub status: String,
    #[serde(default)]
    pub justification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_version: Option<String>,
}
