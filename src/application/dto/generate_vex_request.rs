use std::path::PathBuf;

/// GenerateVexRequest - Internal request DTO for VEX generation
#[derive(Debug, Clone)]
pub struct GenerateVexRequest {
    /// Path to the raw vulnerability feed
    pub feed_path: PathBuf,
    /// Package ecosystem used when constructing purl-style refs
    /// (e.g. "pypi" -> "pkg:pypi/requests@2.31.0")
    pub ecosystem: String,
}

impl GenerateVexRequest {
    pub fn new(feed_path: PathBuf, ecosystem: String) -> Self {
        Self {
            feed_path,
            ecosystem,
        }
    }
}
