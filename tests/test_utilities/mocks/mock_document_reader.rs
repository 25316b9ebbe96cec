use sbom_gate::prelude::*;
use std::path::Path;

/// Mock DocumentReader that serves preloaded documents
#[derive(Default)]
pub struct MockDocumentReader {
    sbom: Option<SbomDocument>,
    vex: Option<VexDocument>,
    feed: Option<VulnerabilityFeed>,
    fail_reads: bool,
}

impl MockDocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates an unreadable/unparseable document on every read
    pub fn with_failure() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn with_sbom(mut self, json: &str) -> Self {
        self.sbom = Some(serde_json::from_str(json).expect("mock SBOM fixture must parse"));
        self
    }

    pub fn with_vex(mut self, json: &str) -> Self {
        self.vex = Some(serde_json::from_str(json).expect("mock VEX fixture must parse"));
        self
    }

    pub fn with_feed(mut self, json: &str) -> Self {
        self.feed = Some(serde_json::from_str(json).expect("mock feed fixture must parse"));
        self
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_sbom(&self, _path: &Path) -> Result<SbomDocument> {
        if self.fail_reads {
            anyhow::bail!("mock read failure");
        }
        self.sbom
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no SBOM configured in mock"))
    }

    fn read_vex(&self, _path: &Path) -> Result<VexDocument> {
        if self.fail_reads {
            anyhow::bail!("mock read failure");
        }
        self.vex
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no VEX configured in mock"))
    }

    fn read_feed(&self, _path: &Path) -> Result<VulnerabilityFeed> {
        if self.fail_reads {
            anyhow::bail!("mock read failure");
        }
        self.feed
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no feed configured in mock"))
    }
}
