use crate::compliance::domain::{SbomDocument, VexDocument, VulnerabilityFeed};
use crate::ports::outbound::DocumentReader;
use crate::shared::error::GateError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for loading JSON documents from disk
///
/// This adapter implements the DocumentReader port, reading SBOM, VEX,
/// and feed files with the same security checks applied to every path.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check document size limits
    fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        validate_regular_file(path, file_description)?;

        let metadata = fs::symlink_metadata(path).map_err(|e| {
            anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
        })?;
        validate_file_size(metadata.len(), path, MAX_DOCUMENT_SIZE)?;

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
    }

    fn load_json<T: DeserializeOwned>(
        &self,
        path: &Path,
        file_description: &str,
        suggestion: &str,
    ) -> Result<T> {
        if !path.exists() {
            return Err(GateError::DocumentNotFound {
                path: path.to_path_buf(),
                suggestion: suggestion.to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path, file_description)?;

        serde_json::from_str(&content).map_err(|e| {
            GateError::DocumentParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl DocumentReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument> {
        self.load_json(
            path,
            "SBOM document",
            "Generate an SBOM with your build tooling first, or check the --sbom path.",
        )
    }

    fn read_vex(&self, path: &Path) -> Result<VexDocument> {
        self.load_json(
            path,
            "VEX document",
            "Generate one from a vulnerability feed with 'sbom-gate generate-vex', or check the --vex path.",
        )
    }

    fn read_feed(&self, path: &Path) -> Result<VulnerabilityFeed> {
        self.load_json(
            path,
            "vulnerability feed",
            "Point --input at the scanner output containing a 'vulnerabilities' array.",
        )
    }
}
