use crate::compliance::domain::EnforcementMode;
use std::path::PathBuf;

/// CheckRequest - Internal request DTO for the compliance pipeline
///
/// This DTO represents the internal request structure used within
/// the application layer, after CLI flags and config have been resolved.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Path to the SBOM document
    pub sbom_path: PathBuf,
    /// Path to the VEX document
    pub vex_path: PathBuf,
    /// Enforcement mode for the policy stage
    pub mode: EnforcementMode,
}

impl CheckRequest {
    pub fn new(sbom_path: PathBuf, vex_path: PathBuf, mode: EnforcementMode) -> Self {
        Self {
            sbom_path,
            vex_path,
            mode,
        }
    }
}
