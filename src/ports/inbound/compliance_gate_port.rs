use crate::application::dto::{CheckRequest, CheckResponse};
use crate::shared::Result;

/// ComplianceGatePort - Inbound port for the full compliance pipeline
///
/// This port defines the interface that external adapters (CLI, CI
/// integrations) use to run the gate end to end. It represents the
/// application's public API.
pub trait ComplianceGatePort {
    /// Runs the pipeline: SBOM validation, VEX structural validation with
    /// cross-referencing, then policy evaluation. Stops after the first
    /// failing stage.
    ///
    /// # Arguments
    /// * `request` - Document paths and the enforcement mode
    ///
    /// # Returns
    /// The per-stage reports; stages after a failing one are absent
    ///
    /// # Errors
    /// Returns an error if a document cannot be read or parsed, or if a
    /// vulnerability entry carries an out-of-range severity
    fn check(&self, request: CheckRequest) -> Result<CheckResponse>;
}
