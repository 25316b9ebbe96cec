use crate::compliance::domain::{EnforcementMode, NtiaReport, PolicyVerdict, VexReport};

/// CheckResponse - Result of one compliance pipeline run
///
/// Stages after a failing one are `None`: a rejected SBOM means the VEX
/// was never loaded, and a structurally invalid VEX means the policy
/// stage never ran.
#[derive(Debug, Clone)]
pub struct CheckResponse {
    /// Mode the pipeline ran under (decides whether policy failures block)
    pub mode: EnforcementMode,
    /// NTIA minimal-elements report (always present)
    pub ntia_report: NtiaReport,
    /// VEX structural report, if the SBOM stage passed
    pub vex_report: Option<VexReport>,
    /// Policy verdict, if the structural stage passed
    pub policy_verdict: Option<PolicyVerdict>,
}

impl CheckResponse {
    /// Whether the gate as a whole signals success.
    ///
    /// Validator failures block unconditionally; policy failures block
    /// only in ci mode. Warnings never block.
    pub fn passed(&self) -> bool {
        if !self.ntia_report.is_compliant() {
            return false;
        }
        match &self.vex_report {
            None => return false,
            Some(report) if !report.is_valid() => return false,
            Some(_) => {}
        }
        match &self.policy_verdict {
            None => false,
            Some(verdict) => !verdict.blocks(self.mode),
        }
    }
}
