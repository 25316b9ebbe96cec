use crate::compliance::domain::{EnforcementMode, NtiaReport, PolicyVerdict, VexReport};

/// ReportPresenter port for rendering validation outcomes
///
/// This port abstracts how findings reach the user. The console adapter
/// prints colored blocks; tests capture the calls instead.
pub trait ReportPresenter {
    /// Announces a pipeline stage (stderr in the console adapter, so
    /// stdout stays consumable)
    fn announce(&self, message: &str);

    /// Renders the NTIA minimal-elements report
    fn present_ntia(&self, report: &NtiaReport);

    /// Renders the VEX structural report
    fn present_vex(&self, report: &VexReport);

    /// Renders the policy verdict: summary, warnings, failures, and the
    /// mode-dependent closing line
    fn present_policy(&self, verdict: &PolicyVerdict, mode: EnforcementMode);
}
