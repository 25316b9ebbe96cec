use crate::application::dto::{CheckRequest, CheckResponse};
use crate::compliance::domain::{EnforcementMode, NtiaReport, PolicyVerdict, VexReport};
use crate::compliance::services::{NtiaValidator, PolicyEvaluator, VexValidator};
use crate::ports::inbound::ComplianceGatePort;
use crate::ports::outbound::{DocumentReader, ReportPresenter};
use crate::shared::Result;
use std::path::Path;

/// CheckComplianceUseCase - Core use case for the compliance gate
///
/// Orchestrates the pipeline over injected infrastructure: load SBOM,
/// validate minimal elements, load VEX, validate structure against the
/// SBOM, evaluate policy. Each stage enumerates all of its findings, but
/// the pipeline stops after the first failing stage.
///
/// The individual stages are also exposed for the single-stage CLI
/// commands.
///
/// # Type Parameters
/// * `R` - DocumentReader implementation
/// * `P` - ReportPresenter implementation
pub struct CheckComplianceUseCase<R, P> {
    document_reader: R,
    report_presenter: P,
}

impl<R, P> CheckComplianceUseCase<R, P>
where
    R: DocumentReader,
    P: ReportPresenter,
{
    /// Creates a new CheckComplianceUseCase with injected dependencies
    pub fn new(document_reader: R, report_presenter: P) -> Self {
        Self {
            document_reader,
            report_presenter,
        }
    }

    /// Runs the full pipeline. See `ComplianceGatePort::check`.
    pub fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        let sbom = self.document_reader.read_sbom(&request.sbom_path)?;

        self.report_presenter
            .announce("🔍 Validating SBOM (NTIA minimal elements)...");
        let ntia_report = NtiaValidator::validate(&sbom);
        self.report_presenter.present_ntia(&ntia_report);
        if !ntia_report.is_compliant() {
            return Ok(CheckResponse {
                mode: request.mode,
                ntia_report,
                vex_report: None,
                policy_verdict: None,
            });
        }

        let vex = self.document_reader.read_vex(&request.vex_path)?;

        self.report_presenter
            .announce("🔍 Validating VEX against SBOM...");
        let vex_report = VexValidator::validate_against(&vex, Some(&sbom));
        self.report_presenter.present_vex(&vex_report);
        if !vex_report.is_valid() {
            return Ok(CheckResponse {
                mode: request.mode,
                ntia_report,
                vex_report: Some(vex_report),
                policy_verdict: None,
            });
        }

        self.report_presenter
            .announce("🔍 Enforcing security policy...");
        let policy_verdict = PolicyEvaluator::evaluate(&vex)?;
        self.report_presenter
            .present_policy(&policy_verdict, request.mode);

        Ok(CheckResponse {
            mode: request.mode,
            ntia_report,
            vex_report: Some(vex_report),
            policy_verdict: Some(policy_verdict),
        })
    }

    /// Single-stage: NTIA minimal-elements validation.
    pub fn validate_sbom(&self, sbom_path: &Path) -> Result<NtiaReport> {
        let sbom = self.document_reader.read_sbom(sbom_path)?;

        self.report_presenter
            .announce("🔍 Validating SBOM (NTIA minimal elements)...");
        let report = NtiaValidator::validate(&sbom);
        self.report_presenter.present_ntia(&report);
        Ok(report)
    }

    /// Single-stage: VEX structural validation. Cross-references the SBOM
    /// when a path is supplied (Mode B), otherwise checks schema
    /// completeness only (Mode A).
    pub fn validate_vex(&self, vex_path: &Path, sbom_path: Option<&Path>) -> Result<VexReport> {
        let vex = self.document_reader.read_vex(vex_path)?;
        let sbom = match sbom_path {
            Some(path) => Some(self.document_reader.read_sbom(path)?),
            None => None,
        };

        self.report_presenter.announce(if sbom.is_some() {
            "🔍 Validating VEX against SBOM..."
        } else {
            "🔍 Validating VEX structure..."
        });
        let report = VexValidator::validate_against(&vex, sbom.as_ref());
        self.report_presenter.present_vex(&report);
        Ok(report)
    }

    /// Single-stage: policy evaluation under the given mode.
    pub fn enforce_policy(
        &self,
        vex_path: &Path,
        mode: EnforcementMode,
    ) -> Result<PolicyVerdict> {
        let vex = self.document_reader.read_vex(vex_path)?;

        self.report_presenter
            .announce("🔍 Enforcing security policy...");
        let verdict = PolicyEvaluator::evaluate(&vex)?;
        self.report_presenter.present_policy(&verdict, mode);
        Ok(verdict)
    }
}

impl<R, P> ComplianceGatePort for CheckComplianceUseCase<R, P>
where
    R: DocumentReader,
    P: ReportPresenter,
{
    fn check(&self, request: CheckRequest) -> Result<CheckResponse> {
        self.execute(request)
    }
}
