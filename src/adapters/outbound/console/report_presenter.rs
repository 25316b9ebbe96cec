use crate::compliance::domain::{EnforcementMode, NtiaReport, PolicyVerdict, VexReport};
use crate::ports::outbound::ReportPresenter;
use owo_colors::OwoColorize;

/// ConsoleReportPresenter adapter for rendering reports to the terminal
///
/// Verdict blocks go to stdout; stage announcements go to stderr so that
/// stdout stays consumable when the gate runs inside a pipeline.
pub struct ConsoleReportPresenter;

impl ConsoleReportPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReportPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPresenter for ConsoleReportPresenter {
    fn announce(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn present_ntia(&self, report: &NtiaReport) {
        if report.is_compliant() {
            println!("✅ {}", "NTIA validation passed.".green());
            return;
        }

        println!("❌ {}", "NTIA validation failed:".red());
        println!();
        for finding in &report.component_findings {
            println!(
                " - Component '{}' missing fields: {}",
                finding.name,
                finding.fields.join(", ")
            );
        }
        for finding in &report.tool_findings {
            println!(
                " - Tool '{}' missing fields: {}",
                finding.name,
                finding.fields.join(", ")
            );
        }
    }

    fn present_vex(&self, report: &VexReport) {
        if report.is_valid() {
            println!("✅ {}", "VEX validation passed.".green());
            return;
        }

        println!("❌ {}", "VEX validation failed:".red());
        for error in &report.errors {
            println!(" - {}", error);
        }
    }

    fn present_policy(&self, verdict: &PolicyVerdict, mode: EnforcementMode) {
        if verdict.summary.total() > 0 {
            println!("📊 Severity summary:");
            for (severity, count) in verdict.summary.nonzero_descending() {
                println!("   {}: {}", severity, count);
            }
        }

        if !verdict.warnings.is_empty() {
            println!("⚠️  {}", "Policy Warnings:".yellow());
            for warning in &verdict.warnings {
                println!(" - {}", warning);
            }
        }

        if !verdict.failures.is_empty() {
            println!("❌ {}", "Policy Violations:".red());
            for failure in &verdict.failures {
                println!(" - {}", failure);
            }
            if mode == EnforcementMode::Dev {
                println!(
                    "⚠️  {}",
                    "dev mode: violations reported but not blocking.".yellow()
                );
            }
            return;
        }

        println!("✅ {}", "Policy check passed.".green());
    }
}
