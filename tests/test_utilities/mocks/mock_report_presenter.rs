use sbom_gate::prelude::*;

/// Mock ReportPresenter for testing that captures presented reports
#[derive(Default, Clone)]
pub struct MockReportPresenter {
    pub events: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockReportPresenter {
    pub fn new() -> Self {
        Self {
            events: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl ReportPresenter for MockReportPresenter {
    fn announce(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("announce: {}", message));
    }

    fn present_ntia(&self, report: &NtiaReport) {
        self.events.lock().unwrap().push(format!(
            "ntia: compliant={} findings={}",
            report.is_compliant(),
            report.finding_count()
        ));
    }

    fn present_vex(&self, report: &VexReport) {
        self.events.lock().unwrap().push(format!(
            "vex: valid={} errors={}",
            report.is_valid(),
            report.errors.len()
        ));
    }

    fn present_policy(&self, verdict: &PolicyVerdict, mode: EnforcementMode) {
        self.events.lock().unwrap().push(format!(
            "policy: failures={} warnings={} mode={}",
            verdict.failures.len(),
            verdict.warnings.len(),
            mode
        ));
    }
}
