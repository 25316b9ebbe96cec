use super::mode::EnforcementMode;
use super::severity::Severity;

/// Per-severity entry counts accumulated over one policy evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeveritySummary {
    counts: [usize; 4],
}

impl SeveritySummary {
    pub fn record(&mut self, severity: Severity) {
        self.counts[severity.rank()] += 1;
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.counts[severity.rank()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Severity-descending (CRITICAL first) pairs, skipping zero counts.
    pub fn nonzero_descending(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        Severity::DESCENDING
            .into_iter()
            .map(|severity| (severity, self.count(severity)))
            .filter(|(_, count)| *count > 0)
    }
}

/// Outcome of one policy evaluation pass over a VEX document.
///
/// Constructed fresh per invocation and consumed immediately for reporting
/// and the exit-code decision; never retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyVerdict {
    /// Blocking violations, in entry traversal order
    pub failures: Vec<String>,
    /// Advisory findings; these never affect the exit signal
    pub warnings: Vec<String>,
    pub summary: SeveritySummary,
}

impl PolicyVerdict {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether this verdict blocks the pipeline under the given mode.
    /// Failures block in ci mode only; warnings never block.
    pub fn blocks(&self, mode: EnforcementMode) -> bool {
        !self.passed() && mode == EnforcementMode::Ci
    }
}
