use crate::compliance::domain::{PolicyVerdict, Severity, VexDocument, VexState};
use crate::shared::error::GateError;
use crate::shared::Result;

/// Policy evaluator: classifies every VEX vulnerability entry against the
/// severity/state decision matrix.
///
/// Per entry: `affected` fails at MEDIUM or above and warns below;
/// `under_investigation` behaves the same; `not_affected` and `fixed` are
/// skipped; anything else is a violation regardless of severity. An
/// `affected` entry without a justification is always a violation on top
/// of the severity outcome.
///
/// Evaluation is a pure function of the document; mode sensitivity lives
/// in `PolicyVerdict::blocks`, not here.
pub struct PolicyEvaluator;

impl PolicyEvaluator {
    /// Evaluates a VEX document into a fresh verdict.
    ///
    /// # Errors
    /// Returns `GateError::UnknownSeverity` when an entry carries a
    /// severity literal outside LOW/MEDIUM/HIGH/CRITICAL. Absent ratings
    /// default to LOW; an out-of-range literal never does.
    pub fn evaluate(vex: &VexDocument) -> Result<PolicyVerdict> {
        let mut verdict = PolicyVerdict::default();

        for entry in vex.entries() {
            let id = entry.id_or_unknown();

            let severity_literal = entry.severity_literal().unwrap_or("LOW");
            let severity = Severity::parse(severity_literal).ok_or_else(|| {
                GateError::UnknownSeverity {
                    value: severity_literal.to_string(),
                    vulnerability_id: id.to_string(),
                }
            })?;

            let state = entry
                .analysis
                .as_ref()
                .and_then(|analysis| analysis.state.as_deref())
                .unwrap_or("")
                .to_lowercase();
            let justification = entry
                .analysis
                .as_ref()
                .and_then(|analysis| analysis.justification.as_deref())
                .unwrap_or("")
                .trim()
                .to_string();

            verdict.summary.record(severity);

            match VexState::parse(&state) {
                Some(VexState::Affected) => {
                    if severity >= Severity::Medium {
                        verdict
                            .failures
                            .push(format!("{} | {} | affected", id, severity));
                    } else {
                        verdict
                            .warnings
                            .push(format!("{} | {} | affected (LOW allowed)", id, severity));
                    }

                    if justification.is_empty() {
                        verdict
                            .failures
                            .push(format!("{} | missing justification", id));
                    }
                }
                Some(VexState::UnderInvestigation) => {
                    if severity >= Severity::Medium {
                        verdict
                            .failures
                            .push(format!("{} | {} | under investigation", id, severity));
                    } else {
                        verdict
                            .warnings
                            .push(format!("{} | {} | under investigation", id, severity));
                    }
                }
                Some(VexState::NotAffected) | Some(VexState::Fixed) => {}
                None => {
                    verdict
                        .failures
                        .push(format!("{} | unknown VEX state: {}", id, state));
                }
            }
        }

        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::EnforcementMode;

    fn parse_vex(json: &str) -> VexDocument {
        serde_json::from_str(json).unwrap()
    }

    fn vex_with_entry(entry: &str) -> VexDocument {
        parse_vex(&format!(
            r#"{{"bomFormat": "CycloneDX", "specVersion": "1.4", "vulnerabilities": [{}]}}"#,
            entry
        ))
    }

    #[test]
    fn test_affected_high_with_justification() {
        let vex = vex_with_entry(
            r#"{"id": "CVE-2023-32681",
                "ratings": [{"severity": "HIGH"}],
                "affects": [{"ref": "pkg:pypi/requests@2.31.0"}],
                "analysis": {"state": "affected", "justification": "Header leak"}}"#,
        );

        let verdict = PolicyEvaluator::evaluate(&vex).unwrap();
        assert_eq!(verdict.failures, vec!["CVE-2023-32681 | HIGH | affected"]);
        assert!(verdict.warnings.is_empty());
        assert_eq!(verdict.summary.count(Severity::High), 1);
    }

    #[test]
    fn test_affected_low_with_empty_justification() {
        let vex = vex_with_entry(
            r#"{"id": "CVE-2024-0002",
                "ratings": [{"severity": "LOW"}],
                "affects": [{"ref": "pkg:pypi/urllib3@1.26.0"}],
                "analysis": {"state": "affected", "justification": "   "}}"#,
        );

        let verdict = PolicyEvaluator::evaluate(&vex).unwrap();
        assert_eq!(
            verdict.warnings,
            vec!["CVE-2024-0002 | LOW | affected (LOW allowed)"]
        );
        assert_eq!(verdict.failures, vec!["CVE-2024-0002 | missing justification"]);
    }

    #[test]
    fn test_affected_medium_is_a_failure() {
        let vex = vex_with_entry(
            r#"{"id": "CVE-2024-0003",
                "ratings": [{"severity": "MEDIUM"}],
                "analysis": {"state": "affected", "justification": "reachable"}}"#,
        );

        let verdict = PolicyEvaluator::evaluate(&vex).unwrap();
        assert_eq!(verdict.failures, vec!["CVE-2024-0003 | MEDIUM | affected"]);
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn test_severity_monotonicity_for_under_investigation() {
        let low = vex_with_entry(
            r#"{"id": "CVE-1", "ratings": [{"severity": "LOW"}],
                "analysis": {"state": "under_investigation", "justification": ""}}"#,
        );
        let high = vex_with_entry(
            r#"{"id": "CVE-1", "ratings": [{"severity": "HIGH"}],
                "analysis": {"state": "under_investigation", "justification": ""}}"#,
        );

        let low_verdict = PolicyEvaluator::evaluate(&low).unwrap();
        assert_eq!(
            low_verdict.warnings,
            vec!["CVE-1 | LOW | under investigation"]
        );
        assert!(low_verdict.failures.is_empty());

        let high_verdict = PolicyEvaluator::evaluate(&high).unwrap();
        assert_eq!(
            high_verdict.failures,
            vec!["CVE-1 | HIGH | under investigation"]
        );
        assert!(high_verdict.warnings.is_empty());
    }

    #[test]
    fn test_not_affected_and_fixed_are_skipped() {
        let vex = parse_vex(
            r#"{"bomFormat": "CycloneDX", "specVersion": "1.4", "vulnerabilities": [
                {"id": "CVE-1", "ratings": [{"severity": "CRITICAL"}],
                 "analysis": {"state": "not_affected", "justification": ""}},
                {"id": "CVE-2", "ratings": [{"severity": "HIGH"}],
                 "analysis": {"state": "fixed", "justification": ""}}
            ]}"#,
        );

        let verdict = PolicyEvaluator::evaluate(&vex).unwrap();
        assert!(verdict.failures.is_empty());
        assert!(verdict.warnings.is_empty());
        // Skipped entries still count toward the summary
        assert_eq!(verdict.summary.count(Severity::Critical), 1);
        assert_eq!(verdict.summary.count(Severity::High), 1);
    }

    #[test]
    fn test_unknown_state_is_a_failure() {
        let vex = vex_with_entry(
            r#"{"id": "CVE-2024-0004", "ratings": [{"severity": "LOW"}],
                "analysis": {"state": "Pending", "justification": "tbd"}}"#,
        );

        let verdict = PolicyEvaluator::evaluate(&vex).unwrap();
        assert_eq!(
            verdict.failures,
            vec!["CVE-2024-0004 | unknown VEX state: pending"]
        );
    }

    #[test]
    fn test_missing_analysis_is_an_unknown_empty_state() {
        let vex = vex_with_entry(r#"{"id": "CVE-2024-0005", "ratings": [{"severity": "HIGH"}]}"#);

        let verdict = PolicyEvaluator::evaluate(&vex).unwrap();
        assert_eq!(
            verdict.failures,
            vec!["CVE-2024-0005 | unknown VEX state: "]
        );
    }

    #[test]
    fn test_state_is_lowercased_before_matching() {
        let vex = vex_with_entry(
            r#"{"id": "CVE-2024-0006", "ratings": [{"severity": "HIGH"}],
                "analysis": {"state": "Affected", "justification": "reachable"}}"#,
        );

        let verdict = PolicyEvaluator::evaluate(&vex).unwrap();
        assert_eq!(verdict.failures, vec!["CVE-2024-0006 | HIGH | affected"]);
    }

    #[test]
    fn test_absent_ratings_default_to_low() {
        let vex = vex_with_entry(
            r#"{"id": "CVE-2024-0007",
                "analysis": {"state": "affected", "justification": "reachable"}}"#,
        );

        let verdict = PolicyEvaluator::evaluate(&vex).unwrap();
        assert_eq!(
            verdict.warnings,
            vec!["CVE-2024-0007 | LOW | affected (LOW allowed)"]
        );
        assert_eq!(verdict.summary.count(Severity::Low), 1);
    }

    #[test]
    fn test_unrecognized_severity_aborts_evaluation() {
        let vex = vex_with_entry(
            r#"{"id": "CVE-2024-0008", "ratings": [{"severity": "SEVERE"}],
                "analysis": {"state": "affected", "justification": "reachable"}}"#,
        );

        let result = PolicyEvaluator::evaluate(&vex);
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("Unrecognized severity 'SEVERE'"));
        assert!(message.contains("CVE-2024-0008"));
    }

    #[test]
    fn test_lowercase_severity_literal_is_out_of_range() {
        // Rating literals are uppercase by contract; "high" must surface
        // as an error rather than silently ranking.
        let vex = vex_with_entry(
            r#"{"id": "CVE-2024-0009", "ratings": [{"severity": "high"}],
                "analysis": {"state": "fixed", "justification": ""}}"#,
        );

        assert!(PolicyEvaluator::evaluate(&vex).is_err());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let vex = parse_vex(
            r#"{"bomFormat": "CycloneDX", "specVersion": "1.4", "vulnerabilities": [
                {"id": "CVE-1", "ratings": [{"severity": "HIGH"}],
                 "analysis": {"state": "affected", "justification": ""}},
                {"id": "CVE-2", "ratings": [{"severity": "LOW"}],
                 "analysis": {"state": "under_investigation", "justification": ""}}
            ]}"#,
        );

        let first = PolicyEvaluator::evaluate(&vex).unwrap();
        let second = PolicyEvaluator::evaluate(&vex).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_verdict_mode_sensitivity() {
        let vex = vex_with_entry(
            r#"{"id": "CVE-1", "ratings": [{"severity": "HIGH"}],
                "analysis": {"state": "affected", "justification": "reachable"}}"#,
        );

        let verdict = PolicyEvaluator::evaluate(&vex).unwrap();
        assert!(verdict.blocks(EnforcementMode::Ci));
        assert!(!verdict.blocks(EnforcementMode::Dev));
    }

    #[test]
    fn test_empty_document_passes() {
        let verdict = PolicyEvaluator::evaluate(&parse_vex("{}")).unwrap();
        assert!(verdict.passed());
        assert_eq!(verdict.summary.total(), 0);
    }
}
