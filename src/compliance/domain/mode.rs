use std::fmt;

/// Enforcement mode for the policy evaluator.
///
/// Structural validation outcomes are independent of the mode; only the
/// policy stage's exit signal changes between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnforcementMode {
    /// Advisory: violations are logged but the gate signals success
    Dev,
    /// Blocking: any policy violation fails the gate
    Ci,
}

impl Default for EnforcementMode {
    fn default() -> Self {
        EnforcementMode::Ci
    }
}

impl std::str::FromStr for EnforcementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(EnforcementMode::Dev),
            "ci" => Ok(EnforcementMode::Ci),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'dev' or 'ci'",
                s
            )),
        }
    }
}

impl fmt::Display for EnforcementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnforcementMode::Dev => write!(f, "dev"),
            EnforcementMode::Ci => write!(f, "ci"),
        }
    }
}
