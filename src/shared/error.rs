use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - all validators passed, or policy violations in dev mode
    Success = 0,
    /// A validator rejected a document, or policy violations in ci mode
    ComplianceViolation = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, malformed document, bad severity, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ComplianceViolation => write!(f, "Compliance Violation (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the compliance gate.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Validation findings are NOT errors: missing SBOM fields, structural VEX
/// problems, and policy violations travel inside report values. Only
/// input/environment faults end up here.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Document not found: {path}\n\n💡 Hint: {suggestion}")]
    DocumentNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON in the expected CycloneDX shape")]
    DocumentParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Unrecognized severity '{value}' on vulnerability '{vulnerability_id}'. Expected one of: LOW, MEDIUM, HIGH, CRITICAL")]
    UnknownSeverity {
        value: String,
        vulnerability_id: String,
    },

    /// Validation error for request/config resolution
    #[error("Validation error: {message}")]
    Validation { message: String },
}
