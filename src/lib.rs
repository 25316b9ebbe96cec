//! sbom-gate - Compliance gate for SBOM and VEX documents
//!
//! This library validates CycloneDX-shaped SBOM and VEX documents and
//! enforces a severity/state release policy over VEX vulnerability
//! entries, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): Document models, validators, and the policy evaluator
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_gate::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let document_reader = FileSystemReader::new();
//! let report_presenter = ConsoleReportPresenter::new();
//!
//! // Create use case
//! let use_case = CheckComplianceUseCase::new(document_reader, report_presenter);
//!
//! // Execute the pipeline
//! let request = CheckRequest::new(
//!     PathBuf::from("sbom/sbom.json"),
//!     PathBuf::from("vex/vex.json"),
//!     EnforcementMode::Ci,
//! );
//! let response = use_case.execute(request)?;
//!
//! if !response.passed() {
//!     eprintln!("gate rejected the release");
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleReportPresenter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{
        CheckRequest, CheckResponse, GenerateVexRequest, GenerateVexResponse,
    };
    pub use crate::application::use_cases::{CheckComplianceUseCase, GenerateVexUseCase};
    pub use crate::compliance::domain::{
        Component, ComponentType, EnforcementMode, MissingFields, NtiaReport, PolicyVerdict,
        Purl, SbomDocument, Severity, SeveritySummary, Tool, VexDocument, VexReport, VexState,
        VulnerabilityEntry, VulnerabilityFeed,
    };
    pub use crate::compliance::services::{NtiaValidator, PolicyEvaluator, VexValidator};
    pub use crate::ports::inbound::ComplianceGatePort;
    pub use crate::ports::outbound::{DocumentReader, OutputPresenter, ReportPresenter};
    pub use crate::shared::error::{ExitCode, GateError};
    pub use crate::shared::Result;
}
