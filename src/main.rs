mod adapters;
mod application;
mod cli;
mod compliance;
mod config;
mod ports;
mod shared;

use adapters::outbound::console::ConsoleReportPresenter;
use adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use application::dto::{CheckRequest, GenerateVexRequest};
use application::use_cases::{CheckComplianceUseCase, GenerateVexUseCase};
use cli::{Args, Command};
use config::ConfigFile;
use ports::outbound::OutputPresenter;
use shared::error::{ExitCode, GateError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on bad usage)
    let args = Args::parse_args();

    let document_reader = FileSystemReader::new();
    let report_presenter = ConsoleReportPresenter::new();

    match args.command {
        Command::Check {
            sbom,
            vex,
            mode,
            config,
        } => {
            let config = resolve_config(config.as_deref())?;

            let sbom_path = resolve_path(sbom, config.sbom.as_deref(), "SBOM", "--sbom")?;
            let vex_path = resolve_path(vex, config.vex.as_deref(), "VEX", "--vex")?;
            let mode = match mode {
                Some(mode) => mode,
                None => config.enforcement_mode()?.unwrap_or_default(),
            };

            let use_case = CheckComplianceUseCase::new(document_reader, report_presenter);
            let response = use_case.execute(CheckRequest::new(sbom_path, vex_path, mode))?;

            Ok(gate_exit_code(response.passed()))
        }

        Command::ValidateSbom { sbom } => {
            let use_case = CheckComplianceUseCase::new(document_reader, report_presenter);
            let report = use_case.validate_sbom(&sbom)?;

            Ok(gate_exit_code(report.is_compliant()))
        }

        Command::ValidateVex { vex, sbom } => {
            let use_case = CheckComplianceUseCase::new(document_reader, report_presenter);
            let report = use_case.validate_vex(&vex, sbom.as_deref())?;

            Ok(gate_exit_code(report.is_valid()))
        }

        Command::Policy { vex, mode } => {
            let use_case = CheckComplianceUseCase::new(document_reader, report_presenter);
            let verdict = use_case.enforce_policy(&vex, mode)?;

            Ok(gate_exit_code(!verdict.blocks(mode)))
        }

        Command::GenerateVex {
            input,
            output,
            ecosystem,
        } => {
            let config = resolve_config(None)?;
            let ecosystem = ecosystem
                .or(config.ecosystem)
                .unwrap_or_else(|| "pypi".to_string());

            let use_case = GenerateVexUseCase::new(document_reader);
            let response = use_case.execute(GenerateVexRequest::new(input, ecosystem))?;

            let content = serde_json::to_string_pretty(&response.document)?;
            let presenter: Box<dyn OutputPresenter> = match output {
                Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
                None => Box::new(StdoutPresenter::new()),
            };
            presenter.present(&content)?;

            Ok(ExitCode::Success)
        }
    }
}

/// Loads an explicit config file, or discovers one in the working
/// directory. A missing discovered config is just the default.
fn resolve_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

/// Resolves a document path from a CLI flag or the config file.
fn resolve_path(
    flag: Option<PathBuf>,
    config_value: Option<&str>,
    document: &str,
    flag_name: &str,
) -> Result<PathBuf> {
    flag.or_else(|| config_value.map(PathBuf::from))
        .ok_or_else(|| {
            GateError::Validation {
                message: format!(
                    "No {} path given. Pass {} or set it in sbom-gate.config.yml",
                    document, flag_name
                ),
            }
            .into()
        })
}

fn gate_exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::Success
    } else {
        ExitCode::ComplianceViolation
    }
}
