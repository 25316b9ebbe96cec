use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::compliance::domain::EnforcementMode;

/// Validate SBOM/VEX documents and enforce release policy
#[derive(Parser, Debug)]
#[command(name = "sbom-gate")]
#[command(version)]
#[command(about = "Validate SBOM/VEX documents and enforce release policy", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full pipeline: SBOM validation, VEX validation, policy enforcement
    Check {
        /// Path to the SBOM document (falls back to the config file)
        #[arg(long)]
        sbom: Option<PathBuf>,

        /// Path to the VEX document (falls back to the config file)
        #[arg(long)]
        vex: Option<PathBuf>,

        /// Enforcement mode: ci blocks on policy violations, dev only reports them
        #[arg(short, long)]
        mode: Option<EnforcementMode>,

        /// Path to a config file (defaults to ./sbom-gate.config.yml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate an SBOM against the NTIA minimal elements
    ValidateSbom {
        /// Path to the SBOM document
        #[arg(long)]
        sbom: PathBuf,
    },

    /// Validate the structure of a VEX document, optionally cross-referencing an SBOM
    ValidateVex {
        /// Path to the VEX document
        #[arg(long)]
        vex: PathBuf,

        /// Cross-reference affected components against this SBOM
        #[arg(long)]
        sbom: Option<PathBuf>,
    },

    /// Evaluate VEX vulnerabilities against the severity/state policy
    Policy {
        /// Path to the VEX document
        #[arg(long)]
        vex: PathBuf,

        /// Enforcement mode: ci blocks on policy violations, dev only reports them
        #[arg(short, long, default_value = "ci")]
        mode: EnforcementMode,
    },

    /// Generate a CycloneDX VEX document from a raw vulnerability feed
    GenerateVex {
        /// Path to the vulnerability feed JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package ecosystem for generated purl refs (falls back to the config file, then "pypi")
        #[arg(long)]
        ecosystem: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
