//! tokenreg - sanity tooling for the on-disk asset registry.
//!
//! Two commands over a registry root: `check` runs the read-only
//! structural validation and exits non-zero when any chain reports
//! violations; `fix` applies the idempotent repairs and exits non-zero
//! only when repair I/O failed.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tokenreg::{BasicInfoValidator, DiskStore, Registry, RegistryConfig};

/// Validate and repair the asset registry layout.
#[derive(Parser, Debug)]
#[command(name = "tokenreg")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Registry root directory (the parent of `blockchains/`)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Maximum chains processed concurrently
    #[arg(long, default_value_t = 4)]
    jobs: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read-only validation; non-zero exit when violations are found
    Check,
    /// Reformat descriptors and repair logo naming and address casing
    Fix,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = RegistryConfig {
        root: cli.root,
        max_concurrency: cli.jobs,
    };
    let registry = Registry::new(DiskStore::new(), BasicInfoValidator, config);

    match cli.command {
        Commands::Check => {
            let reports = registry.sanity_check().await?;
            let mut dirty = false;
            for report in reports.iter().filter(|r| !r.is_clean()) {
                dirty = true;
                eprintln!("{}:", report.step_name);
                for violation in &report.violations {
                    eprintln!("  {violation}");
                }
            }
            Ok(if dirty {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Fix => {
            let report = registry.sanity_fix().await?;
            tracing::info!(
                infos_formatted = report.infos_formatted,
                logos_renamed = report.logos_renamed,
                directories_renamed = report.directories_renamed,
                moves_failed = report.moves_failed,
                "fix pass complete"
            );
            // Remaining violations are fine; failed repair I/O is not.
            Ok(if report.moves_failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}
