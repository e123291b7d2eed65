//! Subcommand implementations

pub mod check;
pub mod init;
pub mod stats;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use idlc_core::CheckConfig;

use crate::cli::Cli;

/// Loads the configuration named by `--config`, or the one in the working directory.
pub fn load_config(cli: &Cli) -> Result<CheckConfig> {
    if let Some(ref path) = cli.config {
        return CheckConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = CheckConfig::discover(".") {
        info!("Using config: {}", path.display());
        return CheckConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(CheckConfig::new())
}
