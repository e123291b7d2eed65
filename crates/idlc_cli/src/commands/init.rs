//! Init command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result, miette};
use tracing::info;

use idlc_core::{CheckConfig, CheckError};

pub fn run_init(force: bool) -> Result<()> {
    let path = Path::new(CheckConfig::CONFIG_FILES[0]);

    match CheckConfig::write_default(path, force) {
        Ok(config) => {
            info!(
                "Created {} (include: {:?}, exclude: {:?})",
                path.display(),
                config.include,
                config.exclude
            );
            Ok(())
        }
        Err(CheckError::ConfigExists(path)) => Err(miette!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )),
        Err(e) => Err(e).into_diagnostic(),
    }
}
