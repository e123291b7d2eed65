//! Check command implementation

use miette::{IntoDiagnostic, Result};

use idlc_core::Checker;

use crate::cli::{Cli, OutputFormat};
use crate::output::output_results;

/// Returns true when any file had diagnostics or failed to load.
pub fn run_check(cli: &Cli, patterns: &[String], format: OutputFormat) -> Result<bool> {
    let config = super::load_config(cli)?;
    let checker = Checker::new(config).into_diagnostic()?;

    let (results, failures) = checker.check_patterns(patterns).into_diagnostic()?;

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to check:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    let has_errors = output_results(&results, format)?;

    Ok(has_errors || !failures.is_empty())
}
