//! Output formatting module

mod json;
mod text;

use miette::Result;

use idlc_core::CheckResult;

use crate::cli::OutputFormat;

/// Prints check results and returns true if any file had diagnostics.
pub fn output_results(results: &[CheckResult], format: OutputFormat) -> Result<bool> {
    let has_errors = results.iter().any(|r| r.has_errors());

    match format {
        OutputFormat::Json => json::output_json(results)?,
        OutputFormat::Text => print!("{}", text::format_results(results)),
    }

    Ok(has_errors)
}

/// Prints the per-kind node counts of a single file.
pub fn output_stats(result: &CheckResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_stats_json(result)?,
        OutputFormat::Text => print!("{}", text::format_stats(result)),
    }

    Ok(())
}
