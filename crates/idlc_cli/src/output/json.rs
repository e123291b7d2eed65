//! JSON output formatter

use miette::{IntoDiagnostic, Result};

use idlc_core::CheckResult;

pub fn output_json(results: &[CheckResult]) -> Result<()> {
    let output: Vec<_> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "path": r.path.display().to_string(),
                "diagnostics": r.diagnostics,
                "truncated": r.truncated,
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}

pub fn output_stats_json(result: &CheckResult) -> Result<()> {
    let total: usize = result.stats.values().sum();
    let output = serde_json::json!({
        "path": result.path.display().to_string(),
        "stats": result.stats,
        "total": total,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
