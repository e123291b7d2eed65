//! Text output formatter

use std::fmt::Write;

use idlc_core::CheckResult;

pub fn format_results(results: &[CheckResult]) -> String {
    let mut out = String::new();

    for result in results {
        if result.diagnostics.is_empty() {
            continue;
        }

        let _ = writeln!(out, "\n{}:", result.path.display());
        for diag in &result.diagnostics {
            let _ = writeln!(
                out,
                "  {}:{} error: {}",
                diag.span.start, diag.span.end, diag.message
            );
        }
        if result.truncated {
            let _ = writeln!(out, "  (further errors omitted)");
        }
    }

    let total_files = results.len();
    let total_issues: usize = results.iter().map(|r| r.diagnostics.len()).sum();

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Checked {} files, found {} errors",
        total_files, total_issues
    );
    out
}

pub fn format_stats(result: &CheckResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}:", result.path.display());
    for (kind, count) in &result.stats {
        let _ = writeln!(out, "  {:<20} {}", kind.as_str(), count);
    }

    let total: usize = result.stats.values().sum();
    let _ = writeln!(out, "  {:<20} {}", "Total", total);
    out
}
