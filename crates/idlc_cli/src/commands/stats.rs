//! Stats command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};

use idlc_ast::NodeKind;
use idlc_core::Checker;

use crate::cli::{Cli, OutputFormat};
use crate::output::output_stats;

pub fn run_stats(cli: &Cli, file: &Path, only: &[NodeKind], format: OutputFormat) -> Result<()> {
    let mut config = super::load_config(cli)?;
    if !only.is_empty() {
        config.scan = Some(only.to_vec());
    }

    let checker = Checker::new(config).into_diagnostic()?;
    let result = checker.check_file(file).into_diagnostic()?;

    output_stats(&result, format)
}
