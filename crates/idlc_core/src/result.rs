//! Per-file check results.

use std::path::PathBuf;

use serde::Serialize;

use idlc_ast::{ErrorNode, Span};

use crate::stats::KindStats;

/// An error record found in a tree, detached from its arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
}

impl From<&ErrorNode<'_>> for Diagnostic {
    fn from(error: &ErrorNode<'_>) -> Self {
        Self {
            message: error.message.to_string(),
            span: error.base.span,
        }
    }
}

/// Result of checking a single file.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Path of the checked file.
    pub path: PathBuf,

    /// Error records in tree pre-order.
    pub diagnostics: Vec<Diagnostic>,

    /// Node counts per kind.
    pub stats: KindStats,

    /// True when diagnostics were cut at the configured maximum.
    pub truncated: bool,
}

impl CheckResult {
    /// Returns true if any diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
