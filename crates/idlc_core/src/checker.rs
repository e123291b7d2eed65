//! Core checker engine.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use idlc_ast::visitor::{collect_errors, walk_node};
use idlc_ast::{AstArena, Node};
use idlc_loader::{JsonLoader, LoadError, Loader};

use crate::file_finder::FileFinder;
use crate::result::{CheckResult, Diagnostic};
use crate::stats::KindCounter;
use crate::{CheckConfig, CheckError};

/// Files above this size are rejected before reading.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Result type for `check_files` and `check_patterns`.
///
/// Contains a tuple of:
/// - Successful check results
/// - Failed files with their errors (path and error)
pub type CheckFilesResult = Result<(Vec<CheckResult>, Vec<(PathBuf, CheckError)>), CheckError>;

/// The checker engine.
///
/// Orchestrates file discovery, loading, error collection and statistics.
pub struct Checker {
    config: CheckConfig,
    loader: JsonLoader,
    finder: FileFinder,
}

impl Checker {
    /// Creates a new checker with the given configuration.
    pub fn new(config: CheckConfig) -> Result<Self, CheckError> {
        let loader = JsonLoader::new();
        let finder = FileFinder::new(loader.extensions(), &config.include, &config.exclude)?;
        Ok(Self {
            config,
            loader,
            finder,
        })
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Checks files matching the given patterns.
    ///
    /// Returns a tuple of (successful results, failed files with errors).
    pub fn check_patterns(&self, patterns: &[String]) -> CheckFilesResult {
        let files = self.discover_files(patterns)?;
        self.check_files(&files)
    }

    /// Expands patterns relative to the configuration's base directory.
    pub fn discover_files(&self, patterns: &[String]) -> Result<Vec<PathBuf>, CheckError> {
        let base_dir = match &self.config.base_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => std::env::current_dir()?,
        };
        self.finder.discover_files(patterns, &base_dir)
    }

    /// Checks files in parallel, one arena per file.
    pub fn check_files(&self, paths: &[PathBuf]) -> CheckFilesResult {
        let results: Vec<Result<CheckResult, (PathBuf, CheckError)>> = paths
            .par_iter()
            .map(|path| self.check_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(check_result) => successes.push(check_result),
                Err((path, error)) => {
                    warn!("Failed to check {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        Ok((successes, failures))
    }

    /// Checks a single file.
    pub fn check_file(&self, path: &Path) -> Result<CheckResult, CheckError> {
        debug!("Checking {}", path.display());

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !self.loader.can_load(extension) {
            return Err(LoadError::unsupported(extension).into());
        }

        let metadata = fs::metadata(path).map_err(|e| {
            CheckError::file(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                e
            ))
        })?;

        if !metadata.is_file() {
            return Err(CheckError::file(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(CheckError::file(format!(
                "File size exceeds limit of {} bytes: {}",
                MAX_FILE_SIZE,
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CheckError::file(format!("Failed to read {}: {}", path.display(), e)))?;

        self.check_source(path, &content)
    }

    /// Loads `source` into a fresh arena and checks it.
    pub fn check_source(&self, path: &Path, source: &str) -> Result<CheckResult, CheckError> {
        let arena = AstArena::new();
        let file = self.loader.load(&arena, source)?;

        let mut diagnostics: Vec<Diagnostic> = collect_errors(Node::File(file))
            .into_iter()
            .map(Diagnostic::from)
            .collect();

        let truncated = self
            .config
            .max_diagnostics
            .is_some_and(|max| diagnostics.len() > max);
        if let Some(max) = self.config.max_diagnostics {
            diagnostics.truncate(max);
        }

        let mut counter = match self.config.scan_flags() {
            Some(flags) => KindCounter::selective(flags),
            None => KindCounter::new(),
        };
        walk_node(&mut counter, Node::File(file));

        debug!(
            "{}: {} diagnostics, {} nodes, {} bytes allocated",
            path.display(),
            diagnostics.len(),
            counter.total(),
            arena.allocated_bytes()
        );

        Ok(CheckResult {
            path: path.to_path_buf(),
            diagnostics,
            stats: counter.into_counts(),
            truncated,
        })
    }
}
