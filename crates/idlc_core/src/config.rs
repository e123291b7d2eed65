//! Checker configuration.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use idlc_ast::NodeKind;
use idlc_ast::visitor::ScanFlags;

use crate::CheckError;

/// Configuration for the checker, read from `.idlc.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CheckConfig {
    /// File patterns to include.
    #[serde(default)]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Composite kinds the statistics visitor descends into.
    ///
    /// `None` descends everywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan: Option<Vec<NodeKind>>,

    /// Maximum number of diagnostics reported per file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_diagnostics: Option<usize>,

    /// Base directory for resolving relative patterns.
    /// This is usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl CheckConfig {
    /// Configuration file names, in lookup order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".idlc.json"];

    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CheckError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CheckError> {
        serde_json::from_str(json).map_err(|e| CheckError::config(format!("Invalid config: {}", e)))
    }

    /// Finds a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Scan flags for the statistics visitor.
    pub fn scan_flags(&self) -> Option<ScanFlags> {
        self.scan
            .as_ref()
            .map(|kinds| kinds.iter().copied().collect())
    }

    /// Contents written by `idlc init`.
    pub fn default_json() -> String {
        let config = Self {
            include: vec!["**/*.json".to_string()],
            exclude: vec!["target/**".to_string()],
            ..Self::default()
        };
        let mut json = serde_json::to_string_pretty(&config).unwrap_or_default();
        json.push('\n');
        json
    }

    /// Writes [`default_json`](Self::default_json) to `path` and loads it back.
    ///
    /// Without `force`, any existing entry at `path` is left alone and
    /// reported as [`CheckError::ConfigExists`]; this includes dangling
    /// symlinks. With `force`, the file is written next to `path` and renamed
    /// over it, so a symlink at `path` is replaced rather than followed.
    pub fn write_default(path: impl AsRef<Path>, force: bool) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let contents = Self::default_json();

        if force {
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            let mut staged = NamedTempFile::new_in(dir)?;
            staged.write_all(contents.as_bytes())?;
            staged.persist(path).map_err(|e| e.error)?;
        } else {
            let mut file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|e| match e.kind() {
                    io::ErrorKind::AlreadyExists => CheckError::ConfigExists(path.to_path_buf()),
                    _ => CheckError::Io(e),
                })?;
            file.write_all(contents.as_bytes())?;
        }

        Self::from_file(path)
    }
}
