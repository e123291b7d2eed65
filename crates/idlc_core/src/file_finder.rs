//! Discovery of tree dumps on disk.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::CheckError;

/// Selects the tree dumps a check run should load.
///
/// Walked files are kept only when their extension is one a loader accepts
/// and they pass the configured include and exclude globs, which are matched
/// against the path relative to the walk root. Files named directly on the
/// command line skip the extension filter so an unsupported file is reported
/// rather than silently dropped.
pub struct FileFinder {
    extensions: Vec<String>,
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl FileFinder {
    /// `extensions` are the loader's accepted extensions, without the dot.
    pub fn new(
        extensions: &[&str],
        include: &[String],
        exclude: &[String],
    ) -> Result<Self, CheckError> {
        Ok(Self {
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
            include: compile("include", include)?,
            exclude: compile("exclude", exclude)?,
        })
    }

    /// True when the file's extension is one the loader accepts, ignoring case.
    pub fn is_loadable(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
    }

    /// True when `relative` passes the include and exclude globs.
    pub fn is_selected(&self, relative: &Path) -> bool {
        if self.exclude.as_ref().is_some_and(|g| g.is_match(relative)) {
            return false;
        }
        self.include.as_ref().is_none_or(|g| g.is_match(relative))
    }

    /// Returns the files named by `patterns`, sorted and deduplicated.
    ///
    /// A pattern naming an existing file is taken as is; the rest are globs
    /// matched against files under `base_dir`, relative to it.
    pub fn discover_files(
        &self,
        patterns: &[String],
        base_dir: &Path,
    ) -> Result<Vec<PathBuf>, CheckError> {
        let base_dir = base_dir
            .canonicalize()
            .unwrap_or_else(|_| base_dir.to_path_buf());

        let (named, globs): (Vec<&String>, Vec<&String>) = patterns.iter().partition(|p| {
            Path::new(p.as_str())
                .symlink_metadata()
                .is_ok_and(|m| m.file_type().is_file())
        });

        let mut files = Vec::new();
        for pattern in named {
            let Ok(path) = Path::new(pattern.as_str()).canonicalize() else {
                continue;
            };
            let relative = path.strip_prefix(&base_dir).unwrap_or(&path);
            if self.is_selected(relative) {
                files.push(path);
            } else {
                debug!("Excluded by config: {}", path.display());
            }
        }

        if let Some(globs) = compile("file", &globs)? {
            files.extend(self.walk(&base_dir, &globs));
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to check", files.len());
        Ok(files)
    }

    fn walk<'s>(
        &'s self,
        base_dir: &'s Path,
        globs: &'s GlobSet,
    ) -> impl Iterator<Item = PathBuf> + 's {
        WalkDir::new(base_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(move |path| {
                let relative = path.strip_prefix(base_dir).unwrap_or(path);
                globs.is_match(relative) && self.is_loadable(path) && self.is_selected(relative)
            })
    }
}

fn compile<S: AsRef<str>>(what: &str, patterns: &[S]) -> Result<Option<GlobSet>, CheckError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|e| {
            CheckError::config(format!("Invalid {} pattern '{}': {}", what, pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| CheckError::config(format!("Failed to build {} globs: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn finder(include: &[&str], exclude: &[&str]) -> FileFinder {
        let owned = |p: &[&str]| p.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        FileFinder::new(&["json"], &owned(include), &owned(exclude)).unwrap()
    }

    #[test]
    fn test_is_loadable_ignores_case() {
        let finder = finder(&[], &[]);
        assert!(finder.is_loadable(Path::new("dom.json")));
        assert!(finder.is_loadable(Path::new("DOM.JSON")));
        assert!(!finder.is_loadable(Path::new("dom.idl")));
        assert!(!finder.is_loadable(Path::new("json")));
    }

    #[test]
    fn test_is_selected_matches_relative_paths() {
        let finder = finder(&["**/*.json"], &["target/**"]);
        assert!(finder.is_selected(Path::new("dom.json")));
        assert!(finder.is_selected(Path::new("specs/dom.json")));
        assert!(!finder.is_selected(Path::new("target/dom.json")));
        assert!(!finder.is_selected(Path::new("dom.txt")));
    }

    #[test]
    fn test_invalid_config_glob_names_the_list() {
        let err = FileFinder::new(&["json"], &[], &["[invalid".to_string()])
            .err()
            .unwrap();
        assert!(matches!(err, CheckError::Config(_)));
        assert!(err.to_string().contains("exclude"));
    }

    #[test]
    fn test_discover_files_skips_other_extensions() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("dom.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("Fetch.JSON"), "{}").unwrap();
        fs::write(temp_dir.path().join("dom.idl"), "interface Node {};").unwrap();

        let files = finder(&[], &[])
            .discover_files(&["**/*".to_string()], temp_dir.path())
            .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Fetch.JSON", "dom.json"]);
    }

    #[test]
    fn test_discover_files_excludes_relative_to_base_dir() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(temp_dir.path().join("dom.json"), "{}").unwrap();
        fs::write(target.join("generated.json"), "{}").unwrap();

        let files = finder(&["**/*.json"], &["target/**"])
            .discover_files(&["**/*.json".to_string()], temp_dir.path())
            .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("dom.json"));
    }

    #[test]
    fn test_discover_files_deduplicates() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("dom.json"), "{}").unwrap();

        let files = finder(&[], &[])
            .discover_files(
                &["*.json".to_string(), "*.json".to_string()],
                temp_dir.path(),
            )
            .unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_discover_files_keeps_named_files_of_any_extension() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("dom.idl");
        fs::write(&file, "interface Node {};").unwrap();

        let files = finder(&[], &[])
            .discover_files(&[file.to_string_lossy().into_owned()], temp_dir.path())
            .unwrap();

        assert_eq!(files, vec![file.canonicalize().unwrap()]);
    }

    #[test]
    fn test_discover_files_applies_exclude_to_named_files() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("target");
        fs::create_dir(&target).unwrap();
        let file = target.join("generated.json");
        fs::write(&file, "{}").unwrap();

        let files = finder(&[], &["target/**"])
            .discover_files(&[file.to_string_lossy().into_owned()], temp_dir.path())
            .unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_files_invalid_glob() {
        let result =
            finder(&[], &[]).discover_files(&["[invalid-glob".to_string()], Path::new("."));
        assert!(matches!(result, Err(CheckError::Config(_))));
    }
}
