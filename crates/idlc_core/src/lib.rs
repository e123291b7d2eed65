//! # idlc_core
//!
//! Core checker engine for idlc.
//!
//! This crate provides:
//! - The `Checker` orchestrator
//! - Configuration loading
//! - File discovery and filtering
//! - Parallel processing, one arena per file
//!
//! ## Example
//!
//! ```rust,no_run
//! use idlc_core::{CheckConfig, Checker};
//!
//! let config = CheckConfig::from_file(".idlc.json")?;
//! let checker = Checker::new(config)?;
//!
//! let (results, _failures) = checker.check_patterns(&["dumps/**/*.json".to_string()])?;
//! for result in results {
//!     println!("{}: {} errors", result.path.display(), result.diagnostics.len());
//! }
//! # Ok::<(), idlc_core::CheckError>(())
//! ```

mod checker;
mod config;
mod error;
pub mod file_finder;
mod result;
mod stats;

pub use checker::{CheckFilesResult, Checker, MAX_FILE_SIZE};
pub use config::CheckConfig;
pub use error::CheckError;
pub use result::{CheckResult, Diagnostic};
pub use stats::{KindCounter, KindStats};
