//! Loader trait definition.

use idlc_ast::{AstArena, File};

use crate::LoadError;

/// Trait for loading a syntax tree into an arena.
///
/// Implementations turn some external representation of a parsed IDL
/// document into [`File`] nodes that visitors can walk.
///
/// # Example
///
/// ```rust
/// use idlc_ast::{AstArena, Base, File};
/// use idlc_loader::{LoadError, Loader};
///
/// struct EmptyLoader;
///
/// impl Loader for EmptyLoader {
///     fn name(&self) -> &str {
///         "empty"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["empty"]
///     }
///
///     fn load<'a>(&self, arena: &'a AstArena, _source: &str) -> Result<&'a File<'a>, LoadError> {
///         Ok(arena.alloc(File::default()))
///     }
/// }
///
/// assert!(EmptyLoader.can_load("EMPTY"));
/// ```
pub trait Loader {
    /// Returns the name of this loader.
    fn name(&self) -> &str;

    /// Returns the file extensions this loader handles, without the leading dot.
    fn extensions(&self) -> &[&str];

    /// Loads the source text into `arena` and returns the root file node.
    fn load<'a>(&self, arena: &'a AstArena, source: &str) -> Result<&'a File<'a>, LoadError>;

    /// Returns true if this loader can handle the given file extension.
    fn can_load(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
