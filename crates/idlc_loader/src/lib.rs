//! # idlc_loader
//!
//! Loading of parsed IDL trees into an [`AstArena`](idlc_ast::AstArena).
//!
//! This crate provides:
//! - A `Loader` trait for implementing custom input formats
//! - A built-in loader for JSON tree dumps
//!
//! ## Example
//!
//! ```rust
//! use idlc_ast::AstArena;
//! use idlc_loader::{JsonLoader, Loader};
//!
//! let arena = AstArena::new();
//! let source = r#"{
//!     "path": "dom.idl",
//!     "declarations": [{ "kind": "interface", "name": "Node" }]
//! }"#;
//!
//! let file = JsonLoader::new().load(&arena, source).unwrap();
//! assert_eq!(file.path, "dom.idl");
//! assert_eq!(file.declarations.len(), 1);
//! ```

mod error;
mod json;
mod traits;

pub use error::LoadError;
pub use json::JsonLoader;
pub use traits::Loader;
