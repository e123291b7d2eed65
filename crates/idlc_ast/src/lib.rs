//! # idlc_ast
//!
//! Syntax tree definitions and traversal for IDL documents.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation
//! - All nodes of a document are allocated in a single arena
//! - Nodes are `Copy` structs holding references into that arena
//! - [`Node`], [`Type`] and [`Literal`] are closed enums; the walker matches
//!   them exhaustively
//!
//! ## Example
//!
//! ```rust
//! use idlc_ast::{AstArena, Base, ErrorNode, File, Node, Span};
//! use idlc_ast::visitor::collect_errors;
//!
//! let arena = AstArena::new();
//! let errors = arena.alloc_slice_copy(&[ErrorNode::new(Span::new(4, 5), "unexpected '}'")]);
//! let file = arena.alloc(File {
//!     base: Base::with_errors(Span::new(0, 12), errors),
//!     path: "broken.idl",
//!     declarations: &[],
//! });
//!
//! let found = collect_errors(Node::File(file));
//! assert_eq!(found[0].message, "unexpected '}'");
//! ```

mod arena;
mod base;
mod literal;
mod node;
mod node_kind;
mod span;
pub mod visitor;

#[cfg(test)]
mod test_utils;

pub use arena::AstArena;
pub use base::{Base, ErrorNode};
pub use literal::{BasicLiteral, Literal, SequenceLiteral, ValueKind};
pub use node::{
    Annotation, AnyType, Callback, CustomOp, Dictionary, Enum, File, Implementation, Includes,
    Interface, Member, MemberRole, Mixin, Node, NullableType, Parameter, ParametrizedType,
    Pattern, PatternKind, RecordType, SequenceType, Type, TypeName, Typedef, UnionType,
};
pub use node_kind::{NodeKind, UnknownKind};
pub use span::Span;

// Re-export commonly used visitor items for convenience
pub use visitor::{Visitor, collect_errors};
