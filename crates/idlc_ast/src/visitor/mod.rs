//! Visitor pattern for IDL syntax tree traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait, one hook per kind
//! - [`walk_node`] / [`walk_literal`] - Dispatch functions
//! - [`walk_interface_member`] / [`walk_mixin_member`] - Member entry points per role
//! - [`ScanFlags`] / [`NoopVisitor`] - Selective traversal
//! - [`collect_errors`] - Gather the error records attached across a tree
//!
//! # Examples
//!
//! ## Pruning
//!
//! ```rust
//! use idlc_ast::{AstArena, Base, Dictionary, File, Interface, Member, Node};
//! use idlc_ast::visitor::{MemberRole, Visitor, walk_node};
//!
//! /// Counts members of interfaces only.
//! struct InterfaceMembers(usize);
//!
//! impl<'a> Visitor<'a> for InterfaceMembers {
//!     fn visit_dictionary(&mut self, _node: &'a Dictionary<'a>) -> bool {
//!         false
//!     }
//!
//!     fn visit_member(&mut self, _node: &'a Member<'a>, _role: MemberRole) -> bool {
//!         self.0 += 1;
//!         true
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let members = arena.alloc_slice_copy(&[Member::default(), Member::default()]);
//! let interface = arena.alloc(Interface { name: "A", members, ..Default::default() });
//! let dictionary = arena.alloc(Dictionary { name: "B", members, ..Default::default() });
//! let declarations =
//!     arena.alloc_slice_copy(&[Node::Interface(interface), Node::Dictionary(dictionary)]);
//! let file = arena.alloc(File { base: Base::default(), path: "a.idl", declarations });
//!
//! let mut counter = InterfaceMembers(0);
//! walk_node(&mut counter, Node::File(file));
//! assert_eq!(counter.0, 2);
//! ```

mod collect;
mod scan;
mod visit;
mod walk;

pub use crate::MemberRole;
pub use collect::{ErrorCollector, collect_errors, collect_literal_errors};
pub use scan::{NoopVisitor, ScanFlags};
pub use visit::Visitor;
pub use walk::{walk_interface_member, walk_literal, walk_mixin_member, walk_node};
