//! Visitor trait for traversing the IDL syntax tree.
//!
//! The trait has one hook per node kind, one per literal kind and a base
//! hook. Every hook has a default body, so the trait doubles as the no-op
//! visitor: implement it and override only the hooks you care about.
//!
//! # Continuation
//!
//! Hooks of composite kinds return `bool`. `true` lets the walker descend
//! into the node's children, `false` skips that subtree; siblings are still
//! visited. Leaf hooks return nothing.
//!
//! # Example
//!
//! ```rust
//! use idlc_ast::{AstArena, Base, File, Interface, Member, Node};
//! use idlc_ast::visitor::{MemberRole, Visitor, walk_node};
//!
//! /// Collects the names of interface members, ignoring mixins.
//! struct InterfaceMembers<'a> {
//!     names: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for InterfaceMembers<'a> {
//!     fn visit_member(&mut self, member: &'a Member<'a>, role: MemberRole) -> bool {
//!         if role == MemberRole::Interface {
//!             self.names.push(member.name);
//!         }
//!         false
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let members = arena.alloc_slice_copy(&[
//!     Member { name: "length", ..Default::default() },
//!     Member { name: "item", ..Default::default() },
//! ]);
//! let interface = arena.alloc(Interface { name: "NodeList", members, ..Default::default() });
//! let declarations = arena.alloc_slice_copy(&[Node::Interface(interface)]);
//! let file = arena.alloc(File { base: Base::default(), path: "dom.idl", declarations });
//!
//! let mut visitor = InterfaceMembers { names: Vec::new() };
//! walk_node(&mut visitor, Node::File(file));
//! assert_eq!(visitor.names, vec!["length", "item"]);
//! ```

use crate::{
    Annotation, AnyType, Base, BasicLiteral, Callback, CustomOp, Dictionary, Enum, ErrorNode,
    File, Implementation, Includes, Interface, Member, MemberRole, Mixin, NodeKind,
    NullableType, Parameter, ParametrizedType, Pattern, RecordType, SequenceLiteral,
    SequenceType, TypeName, Typedef, UnionType,
};

use super::ScanFlags;

/// Visitor trait for observing the IDL syntax tree without modification.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes to their arena, so a visitor may keep
/// references to nodes (or their error records) after the walk returns.
///
/// # Selective mode
///
/// Returning `Some(flags)` from [`scan_flags`](Visitor::scan_flags) makes every
/// composite hook that is not overridden return `false` unless its kind is in
/// `flags`. Leaf hooks are unaffected.
pub trait Visitor<'a> {
    /// Per-kind scan toggles. `None` descends everywhere.
    #[inline]
    fn scan_flags(&self) -> Option<ScanFlags> {
        None
    }

    /// Continuation returned by the default composite hooks.
    #[inline]
    fn descends(&self, kind: NodeKind) -> bool {
        self.scan_flags().is_none_or(|flags| flags.scans(kind))
    }

    /// Called for every node and literal before its kind-specific hook.
    #[inline]
    fn visit_base(&mut self, _base: &'a Base<'a>) {}

    // === Leaves ===

    fn visit_error_node(&mut self, _node: &'a ErrorNode<'a>) {}

    fn visit_implementation(&mut self, _node: &'a Implementation<'a>) {}

    fn visit_includes(&mut self, _node: &'a Includes<'a>) {}

    fn visit_custom_op(&mut self, _node: &'a CustomOp<'a>) {}

    fn visit_type_name(&mut self, _node: &'a TypeName<'a>) {}

    fn visit_pattern(&mut self, _node: &'a Pattern<'a>) {}

    fn visit_any_type(&mut self, _node: &'a AnyType<'a>) {}

    fn visit_basic_literal(&mut self, _literal: &'a BasicLiteral<'a>) {}

    // === Containers ===

    fn visit_file(&mut self, _node: &'a File<'a>) -> bool {
        self.descends(NodeKind::File)
    }

    fn visit_interface(&mut self, _node: &'a Interface<'a>) -> bool {
        self.descends(NodeKind::Interface)
    }

    fn visit_mixin(&mut self, _node: &'a Mixin<'a>) -> bool {
        self.descends(NodeKind::Mixin)
    }

    fn visit_dictionary(&mut self, _node: &'a Dictionary<'a>) -> bool {
        self.descends(NodeKind::Dictionary)
    }

    // === Declarations ===

    fn visit_annotation(&mut self, _node: &'a Annotation<'a>) -> bool {
        self.descends(NodeKind::Annotation)
    }

    fn visit_parameter(&mut self, _node: &'a Parameter<'a>) -> bool {
        self.descends(NodeKind::Parameter)
    }

    /// Visit a member. `role` tells which kind of container it belongs to;
    /// traversal is the same for both roles.
    fn visit_member(&mut self, _node: &'a Member<'a>, _role: MemberRole) -> bool {
        self.descends(NodeKind::Member)
    }

    fn visit_callback(&mut self, _node: &'a Callback<'a>) -> bool {
        self.descends(NodeKind::Callback)
    }

    fn visit_enum(&mut self, _node: &'a Enum<'a>) -> bool {
        self.descends(NodeKind::Enum)
    }

    fn visit_typedef(&mut self, _node: &'a Typedef<'a>) -> bool {
        self.descends(NodeKind::Typedef)
    }

    // === Type expressions ===

    fn visit_sequence_type(&mut self, _node: &'a SequenceType<'a>) -> bool {
        self.descends(NodeKind::SequenceType)
    }

    fn visit_record_type(&mut self, _node: &'a RecordType<'a>) -> bool {
        self.descends(NodeKind::RecordType)
    }

    fn visit_parametrized_type(&mut self, _node: &'a ParametrizedType<'a>) -> bool {
        self.descends(NodeKind::ParametrizedType)
    }

    fn visit_union_type(&mut self, _node: &'a UnionType<'a>) -> bool {
        self.descends(NodeKind::UnionType)
    }

    fn visit_nullable_type(&mut self, _node: &'a NullableType<'a>) -> bool {
        self.descends(NodeKind::NullableType)
    }

    // === Literals ===

    fn visit_sequence_literal(&mut self, _literal: &'a SequenceLiteral<'a>) -> bool {
        self.descends(NodeKind::SequenceLiteral)
    }
}
