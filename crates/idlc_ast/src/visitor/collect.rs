//! Aggregation of the error records attached across a tree.

use tracing::trace;

use crate::{Base, ErrorNode, Literal, Node};

use super::visit::Visitor;
use super::walk::{walk_literal, walk_node};

/// Visitor that gathers every error record it passes, in pre-order.
///
/// Only [`Visitor::visit_base`] is overridden; every composite hook keeps its
/// default and descends, so the whole subtree is reached. Records attached to
/// one node keep their attachment order.
#[derive(Debug, Default)]
pub struct ErrorCollector<'a> {
    errors: Vec<&'a ErrorNode<'a>>,
}

impl<'a> ErrorCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records gathered so far.
    pub fn errors(&self) -> &[&'a ErrorNode<'a>] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<&'a ErrorNode<'a>> {
        self.errors
    }
}

impl<'a> Visitor<'a> for ErrorCollector<'a> {
    #[inline]
    fn visit_base(&mut self, base: &'a Base<'a>) {
        self.errors.extend(base.errors);
    }
}

/// Returns every error record reachable from `root`.
///
/// An absent root yields an empty list.
///
/// ```rust
/// use idlc_ast::{AstArena, Base, ErrorNode, Interface, Node, Span};
/// use idlc_ast::visitor::collect_errors;
///
/// let arena = AstArena::new();
/// let errors = arena.alloc_slice_copy(&[ErrorNode::new(Span::new(10, 11), "expected '{'")]);
/// let interface = arena.alloc(Interface {
///     base: Base::with_errors(Span::new(0, 20), errors),
///     name: "Broken",
///     ..Default::default()
/// });
///
/// let found = collect_errors(Node::Interface(interface));
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].message, "expected '{'");
/// assert!(collect_errors(None::<Node>).is_empty());
/// ```
pub fn collect_errors<'a>(root: impl Into<Option<Node<'a>>>) -> Vec<&'a ErrorNode<'a>> {
    let mut collector = ErrorCollector::new();
    walk_node(&mut collector, root);
    trace!(count = collector.errors.len(), "Collected node errors");
    collector.into_errors()
}

/// Returns every error record reachable from a literal.
pub fn collect_literal_errors<'a>(
    literal: impl Into<Option<Literal<'a>>>,
) -> Vec<&'a ErrorNode<'a>> {
    let mut collector = ErrorCollector::new();
    walk_literal(&mut collector, literal);
    trace!(count = collector.errors.len(), "Collected literal errors");
    collector.into_errors()
}
