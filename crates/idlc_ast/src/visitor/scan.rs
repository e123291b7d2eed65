//! Per-kind scan toggles and the default no-op visitor.

use bitflags::bitflags;

use crate::NodeKind;

use super::visit::Visitor;

bitflags! {
    /// Set of node kinds a selective visitor descends into.
    ///
    /// Bits are indexed by [`NodeKind`] declaration order. Only composite
    /// kinds have an effect on traversal; flags for leaf kinds are accepted
    /// and ignored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScanFlags: u32 {
        const ERROR_NODE = 1 << NodeKind::ErrorNode as u32;
        const FILE = 1 << NodeKind::File as u32;
        const INTERFACE = 1 << NodeKind::Interface as u32;
        const MIXIN = 1 << NodeKind::Mixin as u32;
        const DICTIONARY = 1 << NodeKind::Dictionary as u32;
        const ANNOTATION = 1 << NodeKind::Annotation as u32;
        const PARAMETER = 1 << NodeKind::Parameter as u32;
        const IMPLEMENTATION = 1 << NodeKind::Implementation as u32;
        const INCLUDES = 1 << NodeKind::Includes as u32;
        const MEMBER = 1 << NodeKind::Member as u32;
        const CUSTOM_OP = 1 << NodeKind::CustomOp as u32;
        const TYPE_NAME = 1 << NodeKind::TypeName as u32;
        const PATTERN = 1 << NodeKind::Pattern as u32;
        const CALLBACK = 1 << NodeKind::Callback as u32;
        const ENUM = 1 << NodeKind::Enum as u32;
        const TYPEDEF = 1 << NodeKind::Typedef as u32;
        const ANY_TYPE = 1 << NodeKind::AnyType as u32;
        const SEQUENCE_TYPE = 1 << NodeKind::SequenceType as u32;
        const RECORD_TYPE = 1 << NodeKind::RecordType as u32;
        const PARAMETRIZED_TYPE = 1 << NodeKind::ParametrizedType as u32;
        const UNION_TYPE = 1 << NodeKind::UnionType as u32;
        const NULLABLE_TYPE = 1 << NodeKind::NullableType as u32;
        const BASIC_LITERAL = 1 << NodeKind::BasicLiteral as u32;
        const SEQUENCE_LITERAL = 1 << NodeKind::SequenceLiteral as u32;
    }
}

impl ScanFlags {
    /// Returns true if a selective visitor descends into nodes of `kind`.
    #[inline]
    pub fn scans(self, kind: NodeKind) -> bool {
        self.contains(kind.into())
    }

    /// Returns the kinds in this set, in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL
            .into_iter()
            .filter(move |kind| self.scans(*kind))
    }
}

impl From<NodeKind> for ScanFlags {
    #[inline]
    fn from(kind: NodeKind) -> Self {
        Self::from_bits_retain(1 << kind as u32)
    }
}

impl FromIterator<NodeKind> for ScanFlags {
    fn from_iter<I: IntoIterator<Item = NodeKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |flags, kind| flags | kind.into())
    }
}

/// A visitor that observes nothing.
///
/// Built with [`NoopVisitor::new`] it descends everywhere. Built with
/// [`NoopVisitor::selective`] it stops at every composite node whose kind is
/// not in the given flags.
///
/// ```rust
/// use idlc_ast::NodeKind;
/// use idlc_ast::visitor::{NoopVisitor, ScanFlags, Visitor};
///
/// let visitor = NoopVisitor::selective(ScanFlags::FILE | ScanFlags::INTERFACE);
/// assert!(visitor.descends(NodeKind::Interface));
/// assert!(!visitor.descends(NodeKind::Dictionary));
/// assert!(NoopVisitor::new().descends(NodeKind::Dictionary));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor {
    scan: Option<ScanFlags>,
}

impl NoopVisitor {
    /// Creates a visitor that descends into every composite node.
    #[inline]
    pub const fn new() -> Self {
        Self { scan: None }
    }

    /// Creates a visitor that stops everywhere except at the kinds in `flags`.
    #[inline]
    pub const fn selective(flags: ScanFlags) -> Self {
        Self { scan: Some(flags) }
    }
}

impl<'a> Visitor<'a> for NoopVisitor {
    #[inline]
    fn scan_flags(&self) -> Option<ScanFlags> {
        self.scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_follow_kind_order() {
        assert_eq!(ScanFlags::from(NodeKind::ErrorNode), ScanFlags::ERROR_NODE);
        assert_eq!(ScanFlags::from(NodeKind::Member), ScanFlags::MEMBER);
        assert_eq!(
            ScanFlags::from(NodeKind::SequenceLiteral),
            ScanFlags::SEQUENCE_LITERAL
        );
        assert_eq!(ScanFlags::all().kinds().count(), NodeKind::ALL.len());
    }

    #[test]
    fn test_from_iter_and_kinds() {
        let flags: ScanFlags = [NodeKind::Member, NodeKind::File].into_iter().collect();
        assert_eq!(flags, ScanFlags::FILE | ScanFlags::MEMBER);
        assert_eq!(
            flags.kinds().collect::<Vec<_>>(),
            vec![NodeKind::File, NodeKind::Member]
        );
    }

    #[test]
    fn test_noop_descends_everywhere() {
        let visitor = NoopVisitor::new();
        for kind in NodeKind::ALL {
            assert!(visitor.descends(kind));
        }
    }

    #[test]
    fn test_selective_stops_everywhere_except_flagged() {
        let visitor = NoopVisitor::selective(ScanFlags::INTERFACE);
        for kind in NodeKind::ALL.into_iter().filter(NodeKind::is_composite) {
            assert_eq!(visitor.descends(kind), kind == NodeKind::Interface, "{kind}");
        }
    }

    #[test]
    fn test_empty_selection_stops_everywhere() {
        let visitor = NoopVisitor::selective(ScanFlags::empty());
        assert!(!visitor.descends(NodeKind::File));
        assert!(!visitor.descends(NodeKind::SequenceLiteral));
    }
}
