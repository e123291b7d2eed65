//! Per-kind node statistics.

use std::collections::BTreeMap;

use idlc_ast::visitor::{ScanFlags, Visitor};
use idlc_ast::{
    Annotation, AnyType, BasicLiteral, Callback, CustomOp, Dictionary, Enum, ErrorNode, File,
    Implementation, Includes, Interface, Member, MemberRole, Mixin, NodeKind, NullableType,
    Parameter, ParametrizedType, Pattern, RecordType, SequenceLiteral, SequenceType, TypeName,
    Typedef, UnionType,
};

/// Number of hook invocations per kind.
pub type KindStats = BTreeMap<NodeKind, usize>;

/// Visitor counting how many nodes of each kind it reaches.
///
/// In selective mode a composite node whose kind is not scanned is counted,
/// but its subtree is not.
#[derive(Debug, Default)]
pub struct KindCounter {
    counts: KindStats,
    scan: Option<ScanFlags>,
}

impl KindCounter {
    /// Creates a counter that descends everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter that only descends into the kinds in `flags`.
    pub fn selective(flags: ScanFlags) -> Self {
        Self {
            counts: KindStats::new(),
            scan: Some(flags),
        }
    }

    /// Counts gathered so far. Kinds never reached are absent.
    pub fn counts(&self) -> &KindStats {
        &self.counts
    }

    pub fn into_counts(self) -> KindStats {
        self.counts
    }

    /// Total number of nodes and literals reached.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    fn count(&mut self, kind: NodeKind) {
        *self.counts.entry(kind).or_default() += 1;
    }

    fn enter(&mut self, kind: NodeKind) -> bool {
        self.count(kind);
        self.descends(kind)
    }
}

impl<'a> Visitor<'a> for KindCounter {
    fn scan_flags(&self) -> Option<ScanFlags> {
        self.scan
    }

    fn visit_error_node(&mut self, _node: &'a ErrorNode<'a>) {
        self.count(NodeKind::ErrorNode);
    }

    fn visit_implementation(&mut self, _node: &'a Implementation<'a>) {
        self.count(NodeKind::Implementation);
    }

    fn visit_includes(&mut self, _node: &'a Includes<'a>) {
        self.count(NodeKind::Includes);
    }

    fn visit_custom_op(&mut self, _node: &'a CustomOp<'a>) {
        self.count(NodeKind::CustomOp);
    }

    fn visit_type_name(&mut self, _node: &'a TypeName<'a>) {
        self.count(NodeKind::TypeName);
    }

    fn visit_pattern(&mut self, _node: &'a Pattern<'a>) {
        self.count(NodeKind::Pattern);
    }

    fn visit_any_type(&mut self, _node: &'a AnyType<'a>) {
        self.count(NodeKind::AnyType);
    }

    fn visit_basic_literal(&mut self, _literal: &'a BasicLiteral<'a>) {
        self.count(NodeKind::BasicLiteral);
    }

    fn visit_file(&mut self, _node: &'a File<'a>) -> bool {
        self.enter(NodeKind::File)
    }

    fn visit_interface(&mut self, _node: &'a Interface<'a>) -> bool {
        self.enter(NodeKind::Interface)
    }

    fn visit_mixin(&mut self, _node: &'a Mixin<'a>) -> bool {
        self.enter(NodeKind::Mixin)
    }

    fn visit_dictionary(&mut self, _node: &'a Dictionary<'a>) -> bool {
        self.enter(NodeKind::Dictionary)
    }

    fn visit_annotation(&mut self, _node: &'a Annotation<'a>) -> bool {
        self.enter(NodeKind::Annotation)
    }

    fn visit_parameter(&mut self, _node: &'a Parameter<'a>) -> bool {
        self.enter(NodeKind::Parameter)
    }

    fn visit_member(&mut self, _node: &'a Member<'a>, _role: MemberRole) -> bool {
        self.enter(NodeKind::Member)
    }

    fn visit_callback(&mut self, _node: &'a Callback<'a>) -> bool {
        self.enter(NodeKind::Callback)
    }

    fn visit_enum(&mut self, _node: &'a Enum<'a>) -> bool {
        self.enter(NodeKind::Enum)
    }

    fn visit_typedef(&mut self, _node: &'a Typedef<'a>) -> bool {
        self.enter(NodeKind::Typedef)
    }

    fn visit_sequence_type(&mut self, _node: &'a SequenceType<'a>) -> bool {
        self.enter(NodeKind::SequenceType)
    }

    fn visit_record_type(&mut self, _node: &'a RecordType<'a>) -> bool {
        self.enter(NodeKind::RecordType)
    }

    fn visit_parametrized_type(&mut self, _node: &'a ParametrizedType<'a>) -> bool {
        self.enter(NodeKind::ParametrizedType)
    }

    fn visit_union_type(&mut self, _node: &'a UnionType<'a>) -> bool {
        self.enter(NodeKind::UnionType)
    }

    fn visit_nullable_type(&mut self, _node: &'a NullableType<'a>) -> bool {
        self.enter(NodeKind::NullableType)
    }

    fn visit_sequence_literal(&mut self, _literal: &'a SequenceLiteral<'a>) -> bool {
        self.enter(NodeKind::SequenceLiteral)
    }
}
