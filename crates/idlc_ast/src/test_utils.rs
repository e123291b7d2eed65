//! Shared fixtures for the traversal tests.

use crate::visitor::{ScanFlags, Visitor};
use crate::{
    Annotation, AnyType, AstArena, Base, BasicLiteral, Callback, CustomOp, Dictionary, Enum,
    ErrorNode, File, Implementation, Includes, Interface, Literal, Member, MemberRole, Mixin,
    Node, NodeKind, NullableType, Parameter, ParametrizedType, Pattern, PatternKind, RecordType,
    SequenceLiteral, SequenceType, Span, Type, TypeName, Typedef, UnionType, ValueKind,
};

/// Records every hook call as a string.
///
/// Base hooks are recorded as `"base"`, or `"base!N"` when the base carries
/// `N` errors.
#[derive(Debug, Default)]
pub struct Trace {
    pub events: Vec<String>,
    stop: Vec<NodeKind>,
    flags: Option<ScanFlags>,
}

impl Trace {
    /// A trace whose composite hooks return `false` for the given kinds.
    pub fn stopping_at(kinds: impl IntoIterator<Item = NodeKind>) -> Self {
        Self {
            stop: kinds.into_iter().collect(),
            ..Default::default()
        }
    }

    /// A trace in selective mode.
    pub fn selective(flags: ScanFlags) -> Self {
        Self {
            flags: Some(flags),
            ..Default::default()
        }
    }

    /// Events of kind hooks only.
    pub fn kind_events(&self) -> Vec<String> {
        self.events
            .iter()
            .filter(|e| !e.starts_with("base"))
            .cloned()
            .collect()
    }

    fn record(&mut self, kind: NodeKind, event: String) -> bool {
        self.events.push(event);
        !self.stop.contains(&kind) && self.descends(kind)
    }
}

impl<'a> Visitor<'a> for Trace {
    fn scan_flags(&self) -> Option<ScanFlags> {
        self.flags
    }

    fn visit_base(&mut self, base: &'a Base<'a>) {
        if base.errors.is_empty() {
            self.events.push("base".to_string());
        } else {
            self.events.push(format!("base!{}", base.errors.len()));
        }
    }

    fn visit_error_node(&mut self, node: &'a ErrorNode<'a>) {
        self.events.push(format!("ErrorNode {}", node.message));
    }

    fn visit_implementation(&mut self, node: &'a Implementation<'a>) {
        self.events
            .push(format!("Implementation {} implements {}", node.target, node.source));
    }

    fn visit_includes(&mut self, node: &'a Includes<'a>) {
        self.events
            .push(format!("Includes {} includes {}", node.target, node.source));
    }

    fn visit_custom_op(&mut self, node: &'a CustomOp<'a>) {
        self.events.push(format!("CustomOp {}", node.name));
    }

    fn visit_type_name(&mut self, node: &'a TypeName<'a>) {
        self.events.push(format!("TypeName {}", node.name));
    }

    fn visit_pattern(&mut self, node: &'a Pattern<'a>) {
        self.events.push(format!("Pattern {:?}", node.kind));
    }

    fn visit_any_type(&mut self, _node: &'a AnyType<'a>) {
        self.events.push("AnyType".to_string());
    }

    fn visit_basic_literal(&mut self, literal: &'a BasicLiteral<'a>) {
        self.events.push(format!("BasicLiteral {}", literal.value));
    }

    fn visit_file(&mut self, node: &'a File<'a>) -> bool {
        self.record(NodeKind::File, format!("File {}", node.path))
    }

    fn visit_interface(&mut self, node: &'a Interface<'a>) -> bool {
        self.record(NodeKind::Interface, format!("Interface {}", node.name))
    }

    fn visit_mixin(&mut self, node: &'a Mixin<'a>) -> bool {
        self.record(NodeKind::Mixin, format!("Mixin {}", node.name))
    }

    fn visit_dictionary(&mut self, node: &'a Dictionary<'a>) -> bool {
        self.record(NodeKind::Dictionary, format!("Dictionary {}", node.name))
    }

    fn visit_annotation(&mut self, node: &'a Annotation<'a>) -> bool {
        self.record(NodeKind::Annotation, format!("Annotation {}", node.name))
    }

    fn visit_parameter(&mut self, node: &'a Parameter<'a>) -> bool {
        self.record(NodeKind::Parameter, format!("Parameter {}", node.name))
    }

    fn visit_member(&mut self, node: &'a Member<'a>, role: MemberRole) -> bool {
        self.record(NodeKind::Member, format!("Member({role:?}) {}", node.name))
    }

    fn visit_callback(&mut self, node: &'a Callback<'a>) -> bool {
        self.record(NodeKind::Callback, format!("Callback {}", node.name))
    }

    fn visit_enum(&mut self, node: &'a Enum<'a>) -> bool {
        self.record(NodeKind::Enum, format!("Enum {}", node.name))
    }

    fn visit_typedef(&mut self, node: &'a Typedef<'a>) -> bool {
        self.record(NodeKind::Typedef, format!("Typedef {}", node.name))
    }

    fn visit_sequence_type(&mut self, _node: &'a SequenceType<'a>) -> bool {
        self.record(NodeKind::SequenceType, "SequenceType".to_string())
    }

    fn visit_record_type(&mut self, _node: &'a RecordType<'a>) -> bool {
        self.record(NodeKind::RecordType, "RecordType".to_string())
    }

    fn visit_parametrized_type(&mut self, node: &'a ParametrizedType<'a>) -> bool {
        self.record(
            NodeKind::ParametrizedType,
            format!("ParametrizedType {}", node.name),
        )
    }

    fn visit_union_type(&mut self, _node: &'a UnionType<'a>) -> bool {
        self.record(NodeKind::UnionType, "UnionType".to_string())
    }

    fn visit_nullable_type(&mut self, _node: &'a NullableType<'a>) -> bool {
        self.record(NodeKind::NullableType, "NullableType".to_string())
    }

    fn visit_sequence_literal(&mut self, _literal: &'a SequenceLiteral<'a>) -> bool {
        self.record(NodeKind::SequenceLiteral, "SequenceLiteral".to_string())
    }
}

/// Overrides only the scan flags and the base hook, so every kind hook runs
/// its default body. Records the start offset of each base it sees.
#[derive(Debug)]
pub struct BaseOnly {
    pub starts: Vec<u32>,
    flags: ScanFlags,
}

impl BaseOnly {
    pub fn new(flags: ScanFlags) -> Self {
        Self {
            starts: Vec::new(),
            flags,
        }
    }
}

impl<'a> Visitor<'a> for BaseOnly {
    fn scan_flags(&self) -> Option<ScanFlags> {
        Some(self.flags)
    }

    fn visit_base(&mut self, base: &'a Base<'a>) {
        self.starts.push(base.span.start);
    }
}

fn type_name<'a>(arena: &'a AstArena, name: &'a str) -> Type<'a> {
    Type::Name(arena.alloc(TypeName {
        base: Base::default(),
        name,
    }))
}

fn errors<'a>(arena: &'a AstArena, messages: &[&'a str]) -> &'a [ErrorNode<'a>] {
    let records: Vec<_> = messages
        .iter()
        .copied()
        .map(|message| ErrorNode::new(Span::default(), message))
        .collect();
    arena.alloc_slice_copy(&records)
}

fn annotation<'a>(arena: &'a AstArena, name: &'a str) -> &'a [Annotation<'a>] {
    arena.alloc_slice_copy(&[Annotation {
        base: Base::default(),
        name,
        parameters: &[],
    }])
}

/// A file touching every node and literal kind, with every child slot of
/// every composite kind filled at least once.
///
/// Five error records are attached, in pre-order: one on interface `Node`,
/// one on the nullable type of parameter `child`, two on dictionary
/// `Options`, one on the enum value `closed`.
pub fn sample_file(arena: &AstArena) -> &File<'_> {
    // interface Node
    let exposed = arena.alloc_slice_copy(&[Annotation {
        base: Base::default(),
        name: "Exposed",
        parameters: arena.alloc_slice_copy(&[Parameter {
            name: "Window",
            ..Default::default()
        }]),
    }]);
    let child_type = arena.alloc(NullableType {
        base: Base::with_errors(Span::default(), errors(arena, &["stray '?'"])),
        ty: Some(type_name(arena, "Node")),
    });
    let insert_params = arena.alloc_slice_copy(&[
        Parameter {
            name: "node",
            ty: Some(type_name(arena, "Node")),
            ..Default::default()
        },
        Parameter {
            name: "child",
            ty: Some(Type::Nullable(child_type)),
            ..Default::default()
        },
    ]);
    let node_members = arena.alloc_slice_copy(&[
        Member {
            name: "nodeName",
            ty: Some(type_name(arena, "DOMString")),
            attribute: true,
            readonly: true,
            ..Default::default()
        },
        Member {
            name: "insertBefore",
            ty: Some(type_name(arena, "Node")),
            parameters: insert_params,
            ..Default::default()
        },
    ]);
    let interface = arena.alloc(Interface {
        base: Base::with_errors(Span::default(), errors(arena, &["missing semicolon"])),
        name: "Node",
        annotations: exposed,
        members: node_members,
        custom_ops: arena.alloc_slice_copy(&[CustomOp {
            base: Base::default(),
            name: "stringifier",
        }]),
        patterns: arena.alloc_slice_copy(&[Pattern {
            base: Base::default(),
            kind: PatternKind::Iterable,
            readonly: false,
        }]),
        ..Default::default()
    });

    // [SecureContext] interface mixin Slotted
    let slot_type = arena.alloc(NullableType {
        base: Base::default(),
        ty: Some(type_name(arena, "HTMLSlotElement")),
    });
    let zero = arena.alloc(BasicLiteral {
        base: Base::default(),
        kind: ValueKind::Integer,
        value: "0",
    });
    let auto = arena.alloc(BasicLiteral {
        base: Base::default(),
        kind: ValueKind::String,
        value: "auto",
    });
    let hint = arena.alloc_slice_copy(&[Parameter {
        name: "hint",
        ty: Some(type_name(arena, "DOMString")),
        init: Some(Literal::Basic(auto)),
        annotations: annotation(arena, "LegacyNullToEmptyString"),
        ..Default::default()
    }]);
    let mixin = arena.alloc(Mixin {
        name: "Slotted",
        annotations: annotation(arena, "SecureContext"),
        members: arena.alloc_slice_copy(&[
            Member {
                name: "assignedSlot",
                ty: Some(Type::Nullable(slot_type)),
                attribute: true,
                ..Default::default()
            },
            Member {
                name: "slotIndex",
                ty: Some(type_name(arena, "long")),
                init: Some(Literal::Basic(zero)),
                parameters: hint,
                annotations: annotation(arena, "CEReactions"),
                ..Default::default()
            },
        ]),
        custom_ops: arena.alloc_slice_copy(&[CustomOp {
            base: Base::default(),
            name: "getter",
        }]),
        patterns: arena.alloc_slice_copy(&[Pattern {
            base: Base::default(),
            kind: PatternKind::Setlike,
            readonly: true,
        }]),
        ..Default::default()
    });

    // dictionary Options
    let one = arena.alloc(BasicLiteral {
        base: Base::default(),
        kind: ValueKind::Integer,
        value: "1",
    });
    let names_type = arena.alloc(SequenceType {
        base: Base::default(),
        elem: Some(type_name(arena, "DOMString")),
    });
    let empty = arena.alloc(SequenceLiteral::default());
    let dictionary = arena.alloc(Dictionary {
        base: Base::with_errors(
            Span::default(),
            errors(arena, &["duplicate member", "trailing comma"]),
        ),
        name: "Options",
        members: arena.alloc_slice_copy(&[
            Member {
                name: "depth",
                ty: Some(type_name(arena, "long")),
                init: Some(Literal::Basic(one)),
                ..Default::default()
            },
            Member {
                name: "names",
                ty: Some(Type::Sequence(names_type)),
                init: Some(Literal::Sequence(empty)),
                ..Default::default()
            },
        ]),
        ..Default::default()
    });

    let includes = arena.alloc(Includes {
        base: Base::default(),
        target: "Node",
        source: "Slotted",
    });

    // callback Handler = any (Event or record<DOMString, any> event)
    let record = arena.alloc(RecordType {
        base: Base::default(),
        key: Some(type_name(arena, "DOMString")),
        elem: Some(Type::Any(arena.alloc(AnyType::default()))),
    });
    let union = arena.alloc(UnionType {
        base: Base::default(),
        types: arena.alloc_slice_copy(&[type_name(arena, "Event"), Type::Record(record)]),
    });
    let callback = arena.alloc(Callback {
        base: Base::default(),
        name: "Handler",
        ret: Some(Type::Any(arena.alloc(AnyType::default()))),
        parameters: arena.alloc_slice_copy(&[Parameter {
            name: "event",
            ty: Some(Type::Union(union)),
            ..Default::default()
        }]),
    });

    // [SecureContext] enum Mode { "open", "closed" }
    let open = arena.alloc(BasicLiteral {
        base: Base::default(),
        kind: ValueKind::String,
        value: "open",
    });
    let closed = arena.alloc(BasicLiteral {
        base: Base::with_errors(Span::default(), errors(arena, &["duplicate value"])),
        kind: ValueKind::String,
        value: "closed",
    });
    let enumeration = arena.alloc(Enum {
        base: Base::default(),
        name: "Mode",
        annotations: annotation(arena, "SecureContext"),
        values: arena.alloc_slice_copy(&[Literal::Basic(open), Literal::Basic(closed)]),
    });

    // typedef [Clamp] Promise<long> Id
    let promise = arena.alloc(ParametrizedType {
        base: Base::default(),
        name: "Promise",
        elems: arena.alloc_slice_copy(&[type_name(arena, "long")]),
    });
    let typedef = arena.alloc(Typedef {
        base: Base::default(),
        name: "Id",
        ty: Some(Type::Parametrized(promise)),
        annotations: annotation(arena, "Clamp"),
    });

    let implementation = arena.alloc(Implementation {
        base: Base::default(),
        target: "Node",
        source: "EventTarget",
    });
    let garbage = arena.alloc(ErrorNode::new(Span::new(200, 205), "unexpected token"));

    let declarations = arena.alloc_slice_copy(&[
        Node::Interface(interface),
        Node::Mixin(mixin),
        Node::Dictionary(dictionary),
        Node::Includes(includes),
        Node::Callback(callback),
        Node::Enum(enumeration),
        Node::Typedef(typedef),
        Node::Implementation(implementation),
        Node::Error(garbage),
    ]);

    arena.alloc(File {
        base: Base::default(),
        path: "sample.idl",
        declarations,
    })
}
