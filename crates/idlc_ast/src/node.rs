//! Node definitions.
//!
//! Every node is a plain `Copy` struct allocated in an [`AstArena`](crate::AstArena).
//! [`Node`] is the closed sum over references to them and is what the
//! visitor dispatches on. Type expression slots use the narrower [`Type`].

use serde::{Deserialize, Serialize};

use crate::{Base, ErrorNode, Literal, NodeKind};

/// A reference to any node of the tree.
///
/// Members appear under two variants, one per container role. Both wrap the
/// same [`Member`] struct and are walked identically; the role is only
/// reported to the visitor.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Error(&'a ErrorNode<'a>),
    File(&'a File<'a>),
    Interface(&'a Interface<'a>),
    Mixin(&'a Mixin<'a>),
    Dictionary(&'a Dictionary<'a>),
    Annotation(&'a Annotation<'a>),
    Parameter(&'a Parameter<'a>),
    Implementation(&'a Implementation<'a>),
    Includes(&'a Includes<'a>),
    InterfaceMember(&'a Member<'a>),
    MixinMember(&'a Member<'a>),
    CustomOp(&'a CustomOp<'a>),
    TypeName(&'a TypeName<'a>),
    Pattern(&'a Pattern<'a>),
    Callback(&'a Callback<'a>),
    Enum(&'a Enum<'a>),
    Typedef(&'a Typedef<'a>),
    AnyType(&'a AnyType<'a>),
    SequenceType(&'a SequenceType<'a>),
    RecordType(&'a RecordType<'a>),
    ParametrizedType(&'a ParametrizedType<'a>),
    UnionType(&'a UnionType<'a>),
    NullableType(&'a NullableType<'a>),
}

impl<'a> Node<'a> {
    /// Returns the kind of this node.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::Error(_) => NodeKind::ErrorNode,
            Node::File(_) => NodeKind::File,
            Node::Interface(_) => NodeKind::Interface,
            Node::Mixin(_) => NodeKind::Mixin,
            Node::Dictionary(_) => NodeKind::Dictionary,
            Node::Annotation(_) => NodeKind::Annotation,
            Node::Parameter(_) => NodeKind::Parameter,
            Node::Implementation(_) => NodeKind::Implementation,
            Node::Includes(_) => NodeKind::Includes,
            Node::InterfaceMember(_) | Node::MixinMember(_) => NodeKind::Member,
            Node::CustomOp(_) => NodeKind::CustomOp,
            Node::TypeName(_) => NodeKind::TypeName,
            Node::Pattern(_) => NodeKind::Pattern,
            Node::Callback(_) => NodeKind::Callback,
            Node::Enum(_) => NodeKind::Enum,
            Node::Typedef(_) => NodeKind::Typedef,
            Node::AnyType(_) => NodeKind::AnyType,
            Node::SequenceType(_) => NodeKind::SequenceType,
            Node::RecordType(_) => NodeKind::RecordType,
            Node::ParametrizedType(_) => NodeKind::ParametrizedType,
            Node::UnionType(_) => NodeKind::UnionType,
            Node::NullableType(_) => NodeKind::NullableType,
        }
    }

    /// Returns the shared metadata of this node.
    pub const fn base(&self) -> &'a Base<'a> {
        match *self {
            Node::Error(n) => &n.base,
            Node::File(n) => &n.base,
            Node::Interface(n) => &n.base,
            Node::Mixin(n) => &n.base,
            Node::Dictionary(n) => &n.base,
            Node::Annotation(n) => &n.base,
            Node::Parameter(n) => &n.base,
            Node::Implementation(n) => &n.base,
            Node::Includes(n) => &n.base,
            Node::InterfaceMember(n) | Node::MixinMember(n) => &n.base,
            Node::CustomOp(n) => &n.base,
            Node::TypeName(n) => &n.base,
            Node::Pattern(n) => &n.base,
            Node::Callback(n) => &n.base,
            Node::Enum(n) => &n.base,
            Node::Typedef(n) => &n.base,
            Node::AnyType(n) => &n.base,
            Node::SequenceType(n) => &n.base,
            Node::RecordType(n) => &n.base,
            Node::ParametrizedType(n) => &n.base,
            Node::UnionType(n) => &n.base,
            Node::NullableType(n) => &n.base,
        }
    }
}

macro_rules! impl_from_ref {
    ($($ty:ident => $target:ident :: $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty<'a>> for $target<'a> {
                #[inline]
                fn from(node: &'a $ty<'a>) -> Self {
                    $target::$variant(node)
                }
            }
        )*
    };
}

impl_from_ref! {
    ErrorNode => Node::Error,
    File => Node::File,
    Interface => Node::Interface,
    Mixin => Node::Mixin,
    Dictionary => Node::Dictionary,
    Annotation => Node::Annotation,
    Parameter => Node::Parameter,
    Implementation => Node::Implementation,
    Includes => Node::Includes,
    CustomOp => Node::CustomOp,
    TypeName => Node::TypeName,
    Pattern => Node::Pattern,
    Callback => Node::Callback,
    Enum => Node::Enum,
    Typedef => Node::Typedef,
    AnyType => Node::AnyType,
    SequenceType => Node::SequenceType,
    RecordType => Node::RecordType,
    ParametrizedType => Node::ParametrizedType,
    UnionType => Node::UnionType,
    NullableType => Node::NullableType,
}

/// The container role a [`Member`] is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberRole {
    /// Member of an interface or a dictionary.
    Interface,
    /// Member of a mixin.
    Mixin,
}

/// A type expression slot.
#[derive(Debug, Clone, Copy)]
pub enum Type<'a> {
    Name(&'a TypeName<'a>),
    Any(&'a AnyType<'a>),
    Sequence(&'a SequenceType<'a>),
    Record(&'a RecordType<'a>),
    Parametrized(&'a ParametrizedType<'a>),
    Union(&'a UnionType<'a>),
    Nullable(&'a NullableType<'a>),
    /// A type that failed to parse.
    Error(&'a ErrorNode<'a>),
}

impl<'a> From<Type<'a>> for Node<'a> {
    fn from(ty: Type<'a>) -> Self {
        match ty {
            Type::Name(n) => Node::TypeName(n),
            Type::Any(n) => Node::AnyType(n),
            Type::Sequence(n) => Node::SequenceType(n),
            Type::Record(n) => Node::RecordType(n),
            Type::Parametrized(n) => Node::ParametrizedType(n),
            Type::Union(n) => Node::UnionType(n),
            Type::Nullable(n) => Node::NullableType(n),
            Type::Error(n) => Node::Error(n),
        }
    }
}

impl_from_ref! {
    TypeName => Type::Name,
    AnyType => Type::Any,
    SequenceType => Type::Sequence,
    RecordType => Type::Record,
    ParametrizedType => Type::Parametrized,
    UnionType => Type::Union,
    NullableType => Type::Nullable,
}

// === Containers ===

/// Root of a parsed IDL document.
#[derive(Debug, Clone, Copy, Default)]
pub struct File<'a> {
    pub base: Base<'a>,
    /// Path of the source file, if known.
    pub path: &'a str,
    /// Top-level declarations in source order.
    pub declarations: &'a [Node<'a>],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Interface<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    /// Parent interface name.
    pub inherits: Option<&'a str>,
    pub partial: bool,
    pub annotations: &'a [Annotation<'a>],
    pub members: &'a [Member<'a>],
    pub custom_ops: &'a [CustomOp<'a>],
    pub patterns: &'a [Pattern<'a>],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Mixin<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    pub partial: bool,
    pub annotations: &'a [Annotation<'a>],
    pub members: &'a [Member<'a>],
    pub custom_ops: &'a [CustomOp<'a>],
    pub patterns: &'a [Pattern<'a>],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dictionary<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    pub inherits: Option<&'a str>,
    pub partial: bool,
    pub annotations: &'a [Annotation<'a>],
    pub members: &'a [Member<'a>],
}

// === Declarations ===

/// An extended attribute such as `[Exposed=Window]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Annotation<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    pub parameters: &'a [Parameter<'a>],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parameter<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    pub ty: Option<Type<'a>>,
    /// Default value.
    pub init: Option<Literal<'a>>,
    pub optional: bool,
    pub variadic: bool,
    pub annotations: &'a [Annotation<'a>],
}

/// `Target implements Source;`
#[derive(Debug, Clone, Copy, Default)]
pub struct Implementation<'a> {
    pub base: Base<'a>,
    pub target: &'a str,
    pub source: &'a str,
}

/// `Target includes Source;`
#[derive(Debug, Clone, Copy, Default)]
pub struct Includes<'a> {
    pub base: Base<'a>,
    pub target: &'a str,
    pub source: &'a str,
}

/// An operation, attribute or constant of an interface, mixin or dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Member<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    /// Attribute type, or operation return type.
    pub ty: Option<Type<'a>>,
    /// Constant value or dictionary default.
    pub init: Option<Literal<'a>>,
    pub parameters: &'a [Parameter<'a>],
    pub annotations: &'a [Annotation<'a>],
    pub attribute: bool,
    pub readonly: bool,
    pub is_static: bool,
    pub constant: bool,
}

/// A special operation such as `stringifier` or `getter`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomOp<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TypeName<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
}

/// Kind of an extension pattern declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternKind {
    #[default]
    Iterable,
    AsyncIterable,
    Maplike,
    Setlike,
}

/// An extension pattern such as `iterable<long>` or `readonly maplike<K, V>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pattern<'a> {
    pub base: Base<'a>,
    pub kind: PatternKind,
    pub readonly: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Callback<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    pub ret: Option<Type<'a>>,
    pub parameters: &'a [Parameter<'a>],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Enum<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    pub annotations: &'a [Annotation<'a>],
    pub values: &'a [Literal<'a>],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Typedef<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    pub ty: Option<Type<'a>>,
    pub annotations: &'a [Annotation<'a>],
}

// === Type expressions ===

/// The `any` type.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyType<'a> {
    pub base: Base<'a>,
}

/// `sequence<T>`
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceType<'a> {
    pub base: Base<'a>,
    pub elem: Option<Type<'a>>,
}

/// `record<K, V>`
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordType<'a> {
    pub base: Base<'a>,
    pub key: Option<Type<'a>>,
    pub elem: Option<Type<'a>>,
}

/// A generic type application such as `Promise<T>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParametrizedType<'a> {
    pub base: Base<'a>,
    pub name: &'a str,
    pub elems: &'a [Type<'a>],
}

/// `(A or B)`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnionType<'a> {
    pub base: Base<'a>,
    pub types: &'a [Type<'a>],
}

/// `T?`
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableType<'a> {
    pub base: Base<'a>,
    pub ty: Option<Type<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstArena, Span};

    #[test]
    fn test_kind_of_member_roles() {
        let member = Member::default();
        assert_eq!(Node::InterfaceMember(&member).kind(), NodeKind::Member);
        assert_eq!(Node::MixinMember(&member).kind(), NodeKind::Member);
    }

    #[test]
    fn test_base_points_into_node() {
        let arena = AstArena::new();
        let interface = arena.alloc(Interface {
            base: Base::new(Span::new(3, 40)),
            name: "Node",
            ..Default::default()
        });

        let node = Node::from(interface);
        assert_eq!(node.kind(), NodeKind::Interface);
        assert_eq!(node.base().span, Span::new(3, 40));
    }

    #[test]
    fn test_type_converts_to_node() {
        let name = TypeName {
            base: Base::default(),
            name: "long",
        };
        let node = Node::from(Type::from(&name));
        assert!(matches!(node, Node::TypeName(n) if n.name == "long"));

        let error = ErrorNode::new(Span::new(0, 1), "bad type");
        assert_eq!(Node::from(Type::Error(&error)).kind(), NodeKind::ErrorNode);
    }

    #[test]
    fn test_node_kinds_cover_every_non_literal_kind() {
        let arena = AstArena::new();
        let member = arena.alloc(Member::default());
        let nodes = [
            Node::Error(arena.alloc(ErrorNode::default())),
            Node::File(arena.alloc(File::default())),
            Node::Interface(arena.alloc(Interface::default())),
            Node::Mixin(arena.alloc(Mixin::default())),
            Node::Dictionary(arena.alloc(Dictionary::default())),
            Node::Annotation(arena.alloc(Annotation::default())),
            Node::Parameter(arena.alloc(Parameter::default())),
            Node::Implementation(arena.alloc(Implementation::default())),
            Node::Includes(arena.alloc(Includes::default())),
            Node::InterfaceMember(member),
            Node::CustomOp(arena.alloc(CustomOp::default())),
            Node::TypeName(arena.alloc(TypeName::default())),
            Node::Pattern(arena.alloc(Pattern::default())),
            Node::Callback(arena.alloc(Callback::default())),
            Node::Enum(arena.alloc(Enum::default())),
            Node::Typedef(arena.alloc(Typedef::default())),
            Node::AnyType(arena.alloc(AnyType::default())),
            Node::SequenceType(arena.alloc(SequenceType::default())),
            Node::RecordType(arena.alloc(RecordType::default())),
            Node::ParametrizedType(arena.alloc(ParametrizedType::default())),
            Node::UnionType(arena.alloc(UnionType::default())),
            Node::NullableType(arena.alloc(NullableType::default())),
        ];

        let kinds: Vec<_> = nodes.iter().map(Node::kind).collect();
        let expected: Vec<_> = NodeKind::ALL
            .into_iter()
            .filter(|kind| !kind.is_literal())
            .collect();
        assert_eq!(kinds, expected);
    }
}
