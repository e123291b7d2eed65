//! Loader for JSON tree dumps.
//!
//! A dump is a single JSON object describing one parsed file:
//!
//! ```json
//! {
//!   "path": "dom.idl",
//!   "span": [0, 120],
//!   "errors": [{ "message": "expected ';'", "span": [40, 41] }],
//!   "declarations": [
//!     {
//!       "kind": "interface",
//!       "name": "Node",
//!       "members": [{ "name": "nodeName", "type": { "kind": "typeName", "name": "DOMString" } }]
//!     }
//!   ]
//! }
//! ```
//!
//! Declarations, type expressions and literals are objects tagged by
//! `"kind"`. Every object may carry `"span"` and `"errors"`. Sequences keep
//! their order through lowering.

use serde::Deserialize;
use tracing::debug;

use idlc_ast::{
    Annotation, AnyType, AstArena, Base, BasicLiteral, Callback, CustomOp, Dictionary, Enum,
    ErrorNode, File, Implementation, Includes, Interface, Literal, Member, Mixin, Node,
    NullableType, Parameter, ParametrizedType, Pattern, PatternKind, RecordType,
    SequenceLiteral, SequenceType, Span, Type, TypeName, Typedef, UnionType, ValueKind,
};

use crate::{LoadError, Loader};

/// Loader for JSON tree dumps.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLoader;

impl JsonLoader {
    /// Creates a new JSON loader.
    pub fn new() -> Self {
        Self
    }
}

impl Loader for JsonLoader {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn load<'a>(&self, arena: &'a AstArena, source: &str) -> Result<&'a File<'a>, LoadError> {
        let dump: FileDump = serde_json::from_str(source)?;
        debug!(
            path = %dump.path,
            declarations = dump.declarations.len(),
            "Loaded tree dump"
        );
        Ok(Lowering { arena }.file(&dump))
    }
}

// === Dump format ===

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorDump {
    message: String,
    #[serde(default)]
    span: [u32; 2],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileDump {
    #[serde(default)]
    path: String,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
    #[serde(default)]
    declarations: Vec<DeclarationDump>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum DeclarationDump {
    Interface(InterfaceDump),
    Mixin(MixinDump),
    Dictionary(DictionaryDump),
    Implementation(RelationDump),
    Includes(RelationDump),
    Callback(CallbackDump),
    Enum(EnumDump),
    Typedef(TypedefDump),
    ErrorNode(ErrorDeclarationDump),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct InterfaceDump {
    name: String,
    #[serde(default)]
    inherits: Option<String>,
    #[serde(default)]
    partial: bool,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
    #[serde(default)]
    annotations: Vec<AnnotationDump>,
    #[serde(default)]
    members: Vec<MemberDump>,
    #[serde(default)]
    custom_ops: Vec<CustomOpDump>,
    #[serde(default)]
    patterns: Vec<PatternDump>,
}

/// Mixins have no parent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MixinDump {
    name: String,
    #[serde(default)]
    partial: bool,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
    #[serde(default)]
    annotations: Vec<AnnotationDump>,
    #[serde(default)]
    members: Vec<MemberDump>,
    #[serde(default)]
    custom_ops: Vec<CustomOpDump>,
    #[serde(default)]
    patterns: Vec<PatternDump>,
}

/// Dictionaries hold members only.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DictionaryDump {
    name: String,
    #[serde(default)]
    inherits: Option<String>,
    #[serde(default)]
    partial: bool,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
    #[serde(default)]
    annotations: Vec<AnnotationDump>,
    #[serde(default)]
    members: Vec<MemberDump>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RelationDump {
    target: String,
    source: String,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CallbackDump {
    name: String,
    #[serde(default, rename = "return")]
    ret: Option<TypeDump>,
    #[serde(default)]
    parameters: Vec<ParameterDump>,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EnumDump {
    name: String,
    #[serde(default)]
    values: Vec<LiteralDump>,
    #[serde(default)]
    annotations: Vec<AnnotationDump>,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TypedefDump {
    name: String,
    #[serde(default, rename = "type")]
    ty: Option<TypeDump>,
    #[serde(default)]
    annotations: Vec<AnnotationDump>,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

/// An error node standing in for a declaration or type.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorDeclarationDump {
    message: String,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnnotationDump {
    name: String,
    #[serde(default)]
    parameters: Vec<ParameterDump>,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParameterDump {
    name: String,
    #[serde(default, rename = "type")]
    ty: Option<TypeDump>,
    #[serde(default)]
    init: Option<LiteralDump>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    variadic: bool,
    #[serde(default)]
    annotations: Vec<AnnotationDump>,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MemberDump {
    name: String,
    #[serde(default, rename = "type")]
    ty: Option<TypeDump>,
    #[serde(default)]
    init: Option<LiteralDump>,
    #[serde(default)]
    parameters: Vec<ParameterDump>,
    #[serde(default)]
    annotations: Vec<AnnotationDump>,
    #[serde(default)]
    attribute: bool,
    #[serde(default)]
    readonly: bool,
    #[serde(default, rename = "static")]
    is_static: bool,
    #[serde(default)]
    constant: bool,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CustomOpDump {
    name: String,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternDump {
    #[serde(rename = "type")]
    kind: PatternKind,
    #[serde(default)]
    readonly: bool,
    #[serde(default)]
    span: [u32; 2],
    #[serde(default)]
    errors: Vec<ErrorDump>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", deny_unknown_fields)]
enum TypeDump {
    TypeName {
        name: String,
        #[serde(default)]
        span: [u32; 2],
        #[serde(default)]
        errors: Vec<ErrorDump>,
    },
    AnyType {
        #[serde(default)]
        span: [u32; 2],
        #[serde(default)]
        errors: Vec<ErrorDump>,
    },
    SequenceType {
        #[serde(default)]
        elem: Option<Box<TypeDump>>,
        #[serde(default)]
        span: [u32; 2],
        #[serde(default)]
        errors: Vec<ErrorDump>,
    },
    RecordType {
        #[serde(default)]
        key: Option<Box<TypeDump>>,
        #[serde(default)]
        elem: Option<Box<TypeDump>>,
        #[serde(default)]
        span: [u32; 2],
        #[serde(default)]
        errors: Vec<ErrorDump>,
    },
    ParametrizedType {
        name: String,
        #[serde(default)]
        elems: Vec<TypeDump>,
        #[serde(default)]
        span: [u32; 2],
        #[serde(default)]
        errors: Vec<ErrorDump>,
    },
    UnionType {
        #[serde(default)]
        types: Vec<TypeDump>,
        #[serde(default)]
        span: [u32; 2],
        #[serde(default)]
        errors: Vec<ErrorDump>,
    },
    NullableType {
        #[serde(default, rename = "type")]
        ty: Option<Box<TypeDump>>,
        #[serde(default)]
        span: [u32; 2],
        #[serde(default)]
        errors: Vec<ErrorDump>,
    },
    ErrorNode(ErrorDeclarationDump),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", deny_unknown_fields)]
enum LiteralDump {
    Basic {
        #[serde(default, rename = "type")]
        value_kind: ValueKind,
        value: String,
        #[serde(default)]
        span: [u32; 2],
        #[serde(default)]
        errors: Vec<ErrorDump>,
    },
    Sequence {
        #[serde(default)]
        elems: Vec<LiteralDump>,
        #[serde(default)]
        span: [u32; 2],
        #[serde(default)]
        errors: Vec<ErrorDump>,
    },
}

// === Lowering ===

/// Copies dump values into the arena.
struct Lowering<'a> {
    arena: &'a AstArena,
}

impl<'a> Lowering<'a> {
    fn str(&self, s: &str) -> &'a str {
        self.arena.alloc_str(s)
    }

    fn slice<D, T: Copy>(&self, dumps: &[D], lower: impl Fn(&Self, &D) -> T) -> &'a [T] {
        if dumps.is_empty() {
            return &[];
        }
        let items: Vec<T> = dumps.iter().map(|dump| lower(self, dump)).collect();
        self.arena.alloc_slice_copy(&items)
    }

    fn base(&self, span: [u32; 2], errors: &[ErrorDump]) -> Base<'a> {
        let errors = self.slice(errors, |this, error| {
            ErrorNode::new(Span::from(error.span), this.str(&error.message))
        });
        Base::with_errors(Span::from(span), errors)
    }

    fn file(&self, dump: &FileDump) -> &'a File<'a> {
        self.arena.alloc(File {
            base: self.base(dump.span, &dump.errors),
            path: self.str(&dump.path),
            declarations: self.slice(&dump.declarations, Self::declaration),
        })
    }

    fn declaration(&self, dump: &DeclarationDump) -> Node<'a> {
        match dump {
            DeclarationDump::Interface(d) => Node::Interface(self.arena.alloc(Interface {
                base: self.base(d.span, &d.errors),
                name: self.str(&d.name),
                inherits: d.inherits.as_deref().map(|s| self.str(s)),
                partial: d.partial,
                annotations: self.slice(&d.annotations, Self::annotation),
                members: self.slice(&d.members, Self::member),
                custom_ops: self.slice(&d.custom_ops, Self::custom_op),
                patterns: self.slice(&d.patterns, Self::pattern),
            })),
            DeclarationDump::Mixin(d) => Node::Mixin(self.arena.alloc(Mixin {
                base: self.base(d.span, &d.errors),
                name: self.str(&d.name),
                partial: d.partial,
                annotations: self.slice(&d.annotations, Self::annotation),
                members: self.slice(&d.members, Self::member),
                custom_ops: self.slice(&d.custom_ops, Self::custom_op),
                patterns: self.slice(&d.patterns, Self::pattern),
            })),
            DeclarationDump::Dictionary(d) => Node::Dictionary(self.arena.alloc(Dictionary {
                base: self.base(d.span, &d.errors),
                name: self.str(&d.name),
                inherits: d.inherits.as_deref().map(|s| self.str(s)),
                partial: d.partial,
                annotations: self.slice(&d.annotations, Self::annotation),
                members: self.slice(&d.members, Self::member),
            })),
            DeclarationDump::Implementation(d) => {
                Node::Implementation(self.arena.alloc(Implementation {
                    base: self.base(d.span, &d.errors),
                    target: self.str(&d.target),
                    source: self.str(&d.source),
                }))
            }
            DeclarationDump::Includes(d) => Node::Includes(self.arena.alloc(Includes {
                base: self.base(d.span, &d.errors),
                target: self.str(&d.target),
                source: self.str(&d.source),
            })),
            DeclarationDump::Callback(d) => Node::Callback(self.arena.alloc(Callback {
                base: self.base(d.span, &d.errors),
                name: self.str(&d.name),
                ret: d.ret.as_ref().map(|ty| self.ty(ty)),
                parameters: self.slice(&d.parameters, Self::parameter),
            })),
            DeclarationDump::Enum(d) => Node::Enum(self.arena.alloc(Enum {
                base: self.base(d.span, &d.errors),
                name: self.str(&d.name),
                annotations: self.slice(&d.annotations, Self::annotation),
                values: self.slice(&d.values, Self::literal),
            })),
            DeclarationDump::Typedef(d) => Node::Typedef(self.arena.alloc(Typedef {
                base: self.base(d.span, &d.errors),
                name: self.str(&d.name),
                ty: d.ty.as_ref().map(|ty| self.ty(ty)),
                annotations: self.slice(&d.annotations, Self::annotation),
            })),
            DeclarationDump::ErrorNode(d) => Node::Error(self.error_node(d)),
        }
    }

    fn error_node(&self, dump: &ErrorDeclarationDump) -> &'a ErrorNode<'a> {
        self.arena.alloc(ErrorNode {
            base: self.base(dump.span, &dump.errors),
            message: self.str(&dump.message),
        })
    }

    fn annotation(&self, dump: &AnnotationDump) -> Annotation<'a> {
        Annotation {
            base: self.base(dump.span, &dump.errors),
            name: self.str(&dump.name),
            parameters: self.slice(&dump.parameters, Self::parameter),
        }
    }

    fn parameter(&self, dump: &ParameterDump) -> Parameter<'a> {
        Parameter {
            base: self.base(dump.span, &dump.errors),
            name: self.str(&dump.name),
            ty: dump.ty.as_ref().map(|ty| self.ty(ty)),
            init: dump.init.as_ref().map(|init| self.literal(init)),
            optional: dump.optional,
            variadic: dump.variadic,
            annotations: self.slice(&dump.annotations, Self::annotation),
        }
    }

    fn member(&self, dump: &MemberDump) -> Member<'a> {
        Member {
            base: self.base(dump.span, &dump.errors),
            name: self.str(&dump.name),
            ty: dump.ty.as_ref().map(|ty| self.ty(ty)),
            init: dump.init.as_ref().map(|init| self.literal(init)),
            parameters: self.slice(&dump.parameters, Self::parameter),
            annotations: self.slice(&dump.annotations, Self::annotation),
            attribute: dump.attribute,
            readonly: dump.readonly,
            is_static: dump.is_static,
            constant: dump.constant,
        }
    }

    fn custom_op(&self, dump: &CustomOpDump) -> CustomOp<'a> {
        CustomOp {
            base: self.base(dump.span, &dump.errors),
            name: self.str(&dump.name),
        }
    }

    fn pattern(&self, dump: &PatternDump) -> Pattern<'a> {
        Pattern {
            base: self.base(dump.span, &dump.errors),
            kind: dump.kind,
            readonly: dump.readonly,
        }
    }

    fn boxed_ty(&self, dump: &Option<Box<TypeDump>>) -> Option<Type<'a>> {
        dump.as_deref().map(|ty| self.ty(ty))
    }

    fn ty(&self, dump: &TypeDump) -> Type<'a> {
        match dump {
            TypeDump::TypeName { name, span, errors } => Type::Name(self.arena.alloc(TypeName {
                base: self.base(*span, errors),
                name: self.str(name),
            })),
            TypeDump::AnyType { span, errors } => Type::Any(self.arena.alloc(AnyType {
                base: self.base(*span, errors),
            })),
            TypeDump::SequenceType { elem, span, errors } => {
                Type::Sequence(self.arena.alloc(SequenceType {
                    base: self.base(*span, errors),
                    elem: self.boxed_ty(elem),
                }))
            }
            TypeDump::RecordType {
                key,
                elem,
                span,
                errors,
            } => Type::Record(self.arena.alloc(RecordType {
                base: self.base(*span, errors),
                key: self.boxed_ty(key),
                elem: self.boxed_ty(elem),
            })),
            TypeDump::ParametrizedType {
                name,
                elems,
                span,
                errors,
            } => Type::Parametrized(self.arena.alloc(ParametrizedType {
                base: self.base(*span, errors),
                name: self.str(name),
                elems: self.slice(elems, Self::ty),
            })),
            TypeDump::UnionType {
                types,
                span,
                errors,
            } => Type::Union(self.arena.alloc(UnionType {
                base: self.base(*span, errors),
                types: self.slice(types, Self::ty),
            })),
            TypeDump::NullableType { ty, span, errors } => {
                Type::Nullable(self.arena.alloc(NullableType {
                    base: self.base(*span, errors),
                    ty: self.boxed_ty(ty),
                }))
            }
            TypeDump::ErrorNode(d) => Type::Error(self.error_node(d)),
        }
    }

    fn literal(&self, dump: &LiteralDump) -> Literal<'a> {
        match dump {
            LiteralDump::Basic {
                value_kind,
                value,
                span,
                errors,
            } => Literal::Basic(self.arena.alloc(BasicLiteral {
                base: self.base(*span, errors),
                kind: *value_kind,
                value: self.str(value),
            })),
            LiteralDump::Sequence {
                elems,
                span,
                errors,
            } => Literal::Sequence(self.arena.alloc(SequenceLiteral {
                base: self.base(*span, errors),
                elems: self.slice(elems, Self::literal),
            })),
        }
    }
}
