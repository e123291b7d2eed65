//! Walk functions for tree traversal.
//!
//! Every entry point accepts either a value or an `Option` of one; `None` is
//! a no-op. For each node the walker calls [`Visitor::visit_base`] first,
//! then the kind-specific hook, and descends into the children only when a
//! composite hook returns `true`. Child order is fixed per kind.

use crate::{Annotation, Literal, Member, MemberRole, Node, Parameter, Type};

use super::visit::Visitor;

/// Walks a node and, depending on the visitor's hooks, its subtree.
///
/// Child order per kind:
///
/// | Kind             | Children                                             |
/// |------------------|------------------------------------------------------|
/// | File             | declarations                                         |
/// | Interface        | annotations, members (interface role), custom ops, patterns |
/// | Mixin            | annotations, members (mixin role), custom ops, patterns |
/// | Dictionary       | annotations, members (interface role)                |
/// | Annotation       | parameters                                           |
/// | Parameter        | type, init, annotations                              |
/// | Member           | type, init, parameters, annotations                  |
/// | Callback         | return type, parameters                              |
/// | Enum             | annotations, values                                  |
/// | Typedef          | type, annotations                                    |
/// | SequenceType     | element type                                         |
/// | RecordType       | key type, element type                               |
/// | ParametrizedType | type arguments                                       |
/// | UnionType        | member types                                         |
/// | NullableType     | wrapped type                                         |
pub fn walk_node<'a, V>(visitor: &mut V, node: impl Into<Option<Node<'a>>>)
where
    V: Visitor<'a> + ?Sized,
{
    let Some(node) = node.into() else {
        return;
    };

    visitor.visit_base(node.base());

    match node {
        // Leaves
        Node::Error(n) => visitor.visit_error_node(n),
        Node::Implementation(n) => visitor.visit_implementation(n),
        Node::Includes(n) => visitor.visit_includes(n),
        Node::CustomOp(n) => visitor.visit_custom_op(n),
        Node::TypeName(n) => visitor.visit_type_name(n),
        Node::Pattern(n) => visitor.visit_pattern(n),
        Node::AnyType(n) => visitor.visit_any_type(n),

        // Containers
        Node::File(n) => {
            if visitor.visit_file(n) {
                for declaration in n.declarations {
                    walk_node(visitor, *declaration);
                }
            }
        }
        Node::Interface(n) => {
            if visitor.visit_interface(n) {
                walk_annotations(visitor, n.annotations);
                walk_members(visitor, n.members, MemberRole::Interface);
                for op in n.custom_ops {
                    walk_node(visitor, Node::CustomOp(op));
                }
                for pattern in n.patterns {
                    walk_node(visitor, Node::Pattern(pattern));
                }
            }
        }
        Node::Mixin(n) => {
            if visitor.visit_mixin(n) {
                walk_annotations(visitor, n.annotations);
                walk_members(visitor, n.members, MemberRole::Mixin);
                for op in n.custom_ops {
                    walk_node(visitor, Node::CustomOp(op));
                }
                for pattern in n.patterns {
                    walk_node(visitor, Node::Pattern(pattern));
                }
            }
        }
        Node::Dictionary(n) => {
            if visitor.visit_dictionary(n) {
                walk_annotations(visitor, n.annotations);
                walk_members(visitor, n.members, MemberRole::Interface);
            }
        }

        // Declarations
        Node::Annotation(n) => {
            if visitor.visit_annotation(n) {
                walk_parameters(visitor, n.parameters);
            }
        }
        Node::Parameter(n) => {
            if visitor.visit_parameter(n) {
                walk_type(visitor, n.ty);
                walk_literal(visitor, n.init);
                walk_annotations(visitor, n.annotations);
            }
        }
        Node::InterfaceMember(n) => walk_member_subtree(visitor, n, MemberRole::Interface),
        Node::MixinMember(n) => walk_member_subtree(visitor, n, MemberRole::Mixin),
        Node::Callback(n) => {
            if visitor.visit_callback(n) {
                walk_type(visitor, n.ret);
                walk_parameters(visitor, n.parameters);
            }
        }
        Node::Enum(n) => {
            if visitor.visit_enum(n) {
                walk_annotations(visitor, n.annotations);
                for value in n.values {
                    walk_literal(visitor, *value);
                }
            }
        }
        Node::Typedef(n) => {
            if visitor.visit_typedef(n) {
                walk_type(visitor, n.ty);
                walk_annotations(visitor, n.annotations);
            }
        }

        // Type expressions
        Node::SequenceType(n) => {
            if visitor.visit_sequence_type(n) {
                walk_type(visitor, n.elem);
            }
        }
        Node::RecordType(n) => {
            if visitor.visit_record_type(n) {
                walk_type(visitor, n.key);
                walk_type(visitor, n.elem);
            }
        }
        Node::ParametrizedType(n) => {
            if visitor.visit_parametrized_type(n) {
                for elem in n.elems {
                    walk_type(visitor, Some(*elem));
                }
            }
        }
        Node::UnionType(n) => {
            if visitor.visit_union_type(n) {
                for ty in n.types {
                    walk_type(visitor, Some(*ty));
                }
            }
        }
        Node::NullableType(n) => {
            if visitor.visit_nullable_type(n) {
                walk_type(visitor, n.ty);
            }
        }
    }
}

/// Walks a member reached through an interface or dictionary.
#[inline]
pub fn walk_interface_member<'a, V>(visitor: &mut V, member: impl Into<Option<&'a Member<'a>>>)
where
    V: Visitor<'a> + ?Sized,
{
    walk_node(visitor, member.into().map(Node::InterfaceMember));
}

/// Walks a member reached through a mixin.
#[inline]
pub fn walk_mixin_member<'a, V>(visitor: &mut V, member: impl Into<Option<&'a Member<'a>>>)
where
    V: Visitor<'a> + ?Sized,
{
    walk_node(visitor, member.into().map(Node::MixinMember));
}

/// Walks a literal and, depending on the visitor's hooks, its elements.
///
/// Mirrors [`walk_node`]: the base hook first, then the kind hook, then the
/// elements of a sequence literal in order if the hook returned `true`.
pub fn walk_literal<'a, V>(visitor: &mut V, literal: impl Into<Option<Literal<'a>>>)
where
    V: Visitor<'a> + ?Sized,
{
    let Some(literal) = literal.into() else {
        return;
    };

    visitor.visit_base(literal.base());

    match literal {
        Literal::Basic(l) => visitor.visit_basic_literal(l),
        Literal::Sequence(l) => {
            if visitor.visit_sequence_literal(l) {
                for elem in l.elems {
                    walk_literal(visitor, *elem);
                }
            }
        }
    }
}

fn walk_member_subtree<'a, V>(visitor: &mut V, member: &'a Member<'a>, role: MemberRole)
where
    V: Visitor<'a> + ?Sized,
{
    if visitor.visit_member(member, role) {
        walk_type(visitor, member.ty);
        walk_literal(visitor, member.init);
        walk_parameters(visitor, member.parameters);
        walk_annotations(visitor, member.annotations);
    }
}

#[inline]
fn walk_type<'a, V>(visitor: &mut V, ty: Option<Type<'a>>)
where
    V: Visitor<'a> + ?Sized,
{
    walk_node(visitor, ty.map(Node::from));
}

#[inline]
fn walk_members<'a, V>(visitor: &mut V, members: &'a [Member<'a>], role: MemberRole)
where
    V: Visitor<'a> + ?Sized,
{
    for member in members {
        match role {
            MemberRole::Interface => walk_interface_member(visitor, member),
            MemberRole::Mixin => walk_mixin_member(visitor, member),
        }
    }
}

#[inline]
fn walk_annotations<'a, V>(visitor: &mut V, annotations: &'a [Annotation<'a>])
where
    V: Visitor<'a> + ?Sized,
{
    for annotation in annotations {
        walk_node(visitor, Node::Annotation(annotation));
    }
}

#[inline]
fn walk_parameters<'a, V>(visitor: &mut V, parameters: &'a [Parameter<'a>])
where
    V: Visitor<'a> + ?Sized,
{
    for parameter in parameters {
        walk_node(visitor, Node::Parameter(parameter));
    }
}
