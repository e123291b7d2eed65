//! Constant values embedded in the tree.
//!
//! Literals are not nodes: they are reached only through initializers
//! (`Parameter::init`, `Member::init`) and enum values, and are walked by
//! [`walk_literal`](crate::visitor::walk_literal).

use serde::{Deserialize, Serialize};

use crate::{Base, NodeKind};

/// A reference to a literal value.
#[derive(Debug, Clone, Copy)]
pub enum Literal<'a> {
    Basic(&'a BasicLiteral<'a>),
    Sequence(&'a SequenceLiteral<'a>),
}

impl<'a> Literal<'a> {
    /// Returns the kind of this literal.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Literal::Basic(_) => NodeKind::BasicLiteral,
            Literal::Sequence(_) => NodeKind::SequenceLiteral,
        }
    }

    /// Returns the shared metadata of this literal.
    pub const fn base(&self) -> &'a Base<'a> {
        match *self {
            Literal::Basic(l) => &l.base,
            Literal::Sequence(l) => &l.base,
        }
    }
}

impl<'a> From<&'a BasicLiteral<'a>> for Literal<'a> {
    #[inline]
    fn from(literal: &'a BasicLiteral<'a>) -> Self {
        Literal::Basic(literal)
    }
}

impl<'a> From<&'a SequenceLiteral<'a>> for Literal<'a> {
    #[inline]
    fn from(literal: &'a SequenceLiteral<'a>) -> Self {
        Literal::Sequence(literal)
    }
}

/// Lexical category of a scalar literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    #[default]
    String,
    Integer,
    Float,
    Boolean,
    Null,
    /// A bare identifier, as used by enum values and attribute arguments.
    Identifier,
}

/// A scalar value, kept as written in the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicLiteral<'a> {
    pub base: Base<'a>,
    pub kind: ValueKind,
    pub value: &'a str,
}

/// A bracketed list of literals, such as `[]` or `[1, 2]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceLiteral<'a> {
    pub base: Base<'a>,
    pub elems: &'a [Literal<'a>],
}
