//! The closed set of node and literal kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every kind of [`Node`](crate::Node) and [`Literal`](crate::Literal).
///
/// Interface members and mixin members share the single `Member` kind.
/// Serialized in camelCase (`"interface"`, `"sequenceType"`, ...) so kinds
/// can be named in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    // Placeholder for unparsable input
    ErrorNode,

    // Containers
    File,
    Interface,
    Mixin,
    Dictionary,

    // Declarations
    Annotation,
    Parameter,
    Implementation,
    Includes,
    Member,
    CustomOp,
    TypeName,
    Pattern,
    Callback,
    Enum,
    Typedef,

    // Type expressions
    AnyType,
    SequenceType,
    RecordType,
    ParametrizedType,
    UnionType,
    NullableType,

    // Literals
    BasicLiteral,
    SequenceLiteral,
}

impl NodeKind {
    /// All kinds, in declaration order.
    pub const ALL: [NodeKind; 24] = [
        NodeKind::ErrorNode,
        NodeKind::File,
        NodeKind::Interface,
        NodeKind::Mixin,
        NodeKind::Dictionary,
        NodeKind::Annotation,
        NodeKind::Parameter,
        NodeKind::Implementation,
        NodeKind::Includes,
        NodeKind::Member,
        NodeKind::CustomOp,
        NodeKind::TypeName,
        NodeKind::Pattern,
        NodeKind::Callback,
        NodeKind::Enum,
        NodeKind::Typedef,
        NodeKind::AnyType,
        NodeKind::SequenceType,
        NodeKind::RecordType,
        NodeKind::ParametrizedType,
        NodeKind::UnionType,
        NodeKind::NullableType,
        NodeKind::BasicLiteral,
        NodeKind::SequenceLiteral,
    ];

    /// Returns true if the kind has children and therefore a continuation
    /// gate on its visitor hook.
    #[inline]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            NodeKind::File
                | NodeKind::Interface
                | NodeKind::Mixin
                | NodeKind::Dictionary
                | NodeKind::Annotation
                | NodeKind::Parameter
                | NodeKind::Member
                | NodeKind::Callback
                | NodeKind::Enum
                | NodeKind::Typedef
                | NodeKind::SequenceType
                | NodeKind::RecordType
                | NodeKind::ParametrizedType
                | NodeKind::UnionType
                | NodeKind::NullableType
                | NodeKind::SequenceLiteral
        )
    }

    /// Returns true if the kind is a literal rather than a node.
    #[inline]
    pub const fn is_literal(&self) -> bool {
        matches!(self, NodeKind::BasicLiteral | NodeKind::SequenceLiteral)
    }

    /// Returns true if the kind is a type expression.
    #[inline]
    pub const fn is_type(&self) -> bool {
        matches!(
            self,
            NodeKind::TypeName
                | NodeKind::AnyType
                | NodeKind::SequenceType
                | NodeKind::RecordType
                | NodeKind::ParametrizedType
                | NodeKind::UnionType
                | NodeKind::NullableType
        )
    }

    /// Returns the PascalCase display name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::ErrorNode => "ErrorNode",
            NodeKind::File => "File",
            NodeKind::Interface => "Interface",
            NodeKind::Mixin => "Mixin",
            NodeKind::Dictionary => "Dictionary",
            NodeKind::Annotation => "Annotation",
            NodeKind::Parameter => "Parameter",
            NodeKind::Implementation => "Implementation",
            NodeKind::Includes => "Includes",
            NodeKind::Member => "Member",
            NodeKind::CustomOp => "CustomOp",
            NodeKind::TypeName => "TypeName",
            NodeKind::Pattern => "Pattern",
            NodeKind::Callback => "Callback",
            NodeKind::Enum => "Enum",
            NodeKind::Typedef => "Typedef",
            NodeKind::AnyType => "AnyType",
            NodeKind::SequenceType => "SequenceType",
            NodeKind::RecordType => "RecordType",
            NodeKind::ParametrizedType => "ParametrizedType",
            NodeKind::UnionType => "UnionType",
            NodeKind::NullableType => "NullableType",
            NodeKind::BasicLiteral => "BasicLiteral",
            NodeKind::SequenceLiteral => "SequenceLiteral",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for NodeKind {
    type Err = UnknownKind;

    /// Parses a kind name case-insensitively, so both the display form
    /// (`SequenceType`) and the serde form (`sequenceType`) are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
