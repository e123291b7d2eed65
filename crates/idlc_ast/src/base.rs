//! Metadata shared by every node and literal.

use crate::Span;

/// Shared metadata carried by every node and literal.
///
/// `errors` holds the diagnostics the parser attached to this specific node,
/// in the order they were attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base<'a> {
    /// Byte span in the IDL source.
    pub span: Span,

    /// Error records attached to this node.
    pub errors: &'a [ErrorNode<'a>],
}

impl<'a> Base<'a> {
    /// Creates base metadata without errors.
    #[inline]
    pub const fn new(span: Span) -> Self {
        Self { span, errors: &[] }
    }

    /// Creates base metadata carrying error records.
    #[inline]
    pub const fn with_errors(span: Span, errors: &'a [ErrorNode<'a>]) -> Self {
        Self { span, errors }
    }

    /// Returns true if any error record is attached.
    #[inline]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A syntactic position that failed to parse.
///
/// Error nodes appear both as tree nodes (standing in for a declaration or
/// type the parser could not make sense of) and as the error records stored
/// in [`Base::errors`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorNode<'a> {
    pub base: Base<'a>,

    /// Human-readable description of the failure.
    pub message: &'a str,
}

impl<'a> ErrorNode<'a> {
    /// Creates an error record at `span`.
    #[inline]
    pub const fn new(span: Span, message: &'a str) -> Self {
        Self {
            base: Base::new(span),
            message,
        }
    }
}
