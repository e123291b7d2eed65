//! Arena allocator for syntax tree nodes.
//!
//! Uses `bumpalo` for bump allocation. A whole IDL document is allocated in
//! one arena and freed together once every walk over it has finished.

use bumpalo::Bump;

/// Arena allocator owning every node of one IDL document.
///
/// Nodes hand out `&'a` references tied to the arena, so traversal only ever
/// borrows the tree.
///
/// # Example
///
/// ```rust
/// use idlc_ast::{AstArena, Base, TypeName};
///
/// let arena = AstArena::new();
/// let name = arena.alloc_str("DOMString");
/// let node = arena.alloc(TypeName { base: Base::default(), name });
/// assert_eq!(node.name, "DOMString");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity in bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
