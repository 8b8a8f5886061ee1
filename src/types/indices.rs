//! Strongly-typed index newtypes.
//!
//! These types prevent mixing up different kinds of mesh indices
//! (cell vs vertex vs edge vs vertical level).

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Iterate over [0, n).
            pub fn iter(n: usize) -> impl ExactSizeIterator<Item = $name> {
                (0..n).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        // Allow using as array index
        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for [T] {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for Vec<T> {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }
    };
}

define_index!(
    /// Cell index in a mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use sia_rs::types::CellIndex;
    ///
    /// let cell = CellIndex::new(42);
    /// assert_eq!(cell.get(), 42);
    /// ```
    CellIndex,
    "C"
);

define_index!(
    /// Vertex index in a mesh.
    VertexIndex,
    "V"
);

define_index!(
    /// Edge index in a mesh.
    ///
    /// Velocity is stored per edge, so this is the index the kernel
    /// iterates over.
    ///
    /// ```
    /// use sia_rs::types::EdgeIndex;
    ///
    /// let edges: Vec<_> = EdgeIndex::iter(3).collect();
    /// assert_eq!(edges[2].get(), 2);
    /// ```
    EdgeIndex,
    "E"
);

define_index!(
    /// Vertical level index into the sigma levels.
    LevelIndex,
    "L"
);
