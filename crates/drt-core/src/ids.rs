//! Dense 32-bit identifiers for topology nodes and edges.
//!
//! Ids index straight into the CSR arrays of a topology, so they are plain
//! `u32` newtypes.  Street networks with arbitrary source ids are remapped to
//! `0..node_count` on load.

use std::fmt;

macro_rules! dense_id {
    ($(#[$attr:meta])* $name:ident, $prefix:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        pub struct $name(pub u32);

        impl $name {
            /// Marks a slot that has not been assigned yet.
            pub const UNSET: $name = $name(u32::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `None` when `index` does not fit in 32 bits.
            pub fn from_index(index: usize) -> Option<Self> {
                u32::try_from(index).ok().map($name)
            }

            pub fn is_set(self) -> bool {
                self != Self::UNSET
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

dense_id!(
    /// Topology node, `0..node_count`.  Displays as `n7`.
    NodeId, "n"
);

dense_id!(
    /// Undirected topology edge in enumeration order.  Displays as `e7`.
    EdgeId, "e"
);
