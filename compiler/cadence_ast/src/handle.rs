//! Non-owning handles into the node arena.
//!
//! Every parent-to-child field in the tree is a handle: a 4-byte index into
//! [`Ast`](crate::Ast) storage. Handles never own the node they denote, and
//! two handles are equal exactly when they name the same arena slot. Deep
//! structural equality of the nodes behind them is never consulted.
//!
//! A *required* child is stored as a typed handle ([`ExprId`], [`StmtId`],
//! ...). An *optional* child is stored as `Option` of one; `None` is the
//! distinguished empty state and is never dereferenced by the traversal
//! engines.
//!
//! The handle's type also names the dispatch category used to visit it, so
//! a field typed [`ExprId`] is always dispatched through the expression table.

use std::fmt;
use std::hash::Hash;

use crate::taxonomy::Category;

/// Raw index of a node in the arena, independent of category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A typed handle whose type fixes the dispatch category of its target.
pub trait Handle: Copy + Eq + Hash + fmt::Debug {
    /// Dispatch table consulted when this handle is visited.
    const CATEGORY: Category;

    /// Wrap a raw node index.
    ///
    /// Nothing checks that the node actually belongs to `CATEGORY`; a
    /// mismatch surfaces as an internal compiler error when the handle is
    /// dispatched.
    fn from_node(node: NodeId) -> Self;

    /// The arena slot this handle denotes.
    fn node(self) -> NodeId;
}

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident => $category:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(NodeId);

        impl $name {
            #[inline]
            pub const fn node(self) -> NodeId {
                self.0
            }
        }

        impl Handle for $name {
            const CATEGORY: Category = Category::$category;

            #[inline]
            fn from_node(node: NodeId) -> Self {
                $name(node)
            }

            #[inline]
            fn node(self) -> NodeId {
                self.0
            }
        }

        impl From<$name> for NodeId {
            #[inline]
            fn from(handle: $name) -> NodeId {
                handle.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0.raw())
            }
        }
    };
}

define_handle! {
    /// Handle to a processor, graph or namespace.
    ModuleId => Module
}

define_handle! {
    /// Handle to an expression node.
    ExprId => Expression
}

define_handle! {
    /// Handle to a statement node.
    StmtId => Statement
}

define_handle! {
    /// Handle to a free-standing declaration (function, struct, endpoint, ...).
    ObjectId => Object
}

#[cfg(test)]
mod tests;
