//! Internal compiler errors raised by the arena and the traversal engines.
//!
//! Nothing here describes a problem with the program being compiled. Every
//! variant means the tree or the dispatch tables are inconsistent, so callers
//! propagate these verbatim and stop the current compilation.

use thiserror::Error;

use crate::handle::NodeId;
use crate::taxonomy::{Category, Tag};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InternalError {
    /// A handle of `category` points at a node whose tag is not in that
    /// category's dispatch table.
    #[error("internal compiler error: unknown AST {category}: {node:?} is tagged `{found}`")]
    UnknownNode {
        category: Category,
        node: NodeId,
        found: Tag,
    },

    /// A node was narrowed to the wrong concrete variant.
    #[error("internal compiler error: expected `{expected}` at {node:?}, found `{found}`")]
    VariantMismatch {
        node: NodeId,
        expected: Tag,
        found: Tag,
    },

    #[error("internal compiler error: {node:?} is outside the arena ({len} nodes)")]
    DanglingHandle { node: NodeId, len: usize },

    /// Iterative rewriting was still replacing nodes after its round limit.
    #[error("internal compiler error: rewriting did not reach a fixed point after {rounds} rounds")]
    NoFixedPoint { rounds: usize },
}

impl InternalError {
    /// The node the error is about, if there is one.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            InternalError::UnknownNode { node, .. }
            | InternalError::VariantMismatch { node, .. }
            | InternalError::DanglingHandle { node, .. } => Some(*node),
            InternalError::NoFixedPoint { .. } => None,
        }
    }
}

/// Build and log the error for a node that reached the wrong dispatch table.
#[cold]
pub(crate) fn unknown_node(category: Category, node: NodeId, found: Tag) -> InternalError {
    tracing::error!(%category, ?node, %found, "unknown AST node reached dispatch");
    InternalError::UnknownNode {
        category,
        node,
        found,
    }
}
