//! Arena storage for the AST.
//!
//! All nodes of a compilation unit live in one contiguous `Vec<Node>`; parent
//! nodes refer to children through the typed handles of [`crate::handle`].
//! The arena owns every node for the lifetime of the unit. Passes that
//! fabricate replacement nodes allocate them here and hand back the new
//! handle; nothing is ever freed individually.

use crate::error::InternalError;
use crate::handle::{ExprId, Handle, ModuleId, NodeId, ObjectId, StmtId};
use crate::span::Span;
use crate::taxonomy::{ExprKind, ModuleKind, NodeKind, ObjectKind, StmtKind, Tag, Variant};

/// One arena slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub fn new(kind: impl Into<NodeKind>, span: Span) -> Self {
        Node {
            kind: kind.into(),
            span,
        }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.kind.tag()
    }
}

/// Owner of all nodes for one compilation unit.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 node per 20 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        Ast {
            nodes: Vec::with_capacity(source_len / 20),
        }
    }

    /// Allocate a node of any category, returning its raw index.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let Ok(index) = u32::try_from(self.nodes.len()) else {
            panic!("AST arena exceeded u32::MAX nodes");
        };
        self.nodes.push(node);
        NodeId::new(index)
    }

    pub fn alloc_module(&mut self, kind: impl Into<ModuleKind>, span: Span) -> ModuleId {
        let kind = NodeKind::Module(kind.into());
        ModuleId::from_node(self.alloc(Node::new(kind, span)))
    }

    pub fn alloc_expr(&mut self, kind: impl Into<ExprKind>, span: Span) -> ExprId {
        let kind = NodeKind::Expression(kind.into());
        ExprId::from_node(self.alloc(Node::new(kind, span)))
    }

    pub fn alloc_stmt(&mut self, kind: impl Into<StmtKind>, span: Span) -> StmtId {
        let kind = NodeKind::Statement(kind.into());
        StmtId::from_node(self.alloc(Node::new(kind, span)))
    }

    pub fn alloc_object(&mut self, kind: impl Into<ObjectKind>, span: Span) -> ObjectId {
        let kind = NodeKind::Object(kind.into());
        ObjectId::from_node(self.alloc(Node::new(kind, span)))
    }

    /// Get the node behind a handle.
    pub fn node(&self, id: impl Into<NodeId>) -> Result<&Node, InternalError> {
        let id = id.into();
        self.nodes
            .get(id.index())
            .ok_or(InternalError::DanglingHandle {
                node: id,
                len: self.nodes.len(),
            })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, InternalError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index())
            .ok_or(InternalError::DanglingHandle { node: id, len })
    }

    #[inline]
    pub fn kind(&self, id: impl Into<NodeId>) -> Result<&NodeKind, InternalError> {
        Ok(&self.node(id)?.kind)
    }

    #[inline]
    pub fn tag(&self, id: impl Into<NodeId>) -> Result<Tag, InternalError> {
        Ok(self.node(id)?.tag())
    }

    #[inline]
    pub fn span(&self, id: impl Into<NodeId>) -> Result<Span, InternalError> {
        Ok(self.node(id)?.span)
    }

    /// Narrow the node behind `id` to the concrete variant `T`.
    pub fn get<T: Variant>(&self, id: impl Into<NodeId>) -> Result<&T, InternalError> {
        let id = id.into();
        let kind = self.kind(id)?;
        T::narrow(kind).ok_or(InternalError::VariantMismatch {
            node: id,
            expected: T::TAG,
            found: kind.tag(),
        })
    }

    /// Mutable form of [`Ast::get`].
    pub fn get_mut<T: Variant>(&mut self, id: impl Into<NodeId>) -> Result<&mut T, InternalError> {
        let id = id.into();
        let node = self.node_mut(id)?;
        let found = node.kind.tag();
        T::narrow_mut(&mut node.kind).ok_or(InternalError::VariantMismatch {
            node: id,
            expected: T::TAG,
            found,
        })
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests;
