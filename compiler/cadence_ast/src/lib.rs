//! Cadence AST - node taxonomy and traversal engines
//!
//! This crate holds the tree every Cadence compiler pass works on:
//! - Spans for source locations
//! - Typed handles (`ModuleId`, `ExprId`, `StmtId`, `ObjectId`) into one arena
//! - The closed set of node variants, grouped into four dispatch categories
//! - A read-only [`Visitor`] and a [`Rewriter`] that can replace subtrees
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: parents hold 4-byte handles, never boxed children
//! - **Closed Taxonomy**: every category is an enum, dispatch is an exhaustive
//!   `match`, and a node reaching the wrong table is an [`InternalError`]
//! - **Mutation-Safe Walks**: sequences are re-read by position while being
//!   visited (see [`live`])
//!
//! Links (a variable reference's declaration, a call's resolved function) are
//! plain handles too, but the engines never follow them.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod census;
mod error;
mod handle;
pub mod live;
pub mod nodes;
pub mod rewriter;
mod span;
mod stack;
mod taxonomy;
pub mod visitor;

pub use arena::{Ast, Node};
pub use census::census;
pub use error::InternalError;
pub use handle::{ExprId, Handle, ModuleId, NodeId, ObjectId, StmtId};
pub use live::IterationPolicy;
pub use rewriter::{rewrite, rewrite_to_fixed_point, FixedPoint, Rewriter, RewriteResult};
pub use span::Span;
pub use taxonomy::{Category, ExprKind, ModuleKind, NodeKind, ObjectKind, StmtKind, Tag, Variant};
pub use visitor::{traverse, VisitResult, Visitor};

static_assert_size!(NodeId, 4);
static_assert_size!(ExprId, 4);
static_assert_size!(StmtId, 4);
static_assert_size!(ObjectId, 4);
static_assert_size!(ModuleId, 4);
static_assert_size!(Option<ExprId>, 8);
static_assert_size!(Span, 8);
