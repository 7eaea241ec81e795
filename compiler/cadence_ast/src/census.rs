//! Node census: how many reachable nodes of each variant a tree holds.
//!
//! Used by debug dumps and by tests that check a pass left the expected
//! shape behind. Built on the read-only engine, so links are not followed
//! and each reachable node is counted once per parent slot that holds it.

use rustc_hash::FxHashMap;

use crate::arena::Ast;
use crate::error::InternalError;
use crate::handle::{ExprId, ModuleId, NodeId, ObjectId, StmtId};
use crate::live::IterationPolicy;
use crate::taxonomy::Tag;
use crate::visitor::{self, VisitResult, Visitor};

#[derive(Default)]
struct Census {
    counts: FxHashMap<Tag, usize>,
}

impl Census {
    fn record(&mut self, ast: &Ast, node: impl Into<NodeId>) -> VisitResult {
        *self.counts.entry(ast.tag(node)?).or_default() += 1;
        Ok(())
    }
}

impl Visitor for Census {
    fn iteration_policy(&self) -> IterationPolicy {
        IterationPolicy::Snapshot
    }

    fn visit_module(&mut self, ast: &mut Ast, id: ModuleId) -> VisitResult {
        self.record(ast, id)?;
        visitor::dispatch_module(self, ast, id)
    }

    fn visit_expr(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        self.record(ast, id)?;
        visitor::dispatch_expr(self, ast, id)
    }

    fn visit_stmt(&mut self, ast: &mut Ast, id: StmtId) -> VisitResult {
        self.record(ast, id)?;
        visitor::dispatch_stmt(self, ast, id)
    }

    fn visit_object(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        self.record(ast, id)?;
        visitor::dispatch_object(self, ast, id)
    }
}

/// Count the nodes reachable from `root`, by tag.
///
/// Tags with no reachable node are absent from the map.
pub fn census(ast: &mut Ast, root: ModuleId) -> Result<FxHashMap<Tag, usize>, InternalError> {
    let mut census = Census::default();
    visitor::traverse(&mut census, ast, root)?;
    Ok(census.counts)
}
