use pretty_assertions::assert_eq;

use super::*;
use crate::handle::Handle;
use crate::nodes::{
    BinaryOp, Constant, EndpointDetails, EndpointDirection, EndpointKind, NoopStatement, UnaryOp,
    Value,
};
use crate::span::Span;
use crate::taxonomy::Tag;

fn lit(ast: &mut Ast, value: i64) -> ExprId {
    ast.alloc_expr(
        Constant {
            value: Value::Int(value),
        },
        Span::DUMMY,
    )
}

fn int_value(ast: &Ast, id: ExprId) -> Option<i64> {
    match ast.get::<Constant>(id) {
        Ok(Constant {
            value: Value::Int(v),
        }) => Some(*v),
        _ => None,
    }
}

/// Keeps every node and counts nothing.
#[derive(Default)]
struct Identity {
    replaced: usize,
}

impl Rewriter for Identity {
    fn items_replaced(&mut self) -> &mut usize {
        &mut self.replaced
    }
}

/// Replaces every integer constant with a fresh constant one larger.
#[derive(Default)]
struct Increment {
    replaced: usize,
}

impl Rewriter for Increment {
    fn items_replaced(&mut self) -> &mut usize {
        &mut self.replaced
    }

    fn rewrite_constant(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        match int_value(ast, id) {
            Some(v) => Ok(lit(ast, v + 1)),
            None => Ok(id),
        }
    }
}

/// Folds `-x` to `x`, leaving everything else alone.
#[derive(Default)]
struct DropNegation {
    replaced: usize,
}

impl Rewriter for DropNegation {
    fn items_replaced(&mut self) -> &mut usize {
        &mut self.replaced
    }

    fn rewrite_unary_operator(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_unary_operator(self, ast, id)?;
        let op = ast.get::<UnaryOperator>(id)?;
        match op.op {
            UnaryOp::Negate => Ok(op.source),
            _ => Ok(id),
        }
    }
}

fn statement_root(ast: &mut Ast, expression: ExprId) -> (ModuleId, StmtId) {
    let stmt = ast.alloc_stmt(ExpressionStatement { expression }, Span::DUMMY);
    let body = ast.alloc_stmt(
        Block {
            statements: vec![stmt],
        },
        Span::DUMMY,
    );
    let ret = ast.alloc_expr(crate::nodes::ConcreteType::default(), Span::DUMMY);
    let function = ast.alloc_object(
        Function {
            name: "run".into(),
            return_type: ret,
            parameters: Vec::new(),
            block: Some(body),
            is_event_handler: false,
        },
        Span::DUMMY,
    );
    let root = ast.alloc_module(
        Processor {
            name: "P".into(),
            functions: vec![function],
            ..Processor::default()
        },
        Span::DUMMY,
    );
    (root, stmt)
}

/// A processor whose only function body is a block of `len` no-ops.
fn block_root(ast: &mut Ast, len: usize) -> (ModuleId, StmtId, Vec<StmtId>) {
    let statements: Vec<StmtId> = (0..len)
        .map(|_| ast.alloc_stmt(NoopStatement, Span::DUMMY))
        .collect();
    let body = ast.alloc_stmt(
        Block {
            statements: statements.clone(),
        },
        Span::DUMMY,
    );
    let ret = ast.alloc_expr(crate::nodes::ConcreteType::default(), Span::DUMMY);
    let function = ast.alloc_object(
        Function {
            name: "run".into(),
            return_type: ret,
            parameters: Vec::new(),
            block: Some(body),
            is_event_handler: false,
        },
        Span::DUMMY,
    );
    let root = ast.alloc_module(
        Processor {
            name: "P".into(),
            functions: vec![function],
            ..Processor::default()
        },
        Span::DUMMY,
    );
    (root, body, statements)
}

#[test]
fn test_identity_replaces_nothing() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let lhs = lit(&mut ast, 1);
    let rhs = lit(&mut ast, 2);
    let sum = ast.alloc_expr(
        BinaryOperator {
            op: BinaryOp::Add,
            lhs,
            rhs,
        },
        Span::DUMMY,
    );
    let (root, _) = statement_root(&mut ast, sum);

    let (new_root, replaced) = rewrite(&mut Identity::default(), &mut ast, root)?;
    assert_eq!(new_root, root);
    assert_eq!(replaced, 0);
    let op = ast.get::<BinaryOperator>(sum)?;
    assert_eq!((op.lhs, op.rhs), (lhs, rhs));
    Ok(())
}

#[test]
fn test_replaced_children_are_written_back() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let lhs = lit(&mut ast, 1);
    let rhs = lit(&mut ast, 2);
    let sum = ast.alloc_expr(
        BinaryOperator {
            op: BinaryOp::Add,
            lhs,
            rhs,
        },
        Span::DUMMY,
    );
    let (root, _) = statement_root(&mut ast, sum);

    let mut pass = Increment::default();
    let (_, replaced) = rewrite(&mut pass, &mut ast, root)?;
    assert_eq!(replaced, 2);
    assert_eq!(pass.replaced, 2);

    let op = ast.get::<BinaryOperator>(sum)?.clone();
    assert_ne!(op.lhs, lhs);
    assert_ne!(op.rhs, rhs);
    assert_eq!(int_value(&ast, op.lhs), Some(2));
    assert_eq!(int_value(&ast, op.rhs), Some(3));
    // The old nodes are still in the arena, just no longer referenced.
    assert_eq!(int_value(&ast, lhs), Some(1));
    Ok(())
}

#[test]
fn test_absent_optional_stays_absent() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let value = lit(&mut ast, 5);
    let decl = ast.alloc_expr(
        VariableDeclaration {
            name: "x".into(),
            declared_type: None,
            initial_value: Some(value),
            annotation: None,
            is_constant: true,
        },
        Span::DUMMY,
    );
    let mut pass = Increment::default();
    let same = pass.rewrite_expr(&mut ast, decl)?;
    assert_eq!(same, decl);
    assert_eq!(pass.replaced, 1);

    let decl = ast.get::<VariableDeclaration>(decl)?;
    assert_eq!(decl.declared_type, None);
    assert_eq!(decl.annotation, None);
    assert!(decl.initial_value.is_some_and(|v| v != value));
    Ok(())
}

#[test]
fn test_sequence_elements_replaced_by_position() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let items: Vec<ExprId> = (0..4).map(|v| lit(&mut ast, v)).collect();
    let list = ast.alloc_expr(
        CommaSeparatedList {
            items: items.clone(),
        },
        Span::DUMMY,
    );
    let mut pass = Increment::default();
    pass.rewrite_expr(&mut ast, list)?;
    assert_eq!(pass.replaced, 4);

    let values: Vec<Option<i64>> = ast
        .get::<CommaSeparatedList>(list)?
        .items
        .clone()
        .into_iter()
        .map(|id| int_value(&ast, id))
        .collect();
    assert_eq!(values, vec![Some(1), Some(2), Some(3), Some(4)]);
    Ok(())
}

#[test]
fn test_nested_array_size_is_rewritten() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let size = lit(&mut ast, 8);
    let endpoint = ast.alloc_object(
        EndpointDeclaration {
            name: "in".into(),
            direction: EndpointDirection::Input,
            details: Some(EndpointDetails {
                kind: EndpointKind::Value,
                sample_types: Vec::new(),
                array_size: Some(size),
            }),
            child_path: None,
            annotation: None,
        },
        Span::DUMMY,
    );
    let mut pass = Increment::default();
    pass.rewrite_object(&mut ast, endpoint)?;
    assert_eq!(pass.replaced, 1);

    let new_size = ast
        .get::<EndpointDeclaration>(endpoint)?
        .details
        .as_ref()
        .and_then(|d| d.array_size);
    assert_eq!(new_size.and_then(|id| int_value(&ast, id)), Some(9));
    Ok(())
}

#[test]
fn test_fold_replaces_through_levels() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let one = lit(&mut ast, 1);
    let inner = ast.alloc_expr(
        UnaryOperator {
            op: UnaryOp::Negate,
            source: one,
        },
        Span::DUMMY,
    );
    let outer = ast.alloc_expr(
        UnaryOperator {
            op: UnaryOp::Negate,
            source: inner,
        },
        Span::DUMMY,
    );
    let (root, stmt) = statement_root(&mut ast, outer);

    let (_, replaced) = rewrite(&mut DropNegation::default(), &mut ast, root)?;
    // `outer.source` and the statement's expression slot.
    assert_eq!(replaced, 2);
    assert_eq!(ast.get::<ExpressionStatement>(stmt)?.expression, one);
    Ok(())
}

#[test]
fn test_replaced_root_is_returned_but_not_counted() -> Result<(), InternalError> {
    struct SwapRoot {
        replacement: ModuleId,
        replaced: usize,
    }

    impl Rewriter for SwapRoot {
        fn items_replaced(&mut self) -> &mut usize {
            &mut self.replaced
        }

        fn rewrite_namespace(&mut self, _ast: &mut Ast, _id: ModuleId) -> RewriteResult<ModuleId> {
            Ok(self.replacement)
        }
    }

    let mut ast = Ast::new();
    let old = ast.alloc_module(Namespace::default(), Span::DUMMY);
    let replacement = ast.alloc_module(Processor::default(), Span::DUMMY);
    let mut pass = SwapRoot {
        replacement,
        replaced: 0,
    };
    let (new_root, replaced) = rewrite(&mut pass, &mut ast, old)?;
    assert_eq!(new_root, replacement);
    assert_eq!(replaced, 0);
    Ok(())
}

#[test]
fn test_fixed_point_after_fold() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let one = lit(&mut ast, 1);
    let neg = ast.alloc_expr(
        UnaryOperator {
            op: UnaryOp::Negate,
            source: one,
        },
        Span::DUMMY,
    );
    let (root, _) = statement_root(&mut ast, neg);

    let outcome = rewrite_to_fixed_point(&mut ast, root, 8, DropNegation::default)?;
    assert_eq!(
        outcome,
        FixedPoint {
            root,
            rounds: 2,
            total_replacements: 1,
        }
    );
    Ok(())
}

#[test]
fn test_no_fixed_point() {
    let mut ast = Ast::new();
    let value = lit(&mut ast, 0);
    let (root, _) = statement_root(&mut ast, value);
    let result = rewrite_to_fixed_point(&mut ast, root, 3, Increment::default);
    assert_eq!(result, Err(InternalError::NoFixedPoint { rounds: 3 }));
}

#[test]
fn test_foreign_node_is_internal_error() {
    let mut ast = Ast::new();
    let noop = ast.alloc_stmt(NoopStatement, Span::DUMMY);
    let wrong = ObjectId::from_node(noop.node());
    let result = Identity::default().rewrite_object(&mut ast, wrong);
    assert_eq!(
        result,
        Err(InternalError::UnknownNode {
            category: Category::Object,
            node: noop.node(),
            found: Tag::NoopStatement,
        })
    );
}

#[test]
fn test_zero_round_limit_never_converges() {
    let mut ast = Ast::new();
    let (root, _, _) = block_root(&mut ast, 1);
    let result = rewrite_to_fixed_point(&mut ast, root, 0, Identity::default);
    assert_eq!(result, Err(InternalError::NoFixedPoint { rounds: 0 }));
}

#[test]
fn test_sibling_inserted_during_rewrite_is_rewritten() -> Result<(), InternalError> {
    /// Inserts `extra` after the first statement on its first call.
    struct Inserter {
        block: StmtId,
        extra: StmtId,
        calls: usize,
        replaced: usize,
    }

    impl Rewriter for Inserter {
        fn items_replaced(&mut self) -> &mut usize {
            &mut self.replaced
        }

        fn rewrite_noop(&mut self, ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
            self.calls += 1;
            if self.calls == 1 {
                ast.get_mut::<Block>(self.block)?.statements.insert(1, self.extra);
            }
            Ok(id)
        }
    }

    let mut ast = Ast::new();
    let (root, block, items) = block_root(&mut ast, 3);
    let extra = ast.alloc_stmt(NoopStatement, Span::DUMMY);
    let mut pass = Inserter {
        block,
        extra,
        calls: 0,
        replaced: 0,
    };
    let (_, replaced) = rewrite(&mut pass, &mut ast, root)?;
    assert_eq!(pass.calls, 4);
    assert_eq!(replaced, 0);
    assert_eq!(
        ast.get::<Block>(block)?.statements,
        vec![items[0], extra, items[1], items[2]]
    );
    Ok(())
}

#[test]
fn test_write_back_after_removing_earlier_sibling_lands_on_shifted_slot(
) -> Result<(), InternalError> {
    /// On reaching `target`, removes the first statement and replaces
    /// `target` with a fresh no-op.
    struct RemoveAndReplace {
        block: StmtId,
        target: StmtId,
        fresh: Option<StmtId>,
        calls: usize,
        replaced: usize,
    }

    impl Rewriter for RemoveAndReplace {
        fn items_replaced(&mut self) -> &mut usize {
            &mut self.replaced
        }

        fn rewrite_noop(&mut self, ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
            self.calls += 1;
            if id != self.target {
                return Ok(id);
            }
            ast.get_mut::<Block>(self.block)?.statements.remove(0);
            let fresh = ast.alloc_stmt(NoopStatement, Span::DUMMY);
            self.fresh = Some(fresh);
            Ok(fresh)
        }
    }

    let mut ast = Ast::new();
    let (root, block, items) = block_root(&mut ast, 3);
    let mut pass = RemoveAndReplace {
        block,
        target: items[1],
        fresh: None,
        calls: 0,
        replaced: 0,
    };
    let (_, replaced) = rewrite(&mut pass, &mut ast, root)?;

    // After the removal `target` sits at position 0, so the store at
    // position 1 overwrites the last statement, which is never rewritten.
    assert_eq!(pass.calls, 2);
    assert_eq!(replaced, 1);
    let Some(fresh) = pass.fresh else {
        panic!("target statement was never rewritten");
    };
    assert_eq!(ast.get::<Block>(block)?.statements, vec![items[1], fresh]);
    Ok(())
}
