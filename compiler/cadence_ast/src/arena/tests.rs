use super::*;
use crate::nodes::{BinaryOp, BinaryOperator, Block, Constant, NoopStatement, Processor, Value};

fn constant(ast: &mut Ast, value: i64) -> ExprId {
    ast.alloc_expr(
        Constant {
            value: Value::Int(value),
        },
        Span::DUMMY,
    )
}

#[test]
fn test_alloc_returns_sequential_slots() {
    let mut ast = Ast::new();
    assert!(ast.is_empty());
    let a = constant(&mut ast, 1);
    let b = constant(&mut ast, 2);
    assert_eq!(a.node().index(), 0);
    assert_eq!(b.node().index(), 1);
    assert_eq!(ast.len(), 2);
}

#[test]
fn test_with_capacity_starts_empty() {
    let ast = Ast::with_capacity(4096);
    assert!(ast.is_empty());
}

#[test]
fn test_kind_tag_span() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let noop = ast.alloc_stmt(NoopStatement, Span::new(4, 9));
    assert_eq!(ast.tag(noop)?, Tag::NoopStatement);
    assert_eq!(ast.span(noop)?, Span::new(4, 9));
    assert!(matches!(ast.kind(noop)?, NodeKind::Statement(_)));
    assert_eq!(ast.node(noop)?.tag(), Tag::NoopStatement);
    Ok(())
}

#[test]
fn test_get_narrows_to_variant() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let lhs = constant(&mut ast, 1);
    let rhs = constant(&mut ast, 2);
    let sum = ast.alloc_expr(
        BinaryOperator {
            op: BinaryOp::Add,
            lhs,
            rhs,
        },
        Span::DUMMY,
    );
    let op = ast.get::<BinaryOperator>(sum)?;
    assert_eq!(op.lhs, lhs);
    assert_eq!(op.rhs, rhs);
    Ok(())
}

#[test]
fn test_get_mut_edits_in_place() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let block = ast.alloc_stmt(Block::default(), Span::DUMMY);
    let noop = ast.alloc_stmt(NoopStatement, Span::DUMMY);
    ast.get_mut::<Block>(block)?.statements.push(noop);
    assert_eq!(ast.get::<Block>(block)?.statements, vec![noop]);
    Ok(())
}

#[test]
fn test_get_wrong_variant() {
    let mut ast = Ast::new();
    let value = constant(&mut ast, 7);
    let err = ast.get::<BinaryOperator>(value).err();
    assert_eq!(
        err,
        Some(InternalError::VariantMismatch {
            node: value.node(),
            expected: Tag::BinaryOperator,
            found: Tag::Constant,
        })
    );
}

#[test]
fn test_get_mut_wrong_category() {
    let mut ast = Ast::new();
    let root = ast.alloc_module(Processor::default(), Span::DUMMY);
    assert!(matches!(
        ast.get_mut::<Block>(root),
        Err(InternalError::VariantMismatch {
            expected: Tag::Block,
            found: Tag::Processor,
            ..
        })
    ));
}

#[test]
fn test_dangling_handle() {
    let mut ast = Ast::new();
    constant(&mut ast, 1);
    let dangling = ExprId::from_node(NodeId::new(10));
    let err = ast.node(dangling).err();
    assert_eq!(
        err,
        Some(InternalError::DanglingHandle {
            node: NodeId::new(10),
            len: 1,
        })
    );
    assert_eq!(err.and_then(|e| e.node()), Some(NodeId::new(10)));
}
