use super::*;
use crate::handle::{Handle, NodeId, StmtId};
use crate::nodes::{Block, NoopStatement};
use crate::span::Span;

fn block_with(ast: &mut Ast, len: usize) -> (StmtId, Vec<StmtId>) {
    let items: Vec<StmtId> = (0..len)
        .map(|_| ast.alloc_stmt(NoopStatement, Span::DUMMY))
        .collect();
    let block = ast.alloc_stmt(
        Block {
            statements: items.clone(),
        },
        Span::DUMMY,
    );
    (block, items)
}

fn at(block: StmtId) -> impl Fn(&Ast, usize) -> Result<Option<StmtId>, InternalError> {
    move |ast, index| Ok(ast.get::<Block>(block)?.statements.get(index).copied())
}

#[test]
fn test_live_visits_each_in_order() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let (block, items) = block_with(&mut ast, 3);
    let mut seen = Vec::new();
    for_each(&mut ast, IterationPolicy::Live, at(block), |_, item| {
        seen.push(item);
        Ok(())
    })?;
    assert_eq!(seen, items);
    Ok(())
}

#[test]
fn test_live_sees_appended_elements() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let (block, items) = block_with(&mut ast, 3);
    let extra = ast.alloc_stmt(NoopStatement, Span::DUMMY);
    let mut seen = Vec::new();
    for_each(&mut ast, IterationPolicy::Live, at(block), |ast, item| {
        if item == items[0] {
            ast.get_mut::<Block>(block)?.statements.push(extra);
        }
        seen.push(item);
        Ok(())
    })?;
    assert_eq!(seen, vec![items[0], items[1], items[2], extra]);
    Ok(())
}

#[test]
fn test_live_insert_before_revisits_current() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let (block, items) = block_with(&mut ast, 2);
    let hoisted = ast.alloc_stmt(NoopStatement, Span::DUMMY);
    let mut seen = Vec::new();
    for_each(&mut ast, IterationPolicy::Live, at(block), |ast, item| {
        if item == items[0] && !seen.contains(&item) {
            ast.get_mut::<Block>(block)?.statements.insert(0, hoisted);
        }
        seen.push(item);
        Ok(())
    })?;
    assert_eq!(seen, vec![items[0], items[0], items[1]]);
    Ok(())
}

#[test]
fn test_live_remove_current_skips_next() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let (block, items) = block_with(&mut ast, 3);
    let mut seen = Vec::new();
    for_each(&mut ast, IterationPolicy::Live, at(block), |ast, item| {
        if item == items[0] {
            ast.get_mut::<Block>(block)?.statements.remove(0);
        }
        seen.push(item);
        Ok(())
    })?;
    assert_eq!(seen, vec![items[0], items[2]]);
    Ok(())
}

#[test]
fn test_snapshot_ignores_insertions() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let (block, items) = block_with(&mut ast, 3);
    let extra = ast.alloc_stmt(NoopStatement, Span::DUMMY);
    let mut seen = Vec::new();
    for_each(&mut ast, IterationPolicy::Snapshot, at(block), |ast, item| {
        ast.get_mut::<Block>(block)?.statements.insert(0, extra);
        seen.push(item);
        Ok(())
    })?;
    assert_eq!(seen, items);
    assert_eq!(ast.get::<Block>(block)?.statements.len(), 6);
    Ok(())
}

#[test]
fn test_empty_sequence_visits_nothing() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let (block, _) = block_with(&mut ast, 0);
    let mut calls = 0;
    for_each(&mut ast, IterationPolicy::Live, at(block), |_, _| {
        calls += 1;
        Ok(())
    })?;
    assert_eq!(calls, 0);
    Ok(())
}

#[test]
fn test_visit_error_stops_iteration() {
    let mut ast = Ast::new();
    let (block, items) = block_with(&mut ast, 3);
    let mut calls = 0;
    let result = for_each(&mut ast, IterationPolicy::Live, at(block), |_, item| {
        calls += 1;
        if item == items[1] {
            return Err(InternalError::NoFixedPoint { rounds: 0 });
        }
        Ok(())
    });
    assert!(result.is_err());
    assert_eq!(calls, 2);
}

#[test]
fn test_replace_each_counts_changed_positions() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let (block, items) = block_with(&mut ast, 3);
    let replacement = ast.alloc_stmt(NoopStatement, Span::DUMMY);
    let replaced = replace_each(
        &mut ast,
        |ast, index| Ok(ast.get_mut::<Block>(block)?.statements.get_mut(index)),
        |_, item| Ok(if item == items[1] { replacement } else { item }),
    )?;
    assert_eq!(replaced, 1);
    assert_eq!(
        ast.get::<Block>(block)?.statements,
        vec![items[0], replacement, items[2]]
    );
    Ok(())
}

#[test]
fn test_replace_each_drops_result_when_sequence_shrank() -> Result<(), InternalError> {
    let mut ast = Ast::new();
    let (block, items) = block_with(&mut ast, 2);
    let replacement = StmtId::from_node(NodeId::new(0));
    let replaced = replace_each(
        &mut ast,
        |ast, index| Ok(ast.get_mut::<Block>(block)?.statements.get_mut(index)),
        |ast, item| {
            if item == items[1] {
                ast.get_mut::<Block>(block)?.statements.clear();
                return Ok(replacement);
            }
            Ok(item)
        },
    )?;
    assert_eq!(replaced, 0);
    assert!(ast.get::<Block>(block)?.statements.is_empty());
    Ok(())
}
