use std::collections::HashSet;

use super::*;

#[test]
fn test_node_id_index() {
    let id = NodeId::new(42);
    assert_eq!(id.index(), 42);
    assert_eq!(id.raw(), 42);
}

#[test]
fn test_handle_category() {
    assert_eq!(ModuleId::CATEGORY, Category::Module);
    assert_eq!(ExprId::CATEGORY, Category::Expression);
    assert_eq!(StmtId::CATEGORY, Category::Statement);
    assert_eq!(ObjectId::CATEGORY, Category::Object);
}

#[test]
fn test_handle_identity_is_slot() {
    let a = ExprId::from_node(NodeId::new(3));
    let b = ExprId::from_node(NodeId::new(3));
    let c = ExprId::from_node(NodeId::new(4));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(NodeId::from(a), NodeId::new(3));
}

#[test]
fn test_handle_hash() {
    let mut set = HashSet::new();
    set.insert(StmtId::from_node(NodeId::new(1)));
    set.insert(StmtId::from_node(NodeId::new(1))); // duplicate
    set.insert(StmtId::from_node(NodeId::new(2)));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_handle_debug() {
    assert_eq!(format!("{:?}", ExprId::from_node(NodeId::new(3))), "ExprId(3)");
    assert_eq!(format!("{:?}", ObjectId::from_node(NodeId::new(0))), "ObjectId(0)");
    assert_eq!(format!("{:?}", NodeId::new(9)), "NodeId(9)");
}

#[test]
fn test_retyping_keeps_slot() {
    // Retyping a handle changes only which dispatch table it is sent to.
    let stmt = StmtId::from_node(NodeId::new(5));
    let expr = ExprId::from_node(stmt.node());
    assert_eq!(expr.node(), stmt.node());
}
