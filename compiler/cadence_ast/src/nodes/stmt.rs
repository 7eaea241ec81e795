//! Statement nodes.

use crate::handle::{ExprId, StmtId};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub statements: Vec<StmtId>,
}

/// An expression in statement position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpressionStatement {
    pub expression: ExprId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStatement {
    pub condition: ExprId,
    pub true_branch: StmtId,
    pub false_branch: Option<StmtId>,
    pub is_const: bool,
}

/// `for`, `while`, `loop` and `loop (n)` all lower to this node.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopStatement {
    pub iterator: Option<StmtId>,
    pub body: Option<StmtId>,
    pub condition: Option<ExprId>,
    pub num_iterations: Option<ExprId>,
    pub is_do_loop: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnStatement {
    pub value: Option<ExprId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakStatement;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinueStatement;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct NoopStatement;
