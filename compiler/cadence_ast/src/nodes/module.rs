//! Module-level nodes.

use crate::handle::{ExprId, ModuleId, ObjectId};

/// A self-contained processing unit.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Processor {
    pub name: String,
    /// `EndpointDeclaration` objects.
    pub endpoints: Vec<ObjectId>,
    /// `StructDeclaration` objects.
    pub structures: Vec<ObjectId>,
    /// `UsingDeclaration` objects.
    pub usings: Vec<ObjectId>,
    /// `VariableDeclaration` expressions.
    pub state_variables: Vec<ExprId>,
    /// `Function` objects.
    pub functions: Vec<ObjectId>,
}

/// A graph composing processor instances through connections.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    pub name: String,
    pub endpoints: Vec<ObjectId>,
    /// `ProcessorInstance` objects.
    pub instances: Vec<ObjectId>,
    /// `ProcessorAliasDeclaration` objects.
    pub aliases: Vec<ObjectId>,
    /// `Connection` objects.
    pub connections: Vec<ObjectId>,
    /// Constant `VariableDeclaration` expressions.
    pub constants: Vec<ExprId>,
}

/// A scoping container for declarations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace {
    pub name: String,
    pub sub_modules: Vec<ModuleId>,
    pub structures: Vec<ObjectId>,
    pub usings: Vec<ObjectId>,
    pub constants: Vec<ExprId>,
    pub functions: Vec<ObjectId>,
}
