//! Expression nodes.
//!
//! Variable declarations are expressions so they can appear both in
//! statement position (wrapped in an `ExpressionStatement`) and as function
//! parameters or module state.

use crate::handle::{ExprId, ModuleId, ObjectId};

/// Literal value carried by a [`Constant`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// Built-in types named directly in source.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    #[default]
    Void,
    Bool,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LeftShift,
    RightShift,
    LogicalAnd,
    LogicalOr,
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Negate,
    LogicalNot,
    BitwiseNot,
}

/// Type introspection operators (`T.size`, `x.elementType`, ...).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaOp {
    Type,
    Size,
    ElementType,
    PrimitiveType,
    IsStruct,
    IsArray,
    IsFloat,
    IsInt,
    MakeConst,
    RemoveReference,
}

/// Read-only properties of the enclosing processor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKind {
    Period,
    Frequency,
    Id,
    Session,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant {
    pub value: Value,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryOperator {
    pub op: BinaryOp,
    pub lhs: ExprId,
    pub rhs: ExprId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryOperator {
    pub op: UnaryOp,
    pub source: ExprId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TernaryOp {
    pub condition: ExprId,
    pub true_branch: ExprId,
    pub false_branch: ExprId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub target: ExprId,
    pub new_value: ExprId,
}

/// Use of a declared variable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableRef {
    /// Link to the `VariableDeclaration`; not a child.
    pub variable: ExprId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableDeclaration {
    pub name: String,
    pub declared_type: Option<ExprId>,
    pub initial_value: Option<ExprId>,
    /// `Annotation` object.
    pub annotation: Option<ObjectId>,
    pub is_constant: bool,
}

/// `name (args)` before name resolution decides between a call and a cast.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CallOrCast {
    pub name_or_type: ExprId,
    /// `CommaSeparatedList` expression.
    pub arguments: Option<ExprId>,
    pub is_method_call: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall {
    /// Link to the resolved `Function`; not a child.
    pub function: ObjectId,
    /// `CommaSeparatedList` expression.
    pub arguments: Option<ExprId>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCast {
    pub target_type: PrimitiveType,
    pub source: ExprId,
}

/// `object[start]` or the slice `object[start:end]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayElementRef {
    pub object: ExprId,
    pub start_index: ExprId,
    pub end_index: Option<ExprId>,
    pub is_slice: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StructMemberRef {
    pub object: ExprId,
    pub member: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct PreOrPostIncOrDec {
    pub target: ExprId,
    pub is_increment: bool,
    pub is_post: bool,
}

/// Unresolved `lhs[rhs]`; `lhs[]` leaves `rhs` empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptWithBrackets {
    pub lhs: ExprId,
    pub rhs: Option<ExprId>,
}

/// Unresolved `lhs<rhs>`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptWithChevrons {
    pub lhs: ExprId,
    pub rhs: ExprId,
}

/// `a::b::c`, still unresolved.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedIdentifier {
    pub path: Vec<String>,
}

/// `lhs.rhs` before it is known to be a member access or a path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct DotOperator {
    pub lhs: ExprId,
    pub rhs: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeMetaFunction {
    pub op: MetaOp,
    pub source: ExprId,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CommaSeparatedList {
    pub items: Vec<ExprId>,
}

/// A bare type used as an expression.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcreteType {
    pub ty: PrimitiveType,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct InputEndpointRef {
    /// Link to the `EndpointDeclaration`; not a child.
    pub input: ObjectId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputEndpointRef {
    /// Link to the `EndpointDeclaration`; not a child.
    pub output: ObjectId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessorRef {
    /// Link to the referenced processor or graph; not a child.
    pub processor: ModuleId,
}

/// `target << value`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteToEndpoint {
    pub target: ExprId,
    pub value: ExprId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessorProperty {
    pub property: PropertyKind,
}

/// `advance()`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceClock;
