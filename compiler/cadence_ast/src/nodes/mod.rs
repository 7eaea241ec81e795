//! Concrete node structs, one per variant of the taxonomy.
//!
//! Fields typed with a handle (`ExprId`, `StmtId`, ...) or a `Vec`/`Option`
//! of handles are *children* and are traversed. Fields documented as links
//! name another node without owning it and are never traversed.

mod expr;
mod module;
mod object;
mod stmt;

pub use expr::{
    AdvanceClock, ArrayElementRef, Assignment, BinaryOp, BinaryOperator, CallOrCast,
    CommaSeparatedList, ConcreteType, Constant, DotOperator, FunctionCall, InputEndpointRef,
    MetaOp, OutputEndpointRef, PreOrPostIncOrDec, PrimitiveType, ProcessorProperty,
    ProcessorRef, PropertyKind, QualifiedIdentifier, StructMemberRef, SubscriptWithBrackets,
    SubscriptWithChevrons, TernaryOp, TypeCast, TypeMetaFunction, UnaryOp, UnaryOperator, Value,
    VariableDeclaration, VariableRef, WriteToEndpoint,
};
pub use module::{Graph, Namespace, Processor};
pub use object::{
    Annotation, AnnotationProperty, ChildEndpointPath, Connection, ConnectionEnd,
    EndpointDeclaration, EndpointDetails, EndpointDirection, EndpointKind, Function,
    InterpolationType, PathSection, ProcessorAliasDeclaration, ProcessorInstance,
    StaticAssertion, StructDeclaration, StructMember, UsingDeclaration,
};
pub use stmt::{
    Block, BreakStatement, ContinueStatement, ExpressionStatement, IfStatement, LoopStatement,
    NoopStatement, ReturnStatement,
};
