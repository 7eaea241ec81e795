//! Free-standing declarations.

use crate::handle::{ExprId, ObjectId, StmtId};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub name: String,
    pub return_type: ExprId,
    /// `VariableDeclaration` expressions.
    pub parameters: Vec<ExprId>,
    /// `Block`; absent for external or intrinsic functions.
    pub block: Option<StmtId>,
    pub is_event_handler: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StructMember {
    pub name: String,
    pub ty: ExprId,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StructDeclaration {
    pub name: String,
    pub members: Vec<StructMember>,
}

/// `using name = type;`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct UsingDeclaration {
    pub name: String,
    pub target_type: Option<ExprId>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum EndpointDirection {
    Input,
    Output,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum EndpointKind {
    Stream,
    Value,
    Event,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct EndpointDetails {
    pub kind: EndpointKind,
    pub sample_types: Vec<ExprId>,
    pub array_size: Option<ExprId>,
}

/// One `name[index]` step of a hoisted child endpoint path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSection {
    pub name: String,
    pub index: Option<ExprId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildEndpointPath {
    pub sections: Vec<PathSection>,
}

/// An endpoint is either declared with explicit `details`, or exposes a
/// child processor's endpoint through `child_path`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct EndpointDeclaration {
    pub name: String,
    pub direction: EndpointDirection,
    pub details: Option<EndpointDetails>,
    pub child_path: Option<ChildEndpointPath>,
    /// `Annotation` object.
    pub annotation: Option<ObjectId>,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationType {
    #[default]
    None,
    Latch,
    Linear,
    Sinc,
    Fast,
    Best,
}

/// `processor.endpoint`, or a bare `endpoint` of the enclosing graph.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionEnd {
    pub processor: Option<String>,
    pub endpoint: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub source: ConnectionEnd,
    pub dest: ConnectionEnd,
    pub interpolation: InterpolationType,
    pub delay_length: Option<ExprId>,
}

/// `let name = Target (args) * multiplier / divider;` in a graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessorInstance {
    pub name: String,
    pub target_processor: ExprId,
    pub specialisation_args: Vec<ExprId>,
    pub clock_multiplier: Option<ExprId>,
    pub clock_divider: Option<ExprId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessorAliasDeclaration {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticAssertion {
    pub condition: ExprId,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationProperty {
    pub name: String,
    pub value: ExprId,
}

/// `[[ name: value, ... ]]`; property order is source order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    pub properties: Vec<AnnotationProperty>,
}
