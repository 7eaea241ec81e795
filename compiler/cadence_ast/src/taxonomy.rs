//! The closed node taxonomy and its runtime tags.
//!
//! Nodes fall into four dispatch categories. Each category has its own kind
//! enum (`ModuleKind`, `ExprKind`, `StmtKind`, `ObjectKind`) whose variants
//! wrap the concrete node structs from [`crate::nodes`]. [`NodeKind`] is the
//! sum of the four and is what the arena stores.
//!
//! Adding a variant means adding it to the `taxonomy!` invocation below, and
//! then to the dispatch `match` of its category in `visitor` and `rewriter`.
//! Those matches are exhaustive, so a forgotten dispatch entry is a build
//! error rather than a silently skipped subtree.

use std::fmt;

use crate::nodes::{
    AdvanceClock, Annotation, ArrayElementRef, Assignment, BinaryOperator, Block, BreakStatement,
    CallOrCast, CommaSeparatedList, ConcreteType, Connection, Constant, ContinueStatement,
    DotOperator, EndpointDeclaration, ExpressionStatement, Function, FunctionCall, Graph,
    IfStatement, InputEndpointRef, LoopStatement, Namespace, NoopStatement, OutputEndpointRef,
    PreOrPostIncOrDec, Processor, ProcessorAliasDeclaration, ProcessorInstance, ProcessorProperty,
    ProcessorRef, QualifiedIdentifier, ReturnStatement, StaticAssertion, StructDeclaration,
    StructMemberRef, SubscriptWithBrackets, SubscriptWithChevrons, TernaryOp, TypeCast,
    TypeMetaFunction, UnaryOperator, UsingDeclaration, VariableDeclaration, VariableRef,
    WriteToEndpoint,
};

/// Dispatch category of a node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Module,
    Expression,
    Statement,
    Object,
}

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Category::Module => "module",
            Category::Expression => "expression",
            Category::Statement => "statement",
            Category::Object => "object",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete node struct that can be narrowed out of a [`NodeKind`].
pub trait Variant: Sized + 'static {
    const TAG: Tag;

    fn narrow(kind: &NodeKind) -> Option<&Self>;

    fn narrow_mut(kind: &mut NodeKind) -> Option<&mut Self>;
}

macro_rules! taxonomy {
    ($(
        $(#[$kind_meta:meta])*
        $category:ident => $kind:ident { $($variant:ident),+ $(,)? }
    )+) => {
        $(
            $(#[$kind_meta])*
            #[derive(Clone, Debug, PartialEq)]
            #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
            pub enum $kind {
                $($variant($variant),)+
            }

            impl $kind {
                pub fn tag(&self) -> Tag {
                    match self {
                        $($kind::$variant(_) => Tag::$variant,)+
                    }
                }
            }

            $(
                impl From<$variant> for $kind {
                    fn from(node: $variant) -> Self {
                        $kind::$variant(node)
                    }
                }

                impl Variant for $variant {
                    const TAG: Tag = Tag::$variant;

                    fn narrow(kind: &NodeKind) -> Option<&Self> {
                        match kind {
                            NodeKind::$category($kind::$variant(node)) => Some(node),
                            _ => None,
                        }
                    }

                    fn narrow_mut(kind: &mut NodeKind) -> Option<&mut Self> {
                        match kind {
                            NodeKind::$category($kind::$variant(node)) => Some(node),
                            _ => None,
                        }
                    }
                }
            )+
        )+

        /// Runtime discriminator naming the exact variant of a node.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        pub enum Tag {
            $($($variant,)+)+
        }

        impl Tag {
            /// Every tag in the taxonomy, grouped by category.
            pub const ALL: &'static [Tag] = &[$($(Tag::$variant,)+)+];

            pub const fn category(self) -> Category {
                match self {
                    $($(Tag::$variant)|+ => Category::$category,)+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $($(Tag::$variant => stringify!($variant),)+)+
                }
            }
        }
    };
}

taxonomy! {
    /// Module-level nodes: the roots a parser hands over.
    Module => ModuleKind {
        Processor,
        Graph,
        Namespace,
    }

    /// Expression nodes.
    Expression => ExprKind {
        Constant,
        BinaryOperator,
        UnaryOperator,
        TernaryOp,
        Assignment,
        VariableRef,
        VariableDeclaration,
        CallOrCast,
        FunctionCall,
        TypeCast,
        ArrayElementRef,
        StructMemberRef,
        PreOrPostIncOrDec,
        SubscriptWithBrackets,
        SubscriptWithChevrons,
        QualifiedIdentifier,
        DotOperator,
        TypeMetaFunction,
        CommaSeparatedList,
        ConcreteType,
        InputEndpointRef,
        OutputEndpointRef,
        ProcessorRef,
        WriteToEndpoint,
        ProcessorProperty,
        AdvanceClock,
    }

    /// Statement nodes.
    Statement => StmtKind {
        Block,
        ExpressionStatement,
        IfStatement,
        LoopStatement,
        ReturnStatement,
        BreakStatement,
        ContinueStatement,
        NoopStatement,
    }

    /// Free-standing declarations and annotations.
    Object => ObjectKind {
        Function,
        StructDeclaration,
        UsingDeclaration,
        EndpointDeclaration,
        Connection,
        ProcessorInstance,
        ProcessorAliasDeclaration,
        StaticAssertion,
        Annotation,
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of any node, as stored in the arena.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Module(ModuleKind),
    Expression(ExprKind),
    Statement(StmtKind),
    Object(ObjectKind),
}

impl NodeKind {
    pub fn tag(&self) -> Tag {
        match self {
            NodeKind::Module(kind) => kind.tag(),
            NodeKind::Expression(kind) => kind.tag(),
            NodeKind::Statement(kind) => kind.tag(),
            NodeKind::Object(kind) => kind.tag(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            NodeKind::Module(_) => Category::Module,
            NodeKind::Expression(_) => Category::Expression,
            NodeKind::Statement(_) => Category::Statement,
            NodeKind::Object(_) => Category::Object,
        }
    }
}

impl From<ModuleKind> for NodeKind {
    fn from(kind: ModuleKind) -> Self {
        NodeKind::Module(kind)
    }
}

impl From<ExprKind> for NodeKind {
    fn from(kind: ExprKind) -> Self {
        NodeKind::Expression(kind)
    }
}

impl From<StmtKind> for NodeKind {
    fn from(kind: StmtKind) -> Self {
        NodeKind::Statement(kind)
    }
}

impl From<ObjectKind> for NodeKind {
    fn from(kind: ObjectKind) -> Self {
        NodeKind::Object(kind)
    }
}
