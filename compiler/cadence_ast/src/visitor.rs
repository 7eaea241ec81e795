//! Read-only AST traversal.
//!
//! # Design
//!
//! [`Visitor`] has one method per node variant. Each default implementation
//! calls the matching `walk_*` function, which visits exactly the children
//! that variant declares, in declaration order, by re-entering dispatch at
//! the child's own category (`visit_expr`, `visit_stmt`, ...). Override a
//! `visit_*` method to act on one variant; call its `walk_*` function from
//! the override to keep descending.
//!
//! The four category entry points (`visit_module`, `visit_expr`,
//! `visit_stmt`, `visit_object`) can also be overridden to observe every node
//! of a category before it is dispatched.
//!
//! "Read-only" refers to the tree's handle slots: nothing here writes them.
//! Handlers still get `&mut Ast`, because passes built on this engine insert
//! and remove siblings while they are being visited. Sequences are walked
//! with [`live::for_each`] under the visitor's [`IterationPolicy`].
//!
//! # Example
//!
//! ```text
//! struct CountLiterals {
//!     count: usize,
//! }
//!
//! impl Visitor for CountLiterals {
//!     fn visit_constant(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
//!         self.count += 1;
//!         Ok(())
//!     }
//! }
//! ```

use crate::arena::Ast;
use crate::error::{unknown_node, InternalError};
use crate::handle::{ExprId, ModuleId, NodeId, ObjectId, StmtId};
use crate::live::{self, IterationPolicy};
use crate::nodes::{
    Annotation, ArrayElementRef, Assignment, BinaryOperator, Block, CallOrCast,
    CommaSeparatedList, Connection, DotOperator, EndpointDeclaration, ExpressionStatement,
    Function, FunctionCall, Graph, IfStatement, LoopStatement, Namespace, PreOrPostIncOrDec,
    Processor, ProcessorInstance, ReturnStatement, StaticAssertion, StructDeclaration,
    StructMemberRef, SubscriptWithBrackets, SubscriptWithChevrons, TernaryOp, TypeCast,
    TypeMetaFunction, UnaryOperator, UsingDeclaration, VariableDeclaration, WriteToEndpoint,
};
use crate::stack::ensure_sufficient_stack;
use crate::taxonomy::{Category, ExprKind, ModuleKind, NodeKind, ObjectKind, StmtKind, Variant};

pub type VisitResult = Result<(), InternalError>;

// Visitor Trait

/// Read-only AST visitor.
pub trait Visitor {
    /// How sequences of children are walked. Defaults to live positions.
    fn iteration_policy(&self) -> IterationPolicy {
        IterationPolicy::Live
    }

    // Category entry points

    fn visit_module(&mut self, ast: &mut Ast, id: ModuleId) -> VisitResult {
        dispatch_module(self, ast, id)
    }

    fn visit_expr(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        dispatch_expr(self, ast, id)
    }

    fn visit_stmt(&mut self, ast: &mut Ast, id: StmtId) -> VisitResult {
        dispatch_stmt(self, ast, id)
    }

    fn visit_object(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        dispatch_object(self, ast, id)
    }

    // Modules

    fn visit_processor(&mut self, ast: &mut Ast, id: ModuleId) -> VisitResult {
        walk_processor(self, ast, id)
    }

    fn visit_graph(&mut self, ast: &mut Ast, id: ModuleId) -> VisitResult {
        walk_graph(self, ast, id)
    }

    fn visit_namespace(&mut self, ast: &mut Ast, id: ModuleId) -> VisitResult {
        walk_namespace(self, ast, id)
    }

    // Expressions

    fn visit_constant(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
        Ok(())
    }

    fn visit_binary_operator(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_binary_operator(self, ast, id)
    }

    fn visit_unary_operator(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_unary_operator(self, ast, id)
    }

    fn visit_ternary_op(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_ternary_op(self, ast, id)
    }

    fn visit_assignment(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_assignment(self, ast, id)
    }

    /// The declaration a reference points at is a link, not a child.
    fn visit_variable_ref(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
        Ok(())
    }

    fn visit_variable_declaration(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_variable_declaration(self, ast, id)
    }

    fn visit_call_or_cast(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_call_or_cast(self, ast, id)
    }

    fn visit_function_call(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_function_call(self, ast, id)
    }

    fn visit_type_cast(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_type_cast(self, ast, id)
    }

    fn visit_array_element_ref(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_array_element_ref(self, ast, id)
    }

    fn visit_struct_member_ref(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_struct_member_ref(self, ast, id)
    }

    fn visit_pre_or_post_inc_or_dec(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_pre_or_post_inc_or_dec(self, ast, id)
    }

    fn visit_subscript_with_brackets(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_subscript_with_brackets(self, ast, id)
    }

    fn visit_subscript_with_chevrons(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_subscript_with_chevrons(self, ast, id)
    }

    fn visit_qualified_identifier(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
        Ok(())
    }

    fn visit_dot_operator(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_dot_operator(self, ast, id)
    }

    fn visit_type_meta_function(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_type_meta_function(self, ast, id)
    }

    fn visit_comma_separated_list(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_comma_separated_list(self, ast, id)
    }

    fn visit_concrete_type(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
        Ok(())
    }

    fn visit_input_endpoint_ref(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
        Ok(())
    }

    fn visit_output_endpoint_ref(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
        Ok(())
    }

    fn visit_processor_ref(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
        Ok(())
    }

    fn visit_write_to_endpoint(&mut self, ast: &mut Ast, id: ExprId) -> VisitResult {
        walk_write_to_endpoint(self, ast, id)
    }

    fn visit_processor_property(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
        Ok(())
    }

    fn visit_advance_clock(&mut self, _ast: &mut Ast, _id: ExprId) -> VisitResult {
        Ok(())
    }

    // Statements

    fn visit_block(&mut self, ast: &mut Ast, id: StmtId) -> VisitResult {
        walk_block(self, ast, id)
    }

    fn visit_expression_statement(&mut self, ast: &mut Ast, id: StmtId) -> VisitResult {
        walk_expression_statement(self, ast, id)
    }

    fn visit_if(&mut self, ast: &mut Ast, id: StmtId) -> VisitResult {
        walk_if(self, ast, id)
    }

    fn visit_loop(&mut self, ast: &mut Ast, id: StmtId) -> VisitResult {
        walk_loop(self, ast, id)
    }

    fn visit_return(&mut self, ast: &mut Ast, id: StmtId) -> VisitResult {
        walk_return(self, ast, id)
    }

    fn visit_break(&mut self, _ast: &mut Ast, _id: StmtId) -> VisitResult {
        Ok(())
    }

    fn visit_continue(&mut self, _ast: &mut Ast, _id: StmtId) -> VisitResult {
        Ok(())
    }

    fn visit_noop(&mut self, _ast: &mut Ast, _id: StmtId) -> VisitResult {
        Ok(())
    }

    // Objects

    fn visit_function(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        walk_function(self, ast, id)
    }

    fn visit_struct_declaration(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        walk_struct_declaration(self, ast, id)
    }

    fn visit_using_declaration(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        walk_using_declaration(self, ast, id)
    }

    fn visit_endpoint_declaration(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        walk_endpoint_declaration(self, ast, id)
    }

    fn visit_connection(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        walk_connection(self, ast, id)
    }

    fn visit_processor_instance(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        walk_processor_instance(self, ast, id)
    }

    fn visit_processor_alias(&mut self, _ast: &mut Ast, _id: ObjectId) -> VisitResult {
        Ok(())
    }

    fn visit_static_assertion(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        walk_static_assertion(self, ast, id)
    }

    fn visit_annotation(&mut self, ast: &mut Ast, id: ObjectId) -> VisitResult {
        walk_annotation(self, ast, id)
    }
}

/// Visit a whole tree from its module root.
#[tracing::instrument(level = "debug", skip_all, fields(root = ?root))]
pub fn traverse<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    root: ModuleId,
) -> VisitResult {
    visitor.visit_module(ast, root)
}

// Dispatch
//
// One table per category. The inner matches are exhaustive over their kind
// enum; a node from another category falls through to `unknown_node`.

pub fn dispatch_module<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ModuleId,
) -> VisitResult {
    let handler: fn(&mut V, &mut Ast, ModuleId) -> VisitResult = match ast.kind(id)? {
        NodeKind::Module(kind) => match kind {
            ModuleKind::Processor(_) => V::visit_processor,
            ModuleKind::Graph(_) => V::visit_graph,
            ModuleKind::Namespace(_) => V::visit_namespace,
        },
        other => return Err(unknown_node(Category::Module, id.node(), other.tag())),
    };
    ensure_sufficient_stack(|| handler(visitor, ast, id))
}

pub fn dispatch_expr<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let handler: fn(&mut V, &mut Ast, ExprId) -> VisitResult = match ast.kind(id)? {
        NodeKind::Expression(kind) => match kind {
            ExprKind::Constant(_) => V::visit_constant,
            ExprKind::BinaryOperator(_) => V::visit_binary_operator,
            ExprKind::UnaryOperator(_) => V::visit_unary_operator,
            ExprKind::TernaryOp(_) => V::visit_ternary_op,
            ExprKind::Assignment(_) => V::visit_assignment,
            ExprKind::VariableRef(_) => V::visit_variable_ref,
            ExprKind::VariableDeclaration(_) => V::visit_variable_declaration,
            ExprKind::CallOrCast(_) => V::visit_call_or_cast,
            ExprKind::FunctionCall(_) => V::visit_function_call,
            ExprKind::TypeCast(_) => V::visit_type_cast,
            ExprKind::ArrayElementRef(_) => V::visit_array_element_ref,
            ExprKind::StructMemberRef(_) => V::visit_struct_member_ref,
            ExprKind::PreOrPostIncOrDec(_) => V::visit_pre_or_post_inc_or_dec,
            ExprKind::SubscriptWithBrackets(_) => V::visit_subscript_with_brackets,
            ExprKind::SubscriptWithChevrons(_) => V::visit_subscript_with_chevrons,
            ExprKind::QualifiedIdentifier(_) => V::visit_qualified_identifier,
            ExprKind::DotOperator(_) => V::visit_dot_operator,
            ExprKind::TypeMetaFunction(_) => V::visit_type_meta_function,
            ExprKind::CommaSeparatedList(_) => V::visit_comma_separated_list,
            ExprKind::ConcreteType(_) => V::visit_concrete_type,
            ExprKind::InputEndpointRef(_) => V::visit_input_endpoint_ref,
            ExprKind::OutputEndpointRef(_) => V::visit_output_endpoint_ref,
            ExprKind::ProcessorRef(_) => V::visit_processor_ref,
            ExprKind::WriteToEndpoint(_) => V::visit_write_to_endpoint,
            ExprKind::ProcessorProperty(_) => V::visit_processor_property,
            ExprKind::AdvanceClock(_) => V::visit_advance_clock,
        },
        other => return Err(unknown_node(Category::Expression, id.node(), other.tag())),
    };
    ensure_sufficient_stack(|| handler(visitor, ast, id))
}

pub fn dispatch_stmt<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: StmtId,
) -> VisitResult {
    let handler: fn(&mut V, &mut Ast, StmtId) -> VisitResult = match ast.kind(id)? {
        NodeKind::Statement(kind) => match kind {
            StmtKind::Block(_) => V::visit_block,
            StmtKind::ExpressionStatement(_) => V::visit_expression_statement,
            StmtKind::IfStatement(_) => V::visit_if,
            StmtKind::LoopStatement(_) => V::visit_loop,
            StmtKind::ReturnStatement(_) => V::visit_return,
            StmtKind::BreakStatement(_) => V::visit_break,
            StmtKind::ContinueStatement(_) => V::visit_continue,
            StmtKind::NoopStatement(_) => V::visit_noop,
        },
        other => return Err(unknown_node(Category::Statement, id.node(), other.tag())),
    };
    ensure_sufficient_stack(|| handler(visitor, ast, id))
}

pub fn dispatch_object<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ObjectId,
) -> VisitResult {
    let handler: fn(&mut V, &mut Ast, ObjectId) -> VisitResult = match ast.kind(id)? {
        NodeKind::Object(kind) => match kind {
            ObjectKind::Function(_) => V::visit_function,
            ObjectKind::StructDeclaration(_) => V::visit_struct_declaration,
            ObjectKind::UsingDeclaration(_) => V::visit_using_declaration,
            ObjectKind::EndpointDeclaration(_) => V::visit_endpoint_declaration,
            ObjectKind::Connection(_) => V::visit_connection,
            ObjectKind::ProcessorInstance(_) => V::visit_processor_instance,
            ObjectKind::ProcessorAliasDeclaration(_) => V::visit_processor_alias,
            ObjectKind::StaticAssertion(_) => V::visit_static_assertion,
            ObjectKind::Annotation(_) => V::visit_annotation,
        },
        other => return Err(unknown_node(Category::Object, id.node(), other.tag())),
    };
    ensure_sufficient_stack(|| handler(visitor, ast, id))
}

// Child Access

/// A child slot value the visitor knows how to enter.
pub trait Visit: Copy {
    fn visit_with<V: Visitor + ?Sized>(self, visitor: &mut V, ast: &mut Ast) -> VisitResult;
}

impl Visit for ModuleId {
    fn visit_with<V: Visitor + ?Sized>(self, visitor: &mut V, ast: &mut Ast) -> VisitResult {
        visitor.visit_module(ast, self)
    }
}

impl Visit for ExprId {
    fn visit_with<V: Visitor + ?Sized>(self, visitor: &mut V, ast: &mut Ast) -> VisitResult {
        visitor.visit_expr(ast, self)
    }
}

impl Visit for StmtId {
    fn visit_with<V: Visitor + ?Sized>(self, visitor: &mut V, ast: &mut Ast) -> VisitResult {
        visitor.visit_stmt(ast, self)
    }
}

impl Visit for ObjectId {
    fn visit_with<V: Visitor + ?Sized>(self, visitor: &mut V, ast: &mut Ast) -> VisitResult {
        visitor.visit_object(ast, self)
    }
}

/// Absent optional children are skipped without being dereferenced.
impl<H: Visit> Visit for Option<H> {
    fn visit_with<V: Visitor + ?Sized>(self, visitor: &mut V, ast: &mut Ast) -> VisitResult {
        match self {
            Some(child) => child.visit_with(visitor, ast),
            None => Ok(()),
        }
    }
}

/// Visit the child currently stored in one field of `owner`.
///
/// The field is read at the moment it is visited, so an earlier sibling's
/// visit may have changed it.
fn visit_field<V, T, H>(
    visitor: &mut V,
    ast: &mut Ast,
    owner: NodeId,
    field: fn(&T) -> H,
) -> VisitResult
where
    V: Visitor + ?Sized,
    T: Variant,
    H: Visit,
{
    let child = field(ast.get::<T>(owner)?);
    child.visit_with(visitor, ast)
}

/// Visit each element of a sequence held by `owner`, under the visitor's
/// iteration policy.
fn visit_each<V, T, H>(
    visitor: &mut V,
    ast: &mut Ast,
    owner: NodeId,
    at: fn(&T, usize) -> Option<H>,
) -> VisitResult
where
    V: Visitor + ?Sized,
    T: Variant,
    H: Visit,
{
    let policy = visitor.iteration_policy();
    live::for_each(
        ast,
        policy,
        |ast, index| Ok(at(ast.get::<T>(owner)?, index)),
        |ast, child| child.visit_with(visitor, ast),
    )
}

// Walk Functions
//
// Each walk visits the variant's children in declaration order. Optional
// children are visited only when present.

/// Walk a processor: endpoints, structures, usings, state variables, functions.
pub fn walk_processor<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ModuleId,
) -> VisitResult {
    let id = id.node();
    visit_each(visitor, ast, id, |p: &Processor, i| p.endpoints.get(i).copied())?;
    visit_each(visitor, ast, id, |p: &Processor, i| p.structures.get(i).copied())?;
    visit_each(visitor, ast, id, |p: &Processor, i| p.usings.get(i).copied())?;
    visit_each(visitor, ast, id, |p: &Processor, i| p.state_variables.get(i).copied())?;
    visit_each(visitor, ast, id, |p: &Processor, i| p.functions.get(i).copied())
}

/// Walk a graph: endpoints, instances, aliases, connections, constants.
pub fn walk_graph<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ModuleId,
) -> VisitResult {
    let id = id.node();
    visit_each(visitor, ast, id, |g: &Graph, i| g.endpoints.get(i).copied())?;
    visit_each(visitor, ast, id, |g: &Graph, i| g.instances.get(i).copied())?;
    visit_each(visitor, ast, id, |g: &Graph, i| g.aliases.get(i).copied())?;
    visit_each(visitor, ast, id, |g: &Graph, i| g.connections.get(i).copied())?;
    visit_each(visitor, ast, id, |g: &Graph, i| g.constants.get(i).copied())
}

/// Walk a namespace: sub-modules, structures, usings, constants, functions.
pub fn walk_namespace<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ModuleId,
) -> VisitResult {
    let id = id.node();
    visit_each(visitor, ast, id, |n: &Namespace, i| n.sub_modules.get(i).copied())?;
    visit_each(visitor, ast, id, |n: &Namespace, i| n.structures.get(i).copied())?;
    visit_each(visitor, ast, id, |n: &Namespace, i| n.usings.get(i).copied())?;
    visit_each(visitor, ast, id, |n: &Namespace, i| n.constants.get(i).copied())?;
    visit_each(visitor, ast, id, |n: &Namespace, i| n.functions.get(i).copied())
}

pub fn walk_binary_operator<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |o: &BinaryOperator| o.lhs)?;
    visit_field(visitor, ast, id, |o: &BinaryOperator| o.rhs)
}

pub fn walk_unary_operator<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |o: &UnaryOperator| o.source)
}

pub fn walk_ternary_op<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |o: &TernaryOp| o.condition)?;
    visit_field(visitor, ast, id, |o: &TernaryOp| o.true_branch)?;
    visit_field(visitor, ast, id, |o: &TernaryOp| o.false_branch)
}

pub fn walk_assignment<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |a: &Assignment| a.target)?;
    visit_field(visitor, ast, id, |a: &Assignment| a.new_value)
}

/// Walk a variable declaration: declared type, initializer, annotation.
pub fn walk_variable_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |v: &VariableDeclaration| v.declared_type)?;
    visit_field(visitor, ast, id, |v: &VariableDeclaration| v.initial_value)?;
    visit_field(visitor, ast, id, |v: &VariableDeclaration| v.annotation)
}

/// Walk a call-or-cast: arguments first, then the callee name or type.
pub fn walk_call_or_cast<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |c: &CallOrCast| c.arguments)?;
    visit_field(visitor, ast, id, |c: &CallOrCast| c.name_or_type)
}

/// Walk a resolved call. The target function is a link and is not visited.
pub fn walk_function_call<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |c: &FunctionCall| c.arguments)
}

pub fn walk_type_cast<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |c: &TypeCast| c.source)
}

pub fn walk_array_element_ref<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |s: &ArrayElementRef| s.object)?;
    visit_field(visitor, ast, id, |s: &ArrayElementRef| s.start_index)?;
    visit_field(visitor, ast, id, |s: &ArrayElementRef| s.end_index)
}

pub fn walk_struct_member_ref<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |s: &StructMemberRef| s.object)
}

pub fn walk_pre_or_post_inc_or_dec<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |p: &PreOrPostIncOrDec| p.target)
}

pub fn walk_subscript_with_brackets<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |s: &SubscriptWithBrackets| s.lhs)?;
    visit_field(visitor, ast, id, |s: &SubscriptWithBrackets| s.rhs)
}

pub fn walk_subscript_with_chevrons<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |s: &SubscriptWithChevrons| s.lhs)?;
    visit_field(visitor, ast, id, |s: &SubscriptWithChevrons| s.rhs)
}

pub fn walk_dot_operator<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |o: &DotOperator| o.lhs)
}

pub fn walk_type_meta_function<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |m: &TypeMetaFunction| m.source)
}

pub fn walk_comma_separated_list<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    visit_each(visitor, ast, id.node(), |l: &CommaSeparatedList, i| l.items.get(i).copied())
}

pub fn walk_write_to_endpoint<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ExprId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |w: &WriteToEndpoint| w.target)?;
    visit_field(visitor, ast, id, |w: &WriteToEndpoint| w.value)
}

pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, ast: &mut Ast, id: StmtId) -> VisitResult {
    visit_each(visitor, ast, id.node(), |b: &Block, i| b.statements.get(i).copied())
}

pub fn walk_expression_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: StmtId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |s: &ExpressionStatement| s.expression)
}

pub fn walk_if<V: Visitor + ?Sized>(visitor: &mut V, ast: &mut Ast, id: StmtId) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |s: &IfStatement| s.condition)?;
    visit_field(visitor, ast, id, |s: &IfStatement| s.true_branch)?;
    visit_field(visitor, ast, id, |s: &IfStatement| s.false_branch)
}

/// Walk a loop: iterator, body, condition, iteration count.
pub fn walk_loop<V: Visitor + ?Sized>(visitor: &mut V, ast: &mut Ast, id: StmtId) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |l: &LoopStatement| l.iterator)?;
    visit_field(visitor, ast, id, |l: &LoopStatement| l.body)?;
    visit_field(visitor, ast, id, |l: &LoopStatement| l.condition)?;
    visit_field(visitor, ast, id, |l: &LoopStatement| l.num_iterations)
}

pub fn walk_return<V: Visitor + ?Sized>(visitor: &mut V, ast: &mut Ast, id: StmtId) -> VisitResult {
    visit_field(visitor, ast, id.node(), |r: &ReturnStatement| r.value)
}

/// Walk a function: return type, parameters, body.
pub fn walk_function<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ObjectId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |f: &Function| f.return_type)?;
    visit_each(visitor, ast, id, |f: &Function, i| f.parameters.get(i).copied())?;
    visit_field(visitor, ast, id, |f: &Function| f.block)
}

pub fn walk_struct_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ObjectId,
) -> VisitResult {
    visit_each(visitor, ast, id.node(), |s: &StructDeclaration, i| {
        s.members.get(i).map(|m| m.ty)
    })
}

pub fn walk_using_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ObjectId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |u: &UsingDeclaration| u.target_type)
}

/// Walk an endpoint: sample types, array size, child-path indexes, annotation.
pub fn walk_endpoint_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ObjectId,
) -> VisitResult {
    let id = id.node();
    visit_each(visitor, ast, id, |e: &EndpointDeclaration, i| {
        e.details.as_ref()?.sample_types.get(i).copied()
    })?;
    visit_field(visitor, ast, id, |e: &EndpointDeclaration| {
        e.details.as_ref().and_then(|d| d.array_size)
    })?;
    visit_each(visitor, ast, id, |e: &EndpointDeclaration, i| {
        e.child_path.as_ref()?.sections.get(i).map(|s| s.index)
    })?;
    visit_field(visitor, ast, id, |e: &EndpointDeclaration| e.annotation)
}

pub fn walk_connection<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ObjectId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |c: &Connection| c.delay_length)
}

/// Walk an instance: target, specialisation args, clock multiplier, clock divider.
pub fn walk_processor_instance<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ObjectId,
) -> VisitResult {
    let id = id.node();
    visit_field(visitor, ast, id, |p: &ProcessorInstance| p.target_processor)?;
    visit_each(visitor, ast, id, |p: &ProcessorInstance, i| {
        p.specialisation_args.get(i).copied()
    })?;
    visit_field(visitor, ast, id, |p: &ProcessorInstance| p.clock_multiplier)?;
    visit_field(visitor, ast, id, |p: &ProcessorInstance| p.clock_divider)
}

pub fn walk_static_assertion<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ObjectId,
) -> VisitResult {
    visit_field(visitor, ast, id.node(), |a: &StaticAssertion| a.condition)
}

pub fn walk_annotation<V: Visitor + ?Sized>(
    visitor: &mut V,
    ast: &mut Ast,
    id: ObjectId,
) -> VisitResult {
    visit_each(visitor, ast, id.node(), |a: &Annotation, i| {
        a.properties.get(i).map(|p| p.value)
    })
}
