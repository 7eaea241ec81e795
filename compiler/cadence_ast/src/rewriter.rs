//! Rewriting AST traversal.
//!
//! A [`Rewriter`] method receives a node handle and returns the handle that
//! should take its place. Returning the same handle keeps the node; returning
//! a different one (usually a node the rewriter has just allocated) replaces
//! it. The default for every variant rewrites the node's children first, in
//! the same order the read-only [`crate::visitor`] visits them, then returns
//! the node unchanged.
//!
//! Each child slot is read immediately before its child is rewritten and is
//! overwritten only when the returned handle differs from what was read.
//! Every overwrite bumps [`Rewriter::items_replaced`]. Sequences are walked
//! by live position (see [`crate::live::replace_each`]).
//!
//! Rewriting never copies a node. A pass that wants to change a node's
//! fields in place can do that through [`Ast::get_mut`] and keep returning
//! the original handle; only slot overwrites are counted.

use crate::arena::Ast;
use crate::error::{unknown_node, InternalError};
use crate::handle::{ExprId, ModuleId, NodeId, ObjectId, StmtId};
use crate::live;
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

pub type RewriteResult<H> = Result<H, InternalError>;

// Rewriter Trait

/// AST rewriter. Implementors only need to provide the replacement counter.
pub trait Rewriter {
    /// Number of child slots this rewriter has overwritten so far.
    fn items_replaced(&mut self) -> &mut usize;

    // Category entry points

    fn rewrite_module(&mut self, ast: &mut Ast, id: ModuleId) -> RewriteResult<ModuleId> {
        dispatch_module(self, ast, id)
    }

    fn rewrite_expr(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        dispatch_expr(self, ast, id)
    }

    fn rewrite_stmt(&mut self, ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
        dispatch_stmt(self, ast, id)
    }

    fn rewrite_object(&mut self, ast: &mut Ast, id: ObjectId) -> RewriteResult<ObjectId> {
        dispatch_object(self, ast, id)
    }

    // Modules

    fn rewrite_processor(&mut self, ast: &mut Ast, id: ModuleId) -> RewriteResult<ModuleId> {
        walk_processor(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_graph(&mut self, ast: &mut Ast, id: ModuleId) -> RewriteResult<ModuleId> {
        walk_graph(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_namespace(&mut self, ast: &mut Ast, id: ModuleId) -> RewriteResult<ModuleId> {
        walk_namespace(self, ast, id)?;
        Ok(id)
    }

    // Expressions

    fn rewrite_constant(&mut self, _ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        Ok(id)
    }

    fn rewrite_binary_operator(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_binary_operator(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_unary_operator(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_unary_operator(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_ternary_op(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_ternary_op(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_assignment(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_assignment(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_variable_ref(&mut self, _ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        Ok(id)
    }

    fn rewrite_variable_declaration(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_variable_declaration(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_call_or_cast(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_call_or_cast(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_function_call(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_function_call(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_type_cast(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_type_cast(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_array_element_ref(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_array_element_ref(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_struct_member_ref(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_struct_member_ref(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_pre_or_post_inc_or_dec(
        &mut self,
        ast: &mut Ast,
        id: ExprId,
    ) -> RewriteResult<ExprId> {
        walk_pre_or_post_inc_or_dec(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_subscript_with_brackets(
        &mut self,
        ast: &mut Ast,
        id: ExprId,
    ) -> RewriteResult<ExprId> {
        walk_subscript_with_brackets(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_subscript_with_chevrons(
        &mut self,
        ast: &mut Ast,
        id: ExprId,
    ) -> RewriteResult<ExprId> {
        walk_subscript_with_chevrons(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_qualified_identifier(&mut self, _ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        Ok(id)
    }

    fn rewrite_dot_operator(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_dot_operator(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_type_meta_function(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_type_meta_function(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_comma_separated_list(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_comma_separated_list(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_concrete_type(&mut self, _ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        Ok(id)
    }

    fn rewrite_input_endpoint_ref(&mut self, _ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        Ok(id)
    }

    fn rewrite_output_endpoint_ref(&mut self, _ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        Ok(id)
    }

    fn rewrite_processor_ref(&mut self, _ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        Ok(id)
    }

    fn rewrite_write_to_endpoint(&mut self, ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        walk_write_to_endpoint(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_processor_property(&mut self, _ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        Ok(id)
    }

    fn rewrite_advance_clock(&mut self, _ast: &mut Ast, id: ExprId) -> RewriteResult<ExprId> {
        Ok(id)
    }

    // Statements

    fn rewrite_block(&mut self, ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
        walk_block(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_expression_statement(&mut self, ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
        walk_expression_statement(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_if(&mut self, ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
        walk_if(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_loop(&mut self, ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
        walk_loop(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_return(&mut self, ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
        walk_return(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_break(&mut self, _ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
        Ok(id)
    }

    fn rewrite_continue(&mut self, _ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
        Ok(id)
    }

    fn rewrite_noop(&mut self, _ast: &mut Ast, id: StmtId) -> RewriteResult<StmtId> {
        Ok(id)
    }

    // Objects

    fn rewrite_function(&mut self, ast: &mut Ast, id: ObjectId) -> RewriteResult<ObjectId> {
        walk_function(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_struct_declaration(&mut self, ast: &mut Ast, id: ObjectId) -> RewriteResult<ObjectId> {
        walk_struct_declaration(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_using_declaration(&mut self, ast: &mut Ast, id: ObjectId) -> RewriteResult<ObjectId> {
        walk_using_declaration(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_endpoint_declaration(
        &mut self,
        ast: &mut Ast,
        id: ObjectId,
    ) -> RewriteResult<ObjectId> {
        walk_endpoint_declaration(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_connection(&mut self, ast: &mut Ast, id: ObjectId) -> RewriteResult<ObjectId> {
        walk_connection(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_processor_instance(&mut self, ast: &mut Ast, id: ObjectId) -> RewriteResult<ObjectId> {
        walk_processor_instance(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_processor_alias(&mut self, _ast: &mut Ast, id: ObjectId) -> RewriteResult<ObjectId> {
        Ok(id)
    }

    fn rewrite_static_assertion(&mut self, ast: &mut Ast, id: ObjectId) -> RewriteResult<ObjectId> {
        walk_static_assertion(self, ast, id)?;
        Ok(id)
    }

    fn rewrite_annotation(&mut self, ast: &mut Ast, id: ObjectId) -> RewriteResult<ObjectId> {
        walk_annotation(self, ast, id)?;
        Ok(id)
    }
}

/// Rewrite a whole tree from its module root.
///
/// Returns the (possibly replaced) root and the number of slots this call
/// overwrote. A replaced root is not counted; it has no parent slot.
#[tracing::instrument(level = "debug", skip_all, fields(root = ?root))]
pub fn rewrite<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    root: ModuleId,
) -> RewriteResult<(ModuleId, usize)> {
    let before = *rewriter.items_replaced();
    let new_root = rewriter.rewrite_module(ast, root)?;
    let replaced = rewriter.items_replaced().saturating_sub(before);
    tracing::debug!(replaced, root_replaced = new_root != root, "rewrite finished");
    Ok((new_root, replaced))
}

/// Outcome of [`rewrite_to_fixed_point`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FixedPoint {
    pub root: ModuleId,
    /// Rounds run, including the final round that changed nothing.
    pub rounds: usize,
    pub total_replacements: usize,
}

/// Run fresh rewriters over the tree until a round changes nothing.
///
/// `make_pass` is called once per round. A round changes nothing when it
/// overwrites no slot and keeps the root. Gives up with
/// [`InternalError::NoFixedPoint`] after `max_rounds` rounds that all
/// changed something. A limit of 0 runs no round and fails immediately.
#[tracing::instrument(level = "debug", skip_all, fields(root = ?root, max_rounds))]
pub fn rewrite_to_fixed_point<R: Rewriter>(
    ast: &mut Ast,
    root: ModuleId,
    max_rounds: usize,
    mut make_pass: impl FnMut() -> R,
) -> RewriteResult<FixedPoint> {
    let mut root = root;
    let mut total_replacements = 0;
    for round in 1..=max_rounds {
        let mut pass = make_pass();
        let (new_root, replaced) = rewrite(&mut pass, ast, root)?;
        total_replacements += replaced;
        let settled = replaced == 0 && new_root == root;
        root = new_root;
        if settled {
            tracing::debug!(rounds = round, total_replacements, "fixed point reached");
            return Ok(FixedPoint {
                root,
                rounds: round,
                total_replacements,
            });
        }
    }
    Err(InternalError::NoFixedPoint { rounds: max_rounds })
}

// Dispatch

pub fn dispatch_module<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ModuleId,
) -> RewriteResult<ModuleId> {
    let handler: fn(&mut R, &mut Ast, ModuleId) -> RewriteResult<ModuleId> = match ast.kind(id)? {
        NodeKind::Module(kind) => match kind {
            ModuleKind::Processor(_) => R::rewrite_processor,
            ModuleKind::Graph(_) => R::rewrite_graph,
            ModuleKind::Namespace(_) => R::rewrite_namespace,
        },
        other => return Err(unknown_node(Category::Module, id.node(), other.tag())),
    };
    ensure_sufficient_stack(|| handler(rewriter, ast, id))
}

pub fn dispatch_expr<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<ExprId> {
    let handler: fn(&mut R, &mut Ast, ExprId) -> RewriteResult<ExprId> = match ast.kind(id)? {
        NodeKind::Expression(kind) => match kind {
            ExprKind::Constant(_) => R::rewrite_constant,
            ExprKind::BinaryOperator(_) => R::rewrite_binary_operator,
            ExprKind::UnaryOperator(_) => R::rewrite_unary_operator,
            ExprKind::TernaryOp(_) => R::rewrite_ternary_op,
            ExprKind::Assignment(_) => R::rewrite_assignment,
            ExprKind::VariableRef(_) => R::rewrite_variable_ref,
            ExprKind::VariableDeclaration(_) => R::rewrite_variable_declaration,
            ExprKind::CallOrCast(_) => R::rewrite_call_or_cast,
            ExprKind::FunctionCall(_) => R::rewrite_function_call,
            ExprKind::TypeCast(_) => R::rewrite_type_cast,
            ExprKind::ArrayElementRef(_) => R::rewrite_array_element_ref,
            ExprKind::StructMemberRef(_) => R::rewrite_struct_member_ref,
            ExprKind::PreOrPostIncOrDec(_) => R::rewrite_pre_or_post_inc_or_dec,
            ExprKind::SubscriptWithBrackets(_) => R::rewrite_subscript_with_brackets,
            ExprKind::SubscriptWithChevrons(_) => R::rewrite_subscript_with_chevrons,
            ExprKind::QualifiedIdentifier(_) => R::rewrite_qualified_identifier,
            ExprKind::DotOperator(_) => R::rewrite_dot_operator,
            ExprKind::TypeMetaFunction(_) => R::rewrite_type_meta_function,
            ExprKind::CommaSeparatedList(_) => R::rewrite_comma_separated_list,
            ExprKind::ConcreteType(_) => R::rewrite_concrete_type,
            ExprKind::InputEndpointRef(_) => R::rewrite_input_endpoint_ref,
            ExprKind::OutputEndpointRef(_) => R::rewrite_output_endpoint_ref,
            ExprKind::ProcessorRef(_) => R::rewrite_processor_ref,
            ExprKind::WriteToEndpoint(_) => R::rewrite_write_to_endpoint,
            ExprKind::ProcessorProperty(_) => R::rewrite_processor_property,
            ExprKind::AdvanceClock(_) => R::rewrite_advance_clock,
        },
        other => return Err(unknown_node(Category::Expression, id.node(), other.tag())),
    };
    ensure_sufficient_stack(|| handler(rewriter, ast, id))
}

pub fn dispatch_stmt<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: StmtId,
) -> RewriteResult<StmtId> {
    let handler: fn(&mut R, &mut Ast, StmtId) -> RewriteResult<StmtId> = match ast.kind(id)? {
        NodeKind::Statement(kind) => match kind {
            StmtKind::Block(_) => R::rewrite_block,
            StmtKind::ExpressionStatement(_) => R::rewrite_expression_statement,
            StmtKind::IfStatement(_) => R::rewrite_if,
            StmtKind::LoopStatement(_) => R::rewrite_loop,
            StmtKind::ReturnStatement(_) => R::rewrite_return,
            StmtKind::BreakStatement(_) => R::rewrite_break,
            StmtKind::ContinueStatement(_) => R::rewrite_continue,
            StmtKind::NoopStatement(_) => R::rewrite_noop,
        },
        other => return Err(unknown_node(Category::Statement, id.node(), other.tag())),
    };
    ensure_sufficient_stack(|| handler(rewriter, ast, id))
}

pub fn dispatch_object<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ObjectId,
) -> RewriteResult<ObjectId> {
    let handler: fn(&mut R, &mut Ast, ObjectId) -> RewriteResult<ObjectId> = match ast.kind(id)? {
        NodeKind::Object(kind) => match kind {
            ObjectKind::Function(_) => R::rewrite_function,
            ObjectKind::StructDeclaration(_) => R::rewrite_struct_declaration,
            ObjectKind::UsingDeclaration(_) => R::rewrite_using_declaration,
            ObjectKind::EndpointDeclaration(_) => R::rewrite_endpoint_declaration,
            ObjectKind::Connection(_) => R::rewrite_connection,
            ObjectKind::ProcessorInstance(_) => R::rewrite_processor_instance,
            ObjectKind::ProcessorAliasDeclaration(_) => R::rewrite_processor_alias,
            ObjectKind::StaticAssertion(_) => R::rewrite_static_assertion,
            ObjectKind::Annotation(_) => R::rewrite_annotation,
        },
        other => return Err(unknown_node(Category::Object, id.node(), other.tag())),
    };
    ensure_sufficient_stack(|| handler(rewriter, ast, id))
}

// Child Replacement

/// A child slot value the rewriter knows how to replace.
pub trait Rewrite: Copy + Eq {
    fn rewrite_with<R: Rewriter + ?Sized>(
        self,
        rewriter: &mut R,
        ast: &mut Ast,
    ) -> RewriteResult<Self>;
}

impl Rewrite for ModuleId {
    fn rewrite_with<R: Rewriter + ?Sized>(
        self,
        rewriter: &mut R,
        ast: &mut Ast,
    ) -> RewriteResult<Self> {
        rewriter.rewrite_module(ast, self)
    }
}

impl Rewrite for ExprId {
    fn rewrite_with<R: Rewriter + ?Sized>(
        self,
        rewriter: &mut R,
        ast: &mut Ast,
    ) -> RewriteResult<Self> {
        rewriter.rewrite_expr(ast, self)
    }
}

impl Rewrite for StmtId {
    fn rewrite_with<R: Rewriter + ?Sized>(
        self,
        rewriter: &mut R,
        ast: &mut Ast,
    ) -> RewriteResult<Self> {
        rewriter.rewrite_stmt(ast, self)
    }
}

impl Rewrite for ObjectId {
    fn rewrite_with<R: Rewriter + ?Sized>(
        self,
        rewriter: &mut R,
        ast: &mut Ast,
    ) -> RewriteResult<Self> {
        rewriter.rewrite_object(ast, self)
    }
}

/// An absent optional child stays absent.
impl<H: Rewrite> Rewrite for Option<H> {
    fn rewrite_with<R: Rewriter + ?Sized>(
        self,
        rewriter: &mut R,
        ast: &mut Ast,
    ) -> RewriteResult<Self> {
        match self {
            Some(child) => child.rewrite_with(rewriter, ast).map(Some),
            None => Ok(None),
        }
    }
}

/// Rewrite the child in one field of `owner` and store the result if it
/// changed.
fn replace_field<R, T, H>(
    rewriter: &mut R,
    ast: &mut Ast,
    owner: NodeId,
    field: fn(&mut T) -> &mut H,
) -> RewriteResult<()>
where
    R: Rewriter + ?Sized,
    T: Variant,
    H: Rewrite,
{
    let old = *field(ast.get_mut::<T>(owner)?);
    let new = old.rewrite_with(rewriter, ast)?;
    if new != old {
        *field(ast.get_mut::<T>(owner)?) = new;
        *rewriter.items_replaced() += 1;
    }
    Ok(())
}

/// Like [`replace_field`], for a slot that only exists while an enclosing
/// optional group does.
fn replace_nested<R, T, H>(
    rewriter: &mut R,
    ast: &mut Ast,
    owner: NodeId,
    slot: fn(&mut T) -> Option<&mut H>,
) -> RewriteResult<()>
where
    R: Rewriter + ?Sized,
    T: Variant,
    H: Rewrite,
{
    let Some(old) = slot(ast.get_mut::<T>(owner)?).copied() else {
        return Ok(());
    };
    let new = old.rewrite_with(rewriter, ast)?;
    if new != old {
        if let Some(dest) = slot(ast.get_mut::<T>(owner)?) {
            *dest = new;
            *rewriter.items_replaced() += 1;
        }
    }
    Ok(())
}

/// Rewrite each element of a sequence held by `owner`, by live position.
fn replace_each<R, T, H>(
    rewriter: &mut R,
    ast: &mut Ast,
    owner: NodeId,
    slot: fn(&mut T, usize) -> Option<&mut H>,
) -> RewriteResult<()>
where
    R: Rewriter + ?Sized,
    T: Variant,
    H: Rewrite,
{
    let replaced = live::replace_each(
        ast,
        |ast, index| Ok(slot(ast.get_mut::<T>(owner)?, index)),
        |ast, child: H| child.rewrite_with(rewriter, ast),
    )?;
    *rewriter.items_replaced() += replaced;
    Ok(())
}

// Walk Functions
//
// Child order matches the read-only walks in `visitor`.

pub fn walk_processor<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ModuleId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_each(rewriter, ast, id, |p: &mut Processor, i| p.endpoints.get_mut(i))?;
    replace_each(rewriter, ast, id, |p: &mut Processor, i| p.structures.get_mut(i))?;
    replace_each(rewriter, ast, id, |p: &mut Processor, i| p.usings.get_mut(i))?;
    replace_each(rewriter, ast, id, |p: &mut Processor, i| p.state_variables.get_mut(i))?;
    replace_each(rewriter, ast, id, |p: &mut Processor, i| p.functions.get_mut(i))
}

pub fn walk_graph<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ModuleId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_each(rewriter, ast, id, |g: &mut Graph, i| g.endpoints.get_mut(i))?;
    replace_each(rewriter, ast, id, |g: &mut Graph, i| g.instances.get_mut(i))?;
    replace_each(rewriter, ast, id, |g: &mut Graph, i| g.aliases.get_mut(i))?;
    replace_each(rewriter, ast, id, |g: &mut Graph, i| g.connections.get_mut(i))?;
    replace_each(rewriter, ast, id, |g: &mut Graph, i| g.constants.get_mut(i))
}

pub fn walk_namespace<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ModuleId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_each(rewriter, ast, id, |n: &mut Namespace, i| n.sub_modules.get_mut(i))?;
    replace_each(rewriter, ast, id, |n: &mut Namespace, i| n.structures.get_mut(i))?;
    replace_each(rewriter, ast, id, |n: &mut Namespace, i| n.usings.get_mut(i))?;
    replace_each(rewriter, ast, id, |n: &mut Namespace, i| n.constants.get_mut(i))?;
    replace_each(rewriter, ast, id, |n: &mut Namespace, i| n.functions.get_mut(i))
}

pub fn walk_binary_operator<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |o: &mut BinaryOperator| &mut o.lhs)?;
    replace_field(rewriter, ast, id, |o: &mut BinaryOperator| &mut o.rhs)
}

pub fn walk_unary_operator<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |o: &mut UnaryOperator| &mut o.source)
}

pub fn walk_ternary_op<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |o: &mut TernaryOp| &mut o.condition)?;
    replace_field(rewriter, ast, id, |o: &mut TernaryOp| &mut o.true_branch)?;
    replace_field(rewriter, ast, id, |o: &mut TernaryOp| &mut o.false_branch)
}

pub fn walk_assignment<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |a: &mut Assignment| &mut a.target)?;
    replace_field(rewriter, ast, id, |a: &mut Assignment| &mut a.new_value)
}

pub fn walk_variable_declaration<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |v: &mut VariableDeclaration| &mut v.declared_type)?;
    replace_field(rewriter, ast, id, |v: &mut VariableDeclaration| &mut v.initial_value)?;
    replace_field(rewriter, ast, id, |v: &mut VariableDeclaration| &mut v.annotation)
}

pub fn walk_call_or_cast<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |c: &mut CallOrCast| &mut c.arguments)?;
    replace_field(rewriter, ast, id, |c: &mut CallOrCast| &mut c.name_or_type)
}

pub fn walk_function_call<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |c: &mut FunctionCall| &mut c.arguments)
}

pub fn walk_type_cast<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |c: &mut TypeCast| &mut c.source)
}

pub fn walk_array_element_ref<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |s: &mut ArrayElementRef| &mut s.object)?;
    replace_field(rewriter, ast, id, |s: &mut ArrayElementRef| &mut s.start_index)?;
    replace_field(rewriter, ast, id, |s: &mut ArrayElementRef| &mut s.end_index)
}

pub fn walk_struct_member_ref<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |s: &mut StructMemberRef| &mut s.object)
}

pub fn walk_pre_or_post_inc_or_dec<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |p: &mut PreOrPostIncOrDec| &mut p.target)
}

pub fn walk_subscript_with_brackets<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |s: &mut SubscriptWithBrackets| &mut s.lhs)?;
    replace_field(rewriter, ast, id, |s: &mut SubscriptWithBrackets| &mut s.rhs)
}

pub fn walk_subscript_with_chevrons<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |s: &mut SubscriptWithChevrons| &mut s.lhs)?;
    replace_field(rewriter, ast, id, |s: &mut SubscriptWithChevrons| &mut s.rhs)
}

pub fn walk_dot_operator<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |o: &mut DotOperator| &mut o.lhs)
}

pub fn walk_type_meta_function<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |m: &mut TypeMetaFunction| &mut m.source)
}

pub fn walk_comma_separated_list<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    replace_each(rewriter, ast, id.node(), |l: &mut CommaSeparatedList, i| l.items.get_mut(i))
}

pub fn walk_write_to_endpoint<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ExprId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |w: &mut WriteToEndpoint| &mut w.target)?;
    replace_field(rewriter, ast, id, |w: &mut WriteToEndpoint| &mut w.value)
}

pub fn walk_block<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: StmtId,
) -> RewriteResult<()> {
    replace_each(rewriter, ast, id.node(), |b: &mut Block, i| b.statements.get_mut(i))
}

pub fn walk_expression_statement<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: StmtId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |s: &mut ExpressionStatement| &mut s.expression)
}

pub fn walk_if<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: StmtId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |s: &mut IfStatement| &mut s.condition)?;
    replace_field(rewriter, ast, id, |s: &mut IfStatement| &mut s.true_branch)?;
    replace_field(rewriter, ast, id, |s: &mut IfStatement| &mut s.false_branch)
}

pub fn walk_loop<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: StmtId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |l: &mut LoopStatement| &mut l.iterator)?;
    replace_field(rewriter, ast, id, |l: &mut LoopStatement| &mut l.body)?;
    replace_field(rewriter, ast, id, |l: &mut LoopStatement| &mut l.condition)?;
    replace_field(rewriter, ast, id, |l: &mut LoopStatement| &mut l.num_iterations)
}

pub fn walk_return<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: StmtId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |r: &mut ReturnStatement| &mut r.value)
}

pub fn walk_function<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ObjectId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |f: &mut Function| &mut f.return_type)?;
    replace_each(rewriter, ast, id, |f: &mut Function, i| f.parameters.get_mut(i))?;
    replace_field(rewriter, ast, id, |f: &mut Function| &mut f.block)
}

pub fn walk_struct_declaration<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ObjectId,
) -> RewriteResult<()> {
    replace_each(rewriter, ast, id.node(), |s: &mut StructDeclaration, i| {
        s.members.get_mut(i).map(|m| &mut m.ty)
    })
}

pub fn walk_using_declaration<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ObjectId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |u: &mut UsingDeclaration| &mut u.target_type)
}

pub fn walk_endpoint_declaration<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ObjectId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_each(rewriter, ast, id, |e: &mut EndpointDeclaration, i| {
        e.details.as_mut()?.sample_types.get_mut(i)
    })?;
    replace_nested(rewriter, ast, id, |e: &mut EndpointDeclaration| {
        e.details.as_mut().map(|d| &mut d.array_size)
    })?;
    replace_each(rewriter, ast, id, |e: &mut EndpointDeclaration, i| {
        e.child_path.as_mut()?.sections.get_mut(i).map(|s| &mut s.index)
    })?;
    replace_field(rewriter, ast, id, |e: &mut EndpointDeclaration| &mut e.annotation)
}

pub fn walk_connection<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ObjectId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |c: &mut Connection| &mut c.delay_length)
}

pub fn walk_processor_instance<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ObjectId,
) -> RewriteResult<()> {
    let id = id.node();
    replace_field(rewriter, ast, id, |p: &mut ProcessorInstance| &mut p.target_processor)?;
    replace_each(rewriter, ast, id, |p: &mut ProcessorInstance, i| {
        p.specialisation_args.get_mut(i)
    })?;
    replace_field(rewriter, ast, id, |p: &mut ProcessorInstance| &mut p.clock_multiplier)?;
    replace_field(rewriter, ast, id, |p: &mut ProcessorInstance| &mut p.clock_divider)
}

pub fn walk_static_assertion<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ObjectId,
) -> RewriteResult<()> {
    replace_field(rewriter, ast, id.node(), |a: &mut StaticAssertion| &mut a.condition)
}

pub fn walk_annotation<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    ast: &mut Ast,
    id: ObjectId,
) -> RewriteResult<()> {
    replace_each(rewriter, ast, id.node(), |a: &mut Annotation, i| {
        a.properties.get_mut(i).map(|p| &mut p.value)
    })
}

#[cfg(test)]
mod tests;
