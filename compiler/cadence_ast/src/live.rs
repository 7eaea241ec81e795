//! Iteration over handle sequences that may change while being visited.
//!
//! A handler is free to insert or remove siblings in the sequence its node
//! is being visited from (a pass hoisting a declaration out of an expression
//! inserts a statement into the enclosing block, for instance). Both helpers
//! here therefore never hold a borrow of the sequence across a visit: the
//! element at each position is re-read through the accessor immediately
//! before it is visited.
//!
//! # Live positional semantics
//!
//! Positions advance by one after each visit and the loop stops at the first
//! position past the *current* end of the sequence. Consequently:
//!
//! - elements inserted after the current position are visited when their
//!   position comes up;
//! - elements inserted at or before the current position shift the element
//!   just visited forward, so it is visited again at the next position;
//! - removing elements at or before the current position shifts later
//!   elements back, so the element that moves into the current position is
//!   skipped. Under [`replace_each`] it is also overwritten if the rewrite
//!   of the current element returned a different handle, and so drops out
//!   of the sequence.
//!
//! When a single visit both removes `r` elements before the current position
//! and inserts `n` elements after it, the next position visited holds
//! whatever element sits at `index + 1` of the sequence as it is *after* the
//! visit: the net shift is `-r` for everything that was after the current
//! element, and the inserted elements follow that shift. No attempt is made to
//! reconcile this with the original element order.
//!
//! [`IterationPolicy::Snapshot`] is the alternative for read-only passes that
//! want each element present at the start visited exactly once.

use crate::arena::Ast;
use crate::error::InternalError;

/// How a read-only traversal walks a sequence of children.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum IterationPolicy {
    /// Re-read the length before every step; see the module docs.
    #[default]
    Live,
    /// Copy the handles before visiting the first one and visit exactly those.
    Snapshot,
}

/// Visit every element of an arena-held sequence.
///
/// `at(ast, i)` returns the element currently at position `i`, or `None`
/// past the end.
pub fn for_each<H: Copy>(
    ast: &mut Ast,
    policy: IterationPolicy,
    at: impl Fn(&Ast, usize) -> Result<Option<H>, InternalError>,
    mut visit: impl FnMut(&mut Ast, H) -> Result<(), InternalError>,
) -> Result<(), InternalError> {
    match policy {
        IterationPolicy::Live => {
            let mut index = 0;
            while let Some(item) = at(ast, index)? {
                visit(ast, item)?;
                index += 1;
            }
        }
        IterationPolicy::Snapshot => {
            let mut items = Vec::new();
            while let Some(item) = at(ast, items.len())? {
                items.push(item);
            }
            for item in items {
                visit(ast, item)?;
            }
        }
    }
    Ok(())
}

/// Rewrite every element of an arena-held sequence in place, by live position.
///
/// `slot(ast, i)` borrows position `i`, or returns `None` past the end. The
/// value `rewrite` returns for the element read at position `i` is stored
/// back at position `i` only if it differs from what was read. If the
/// sequence has shrunk below `i + 1` by then, the result is dropped.
///
/// The write-back is positional. If `rewrite` removed an element before `i`
/// and returns a different handle, the store at `i` overwrites the element
/// that shifted into `i`; that element leaves the sequence without being
/// rewritten. A `rewrite` that returns its input stores nothing, so the
/// shifted element survives and is skipped as in [`for_each`].
///
/// Returns the number of positions actually overwritten.
pub fn replace_each<H: Copy + Eq>(
    ast: &mut Ast,
    slot: impl Fn(&mut Ast, usize) -> Result<Option<&mut H>, InternalError>,
    mut rewrite: impl FnMut(&mut Ast, H) -> Result<H, InternalError>,
) -> Result<usize, InternalError> {
    let mut index = 0;
    let mut replaced = 0;
    loop {
        let Some(old) = slot(ast, index)?.copied() else {
            break;
        };
        let new = rewrite(ast, old)?;
        if new != old {
            if let Some(dest) = slot(ast, index)? {
                *dest = new;
                replaced += 1;
            } else {
                tracing::debug!(index, "sequence shrank below rewritten position; result dropped");
            }
        }
        index += 1;
    }
    Ok(replaced)
}

#[cfg(test)]
mod tests;
