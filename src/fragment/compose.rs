//! Context composers for dots, nested aliases, arity, and calls.
//!
//! Each composer reclassifies the characters left of a triggering `.`,
//! `/`, `(`, or separating space, then wraps or re-tags the result.
//! Left-associative dot chains fall out of the recursion.

use crate::fragment::context::{CursorContext, InsideDot};
use crate::fragment::{identifier, scan};

/// Composes a member-reference context from the receiver left of a dot.
pub(crate) fn dot(reversed: &[char], acc: String) -> CursorContext {
    let (reversed, _spaces) = scan::strip_spaces(reversed);
    match receiver(reversed) {
        Some(inside) => CursorContext::Dot(inside, acc),
        None => CursorContext::None,
    }
}

/// Reclassifies the left-hand side of a dot as a receiver.
fn receiver(reversed: &[char]) -> Option<InsideDot> {
    match identifier::identifier_to_context(reversed, true) {
        CursorContext::LocalOrVar(name) => Some(InsideDot::Var(name)),
        CursorContext::Alias(name) => Some(InsideDot::Alias(name)),
        CursorContext::ModuleAttribute(name) => Some(InsideDot::ModuleAttribute(name)),
        CursorContext::UnquotedAtom(name) => Some(InsideDot::UnquotedAtom(name)),
        CursorContext::Dot(inside, name) => Some(InsideDot::Dot(Box::new(inside), name)),
        _ => None,
    }
}

/// Extends a namespace path with the segment right of its last dot.
pub(crate) fn nested_alias(reversed: &[char], acc: String) -> CursorContext {
    let (reversed, _spaces) = scan::strip_spaces(reversed);
    match identifier::identifier_to_context(reversed, true) {
        CursorContext::Alias(prev) => CursorContext::Alias(format!("{prev}.{acc}")),
        CursorContext::Struct(prev) => CursorContext::Struct(format!("{prev}.{acc}")),
        _ => CursorContext::None,
    }
}

/// Re-tags a classification as an arity reference, `name/`.
pub(crate) fn arity(reversed: &[char]) -> CursorContext {
    match identifier::identifier_to_context(reversed, true) {
        CursorContext::LocalOrVar(name) => CursorContext::LocalArity(name),
        CursorContext::Operator(op) => CursorContext::OperatorArity(op),
        CursorContext::Dot(inside, name) => CursorContext::DotArity(inside, name),
        _ => CursorContext::None,
    }
}

/// Re-tags a classification as a call, before `(` or separating space.
pub(crate) fn call(reversed: &[char]) -> CursorContext {
    match identifier::identifier_to_context(reversed, true) {
        CursorContext::LocalOrVar(name) => CursorContext::LocalCall(name),
        CursorContext::Operator(op) => CursorContext::OperatorCall(op),
        CursorContext::Dot(inside, name) => CursorContext::DotCall(inside, name),
        _ => CursorContext::None,
    }
}
