//! Reverse operator scanning.
//!
//! Walks a run of operator characters from the cursor leftwards and
//! validates the accumulated symbol through [`crate::lexis::expr`].
//! Partial runs that can still grow into a valid operator are reported
//! as-is unless the position demands a complete token.

use crate::fragment::compose;
use crate::fragment::context::CursorContext;
use crate::fragment::scan;
use crate::lexis::expr::{self, TokenShape};
use crate::lexis::operator::{is_binary, is_unary};

/// Runs that are not operators themselves but prefix valid ones.
pub(crate) const INCOMPLETE_OPERATORS: &[&str] = &["^^", "~~", "~"];

/// Classifies the reversed input through the operator scanner.
///
/// `call_op` is `true` when a complete operator is syntactically
/// required, directly before `(`, `/`, or separating whitespace.
pub(crate) fn operator_to_context(reversed: &[char], call_op: bool) -> CursorContext {
    let mut len = 0;
    while len < reversed.len() && scan::is_operator(reversed[len]) {
        len += 1;
    }

    let acc: String = reversed[..len].iter().rev().collect();
    let rest = &reversed[len..];

    if INCOMPLETE_OPERATORS.contains(&acc.as_str()) {
        return if call_op {
            CursorContext::None
        } else {
            CursorContext::Operator(acc)
        };
    }

    // A member reference to a half-typed operator, as in `x.~`.
    if let Some(tail) = acc.strip_prefix('.') {
        if INCOMPLETE_OPERATORS.contains(&tail) {
            return if call_op {
                CursorContext::None
            } else {
                compose::dot(rest, tail.to_string())
            };
        }
    }

    match expr::tokenize_operator(&acc) {
        TokenShape::Atom(name) => CursorContext::UnquotedAtom(name),
        TokenShape::Dot => compose::dot(rest, String::new()),
        TokenShape::DotOperator(op) if is_unary(&op) || is_binary(&op) => compose::dot(rest, op),
        TokenShape::Operator(op) if is_unary(&op) || is_binary(&op) => CursorContext::Operator(op),
        _ => CursorContext::None,
    }
}
