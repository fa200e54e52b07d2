//! Expression tokenization for operator runs.
//!
//! The fragment classifier hands this module a short run of operator
//! characters and inspects the token shape that comes back. Only the
//! shapes the classifier can act on are distinguished; everything else
//! collapses to [`TokenShape::Other`].

use crate::lexis::operator::{is_binary, is_unary};

/// Shape of a tokenized operator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenShape {
    /// A `:`-prefixed operator atom, payload without the colon.
    Atom(String),
    /// A lone `.` token.
    Dot,
    /// A `.` token followed by one operator token.
    DotOperator(String),
    /// A single operator token.
    Operator(String),
    /// Anything else, including empty input and the range/ellipsis
    /// tokens `..` and `...`, which are not operator-shaped.
    Other,
}

/// Tokenizes a forward run of operator characters.
pub fn tokenize_operator(input: &str) -> TokenShape {
    match input {
        "" => return TokenShape::Other,
        "." => return TokenShape::Dot,
        ".." | "..." => return TokenShape::Other,
        _ => {}
    }

    if is_operator_token(input) {
        return TokenShape::Operator(input.to_string());
    }

    if let Some(name) = input.strip_prefix(':') {
        if is_atom_symbol(name) {
            return TokenShape::Atom(name.to_string());
        }
        return TokenShape::Other;
    }

    if let Some(op) = input.strip_prefix('.') {
        if is_operator_token(op) {
            return TokenShape::DotOperator(op.to_string());
        }
    }

    TokenShape::Other
}

/// Returns `true` when `symbol` lexes as one operator token.
///
/// `->` and `=>` are tokens of their own even though the categorizer
/// recognizes neither as unary or binary.
fn is_operator_token(symbol: &str) -> bool {
    is_unary(symbol) || is_binary(symbol) || matches!(symbol, "->" | "=>")
}

/// Returns `true` when `symbol` may follow `:` in an unquoted atom.
fn is_atom_symbol(symbol: &str) -> bool {
    is_operator_token(symbol) || matches!(symbol, "." | ".." | "..." | "<<" | ">>" | "<<>>" | "%")
}
