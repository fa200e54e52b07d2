//! Cursor-context contracts for fragment classification.

use serde::{Deserialize, Serialize};

/// What the cursor is inside, as seen from the characters to its left.
///
/// Payload strings are always in source order and never carry
/// whitespace or the trailing character that triggered the variant
/// (`(`, `/`, `.`). Empty payloads are legal where the user has typed
/// the introducing character and nothing else, such as `@` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorContext {
    /// Any expression may start here.
    Expr,
    /// No sensible completion exists.
    None,
    /// Inside an unquoted atom, `:foo`.
    UnquotedAtom(String),
    /// Inside a capitalized namespace path, possibly dotted.
    Alias(String),
    /// Inside a struct literal name, `%Foo`.
    Struct(String),
    /// Inside a module attribute name, `@foo`.
    ModuleAttribute(String),
    /// Inside a lowercase identifier, variable or local call.
    LocalOrVar(String),
    /// Lowercase identifier followed by `/`.
    LocalArity(String),
    /// Lowercase identifier in call position.
    LocalCall(String),
    /// Inside a validated operator token.
    Operator(String),
    /// Operator followed by `/`.
    OperatorArity(String),
    /// Operator in call position.
    OperatorCall(String),
    /// Member reference, `inside.member`.
    Dot(InsideDot, String),
    /// Member reference followed by `/`.
    DotArity(InsideDot, String),
    /// Member reference in call position.
    DotCall(InsideDot, String),
}

/// Left-hand side of a member reference.
///
/// Chains are left-associative: `a.b.c` carries
/// `Dot(Dot(Var("a"), "b"), "c")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsideDot {
    /// A lowercase identifier receiver.
    Var(String),
    /// A namespace receiver.
    Alias(String),
    /// A module-attribute receiver.
    ModuleAttribute(String),
    /// An unquoted-atom receiver.
    UnquotedAtom(String),
    /// A nested member reference.
    Dot(Box<InsideDot>, String),
}

/// Classification options.
///
/// Currently empty; accepted and ignored so the signature can grow
/// without breaking callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ClassifyOptions {}
