//! Reverse identifier scanning.
//!
//! Walks a run of identifier characters from the cursor leftwards,
//! validates the accumulated word through [`crate::lexis::ident`], and
//! maps the outcome to a cursor context. Punctuation at the head of the
//! run defers to the operator scanner instead.

use crate::fragment::context::CursorContext;
use crate::fragment::{compose, operator, scan};
use crate::lexis::ident::{self, IdentKind};
use crate::lexis::operator::TextualOperator;

/// Outcome of one reverse identifier walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IdentScan<'a> {
    /// The head of the run was punctuation; the operator scanner owns it.
    MaybeOperator,
    /// The run was a `@`-prefixed attribute name, already validated.
    ModuleAttribute(String),
    /// A validated identifier with whatever precedes it still reversed.
    Token {
        kind: IdentKind,
        ascii_only: bool,
        rest: &'a [char],
        acc: String,
    },
    /// No identifier starts at the cursor.
    NoIdentifier,
}

/// Classifies the reversed input through the identifier scanner.
///
/// `call_op` is `true` when a complete token is syntactically required,
/// directly before `(`, `/`, or separating whitespace.
pub(crate) fn identifier_to_context(reversed: &[char], call_op: bool) -> CursorContext {
    match scan_identifier(reversed) {
        IdentScan::MaybeOperator => operator::operator_to_context(reversed, call_op),
        IdentScan::ModuleAttribute(name) => CursorContext::ModuleAttribute(name),
        IdentScan::NoIdentifier => CursorContext::None,
        IdentScan::Token {
            kind,
            ascii_only,
            rest,
            acc,
        } => token_to_context(kind, ascii_only, rest, acc, call_op),
    }
}

/// Walks one identifier run off the head of the reversed input.
pub(crate) fn scan_identifier(reversed: &[char]) -> IdentScan<'_> {
    let (reversed, trailing) = match reversed {
        [ch @ ('?' | '!'), rest @ ..] => (rest, Some(*ch)),
        _ => (reversed, None),
    };

    match reversed.first() {
        Some(ch) if scan::is_operator(*ch) => return IdentScan::MaybeOperator,
        Some(ch) if scan::is_non_ident(*ch) => return IdentScan::NoIdentifier,
        None => return IdentScan::MaybeOperator,
        Some(_) => {}
    }

    let mut len = 0;
    while len < reversed.len() && !scan::is_non_ident(reversed[len]) {
        len += 1;
    }

    let mut acc: String = reversed[..len].iter().rev().collect();
    if let Some(ch) = trailing {
        acc.push(ch);
    }
    let rest = &reversed[len..];

    // A leading `@` means the run is an attribute name, validated on
    // its own without the sigil.
    if let Some(name) = acc.strip_prefix('@') {
        if name.is_empty() {
            return IdentScan::ModuleAttribute(String::new());
        }
        return match ident::tokenize(name) {
            Some(token) if matches!(token.kind, IdentKind::Identifier | IdentKind::Atom) => {
                IdentScan::ModuleAttribute(name.to_string())
            }
            _ => IdentScan::NoIdentifier,
        };
    }

    match ident::tokenize(&acc) {
        Some(token) => {
            // `@` inside a name is only atom content; outside of a
            // `:`-prefixed position there is nothing to complete.
            if token.had_at && rest.first() != Some(&':') {
                IdentScan::NoIdentifier
            } else {
                IdentScan::Token {
                    kind: token.kind,
                    ascii_only: token.ascii_only,
                    rest,
                    acc,
                }
            }
        }
        None => IdentScan::NoIdentifier,
    }
}

/// Maps a validated identifier and its left context to a cursor context.
///
/// Arms are ordered; the `::`-prefixed rows must win over the single-`:`
/// row, and the non-ASCII alias rejections over the shape rows.
fn token_to_context(
    kind: IdentKind,
    ascii_only: bool,
    rest: &[char],
    acc: String,
    call_op: bool,
) -> CursorContext {
    if acc.starts_with('?') {
        return CursorContext::None;
    }

    match (kind, rest) {
        (IdentKind::Alias, [':', ':', ..]) if !ascii_only => CursorContext::None,
        (IdentKind::Alias, [':', ':', ..]) => CursorContext::Alias(acc),
        (IdentKind::Identifier, [':', ':', ..]) => CursorContext::LocalOrVar(acc),
        (_, [':', ':', ..]) => CursorContext::None,
        (_, [':', ..]) => CursorContext::UnquotedAtom(acc),
        (IdentKind::Atom, _) => CursorContext::None,
        (IdentKind::Alias, _) if !ascii_only => CursorContext::None,
        (IdentKind::Alias, ['.', '.', ..]) => CursorContext::Alias(acc),
        (IdentKind::Identifier, ['.', '.', ..]) => CursorContext::LocalOrVar(acc),
        (IdentKind::Alias, ['.', rest @ ..]) => compose::nested_alias(rest, acc),
        (IdentKind::Identifier, ['.', rest @ ..]) => compose::dot(rest, acc),
        (IdentKind::Alias, ['%', ..]) => CursorContext::Struct(acc),
        (IdentKind::Alias, _) => CursorContext::Alias(acc),
        (IdentKind::Identifier, _) => {
            if call_op && TextualOperator::from_name(&acc).is_some() {
                CursorContext::Operator(acc)
            } else {
                CursorContext::LocalOrVar(acc)
            }
        }
    }
}
