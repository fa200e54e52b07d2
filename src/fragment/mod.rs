//! Cursor-context classification for source fragments.
//!
//! Given the characters to the left of a cursor, [`classify`] reports
//! the syntactic construct the cursor sits inside so completion and
//! signature tooling can decide what to suggest. The input is usually
//! incomplete: trailing identifiers, dangling dots, unmatched opening
//! parens, half-typed operators.
//!
//! Only the final line is consulted. The line is reversed once and every
//! scanner walks away from the cursor, so the head of each slice is the
//! character the user typed last. Classification is a pure function and
//! never fails; every ambiguity collapses to [`CursorContext::None`].
//! Recursion depth is proportional to the number of dot-separated
//! segments on the line.

pub mod context;

mod compose;
mod identifier;
mod operator;
mod scan;

pub use context::{ClassifyOptions, CursorContext, InsideDot};

/// Classifies the cursor context of `fragment`.
///
/// ```rust
/// use vesper::fragment::{classify, CursorContext, InsideDot};
///
/// assert_eq!(
///     classify("Enum.ma"),
///     CursorContext::Dot(InsideDot::Alias("Enum".to_string()), "ma".to_string()),
/// );
/// ```
pub fn classify(fragment: &str) -> CursorContext {
    classify_with(fragment, &ClassifyOptions::default())
}

/// Classifies the cursor context of `fragment` with explicit options.
pub fn classify_with(fragment: &str, _options: &ClassifyOptions) -> CursorContext {
    let line = match fragment.rfind('\n') {
        Some(pos) => &fragment[pos + 1..],
        None => fragment,
    };
    let reversed: Vec<char> = line.chars().rev().collect();
    classify_reversed(&reversed)
}

/// Classifies the cursor context of a character-sequence `fragment`.
pub fn classify_chars(fragment: &[char]) -> CursorContext {
    let line = match fragment.iter().rposition(|&ch| ch == '\n') {
        Some(pos) => &fragment[pos + 1..],
        None => fragment,
    };
    let reversed: Vec<char> = line.iter().rev().copied().collect();
    classify_reversed(&reversed)
}

/// Dispatches on the first reversed characters of the final line.
///
/// Arms are ordered: multi-character operator endings before the atom
/// colon, the exact dot before the member dot, punctuation before the
/// space-separated call fallback. The `:`-exclusions keep `:<<`, `:->`,
/// and `:=>` on the atom path.
fn classify_reversed(reversed: &[char]) -> CursorContext {
    let (rest, spaces) = scan::strip_spaces(reversed);
    match rest {
        [] => CursorContext::Expr,
        ['>', '=', ..] if rest.get(2) != Some(&':') => CursorContext::Expr,
        ['>', '-', ..] if rest.get(2) != Some(&':') => CursorContext::Expr,
        ['<', '<', ..] if rest.get(2).map_or(true, |ch| *ch != '<' && *ch != ':') => {
            CursorContext::Expr
        }
        [':'] => CursorContext::UnquotedAtom(String::new()),
        [':', next, ..] if *next != ':' => CursorContext::Expr,
        ['.'] => CursorContext::None,
        ['.', tail @ ..] if tail.first().map_or(false, |ch| *ch != '.' && *ch != ':') => {
            compose::dot(tail, String::new())
        }
        ['%', tail @ ..] if struct_opens_before(tail) => CursorContext::Struct(String::new()),
        ['(', tail @ ..] => compose::call(tail),
        ['/', tail @ ..] => compose::arity(tail),
        [ch, ..] if scan::is_starter(*ch) => CursorContext::Expr,
        _ if spaces > 0 => compose::call(rest),
        _ => identifier::identifier_to_context(rest, false),
    }
}

/// Returns `true` when a `%` at the cursor opens a struct literal: at
/// the start of the line or right after whitespace or starter
/// punctuation.
fn struct_opens_before(tail: &[char]) -> bool {
    tail.first()
        .map_or(true, |ch| scan::is_space(*ch) || scan::is_starter(*ch))
}
