//! Character class tables and scanning helpers.
//!
//! All classification walks the final line reversed, so the head of
//! every slice here is the character closest to the cursor.

/// Characters that may form operator runs.
pub(crate) const OPERATORS: &[char] = &[
    '\\', '<', '>', '+', '-', '*', '/', ':', '=', '|', '&', '~', '^', '%', '.', '!',
];

/// Punctuation after which a new expression starts.
pub(crate) const STARTERS: &[char] = &[',', '(', '[', '{', ';'];

/// Punctuation after which no expression starts.
pub(crate) const NON_STARTERS: &[char] = &[')', ']', '}', '"', '\''];

/// Horizontal whitespace.
pub(crate) const SPACES: &[char] = &['\t', ' '];

/// Characters that may only trail an identifier.
pub(crate) const TRAILING_IDENTIFIER: &[char] = &['?', '!'];

/// Returns `true` for operator-run characters.
pub(crate) fn is_operator(ch: char) -> bool {
    OPERATORS.contains(&ch)
}

/// Returns `true` for expression-starting punctuation.
pub(crate) fn is_starter(ch: char) -> bool {
    STARTERS.contains(&ch)
}

/// Returns `true` for horizontal whitespace.
pub(crate) fn is_space(ch: char) -> bool {
    SPACES.contains(&ch)
}

/// Returns `true` for any character that cannot continue an identifier.
pub(crate) fn is_non_ident(ch: char) -> bool {
    TRAILING_IDENTIFIER.contains(&ch)
        || OPERATORS.contains(&ch)
        || STARTERS.contains(&ch)
        || NON_STARTERS.contains(&ch)
        || SPACES.contains(&ch)
}

/// Consumes horizontal whitespace at the head of the reversed line.
///
/// Returns the remaining slice and the number of stripped characters; a
/// positive count is the call-without-parens signal.
pub(crate) fn strip_spaces(reversed: &[char]) -> (&[char], usize) {
    let mut len = 0;
    while len < reversed.len() && is_space(reversed[len]) {
        len += 1;
    }
    (&reversed[len..], len)
}
