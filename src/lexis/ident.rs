//! Identifier tokenization for fragment classification.
//!
//! A pared-down port of the language's identifier tokenizer: it only
//! answers whether an entire character sequence forms one identifier,
//! which is the single case the fragment classifier consults.

/// Identifier category reported by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentKind {
    /// Lowercase-led name usable as a variable or local call.
    Identifier,
    /// Capitalized namespace segment.
    Alias,
    /// Identifier-shaped word only valid as atom content, such as a
    /// node name containing `@`.
    Atom,
}

/// A fully-consumed identifier token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentToken {
    /// Identifier category.
    pub kind: IdentKind,
    /// `true` when every character is ASCII.
    pub ascii_only: bool,
    /// `true` when the identifier contains `@`.
    pub had_at: bool,
}

/// Tokenizes `input` as a single whole identifier.
///
/// Returns `None` when the input is empty, starts with a character that
/// cannot head an identifier, or contains a character that cannot
/// continue one. Trailing `?`/`!` are not identifier characters at this
/// stage; they attach later in the pipeline, so their presence here is a
/// rejection.
pub fn tokenize(input: &str) -> Option<IdentToken> {
    let mut chars = input.chars();
    let head = chars.next()?;

    let alias_head = if head.is_uppercase() {
        true
    } else if head == '_' || head.is_lowercase() {
        false
    } else {
        return None;
    };

    let mut had_at = false;
    for ch in chars {
        if ch == '@' {
            had_at = true;
        } else if !ch.is_alphanumeric() && ch != '_' {
            return None;
        }
    }

    let kind = match (alias_head, had_at) {
        (true, _) => IdentKind::Alias,
        (false, true) => IdentKind::Atom,
        (false, false) => IdentKind::Identifier,
    };

    Some(IdentToken {
        kind,
        ascii_only: input.is_ascii(),
        had_at,
    })
}
