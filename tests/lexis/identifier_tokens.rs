use vesper::lexis::ident::{IdentKind, IdentToken, tokenize};

#[test]
fn lowercase_words_tokenize_as_identifiers() {
    assert_eq!(
        tokenize("hello_wor"),
        Some(IdentToken {
            kind: IdentKind::Identifier,
            ascii_only: true,
            had_at: false,
        }),
    );
    assert_eq!(
        tokenize("_private"),
        Some(IdentToken {
            kind: IdentKind::Identifier,
            ascii_only: true,
            had_at: false,
        }),
    );
}

#[test]
fn capitalized_words_tokenize_as_aliases() {
    assert_eq!(
        tokenize("Hello"),
        Some(IdentToken {
            kind: IdentKind::Alias,
            ascii_only: true,
            had_at: false,
        }),
    );
}

#[test]
fn at_inside_a_word_makes_it_atom_content() {
    assert_eq!(
        tokenize("node@host"),
        Some(IdentToken {
            kind: IdentKind::Atom,
            ascii_only: true,
            had_at: true,
        }),
    );
}

#[test]
fn capitalized_words_keep_their_kind_with_at() {
    assert_eq!(
        tokenize("Node@host"),
        Some(IdentToken {
            kind: IdentKind::Alias,
            ascii_only: true,
            had_at: true,
        }),
    );
}

#[test]
fn non_ascii_letters_clear_the_ascii_flag() {
    assert_eq!(
        tokenize("café"),
        Some(IdentToken {
            kind: IdentKind::Identifier,
            ascii_only: false,
            had_at: false,
        }),
    );
    assert_eq!(
        tokenize("Olá"),
        Some(IdentToken {
            kind: IdentKind::Alias,
            ascii_only: false,
            had_at: false,
        }),
    );
}

#[test]
fn invalid_heads_are_rejected() {
    assert_eq!(tokenize(""), None);
    assert_eq!(tokenize("9lives"), None);
    assert_eq!(tokenize("@attr"), None);
    assert_eq!(tokenize("?foo"), None);
}

#[test]
fn trailing_marks_are_not_identifier_characters() {
    assert_eq!(tokenize("valid?"), None);
    assert_eq!(tokenize("save!"), None);
}

#[test]
fn interior_punctuation_is_rejected() {
    assert_eq!(tokenize("foo-bar"), None);
    assert_eq!(tokenize("foo.bar"), None);
    assert_eq!(tokenize("foo bar"), None);
}
