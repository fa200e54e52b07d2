use vesper::fragment::{ClassifyOptions, CursorContext, classify, classify_chars, classify_with};

#[test]
fn only_the_final_line_is_consulted() {
    assert_eq!(classify("foo(\nbar"), classify("bar"));
    assert_eq!(
        classify("defmodule Demo do\n  @spe"),
        CursorContext::ModuleAttribute("spe".to_string()),
    );
}

#[test]
fn trailing_newline_starts_an_expression() {
    assert_eq!(classify("\n"), CursorContext::Expr);
    assert_eq!(classify("foo\n"), CursorContext::Expr);
    assert_eq!(classify("foo\r\n"), CursorContext::Expr);
}

#[test]
fn earlier_lines_never_leak_state() {
    assert_eq!(classify("Mod.\nx"), classify("x"));
    assert_eq!(classify(":atom\n@attr"), classify("@attr"));
}

#[test]
fn whitespace_only_line_starts_an_expression() {
    assert_eq!(classify("  \t "), CursorContext::Expr);
}

#[test]
fn options_are_accepted_and_ignored() {
    let options = ClassifyOptions::default();
    assert_eq!(classify_with("Enum.ma", &options), classify("Enum.ma"));
}

#[test]
fn character_sequences_classify_like_strings() {
    let chars: Vec<char> = "prefix\nHello.wor".chars().collect();
    assert_eq!(classify_chars(&chars), classify("Hello.wor"));

    let chars: Vec<char> = "foo/".chars().collect();
    assert_eq!(classify_chars(&chars), classify("foo/"));
}
