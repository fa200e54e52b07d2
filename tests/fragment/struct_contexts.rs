use vesper::fragment::{CursorContext, classify};

fn structure(name: &str) -> CursorContext {
    CursorContext::Struct(name.to_string())
}

#[test]
fn percent_alone_opens_a_struct() {
    assert_eq!(classify("%"), structure(""));
}

#[test]
fn percent_after_separators_opens_a_struct() {
    assert_eq!(classify("foo %"), structure(""));
    assert_eq!(classify("f(%"), structure(""));
    assert_eq!(classify("[%"), structure(""));
}

#[test]
fn alias_after_percent_names_the_struct() {
    assert_eq!(classify("%Foo"), structure("Foo"));
    assert_eq!(classify("%Foo.Bar"), structure("Foo.Bar"));
    assert_eq!(classify("%Foo.Bar.Baz"), structure("Foo.Bar.Baz"));
}

#[test]
fn opened_braces_start_a_new_expression() {
    assert_eq!(classify("%Foo{"), CursorContext::Expr);
}

#[test]
fn struct_names_never_take_call_forms() {
    assert_eq!(classify("%Foo("), CursorContext::None);
    assert_eq!(classify("%Foo "), CursorContext::None);
    assert_eq!(classify("%Foo/"), CursorContext::None);
}

#[test]
fn lowercase_after_percent_is_not_a_struct_name() {
    assert_eq!(classify("%foo"), CursorContext::LocalOrVar("foo".to_string()));
}

#[test]
fn non_ascii_struct_names_have_no_completion() {
    assert_eq!(classify("%Fóo"), CursorContext::None);
}

#[test]
fn percent_glued_to_a_word_is_not_a_struct() {
    assert_eq!(classify("a%"), CursorContext::None);
}
