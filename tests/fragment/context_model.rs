use vesper::fragment::{CursorContext, InsideDot, classify};

#[test]
fn contexts_serialize_and_deserialize_losslessly() {
    let context = CursorContext::DotCall(
        InsideDot::Dot(
            Box::new(InsideDot::Alias("Foo.Bar".to_string())),
            "config".to_string(),
        ),
        "fetch".to_string(),
    );

    let encoded = serde_json::to_string(&context).expect("context should serialize");
    let decoded: CursorContext =
        serde_json::from_str(&encoded).expect("context should deserialize");
    assert_eq!(decoded, context);
}

#[test]
fn classified_contexts_round_trip_through_json() {
    for input in ["Hello.wor", ":foo", "@attr.field", "%Foo.Bar", "x when "] {
        let context = classify(input);
        let encoded = serde_json::to_string(&context).expect("context should serialize");
        let decoded: CursorContext =
            serde_json::from_str(&encoded).expect("context should deserialize");
        assert_eq!(decoded, context, "round trip diverged for {input:?}");
    }
}

#[test]
fn contexts_are_cloneable_value_types() {
    let context = classify("a.b.c");
    let copy = context.clone();
    assert_eq!(copy, context);
}
