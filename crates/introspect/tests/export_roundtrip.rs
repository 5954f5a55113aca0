use introspect::exporter::DEFAULT_MAX_DEPTH;
use introspect::{compare_json, flatten_document, serialize, ExportError, IntrospectionResult, Node};
use serde_json::{json, Value};

/// A struct with a nested struct, a vector, a pointer and an optional,
/// followed by a second top-level variable.
fn sample_result() -> IntrospectionResult {
    IntrospectionResult::new(vec![
        Node::new("foo", ["Foo"], ["ns::Foo", "Foo"], 64, 8),
        Node::new("inner", ["Foo", "Inner"], ["Inner"], 16, 0),
        Node::new("x", ["Foo", "Inner", "int"], ["int"], 4, 4),
        Node::new("y", ["Foo", "Inner", "int"], ["int"], 4, 4),
        Node::new("vec", ["Foo", "std::vector<int>"], ["std::vector<int>"], 24, 24)
            .with_container_stats(3, 8),
        Node::new("[]", ["Foo", "std::vector<int>", "int"], ["int"], 4, 4),
        Node::new("ptr", ["Foo", "int*"], ["int*"], 8, 8).with_pointer(0x7ffd_1234_5678),
        Node::new("opt", ["Foo", "std::optional<int>"], ["std::optional<int>"], 8, 8)
            .with_is_set(false),
        Node::new("bar", ["Bar"], ["Bar"], 1, 1),
    ])
}

/// A single parent-to-child chain `depth` levels deep.
fn chain(depth: usize) -> IntrospectionResult {
    let nodes = (1..=depth)
        .map(|d| {
            let path: Vec<String> = (1..=d).map(|i| format!("T{}", i)).collect();
            Node::new(format!("n{}", d), path, [format!("T{}", d)], 8, 8)
        })
        .collect();
    IntrospectionResult::new(nodes)
}

/// Pre-order walk recording (name, nesting depth).
fn walk(group: &Value, depth: usize, out: &mut Vec<(String, usize)>) {
    for obj in group.as_array().unwrap() {
        out.push((obj["name"].as_str().unwrap().to_string(), depth));
        walk(&obj["members"], depth + 1, out);
    }
}

#[test]
fn test_depth_and_order_match_input() {
    let result = sample_result();
    for pretty in [false, true] {
        let json = serialize(&result, pretty).unwrap();
        let doc: Value = serde_json::from_str(&json).unwrap();

        let mut seen = Vec::new();
        walk(&doc, 1, &mut seen);

        let expected: Vec<(String, usize)> =
            result.iter().map(|n| (n.name.clone(), n.depth())).collect();
        assert_eq!(seen, expected);
    }
}

#[test]
fn test_round_trip_reproduces_sequence() {
    let result = sample_result();
    for pretty in [false, true] {
        let json = serialize(&result, pretty).unwrap();
        let flattened = flatten_document(&json).unwrap();
        assert_eq!(flattened, result);
    }
}

#[test]
fn test_pretty_and_compact_are_same_document() {
    let result = sample_result();
    let compact: Value = serde_json::from_str(&serialize(&result, false).unwrap()).unwrap();
    let pretty: Value = serde_json::from_str(&serialize(&result, true).unwrap()).unwrap();
    assert_eq!(compact, pretty);
}

#[test]
fn test_compact_has_no_whitespace() {
    let json = serialize(&sample_result(), false).unwrap();
    assert!(!json.contains('\n'));
    assert!(!json.contains(": "));
    assert!(!json.contains(", "));
}

#[test]
fn test_pretty_indent_depends_on_depth_only() {
    let json = serialize(&sample_result(), true).unwrap();
    let name_indent = |name: &str| {
        let needle = format!("\"name\": \"{}\"", name);
        let line = json.lines().find(|l| l.contains(&needle)).unwrap();
        line.len() - line.trim_start().len()
    };

    assert_eq!(name_indent("foo"), 2);
    assert_eq!(name_indent("bar"), 2);
    assert_eq!(name_indent("inner"), 6);
    assert_eq!(name_indent("vec"), 6);
    assert_eq!(name_indent("opt"), 6);
    assert_eq!(name_indent("x"), 10);
    assert_eq!(name_indent("y"), 10);
}

#[test]
fn test_expected_fragment_matches_output() {
    let json = serialize(&sample_result(), true).unwrap();
    let actual: Value = serde_json::from_str(&json).unwrap();

    let expected = json!([
        {
            "name": "foo",
            "typeName": "Foo",
            "staticSize": 64,
            "dynamicSize": 0,
            "members": [
                { "name": "inner", "members": [{ "name": "x" }, { "name": "y" }] },
                { "name": "vec", "length": 3, "capacity": 8, "NOT": "pointer" },
                { "name": "ptr", "pointer": 0x7ffd_1234_5678u64 },
                { "name": "opt", "is_set": false, "NOT": { "exclusiveSize": 0 } }
            ]
        },
        { "name": "bar", "members": [] }
    ]);
    let mismatches = compare_json(&expected, &actual);
    assert!(mismatches.is_empty(), "unexpected mismatches: {:?}", mismatches);
}

#[test]
fn test_deepest_accepted_chain_round_trips() {
    let result = chain(DEFAULT_MAX_DEPTH);
    for pretty in [false, true] {
        let json = serialize(&result, pretty).unwrap();
        serde_json::from_str::<Value>(&json).unwrap();
        assert_eq!(flatten_document(&json).unwrap(), result);
    }
}

#[test]
fn test_chain_past_limit_rejected() {
    let result = chain(DEFAULT_MAX_DEPTH + 1);
    match serialize(&result, false).unwrap_err() {
        ExportError::InvalidInput { index, .. } => assert_eq!(index, DEFAULT_MAX_DEPTH),
        other => panic!("Expected InvalidInput, got: {:?}", other),
    }
}
