//! Expected-vs-actual matching for exported documents.
//!
//! Expected documents are partial: objects only list the keys worth checking,
//! and extra keys in the actual output are ignored. Arrays must match in
//! length and are compared element by element.
//!
//! Special keys in expected objects:
//! - `"NOT": "key"` — `key` must be absent from the actual object.
//! - `"NOT": { ... }` — each listed value must differ from the actual one.
//! - `typeName` — when missing from the output, checked against the last
//!   entry of `typeNames`.
//! - `dynamicSize: 0` — accepted when the output has no `dynamicSize`.

use serde_json::{Map, Value};
use std::fmt;

/// One difference between expected and actual JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Dotted path to the offending value, e.g. `[0].members[1].name`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Compare `expected` against `actual`, collecting every mismatch.
pub fn compare_json(expected: &Value, actual: &Value) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    compare(expected, actual, "", true, &mut mismatches);
    mismatches
}

fn push(out: &mut Vec<Mismatch>, path: &str, message: impl Into<String>) {
    out.push(Mismatch {
        path: path.to_string(),
        message: message.into(),
    });
}

fn compare(expected: &Value, actual: &Value, path: &str, expect_eq: bool, out: &mut Vec<Mismatch>) {
    match expected {
        Value::Array(items) => compare_array(items, actual, path, expect_eq, out),
        Value::Object(fields) => compare_object(fields, actual, path, expect_eq, out),
        scalar => {
            if expect_eq && scalar != actual {
                push(out, path, format!("expected {}, found {}", scalar, actual));
            } else if !expect_eq && scalar == actual {
                push(out, path, format!("expected a value other than {}", scalar));
            }
        }
    }
}

fn compare_array(items: &[Value], actual: &Value, path: &str, expect_eq: bool, out: &mut Vec<Mismatch>) {
    let actual_items = match actual.as_array() {
        Some(a) => a,
        None => return push(out, path, format!("expected an array, found {}", actual)),
    };
    if items.len() != actual_items.len() {
        return push(
            out,
            path,
            format!(
                "array size difference: expected {}, found {}",
                items.len(),
                actual_items.len()
            ),
        );
    }
    for (i, (e, a)) in items.iter().zip(actual_items).enumerate() {
        compare(e, a, &format!("{}[{}]", path, i), expect_eq, out);
    }
}

fn compare_object(
    fields: &Map<String, Value>,
    actual: &Value,
    path: &str,
    expect_eq: bool,
    out: &mut Vec<Mismatch>,
) {
    let actual_fields = match actual.as_object() {
        Some(o) => o,
        None => return push(out, path, format!("expected an object, found {}", actual)),
    };

    for (key, val) in fields {
        let curr_path = format!("{}.{}", path, key);

        if key == "NOT" {
            if !expect_eq {
                push(out, &curr_path, "nested \"NOT\" expressions are not allowed");
                continue;
            }
            match val {
                Value::String(absent) => {
                    if actual_fields.contains_key(absent) {
                        push(
                            out,
                            &format!("{}.{}", path, absent),
                            "unexpected key found in output",
                        );
                    }
                }
                other => compare(other, actual, &curr_path, false, out),
            }
            continue;
        }

        match actual_fields.get(key) {
            Some(actual_val) => compare(val, actual_val, &curr_path, expect_eq, out),
            None if key == "typeName" => {
                match actual_fields
                    .get("typeNames")
                    .and_then(Value::as_array)
                    .and_then(|names| names.last())
                {
                    Some(last) => compare(val, last, &curr_path, expect_eq, out),
                    None => push(out, &curr_path, "expected key not found in output"),
                }
            }
            None if key == "dynamicSize" && val.as_u64() == Some(0) => {}
            None => push(out, &curr_path, "expected key not found in output"),
        }
    }
}
