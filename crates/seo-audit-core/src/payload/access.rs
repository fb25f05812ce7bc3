//! Path accessors over the loosely-typed backend payload.
//!
//! Every read of the raw JSON goes through these helpers. A missing key, a
//! leaf of the wrong type, or a non-finite number resolves to the caller's
//! default, so the normalizer never has to branch on "absent".

use serde_json::{Map, Value};

/// Walk `path` from `root`.
///
/// Returns `None` as soon as a segment is missing or an intermediate node
/// is not an object.
pub fn at<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |node, key| node.as_object()?.get(*key))
}

/// Finite number view of a JSON leaf.
pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// Number at `path`, `0` when absent or malformed.
pub fn number_at(root: &Value, path: &[&str]) -> f64 {
    at(root, path).and_then(as_number).unwrap_or(0.0)
}

/// Non-empty text at `path`, or `default`.
///
/// Numbers are rendered with their JSON spelling (`32`, not `32.0`).
/// Empty strings count as absent.
pub fn text_at(root: &Value, path: &[&str], default: &str) -> String {
    at(root, path)
        .and_then(as_text)
        .unwrap_or_else(|| default.to_string())
}

/// Text view of a scalar leaf. Objects, arrays, booleans and `""` yield `None`.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Boolean at `path`, `false` when absent or not a boolean.
pub fn bool_at(root: &Value, path: &[&str]) -> bool {
    flag_at(root, path).unwrap_or(false)
}

/// Boolean at `path` when it is actually present as a boolean.
pub fn flag_at(root: &Value, path: &[&str]) -> Option<bool> {
    at(root, path).and_then(Value::as_bool)
}

/// Array at `path`, empty when absent or not an array.
pub fn array_at<'a>(root: &'a Value, path: &[&str]) -> &'a [Value] {
    at(root, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Object at `path`, if present.
pub fn object_at<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Map<String, Value>> {
    at(root, path).and_then(Value::as_object)
}

/// Numeric series at `path`; malformed elements become `0`.
pub fn numbers_at(root: &Value, path: &[&str]) -> Vec<f64> {
    array_at(root, path)
        .iter()
        .map(|v| as_number(v).unwrap_or(0.0))
        .collect()
}

/// Text series at `path`; non-text elements are skipped.
pub fn texts_at(root: &Value, path: &[&str]) -> Vec<String> {
    array_at(root, path).iter().filter_map(as_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn at_walks_nested_objects() {
        let v = json!({"a": {"b": {"c": 3}}});
        assert_eq!(at(&v, &["a", "b", "c"]), Some(&json!(3)));
        assert!(at(&v, &["a", "x", "c"]).is_none());
        assert!(at(&v, &["a", "b", "c", "d"]).is_none());
    }

    #[test]
    fn empty_path_returns_root() {
        let v = json!([1, 2]);
        assert_eq!(at(&v, &[]), Some(&v));
    }

    #[test]
    fn number_at_defaults_to_zero() {
        let v = json!({"n": 12.5, "s": "12", "b": true, "null": null});
        assert_eq!(number_at(&v, &["n"]), 12.5);
        assert_eq!(number_at(&v, &["s"]), 0.0);
        assert_eq!(number_at(&v, &["b"]), 0.0);
        assert_eq!(number_at(&v, &["null"]), 0.0);
        assert_eq!(number_at(&v, &["missing"]), 0.0);
    }

    #[test]
    fn text_at_handles_numbers_and_empty_strings() {
        let v = json!({"cms": "WordPress", "size": 32, "empty": "", "obj": {}});
        assert_eq!(text_at(&v, &["cms"], "Unknown"), "WordPress");
        assert_eq!(text_at(&v, &["size"], "N/A"), "32");
        assert_eq!(text_at(&v, &["empty"], "Unknown"), "Unknown");
        assert_eq!(text_at(&v, &["obj"], "Unknown"), "Unknown");
    }

    #[test]
    fn flags_distinguish_absent_from_false() {
        let v = json!({"yes": true, "no": false, "str": "true"});
        assert_eq!(flag_at(&v, &["no"]), Some(false));
        assert_eq!(flag_at(&v, &["missing"]), None);
        assert!(bool_at(&v, &["yes"]));
        assert!(!bool_at(&v, &["str"]));
    }

    #[test]
    fn series_accessors_coerce_elements() {
        let v = json!({"nums": [1, "x", null, 4.5], "dates": ["2024-01", 7, {}], "notarr": 5});
        assert_eq!(numbers_at(&v, &["nums"]), vec![1.0, 0.0, 0.0, 4.5]);
        assert_eq!(texts_at(&v, &["dates"]), vec!["2024-01", "7"]);
        assert!(array_at(&v, &["notarr"]).is_empty());
        assert!(numbers_at(&v, &["missing"]).is_empty());
    }
}
