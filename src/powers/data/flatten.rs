/// Convert between nested JSON objects and single-level objects keyed by
/// separator-joined paths.
use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::powers::PowerError;

/// Separator used when none is given on the command line.
pub const DEFAULT_SEPARATOR: &str = ".";

fn check_separator(separator: &str) -> Result<(), PowerError> {
    if separator.is_empty() {
        return Err(PowerError::InvalidArgument {
            name: "separator",
            reason: "must not be empty",
        });
    }
    Ok(())
}

fn join_path(prefix: Option<&str>, key: &str, separator: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{separator}{key}"),
        None => key.to_owned(),
    }
}

/// Flatten a nested object into `path -> leaf` pairs.
///
/// Traversal is depth-first, pre-order: each nested object is expanded in
/// place before its next sibling. Arrays and scalars are leaves. An empty
/// nested object produces no entries.
///
/// # Errors
///
/// Returns `PowerError::InvalidArgument` if `separator` is empty.
pub fn flatten(
    data: &Map<String, Value>,
    separator: &str,
) -> Result<Map<String, Value>, PowerError> {
    check_separator(separator)?;

    let mut out = Map::new();
    // One frame per open object: its joined path and the remaining entries.
    let mut stack: Vec<(Option<String>, serde_json::map::Iter<'_>)> =
        vec![(None, data.iter())];

    while let Some((prefix, entries)) = stack.last_mut() {
        let Some((key, value)) = entries.next() else {
            stack.pop();
            continue;
        };
        let path = join_path(prefix.as_deref(), key, separator);
        match value {
            Value::Object(child) => stack.push((Some(path), child.iter())),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }

    Ok(out)
}

/// Rebuild a nested object from `path -> value` pairs.
///
/// Each key is split on `separator`; every segment but the last names an
/// intermediate object, created on demand. Values are placed as given and
/// never descended into, so an object-valued entry cannot absorb deeper keys.
///
/// # Errors
///
/// - `PowerError::InvalidArgument` if `separator` is empty.
/// - `PowerError::KeyConflict` if one key needs a value written by another
///   key to be an intermediate object (`"a"` and `"a.b"`), in either order.
pub fn unflatten(
    data: &Map<String, Value>,
    separator: &str,
) -> Result<Map<String, Value>, PowerError> {
    check_separator(separator)?;

    let mut root = Map::new();
    // Joined paths of the objects created here, as opposed to input values.
    let mut intermediates: HashSet<String> = HashSet::new();

    for (key, value) in data {
        let segments: Vec<&str> = key.split(separator).collect();
        let Some((last, parents)) = segments.split_last() else {
            continue;
        };

        let mut current = &mut root;
        for (depth, segment) in parents.iter().enumerate() {
            let path = segments[..=depth].join(separator);
            if !current.contains_key(*segment) {
                current.insert((*segment).to_owned(), Value::Object(Map::new()));
                intermediates.insert(path);
            } else if !intermediates.contains(&path) {
                return Err(conflict(key, &segments[..=depth], separator));
            }
            current = match current.get_mut(*segment) {
                Some(Value::Object(map)) => map,
                _ => return Err(conflict(key, &segments[..=depth], separator)),
            };
        }

        // Keys are unique, so anything already here is an intermediate object.
        if current.contains_key(*last) {
            return Err(conflict(key, &segments, separator));
        }
        current.insert((*last).to_owned(), value.clone());
    }

    Ok(root)
}

fn conflict(key: &str, segments: &[&str], separator: &str) -> PowerError {
    PowerError::KeyConflict {
        key: key.to_owned(),
        segment: segments.join(separator),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture is not an object: {other}"),
        }
    }

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_flatten_deep() {
        let flat = flatten(&obj(json!({"a": {"b": {"c": 1}}})), ".").unwrap();
        assert_eq!(Value::Object(flat), json!({"a.b.c": 1}));
    }

    #[test]
    fn test_flatten_preorder() {
        let input = obj(json!({"a": 1, "b": {"c": 2, "d": {"e": 3}}, "f": [1, 2]}));
        let flat = flatten(&input, ".").unwrap();
        assert_eq!(keys(&flat), ["a", "b.c", "b.d.e", "f"]);
        assert_eq!(flat["f"], json!([1, 2]));
    }

    #[test]
    fn test_flatten_custom_separator() {
        let flat = flatten(&obj(json!({"a": {"b": 1}})), "_").unwrap();
        assert_eq!(Value::Object(flat), json!({"a_b": 1}));
    }

    #[test]
    fn test_flatten_empty_inputs() {
        assert!(flatten(&Map::new(), ".").unwrap().is_empty());
        let flat = flatten(&obj(json!({"a": {}, "b": 2})), ".").unwrap();
        assert_eq!(Value::Object(flat), json!({"b": 2}));
    }

    #[test]
    fn test_flatten_empty_key_is_a_real_segment() {
        let input = obj(json!({"": {"x": 1}}));
        let flat = flatten(&input, ".").unwrap();
        assert_eq!(keys(&flat), [".x"]);
        assert_eq!(unflatten(&flat, ".").unwrap(), input);
    }

    #[test]
    fn test_flatten_very_deep_nesting() {
        let mut value = json!(0);
        for _ in 0..1_000 {
            value = json!({ "k": value });
        }
        let input = match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let flat = flatten(&input, ".").unwrap();
        assert_eq!(flat.len(), 1);
        let (path, leaf) = flat.iter().next().unwrap();
        assert_eq!(path.split('.').count(), 1_000);
        assert_eq!(leaf, &json!(0));
    }

    #[test]
    fn test_unflatten_basic() {
        let nested = unflatten(&obj(json!({"a.b.c": 1})), ".").unwrap();
        assert_eq!(Value::Object(nested), json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_unflatten_custom_separator() {
        let nested = unflatten(&obj(json!({"a_b": 1, "a_c": 2})), "_").unwrap();
        assert_eq!(Value::Object(nested), json!({"a": {"b": 1, "c": 2}}));
    }

    #[test]
    fn test_round_trip() {
        let input = obj(json!({
            "name": "svc",
            "db": {"host": "localhost", "port": 5432, "opts": {"ssl": true}},
            "tags": ["a", "b"],
            "n": null
        }));
        let flat = flatten(&input, "/").unwrap();
        assert_eq!(unflatten(&flat, "/").unwrap(), input);
    }

    #[test]
    fn test_unflatten_leaf_then_branch_conflicts() {
        let err = unflatten(&obj(json!({"a": 1, "a.b": 2})), ".").unwrap_err();
        assert!(matches!(
            err,
            PowerError::KeyConflict { ref key, ref segment } if key == "a.b" && segment == "a"
        ));
    }

    #[test]
    fn test_unflatten_branch_then_leaf_conflicts() {
        let err = unflatten(&obj(json!({"a.b": 2, "a": 1})), ".").unwrap_err();
        assert!(matches!(
            err,
            PowerError::KeyConflict { ref key, ref segment } if key == "a" && segment == "a"
        ));
    }

    #[test]
    fn test_object_valued_entry_conflicts_in_either_order() {
        let forward = unflatten(&obj(json!({"a": {"x": 1}, "a.b": 2})), ".").unwrap_err();
        let reverse = unflatten(&obj(json!({"a.b": 2, "a": {"x": 1}})), ".").unwrap_err();
        for err in [forward, reverse] {
            assert!(matches!(err, PowerError::KeyConflict { ref segment, .. } if segment == "a"));
        }
    }

    #[test]
    fn test_unflatten_outcome_ignores_entry_order() {
        let pairs = [
            ("a.b", json!(1)),
            ("a.c", json!({"x": 1})),
            ("d", json!([1])),
            ("a.c.y", json!(2)),
        ];
        let forward: Map<String, Value> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect();
        let reverse: Map<String, Value> =
            pairs.iter().rev().map(|(k, v)| ((*k).to_owned(), v.clone())).collect();
        assert!(unflatten(&forward, ".").is_err());
        assert!(unflatten(&reverse, ".").is_err());

        let fine = obj(json!({"a.b": 1, "a.c": {"x": 1}, "d": [1]}));
        let mut shuffled: Map<String, Value> = Map::new();
        for (k, v) in fine.iter().rev() {
            shuffled.insert(k.clone(), v.clone());
        }
        assert_eq!(
            Value::Object(unflatten(&fine, ".").unwrap()),
            Value::Object(unflatten(&shuffled, ".").unwrap())
        );
    }

    #[test]
    fn test_shared_intermediates_are_reused() {
        let nested = unflatten(&obj(json!({"a.b.c": 1, "a.b.d": 2, "a.e": 3})), ".").unwrap();
        assert_eq!(Value::Object(nested), json!({"a": {"b": {"c": 1, "d": 2}, "e": 3}}));
    }

    #[test]
    fn test_empty_separator_rejected() {
        let input = obj(json!({"a": 1}));
        assert!(matches!(
            flatten(&input, ""),
            Err(PowerError::InvalidArgument { name: "separator", .. })
        ));
        assert!(unflatten(&input, "").is_err());
    }
}
