/// Recursive, right-biased merge of two JSON objects.
use serde_json::{Map, Value};

/// Merge `overlay` into a copy of `base`.
///
/// Where both sides hold an object under the same key the two are merged
/// recursively; any other collision takes the `overlay` value. Keys of `base`
/// keep their position and new keys from `overlay` are appended. Neither
/// input is modified.
#[must_use]
pub fn deep_merge(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut result = base.clone();
    for (key, value) in overlay {
        let merged = match (result.get(key), value) {
            (Some(Value::Object(left)), Value::Object(right)) => {
                Value::Object(deep_merge(left, right))
            }
            _ => value.clone(),
        };
        result.insert(key.clone(), merged);
    }
    result
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_scalar_conflict_takes_overlay() {
        let merged = deep_merge(&obj(json!({"a": 1, "b": 2})), &obj(json!({"b": 3, "c": 4})));
        assert_eq!(Value::Object(merged), json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn test_nested_objects_merge() {
        let merged = deep_merge(
            &obj(json!({"a": {"b": 1, "c": 2}})),
            &obj(json!({"a": {"c": 3, "d": 4}})),
        );
        assert_eq!(Value::Object(merged), json!({"a": {"b": 1, "c": 3, "d": 4}}));
    }

    #[test]
    fn test_object_replaced_by_scalar_and_back() {
        let merged = deep_merge(
            &obj(json!({"a": {"b": 1}, "x": 1})),
            &obj(json!({"a": 5, "x": {"y": 2}})),
        );
        assert_eq!(Value::Object(merged), json!({"a": 5, "x": {"y": 2}}));
    }

    #[test]
    fn test_arrays_are_replaced_not_concatenated() {
        let merged = deep_merge(&obj(json!({"a": [1, 2]})), &obj(json!({"a": [3]})));
        assert_eq!(Value::Object(merged), json!({"a": [3]}));
    }

    #[test]
    fn test_inputs_untouched_and_order_kept() {
        let base = obj(json!({"z": {"k": 1}, "a": 1}));
        let overlay = obj(json!({"n": 2, "z": {"k": 2}}));
        let merged = deep_merge(&base, &overlay);
        assert_eq!(Value::Object(base), json!({"z": {"k": 1}, "a": 1}));
        assert_eq!(Value::Object(overlay), json!({"n": 2, "z": {"k": 2}}));
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "n"]);
    }
}
