/// Group an array of objects by the value of one key.
use std::collections::HashMap;

use serde_json::{Map, Value};

use super::expect_object;
use crate::powers::PowerError;

/// Group name used for items that lack the key.
pub const MISSING_GROUP: &str = "undefined";

fn group_name(value: Option<&Value>) -> String {
    match value {
        None => MISSING_GROUP.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Group `items` by their `key` value.
///
/// Returns an object mapping each group name to the array of its items.
/// Groups appear in the order their first member appears; members keep
/// input order. String values name their group verbatim, other values by
/// their JSON text, and items without the key fall into `"undefined"`.
///
/// # Errors
///
/// Returns `PowerError::InvalidInput` if an item is not an object.
pub fn group_by(items: &[Value], key: &str) -> Result<Map<String, Value>, PowerError> {
    let mut groups: Vec<(String, Vec<Value>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let name = group_name(expect_object(item)?.get(key));
        match index.get(&name) {
            Some(&i) => groups[i].1.push(item.clone()),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push((name, vec![item.clone()]));
            }
        }
    }

    Ok(groups
        .into_iter()
        .map(|(name, members)| (name, Value::Array(members)))
        .collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn items(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap_or_default()
    }

    #[test]
    fn test_basic_grouping() {
        let data = items(json!([
            {"type": "fruit", "name": "apple"},
            {"type": "veggie", "name": "carrot"},
            {"type": "fruit", "name": "banana"}
        ]));
        let result = group_by(&data, "type").unwrap();
        assert_eq!(
            Value::Object(result.clone()),
            json!({
                "fruit": [
                    {"type": "fruit", "name": "apple"},
                    {"type": "fruit", "name": "banana"}
                ],
                "veggie": [{"type": "veggie", "name": "carrot"}]
            })
        );
        let names: Vec<&str> = result.keys().map(String::as_str).collect();
        assert_eq!(names, ["fruit", "veggie"]);
    }

    #[test]
    fn test_non_string_and_missing_keys() {
        let data = items(json!([{"n": 1}, {"n": true}, {"other": 0}, {"n": null}]));
        let result = group_by(&data, "n").unwrap();
        let names: Vec<&str> = result.keys().map(String::as_str).collect();
        assert_eq!(names, ["1", "true", "undefined", "null"]);
    }

    #[test]
    fn test_non_object_item_rejected() {
        let data = items(json!([{"n": 1}, "loose"]));
        assert!(matches!(
            group_by(&data, "n"),
            Err(PowerError::InvalidInput { found: "a string", .. })
        ));
    }
}
