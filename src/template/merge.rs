// ABOUTME: Deep merge of layered JSON data objects
// ABOUTME: Later layers override earlier ones, recursing only where both sides are objects

use serde_json::{Map, Value as JsonValue};

/// Deep-merge `layers` left to right into a fresh object.
///
/// Non-object layers (null, scalars, arrays) are skipped. For each key, when
/// both the accumulated and incoming values are objects they are merged
/// recursively; any other combination lets the incoming value replace the
/// accumulated one wholesale. Arrays are never concatenated.
pub fn merge(layers: &[&JsonValue]) -> JsonValue {
    let mut merged = Map::new();
    for layer in layers {
        if let JsonValue::Object(map) = layer {
            merge_into(&mut merged, map);
        }
    }
    JsonValue::Object(merged)
}

fn merge_into(target: &mut Map<String, JsonValue>, incoming: &Map<String, JsonValue>) {
    for (key, value) in incoming {
        if let (Some(JsonValue::Object(existing)), JsonValue::Object(nested)) =
            (target.get_mut(key), value)
        {
            merge_into(existing, nested);
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_later_layers_win() {
        let merged = merge(&[&json!({"a": 1}), &json!({"a": 2}), &json!({"a": 3})]);
        assert_eq!(merged, json!({"a": 3}));
    }

    #[test]
    fn test_nested_objects_are_combined() {
        let merged = merge(&[&json!({"a": {"x": 1}}), &json!({"a": {"y": 2}})]);
        assert_eq!(merged, json!({"a": {"x": 1, "y": 2}}));
    }

    #[test]
    fn test_array_replaces_object() {
        let merged = merge(&[&json!({"a": {"x": 1}}), &json!({"a": [1, 2]})]);
        assert_eq!(merged, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_object_replaces_scalar_and_array() {
        let merged = merge(&[
            &json!({"a": "text", "b": [1]}),
            &json!({"a": {"x": 1}, "b": {"y": 2}}),
        ]);
        assert_eq!(merged, json!({"a": {"x": 1}, "b": {"y": 2}}));
    }

    #[test]
    fn test_arrays_are_not_concatenated() {
        let merged = merge(&[&json!({"tags": ["a", "b"]}), &json!({"tags": ["c"]})]);
        assert_eq!(merged, json!({"tags": ["c"]}));
    }

    #[test]
    fn test_falsy_values_still_override() {
        let merged = merge(&[
            &json!({"title": "Hello", "count": 3, "draft": true, "meta": {"a": 1}}),
            &json!({"title": "", "count": 0, "draft": false, "meta": null}),
        ]);
        assert_eq!(
            merged,
            json!({"title": "", "count": 0, "draft": false, "meta": null})
        );
    }

    #[test]
    fn test_non_object_layers_are_skipped() {
        let merged = merge(&[
            &json!({"a": 1}),
            &JsonValue::Null,
            &json!([1, 2, 3]),
            &json!("2019-01-01T00:00:00Z"),
            &json!({"b": 2}),
        ]);
        assert_eq!(merged, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_no_layers() {
        assert_eq!(merge(&[]), json!({}));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let defaults = json!({"project": {"page": {"title": "Default"}}});
        let data = json!({"project": {"page": {"subtitle": "Sub"}}});

        let merged = merge(&[&defaults, &data]);

        assert_eq!(defaults, json!({"project": {"page": {"title": "Default"}}}));
        assert_eq!(data, json!({"project": {"page": {"subtitle": "Sub"}}}));
        assert_eq!(
            merged,
            json!({"project": {"page": {"title": "Default", "subtitle": "Sub"}}})
        );
    }

    #[test]
    fn test_three_layer_precedence() {
        let defaults = json!({"version": "0.0.1", "project": {"title": "Default", "author": "Ann"}});
        let data = json!({"project": {"title": "Data"}});
        let master = json!({"project": {"author": "Master"}});

        let merged = merge(&[&defaults, &data, &master]);
        assert_eq!(
            merged,
            json!({"version": "0.0.1", "project": {"title": "Data", "author": "Master"}})
        );
    }
}
