// ABOUTME: Dot-path lookup into JSON data and value rendering helpers
// ABOUTME: Resolves paths like project.page.title with safe navigation over falsy values

use serde_json::Value as JsonValue;

/// Resolve a dotted `path` such as `project.blog.title` against `value`.
///
/// Returns `None` when the path is empty, the root is falsy, or a segment
/// does not exist. A falsy intermediate value (null, `false`, `0`, `""`) stops the
/// walk and is returned as is, so `{"a": {"b": null}}` resolves `a.b.c` to
/// `null`. Empty segments are skipped and numeric segments index arrays.
pub fn resolve<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    if path.is_empty() || is_falsy(value) {
        return None;
    }

    let mut current = value;
    for segment in path.split('.') {
        if is_falsy(current) {
            return Some(current);
        }
        if segment.is_empty() {
            continue;
        }
        current = match current {
            JsonValue::Object(map) => map.get(segment)?,
            JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Null, `false`, zero and the empty string. Objects and arrays are never falsy.
pub fn is_falsy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => false,
    }
}

/// Render a resolved value as substitution text, the way it reads when
/// coerced to a string: arrays join their elements with `,` and objects
/// collapse to `[object Object]`.
pub fn render_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => {
                if f == 0.0 {
                    "0".to_string()
                } else {
                    format!("{:.0}", f)
                }
            }
            _ => n.to_string(),
        },
        JsonValue::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        JsonValue::Object(_) => "[object Object]".to_string(),
    }
}
