//! Dot-path lookup into JSON values

use serde_json::Value;

/// Look up a nested value by a dot-separated path such as `user.profile.name`.
///
/// Segments index object keys, or array positions when the current value is
/// an array (`items.0.id`). Returns `None` when the root is not a container,
/// the path is empty, or any segment is missing. A present `null` is
/// returned as `Some(&Value::Null)`.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() || !(root.is_object() || root.is_array()) {
        return None;
    }

    path.split('.').try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Like [`get_path`], returning `default` when nothing is found
pub fn get_path_or(root: &Value, path: &str, default: Value) -> Value {
    get_path(root, path).cloned().unwrap_or(default)
}
