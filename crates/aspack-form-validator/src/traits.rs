//! Field lookup for the records fed into the validator

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// A flat key/value structure whose fields can be validated
pub trait Record {
    /// Value of a field, or `None` when the key is absent
    fn field(&self, name: &str) -> Option<&Value>;
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Only JSON objects have fields; any other value behaves as an empty record
impl Record for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_lookup() {
        let mut data = HashMap::new();
        data.insert("name".to_string(), json!("Ada"));
        assert_eq!(data.field("name"), Some(&json!("Ada")));
        assert_eq!(data.field("age"), None);

        let value = json!({"name": "Ada", "age": null});
        assert_eq!(value.field("age"), Some(&Value::Null));
        assert_eq!(value.field("missing"), None);
    }

    #[test]
    fn test_non_object_value_has_no_fields() {
        assert_eq!(json!([1, 2]).field("0"), None);
        assert_eq!(json!("name").field("name"), None);
    }
}
