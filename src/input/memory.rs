use super::InputManager;
use crate::error::{InputError, InputResult};
use serde_json::Value;
use std::collections::HashMap;

/// In-memory input source.
///
/// Typically filled from an already-parsed request body or query string.
#[derive(Debug, Clone, Default)]
pub struct MemoryInput {
    values: HashMap<String, Value>,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming and returning self for chaining
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Build from a JSON document, flattening nested objects into dotted keys.
    ///
    /// `{"withinRange": {"min": 10}}` becomes `withinRange.min = 10`. Arrays are
    /// kept as values. A non-object document yields an empty source.
    pub fn from_json(document: &Value) -> Self {
        Self::from_json_with_separator(document, ".")
    }

    pub fn from_json_with_separator(document: &Value, separator: &str) -> Self {
        let mut input = Self::default();
        if let Value::Object(map) = document {
            for (key, value) in map {
                input.flatten_into(key.clone(), value, separator);
            }
        }
        input
    }

    fn flatten_into(&mut self, prefix: String, value: &Value, separator: &str) {
        match value {
            Value::Object(map) => {
                for (key, nested) in map {
                    self.flatten_into(format!("{prefix}{separator}{key}"), nested, separator);
                }
            }
            other => {
                self.values.insert(prefix, other.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl InputManager for MemoryInput {
    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> InputResult<Value> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| InputError::key_not_found(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_and_get() {
        let input = MemoryInput::new().with("withinRange.min", 10);
        assert!(input.has("withinRange.min"));
        assert!(!input.has("withinRange.max"));
        assert_eq!(input.get("withinRange.min").unwrap(), json!(10));
        assert_eq!(
            input.get("withinRange.max"),
            Err(InputError::key_not_found("withinRange.max"))
        );
    }

    #[test]
    fn test_from_json_flattens_objects() {
        let input = MemoryInput::from_json(&json!({
            "withinRange": {"min": 10, "max": 20},
            "status": {"in": ["open", "closed"]},
            "active": true
        }));

        assert_eq!(input.len(), 4);
        assert_eq!(input.get("withinRange.max").unwrap(), json!(20));
        assert_eq!(input.get("status.in").unwrap(), json!(["open", "closed"]));
        assert_eq!(input.get("active").unwrap(), json!(true));
    }

    #[test]
    fn test_from_json_ignores_scalars() {
        assert!(MemoryInput::from_json(&json!(42)).is_empty());
    }
}
