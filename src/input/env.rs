use super::InputManager;
use crate::error::{InputError, InputResult};
use serde_json::Value;

/// Reads scope arguments from environment variables.
///
/// `withinRange.min` under prefix `SCOPE` is read from `SCOPE_WITHINRANGE_MIN`.
/// Values always arrive as strings and are coerced later by the parameter kind.
#[derive(Debug, Clone)]
pub struct EnvInput {
    prefix: String,
}

impl EnvInput {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn variable_name(&self, key: &str) -> String {
        let suffix: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();

        if self.prefix.is_empty() {
            suffix
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl Default for EnvInput {
    fn default() -> Self {
        Self::new("SCOPE")
    }
}

impl InputManager for EnvInput {
    fn has(&self, key: &str) -> bool {
        std::env::var_os(self.variable_name(key)).is_some()
    }

    fn get(&self, key: &str) -> InputResult<Value> {
        let name = self.variable_name(key);
        match std::env::var(&name) {
            Ok(value) => Ok(Value::String(value)),
            Err(std::env::VarError::NotPresent) => Err(InputError::key_not_found(key)),
            Err(std::env::VarError::NotUnicode(_)) => Err(InputError::Source {
                reason: format!("{name} is not valid unicode"),
            }),
        }
    }
}
