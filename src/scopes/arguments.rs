use super::registry::ParamKind;
use crate::error::{ScopeError, ScopeResult};
use serde_json::{Map, Number, Value};

/// Arguments bound to a scope handler, in signature order.
///
/// Typed getters report failures as [`ScopeError::InvalidScopeArgument`] naming
/// the scope and slot, so handlers can simply use `?`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeArguments {
    scope: String,
    values: Vec<(String, Value)>,
}

impl ScopeArguments {
    pub fn new(scope: impl Into<String>, values: Vec<(String, Value)>) -> Self {
        Self {
            scope: scope.into(),
            values,
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Positional access
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.values.get(index).map(|(_, value)| value)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(slot, _)| slot == name)
            .map(|(_, value)| value)
    }

    pub fn get(&self, name: &str) -> ScopeResult<&Value> {
        self.value(name)
            .ok_or_else(|| ScopeError::missing_argument(&self.scope, name))
    }

    pub fn i64(&self, name: &str) -> ScopeResult<i64> {
        self.get(name)?
            .as_i64()
            .ok_or_else(|| self.invalid(name, "expected an integer"))
    }

    pub fn f64(&self, name: &str) -> ScopeResult<f64> {
        self.get(name)?
            .as_f64()
            .ok_or_else(|| self.invalid(name, "expected a number"))
    }

    pub fn bool(&self, name: &str) -> ScopeResult<bool> {
        self.get(name)?
            .as_bool()
            .ok_or_else(|| self.invalid(name, "expected a boolean"))
    }

    pub fn str(&self, name: &str) -> ScopeResult<&str> {
        self.get(name)?
            .as_str()
            .ok_or_else(|| self.invalid(name, "expected a string"))
    }

    pub fn list(&self, name: &str) -> ScopeResult<&[Value]> {
        self.get(name)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.invalid(name, "expected a list"))
    }

    /// Arguments as a JSON object keyed by slot name
    pub fn to_map(&self) -> Map<String, Value> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    fn invalid(&self, name: &str, reason: &str) -> ScopeError {
        ScopeError::invalid_argument(&self.scope, name, reason)
    }
}

/// Whether an input value counts as absent
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Convert a raw input value to the declared kind.
///
/// Inputs such as query strings and environment variables only carry text,
/// so strings are parsed into the target kind.
pub(crate) fn coerce(kind: ParamKind, value: Value) -> Result<Value, String> {
    match kind {
        ParamKind::Any => Ok(value),
        ParamKind::String => match value {
            Value::String(_) => Ok(value),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            Value::Bool(b) => Ok(Value::String(b.to_string())),
            other => Err(format!("expected a string, got {}", kind_of(&other))),
        },
        ParamKind::Integer => match &value {
            Value::Number(n) if n.is_i64() || n.is_u64() => n
                .as_i64()
                .map(Value::from)
                .ok_or_else(|| format!("integer {n} out of range")),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    Ok(Value::from(f as i64))
                }
                _ => Err(format!("expected an integer, got {n}")),
            },
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| format!("expected an integer, got '{s}'")),
            other => Err(format!("expected an integer, got {}", kind_of(other))),
        },
        ParamKind::Float => {
            let parsed = match &value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            parsed
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| format!("expected a number, got {}", describe(&value)))
        }
        ParamKind::Boolean => match value {
            Value::Bool(b) => Ok(Value::Bool(b)),
            Value::Number(ref n) if n.as_i64() == Some(0) => Ok(Value::Bool(false)),
            Value::Number(ref n) if n.as_i64() == Some(1) => Ok(Value::Bool(true)),
            Value::String(ref s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Value::Bool(true)),
                "false" | "0" | "no" | "off" => Ok(Value::Bool(false)),
                _ => Err(format!("expected a boolean, got '{s}'")),
            },
            ref other => Err(format!("expected a boolean, got {}", describe(other))),
        },
        ParamKind::List => match value {
            Value::Array(_) => Ok(value),
            Value::String(s) => Ok(Value::Array(
                s.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| Value::String(item.to_string()))
                    .collect(),
            )),
            Value::Object(_) => Err("expected a list, got an object".to_string()),
            scalar => Ok(Value::Array(vec![scalar])),
        },
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        Value::Number(n) => n.to_string(),
        other => kind_of(other).to_string(),
    }
}
