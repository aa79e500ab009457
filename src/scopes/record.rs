use crate::logging::LogContext;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Audit entry for one applied scope, handed to the logger and then dropped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationRecord {
    pub invocation_id: Uuid,
    pub scope: String,
    pub handler: String,
    /// Index of the scope in its list
    pub position: usize,
    pub arguments: Map<String, Value>,
    pub recorded_at: DateTime<Utc>,
}

impl InvocationRecord {
    pub fn new(
        scope: impl Into<String>,
        handler: impl Into<String>,
        position: usize,
        arguments: Map<String, Value>,
    ) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            scope: scope.into(),
            handler: handler.into(),
            position,
            arguments,
            recorded_at: Utc::now(),
        }
    }

    /// Serialized record as a flat log context
    pub fn to_context(&self) -> LogContext {
        match serde_json::to_value(self) {
            Ok(Value::Object(context)) => context,
            _ => LogContext::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_fields() {
        let mut arguments = Map::new();
        arguments.insert("min".to_string(), json!(10));
        let record = InvocationRecord::new("withinRange", "within_range", 2, arguments);

        let context = record.to_context();
        assert_eq!(context["scope"], json!("withinRange"));
        assert_eq!(context["handler"], json!("within_range"));
        assert_eq!(context["position"], json!(2));
        assert_eq!(context["arguments"], json!({"min": 10}));
        assert!(context["invocation_id"].as_str().is_some());
        assert!(context["recorded_at"].as_str().is_some());
    }
}
