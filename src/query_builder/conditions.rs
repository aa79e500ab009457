use serde_json::Value;

/// A single SQL predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Compare {
        field: String,
        operator: String,
        value: Value,
    },
    In {
        field: String,
        values: Vec<Value>,
    },
    Between {
        field: String,
        start: Value,
        end: Value,
    },
    IsNull {
        field: String,
    },
}

impl Condition {
    pub fn to_sql(&self) -> String {
        match self {
            Condition::Compare {
                field,
                operator,
                value,
            } => format!("{field} {operator} {}", format_value(value)),
            Condition::In { field, values } => format!("{field} IN ({})", format_list(values)),
            Condition::Between { field, start, end } => format!(
                "{field} BETWEEN {} AND {}",
                format_value(start),
                format_value(end)
            ),
            Condition::IsNull { field } => format!("{field} IS NULL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

/// A group of conditions joined by one logical operator
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub conditions: Vec<Condition>,
    pub operator: LogicalOperator,
}

impl WhereClause {
    fn single(condition: Condition) -> Self {
        Self {
            conditions: vec![condition],
            operator: LogicalOperator::And,
        }
    }

    pub fn compare(field: &str, operator: &str, value: Value) -> Self {
        Self::single(Condition::Compare {
            field: field.to_string(),
            operator: operator.to_string(),
            value,
        })
    }

    pub fn in_condition(field: &str, values: Vec<Value>) -> Self {
        Self::single(Condition::In {
            field: field.to_string(),
            values,
        })
    }

    pub fn between(field: &str, start: Value, end: Value) -> Self {
        Self::single(Condition::Between {
            field: field.to_string(),
            start,
            end,
        })
    }

    pub fn is_null(field: &str) -> Self {
        Self::single(Condition::IsNull {
            field: field.to_string(),
        })
    }

    pub fn and(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            operator: LogicalOperator::And,
        }
    }

    pub fn or(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            operator: LogicalOperator::Or,
        }
    }

    pub fn to_sql(&self) -> String {
        match self.conditions.as_slice() {
            [] => "1=1".to_string(),
            [only] => only.to_sql(),
            many => {
                let joiner = match self.operator {
                    LogicalOperator::And => " AND ",
                    LogicalOperator::Or => " OR ",
                };
                let parts: Vec<String> = many.iter().map(Condition::to_sql).collect();
                format!("({})", parts.join(joiner))
            }
        }
    }
}

/// Render a JSON value as a SQL literal
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        _ => format!("'{}'", value.to_string().replace('\'', "''")),
    }
}

fn format_list(values: &[Value]) -> String {
    values
        .iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(", ")
}
