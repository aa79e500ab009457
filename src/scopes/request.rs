use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One scope the caller wants applied.
///
/// `params` are positional and bind to the handler's declared signature in
/// order. Slots left unfilled are looked up in the input source under
/// `<alias or name>.<slot>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawScopeRequest")]
pub struct ScopeRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Accepts either a bare scope name or the full object form
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScopeRequest {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        params: Vec<Value>,
        #[serde(default)]
        alias: Option<String>,
    },
}

impl From<RawScopeRequest> for ScopeRequest {
    fn from(raw: RawScopeRequest) -> Self {
        match raw {
            RawScopeRequest::Name(name) => ScopeRequest::new(name),
            RawScopeRequest::Full {
                name,
                params,
                alias,
            } => ScopeRequest {
                name,
                params,
                alias,
            },
        }
    }
}

impl ScopeRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            alias: None,
        }
    }

    pub fn with_param(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn with_params<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.params.extend(values.into_iter().map(Into::into));
        self
    }

    /// Read arguments under a different input prefix than the scope name
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Prefix used to derive input keys for this request
    pub fn input_prefix(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl From<&str> for ScopeRequest {
    fn from(name: &str) -> Self {
        ScopeRequest::new(name)
    }
}

impl From<String> for ScopeRequest {
    fn from(name: String) -> Self {
        ScopeRequest::new(name)
    }
}

/// Ordered scopes; list order is application order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeList {
    requests: Vec<ScopeRequest>,
}

impl ScopeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scope, consuming and returning self for chaining
    pub fn scope(mut self, request: impl Into<ScopeRequest>) -> Self {
        self.requests.push(request.into());
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScopeRequest> {
        self.requests.iter()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.requests.iter().map(|r| r.name.as_str()).collect()
    }
}

impl<R: Into<ScopeRequest>> FromIterator<R> for ScopeList {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            requests: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<R: Into<ScopeRequest>> From<Vec<R>> for ScopeList {
    fn from(requests: Vec<R>) -> Self {
        requests.into_iter().collect()
    }
}

impl<R: Into<ScopeRequest>, const N: usize> From<[R; N]> for ScopeList {
    fn from(requests: [R; N]) -> Self {
        requests.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ScopeList {
    type Item = &'a ScopeRequest;
    type IntoIter = std::slice::Iter<'a, ScopeRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_preserves_order() {
        let list = ScopeList::from(["active", "withinRange", "active"]);
        assert_eq!(list.names(), vec!["active", "withinRange", "active"]);
    }

    #[test]
    fn test_deserializes_mixed_forms() {
        let list: ScopeList = serde_json::from_value(json!([
            "active",
            {"name": "withinRange", "params": [10]},
            {"name": "byStatus", "alias": "status"}
        ]))
        .unwrap();

        assert_eq!(list.len(), 3);
        let requests: Vec<&ScopeRequest> = list.iter().collect();
        assert_eq!(requests[0], &ScopeRequest::new("active"));
        assert_eq!(requests[1].params, vec![json!(10)]);
        assert_eq!(requests[2].input_prefix(), "status");
    }

    #[test]
    fn test_input_prefix_defaults_to_name() {
        let request = ScopeRequest::new("withinRange").with_param(1);
        assert_eq!(request.input_prefix(), "withinRange");
    }
}
