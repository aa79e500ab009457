use super::arguments::ScopeArguments;
use super::resolver::ScopeResolver;
use crate::error::ScopeResult;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Expected shape of an argument value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Any,
    String,
    Integer,
    Float,
    Boolean,
    List,
}

/// One slot of a scope handler's signature
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeParam {
    pub name: String,
    pub kind: ParamKind,
    /// Declared default; a parameter without one is required
    pub default: Option<Value>,
    /// Input slot name, when it differs from `name`
    pub alias: Option<String>,
    /// Treat empty strings and empty lists as real values
    pub allow_empty: bool,
}

impl ScopeParam {
    pub fn required(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            alias: None,
            allow_empty: false,
        }
    }

    pub fn optional(name: impl Into<String>, kind: ParamKind, default: impl Into<Value>) -> Self {
        Self {
            default: Some(default.into()),
            ..Self::required(name, kind)
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn allowing_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Slot name used when deriving the input key
    pub fn input_slot(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

pub type ScopeFn<T> = dyn Fn(T, &ScopeArguments) -> ScopeResult<T> + Send + Sync;

/// A filter capability: a declared signature plus the function applying it
pub struct ScopeHandler<T> {
    id: String,
    params: Vec<ScopeParam>,
    func: Arc<ScopeFn<T>>,
}

impl<T> ScopeHandler<T> {
    pub fn new<F>(id: impl Into<String>, params: Vec<ScopeParam>, func: F) -> Self
    where
        F: Fn(T, &ScopeArguments) -> ScopeResult<T> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            params,
            func: Arc::new(func),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn params(&self) -> &[ScopeParam] {
        &self.params
    }

    pub fn invoke(&self, target: T, arguments: &ScopeArguments) -> ScopeResult<T> {
        (self.func)(target, arguments)
    }
}

impl<T> Clone for ScopeHandler<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            params: self.params.clone(),
            func: Arc::clone(&self.func),
        }
    }
}

impl<T> fmt::Debug for ScopeHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeHandler")
            .field("id", &self.id)
            .field("params", &self.params)
            .field("func", &"Fn")
            .finish()
    }
}

/// Scope handlers available on a query target, keyed by handler identifier.
///
/// Names are normalized with [`ScopeResolver::handler_id`] on registration, so
/// `withinRange`, `within-range` and `within_range` all register the same slot.
pub struct ScopeRegistry<T> {
    handlers: HashMap<String, ScopeHandler<T>>,
}

impl<T> ScopeRegistry<T> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler, replacing any previous one with the same identifier
    pub fn register<F>(&mut self, name: &str, params: Vec<ScopeParam>, func: F) -> &mut Self
    where
        F: Fn(T, &ScopeArguments) -> ScopeResult<T> + Send + Sync + 'static,
    {
        let id = ScopeResolver::handler_id(name);
        if self.handlers.contains_key(&id) {
            warn!(scope = %name, handler = %id, "Replacing existing scope handler");
        }
        debug!(scope = %name, handler = %id, arity = params.len(), "Registered scope handler");

        self.handlers
            .insert(id.clone(), ScopeHandler::new(id, params, func));
        self
    }

    /// Builder-style [`ScopeRegistry::register`]
    pub fn with_scope<F>(mut self, name: &str, params: Vec<ScopeParam>, func: F) -> Self
    where
        F: Fn(T, &ScopeArguments) -> ScopeResult<T> + Send + Sync + 'static,
    {
        self.register(name, params, func);
        self
    }

    /// Capability probe by handler identifier
    pub fn contains(&self, handler_id: &str) -> bool {
        self.handlers.contains_key(handler_id)
    }

    pub fn get(&self, handler_id: &str) -> Option<&ScopeHandler<T>> {
        self.handlers.get(handler_id)
    }

    /// Registered handler identifiers, sorted
    pub fn handler_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> Default for ScopeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ScopeRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<T> fmt::Debug for ScopeRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeRegistry")
            .field("handlers", &self.handler_ids())
            .finish()
    }
}
