//! Error types for scope application.
//!

use thiserror::Error;

/// Failures raised while resolving, binding, or invoking scopes.
///
/// Every variant carries the scope name as the caller wrote it, so the
/// caller can present a meaningful message without extra bookkeeping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScopeError {
    /// The target exposes no handler for the requested scope
    #[error("Scope '{scope}' is not defined on the query target")]
    ScopeNotFound { scope: String },
    /// A required argument has no value in the input source
    #[error("Scope '{scope}' is missing required argument '{argument}'")]
    MissingScopeArgument { scope: String, argument: String },
    /// An argument value was present but unusable
    #[error("Scope '{scope}' received an invalid value for '{argument}': {reason}")]
    InvalidScopeArgument {
        scope: String,
        argument: String,
        reason: String,
    },
    /// The handler rejected its bound arguments
    #[error("Scope '{scope}' failed: {reason}")]
    HandlerFailed { scope: String, reason: String },
}

impl ScopeError {
    pub fn not_found(scope: impl Into<String>) -> Self {
        Self::ScopeNotFound {
            scope: scope.into(),
        }
    }

    pub fn missing_argument(scope: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::MissingScopeArgument {
            scope: scope.into(),
            argument: argument.into(),
        }
    }

    pub fn invalid_argument(
        scope: impl Into<String>,
        argument: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidScopeArgument {
            scope: scope.into(),
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    pub fn handler_failed(scope: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::HandlerFailed {
            scope: scope.into(),
            reason: reason.into(),
        }
    }

    /// Name of the scope that caused the failure
    pub fn scope(&self) -> &str {
        match self {
            Self::ScopeNotFound { scope }
            | Self::MissingScopeArgument { scope, .. }
            | Self::InvalidScopeArgument { scope, .. }
            | Self::HandlerFailed { scope, .. } => scope,
        }
    }

    /// Argument slot involved in the failure, when there is one
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::MissingScopeArgument { argument, .. }
            | Self::InvalidScopeArgument { argument, .. } => Some(argument),
            Self::ScopeNotFound { .. } | Self::HandlerFailed { .. } => None,
        }
    }
}

/// Failures reported by an input source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Input key '{key}' not found")]
    KeyNotFound { key: String },
    #[error("Input source error: {reason}")]
    Source { reason: String },
}

impl InputError {
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }
}

impl From<config::ConfigError> for InputError {
    fn from(error: config::ConfigError) -> Self {
        match error {
            config::ConfigError::NotFound(key) => InputError::KeyNotFound { key },
            other => InputError::Source {
                reason: other.to_string(),
            },
        }
    }
}

/// Failures while loading applicator configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
    #[error("Configuration source error: {0}")]
    Source(String),
}

impl From<config::ConfigError> for ConfigurationError {
    fn from(error: config::ConfigError) -> Self {
        ConfigurationError::Source(error.to_string())
    }
}

pub type ScopeResult<T> = std::result::Result<T, ScopeError>;
pub type InputResult<T> = std::result::Result<T, InputError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;
