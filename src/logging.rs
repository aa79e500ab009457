//! # Structured Logging Module
//!
//! Audit sinks for applied scopes plus environment-aware console logging.
//!
//! Every applied scope is handed to a [`ScopeLogger`] as an event name and a
//! context map. Loggers are fire-and-forget: `record` has no error channel, and
//! the applicator isolates a panicking logger so it cannot abort application.

use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Context handed to a [`ScopeLogger`] alongside the event name
pub type LogContext = Map<String, Value>;

/// Sink for scope invocation records
pub trait ScopeLogger: Send + Sync {
    fn record(&self, event: &str, context: &LogContext);
}

impl<L: ScopeLogger + ?Sized> ScopeLogger for std::sync::Arc<L> {
    fn record(&self, event: &str, context: &LogContext) {
        (**self).record(event, context)
    }
}

/// Default logger: forwards records to `tracing` at INFO
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ScopeLogger for TracingLogger {
    fn record(&self, event: &str, context: &LogContext) {
        let field = |name: &str| context.get(name).cloned().unwrap_or(Value::Null);

        tracing::info!(
            event = %event,
            scope = %field("scope"),
            handler = %field("handler"),
            position = %field("position"),
            arguments = %field("arguments"),
            invocation_id = %field("invocation_id"),
            timestamp = %field("recorded_at"),
            "🔍 SCOPE_APPLIED"
        );
    }
}

/// Buffers every record in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(String, LogContext)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded `(event, context)` pairs
    pub fn entries(&self) -> Vec<(String, LogContext)> {
        self.entries.lock().clone()
    }

    /// Scope names in the order they were recorded
    pub fn scopes(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter_map(|(_, context)| context.get("scope").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl ScopeLogger for MemoryLogger {
    fn record(&self, event: &str, context: &LogContext) {
        self.entries.lock().push((event.to_string(), context.clone()));
    }
}

/// Discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl ScopeLogger for NullLogger {
    fn record(&self, _event: &str, _context: &LogContext) {}
}

/// Initialize console logging with environment-specific configuration.
///
/// Safe to call repeatedly; only the first call installs a subscriber, and an
/// already-installed global subscriber is left in place.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(std::io::stdout().is_terminal())
                .with_filter(filter),
        );

        if subscriber.try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(environment = %environment, "🔧 STRUCTURED LOGGING: Initialized");
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("SCOPE_APPLICATOR_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(scope: &str) -> LogContext {
        let mut map = Map::new();
        map.insert("scope".to_string(), json!(scope));
        map
    }

    #[test]
    fn test_environment_detection() {
        std::env::set_var("SCOPE_APPLICATOR_ENV", "test_override");
        let env = get_environment();
        assert_eq!(env, "test_override");
        std::env::remove_var("SCOPE_APPLICATOR_ENV");
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(get_log_level("test"), "debug");
        assert_eq!(get_log_level("development"), "debug");
        assert_eq!(get_log_level("production"), "info");
    }

    #[test]
    fn test_memory_logger_keeps_order() {
        let logger = MemoryLogger::new();
        logger.record("scope_applied", &context("active"));
        logger.record("scope_applied", &context("withinRange"));

        assert_eq!(logger.len(), 2);
        assert_eq!(logger.scopes(), vec!["active", "withinRange"]);

        logger.clear();
        assert!(logger.is_empty());
    }

    #[test]
    fn test_shared_logger_forwards() {
        let logger = std::sync::Arc::new(MemoryLogger::new());
        let shared: std::sync::Arc<dyn ScopeLogger> = logger.clone();
        shared.record("scope_applied", &context("active"));
        NullLogger.record("scope_applied", &context("ignored"));

        assert_eq!(logger.scopes(), vec!["active"]);
    }

    #[test]
    fn test_init_is_idempotent() {
        init_structured_logging();
        init_structured_logging();
        TracingLogger.record("scope_applied", &context("active"));
    }
}
