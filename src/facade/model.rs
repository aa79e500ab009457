use super::ScopedQuery;
use crate::config::ApplicatorConfig;
use crate::error::ScopeResult;
use crate::input::{EnvInput, InputManager};
use crate::logging::{ScopeLogger, TracingLogger};
use crate::query_builder::QueryBuilder;
use crate::scopes::{ScopeArguments, ScopeParam, ScopeRegistry};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Table-backed query target.
///
/// Cloning is cheap: the registry and dependencies are shared.
#[derive(Clone)]
pub struct Model {
    table: String,
    registry: Arc<ScopeRegistry<QueryBuilder>>,
    input: Arc<dyn InputManager>,
    logger: Arc<dyn ScopeLogger>,
    config: ApplicatorConfig,
}

impl Model {
    pub fn builder(table: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(table)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn shared_registry(&self) -> &Arc<ScopeRegistry<QueryBuilder>> {
        &self.registry
    }
}

impl ScopedQuery for Model {
    type Target = QueryBuilder;

    fn input_manager(&self) -> &Arc<dyn InputManager> {
        &self.input
    }

    fn logger(&self) -> &Arc<dyn ScopeLogger> {
        &self.logger
    }

    fn scope_registry(&self) -> &ScopeRegistry<QueryBuilder> {
        &self.registry
    }

    fn config(&self) -> &ApplicatorConfig {
        &self.config
    }

    fn new_query(&self) -> QueryBuilder {
        QueryBuilder::new(&self.table)
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("table", &self.table)
            .field("registry", &self.registry)
            .field("input", &"InputManager")
            .field("logger", &"ScopeLogger")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for [`Model`]
pub struct ModelBuilder {
    table: String,
    registry: ScopeRegistry<QueryBuilder>,
    input: Option<Arc<dyn InputManager>>,
    logger: Option<Arc<dyn ScopeLogger>>,
    config: Option<ApplicatorConfig>,
}

impl ModelBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            registry: ScopeRegistry::new(),
            input: None,
            logger: None,
            config: None,
        }
    }

    /// Register a scope handler on the model
    pub fn scope<F>(mut self, name: &str, params: Vec<ScopeParam>, func: F) -> Self
    where
        F: Fn(QueryBuilder, &ScopeArguments) -> ScopeResult<QueryBuilder> + Send + Sync + 'static,
    {
        self.registry.register(name, params, func);
        self
    }

    /// Replace the registry wholesale
    pub fn registry(mut self, registry: ScopeRegistry<QueryBuilder>) -> Self {
        self.registry = registry;
        self
    }

    pub fn input_manager(self, input: impl InputManager + 'static) -> Self {
        self.shared_input_manager(Arc::new(input))
    }

    pub fn shared_input_manager(mut self, input: Arc<dyn InputManager>) -> Self {
        self.input = Some(input);
        self
    }

    pub fn logger(self, logger: impl ScopeLogger + 'static) -> Self {
        self.shared_logger(Arc::new(logger))
    }

    pub fn shared_logger(mut self, logger: Arc<dyn ScopeLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn config(mut self, config: ApplicatorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the model, defaulting any dependency that was not injected.
    ///
    /// Without an explicit config, settings come from [`ApplicatorConfig::from_env`];
    /// an invalid environment value is logged and the defaults are used instead.
    /// The default input reads environment variables under the configured
    /// prefix; the default logger forwards to `tracing`.
    pub fn build(self) -> Model {
        let config = self.config.unwrap_or_else(|| {
            ApplicatorConfig::from_env().unwrap_or_else(|error| {
                warn!(error = %error, "Invalid applicator configuration in environment; using defaults");
                ApplicatorConfig::default()
            })
        });
        let input = self
            .input
            .unwrap_or_else(|| Arc::new(EnvInput::new(config.env_prefix.clone())) as Arc<dyn InputManager>);
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger) as Arc<dyn ScopeLogger>);

        Model {
            table: self.table,
            registry: Arc::new(self.registry),
            input,
            logger,
            config,
        }
    }
}
