use super::{Model, ScopedQuery};
use crate::config::ApplicatorConfig;
use crate::input::{EnvInput, InputManager};
use crate::logging::{ScopeLogger, TracingLogger};
use crate::query_builder::QueryBuilder;
use crate::scopes::ScopeRegistry;
use std::fmt;
use std::sync::Arc;

/// Repository over a [`Model`] data provider.
///
/// Applies the model's scopes, but reads arguments and records invocations
/// through the repository's own input source and logger.
#[derive(Clone)]
pub struct Repository {
    data_provider: Model,
    input: Arc<dyn InputManager>,
    logger: Arc<dyn ScopeLogger>,
}

impl Repository {
    /// Wrap `data_provider` with default dependencies
    pub fn new(data_provider: Model) -> Self {
        let input = Arc::new(EnvInput::new(data_provider.config().env_prefix.clone()));
        Self {
            data_provider,
            input,
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn with_input_manager(self, input: impl InputManager + 'static) -> Self {
        self.with_shared_input_manager(Arc::new(input))
    }

    pub fn with_shared_input_manager(mut self, input: Arc<dyn InputManager>) -> Self {
        self.input = input;
        self
    }

    pub fn with_logger(self, logger: impl ScopeLogger + 'static) -> Self {
        self.with_shared_logger(Arc::new(logger))
    }

    pub fn with_shared_logger(mut self, logger: Arc<dyn ScopeLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn data_provider(&self) -> &Model {
        &self.data_provider
    }
}

impl ScopedQuery for Repository {
    type Target = QueryBuilder;

    fn input_manager(&self) -> &Arc<dyn InputManager> {
        &self.input
    }

    fn logger(&self) -> &Arc<dyn ScopeLogger> {
        &self.logger
    }

    fn scope_registry(&self) -> &ScopeRegistry<QueryBuilder> {
        self.data_provider.scope_registry()
    }

    fn config(&self) -> &ApplicatorConfig {
        self.data_provider.config()
    }

    fn new_query(&self) -> QueryBuilder {
        self.data_provider.new_query()
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("data_provider", &self.data_provider)
            .field("input", &"InputManager")
            .field("logger", &"ScopeLogger")
            .finish()
    }
}
