use super::arguments::{coerce, is_blank, ScopeArguments};
use super::record::InvocationRecord;
use super::registry::{ScopeParam, ScopeRegistry};
use super::request::{ScopeList, ScopeRequest};
use super::resolver::{ResolvedScope, ScopeResolver};
use crate::config::ApplicatorConfig;
use crate::error::{InputError, ScopeError, ScopeResult};
use crate::input::InputManager;
use crate::logging::ScopeLogger;
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, instrument, warn};

/// Applies an ordered list of scopes to a query target.
///
/// For each request, in list order: resolve the handler, bind its arguments
/// (explicit params first, then the input source), invoke it on the current
/// target, and record the invocation. The first failure aborts the whole list.
///
/// The target is moved through each handler, so a failed `apply` drops the
/// partially filtered target instead of handing it back. Records already sent
/// to the logger for earlier scopes remain.
pub struct ScopeApplicator<'a, T> {
    registry: &'a ScopeRegistry<T>,
    input: &'a dyn InputManager,
    logger: &'a dyn ScopeLogger,
    config: &'a ApplicatorConfig,
}

impl<'a, T> ScopeApplicator<'a, T> {
    pub fn new(
        registry: &'a ScopeRegistry<T>,
        input: &'a dyn InputManager,
        logger: &'a dyn ScopeLogger,
        config: &'a ApplicatorConfig,
    ) -> Self {
        Self {
            registry,
            input,
            logger,
            config,
        }
    }

    #[instrument(skip_all, fields(scopes = scopes.len()))]
    pub fn apply(&self, target: T, scopes: &ScopeList) -> ScopeResult<T> {
        let mut target = target;
        for (position, request) in scopes.iter().enumerate() {
            target = self.apply_one(target, request, position)?;
        }
        Ok(target)
    }

    fn apply_one(&self, target: T, request: &ScopeRequest, position: usize) -> ScopeResult<T> {
        let resolved = ScopeResolver::resolve(self.registry, &request.name)?;
        let arguments = self.bind_arguments(&resolved, request)?;
        let target = resolved.handler.invoke(target, &arguments)?;

        self.record(&resolved, &arguments, position);
        Ok(target)
    }

    /// Bind every slot of the resolved handler's signature
    pub fn bind_arguments(
        &self,
        resolved: &ResolvedScope<'_, T>,
        request: &ScopeRequest,
    ) -> ScopeResult<ScopeArguments> {
        let scope = resolved.scope;
        let params = resolved.handler.params();

        if request.params.len() > params.len() {
            return Err(ScopeError::invalid_argument(
                scope,
                format!("#{}", params.len() + 1),
                format!(
                    "takes {} argument(s) but {} were given",
                    params.len(),
                    request.params.len()
                ),
            ));
        }

        let mut values = Vec::with_capacity(params.len());
        for (index, param) in params.iter().enumerate() {
            let raw = match request.params.get(index) {
                Some(value) => Some(value.clone()),
                None => self.fetch(scope, request.input_prefix(), param)?,
            };

            let value = match raw.filter(|v| param.allow_empty || !is_blank(v)) {
                Some(value) => value,
                None => param
                    .default
                    .clone()
                    .ok_or_else(|| ScopeError::missing_argument(scope, &param.name))?,
            };
            let value = coerce(param.kind, value)
                .map_err(|reason| ScopeError::invalid_argument(scope, &param.name, reason))?;

            debug!(scope = %scope, argument = %param.name, value = %value, "Bound scope argument");
            values.push((param.name.clone(), value));
        }

        Ok(ScopeArguments::new(scope, values))
    }

    /// Probe then fetch one argument; absence is `None`, never an error
    fn fetch(&self, scope: &str, prefix: &str, param: &ScopeParam) -> ScopeResult<Option<Value>> {
        let key = self.config.input_key(prefix, param.input_slot());
        if !self.input.has(&key) {
            return Ok(None);
        }

        match self.input.get(&key) {
            Ok(value) => Ok(Some(value)),
            Err(InputError::KeyNotFound { .. }) => Ok(None),
            Err(error) => Err(ScopeError::invalid_argument(
                scope,
                &param.name,
                error.to_string(),
            )),
        }
    }

    fn record(&self, resolved: &ResolvedScope<'_, T>, arguments: &ScopeArguments, position: usize) {
        let record = InvocationRecord::new(
            resolved.scope,
            resolved.handler_id.as_str(),
            position,
            arguments.to_map(),
        );
        let context = record.to_context();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.logger.record(&self.config.log_event, &context)
        }));
        if outcome.is_err() {
            warn!(scope = %resolved.scope, "Scope logger panicked; record dropped");
        }
    }
}
