//! # Query Target Facades
//!
//! Objects that own a scope registry together with the input source and logger
//! used to apply it.
//!
//! - [`ScopedQuery`] - the facade contract with the `apply_scopes` entry points
//! - [`Model`] - table-backed facade over [`crate::query_builder::QueryBuilder`]
//! - [`Repository`] - wraps a [`Model`] as its data provider with its own dependencies
//!
//! Dependencies are injected at construction. Anything not injected is defaulted
//! once, when the facade is built, and the same instance is returned on every access.

mod model;
mod repository;

pub use model::{Model, ModelBuilder};
pub use repository::Repository;

use crate::config::ApplicatorConfig;
use crate::error::ScopeResult;
use crate::input::InputManager;
use crate::logging::ScopeLogger;
use crate::scopes::{ScopeApplicator, ScopeList, ScopeRegistry};
use std::sync::Arc;

/// A query target that knows how to apply scopes to itself
pub trait ScopedQuery {
    /// The value scopes are applied to and returned
    type Target;

    fn input_manager(&self) -> &Arc<dyn InputManager>;

    fn logger(&self) -> &Arc<dyn ScopeLogger>;

    fn scope_registry(&self) -> &ScopeRegistry<Self::Target>;

    fn config(&self) -> &ApplicatorConfig;

    /// Fresh, unfiltered target
    fn new_query(&self) -> Self::Target;

    /// Apply `scopes` to an existing target
    fn apply_scopes_to(&self, target: Self::Target, scopes: &ScopeList) -> ScopeResult<Self::Target> {
        ScopeApplicator::new(
            self.scope_registry(),
            self.input_manager().as_ref(),
            self.logger().as_ref(),
            self.config(),
        )
        .apply(target, scopes)
    }

    /// Apply `scopes` to a fresh target
    fn apply_scopes(&self, scopes: &ScopeList) -> ScopeResult<Self::Target> {
        self.apply_scopes_to(self.new_query(), scopes)
    }

    /// Build a default instance and apply `scopes` through it
    fn handle_scopes(scopes: impl Into<ScopeList>) -> ScopeResult<Self::Target>
    where
        Self: Default + Sized,
    {
        Self::default().apply_scopes(&scopes.into())
    }
}
