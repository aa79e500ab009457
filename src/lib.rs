#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Scope Applicator
//!
//! Apply a named, ordered set of query scopes to a query builder, with each
//! scope's arguments pulled from an input source instead of being hard-coded.
//!
//! ## Overview
//!
//! A query target (a [`facade::Model`] or [`facade::Repository`]) exposes scopes
//! through an explicit [`scopes::ScopeRegistry`]. Given a [`scopes::ScopeList`],
//! the [`scopes::ScopeApplicator`] resolves each name to a handler, reads its
//! arguments from an [`input::InputManager`], invokes it on the current query,
//! and records the invocation through a [`logging::ScopeLogger`].
//!
//! Application is strictly sequential and fail-fast: the first unknown scope,
//! missing argument, or rejected argument aborts the whole list.
//!
//! ## Module Organization
//!
//! - [`scopes`] - registry, resolver, argument binding, and the applicator
//! - [`facade`] - `Model` / `Repository` query targets
//! - [`input`] - argument sources (memory, environment, config files)
//! - [`logging`] - invocation loggers and subscriber setup
//! - [`query_builder`] - chainable SQL-text builder used as the default target
//! - [`config`] - applicator settings
//! - [`error`] - structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use scope_applicator::facade::{Model, ScopedQuery};
//! use scope_applicator::input::MemoryInput;
//! use scope_applicator::scopes::{ParamKind, ScopeList, ScopeParam};
//! use serde_json::json;
//!
//! let products = Model::builder("products")
//!     .scope("active", vec![], |q, _| Ok(q.where_null("archived_at")))
//!     .scope(
//!         "cheaperThan",
//!         vec![ScopeParam::required("price", ParamKind::Integer)],
//!         |q, args| Ok(q.where_cmp("price", "<", json!(args.i64("price")?))),
//!     )
//!     .input_manager(MemoryInput::new().with("cheaperThan.price", "50"))
//!     .build();
//!
//! let query = products
//!     .apply_scopes(&ScopeList::from(["active", "cheaperThan"]))
//!     .unwrap();
//!
//! assert_eq!(
//!     query.build_sql(),
//!     "SELECT * FROM products WHERE archived_at IS NULL AND price < 50"
//! );
//! ```

pub mod config;
pub mod error;
pub mod facade;
pub mod input;
pub mod logging;
pub mod query_builder;
pub mod scopes;

pub use crate::config::ApplicatorConfig;
pub use crate::error::{ConfigurationError, InputError, ScopeError, ScopeResult};
pub use crate::facade::{Model, ModelBuilder, Repository, ScopedQuery};
pub use crate::input::{ConfigInput, EnvInput, InputManager, MemoryInput};
pub use crate::logging::{init_structured_logging, MemoryLogger, NullLogger, ScopeLogger, TracingLogger};
pub use crate::query_builder::QueryBuilder;
pub use crate::scopes::{
    InvocationRecord, ParamKind, ScopeApplicator, ScopeArguments, ScopeList, ScopeParam,
    ScopeRegistry, ScopeRequest, ScopeResolver,
};
