//! # Query Scopes Module
//!
//! Named, composable filters applied to a query target in caller-given order,
//! with their arguments pulled from an input source.
//!
//! ## Architecture
//!
//! - [`ScopeRegistry`]: the target's capability surface. Each scope is a handler
//!   with a declared signature; adding a scope means registering a handler.
//! - [`ScopeResolver`]: maps a scope name to a handler identifier by naming
//!   convention (`withinRange` → `within_range`) and probes the registry.
//! - [`ScopeApplicator`]: resolves, binds, invokes, and records every scope in a
//!   [`ScopeList`], failing fast on the first error.
//! - [`InvocationRecord`]: the audit entry logged for each applied scope.
//!
//! ## Usage
//!
//! ```rust
//! use scope_applicator::config::ApplicatorConfig;
//! use scope_applicator::input::MemoryInput;
//! use scope_applicator::logging::MemoryLogger;
//! use scope_applicator::query_builder::QueryBuilder;
//! use scope_applicator::scopes::{ParamKind, ScopeApplicator, ScopeList, ScopeParam, ScopeRegistry};
//! use serde_json::json;
//!
//! let registry = ScopeRegistry::<QueryBuilder>::new()
//!     .with_scope("active", vec![], |q, _| Ok(q.where_eq("active", json!(true))))
//!     .with_scope(
//!         "withinRange",
//!         vec![
//!             ScopeParam::required("min", ParamKind::Integer),
//!             ScopeParam::required("max", ParamKind::Integer),
//!         ],
//!         |q, args| Ok(q.where_between("price", args.get("min")?.clone(), args.get("max")?.clone())),
//!     );
//!
//! let input = MemoryInput::new().with("withinRange.min", 10).with("withinRange.max", 20);
//! let logger = MemoryLogger::new();
//! let config = ApplicatorConfig::default();
//!
//! let query = ScopeApplicator::new(&registry, &input, &logger, &config)
//!     .apply(QueryBuilder::new("products"), &ScopeList::from(["active", "withinRange"]))
//!     .unwrap();
//!
//! assert_eq!(
//!     query.build_sql(),
//!     "SELECT * FROM products WHERE active = true AND price BETWEEN 10 AND 20"
//! );
//! assert_eq!(logger.scopes(), vec!["active", "withinRange"]);
//! ```

pub mod applicator;
pub mod arguments;
pub mod record;
pub mod registry;
pub mod request;
pub mod resolver;

pub use applicator::ScopeApplicator;
pub use arguments::ScopeArguments;
pub use record::InvocationRecord;
pub use registry::{ParamKind, ScopeFn, ScopeHandler, ScopeParam, ScopeRegistry};
pub use request::{ScopeList, ScopeRequest};
pub use resolver::{ResolvedScope, ScopeResolver};
