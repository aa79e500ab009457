//! Shared fixtures for integration tests

#![allow(dead_code)]

pub mod strategies;

use scope_applicator::facade::{Model, ScopedQuery};
use scope_applicator::input::{InputManager, MemoryInput};
use scope_applicator::logging::{MemoryLogger, ScopeLogger};
use scope_applicator::query_builder::QueryBuilder;
use scope_applicator::scopes::{ParamKind, ScopeParam, ScopeRegistry};
use scope_applicator::{ApplicatorConfig, ScopeError};
use serde_json::json;
use std::sync::Arc;

/// Scopes available on the `products` table
pub fn product_registry() -> ScopeRegistry<QueryBuilder> {
    ScopeRegistry::<QueryBuilder>::new()
        .with_scope("active", vec![], |q, _| Ok(q.where_eq("active", json!(true))))
        .with_scope(
            "withinRange",
            vec![
                ScopeParam::required("min", ParamKind::Integer),
                ScopeParam::required("max", ParamKind::Integer),
            ],
            |q, args| {
                let (min, max) = (args.i64("min")?, args.i64("max")?);
                if min > max {
                    return Err(ScopeError::handler_failed(
                        args.scope(),
                        format!("min {min} is greater than max {max}"),
                    ));
                }
                Ok(q.where_between("price", json!(min), json!(max)))
            },
        )
        .with_scope(
            "byStatus",
            vec![ScopeParam::required("in", ParamKind::List)],
            |q, args| Ok(q.where_in("status", args.list("in")?.to_vec())),
        )
        .with_scope(
            "inStock",
            vec![ScopeParam::optional("flag", ParamKind::Boolean, true)],
            |q, args| {
                if args.bool("flag")? {
                    Ok(q.where_cmp("stock", ">", json!(0)))
                } else {
                    Ok(q.where_cmp("stock", "=", json!(0)))
                }
            },
        )
        .with_scope(
            "paged",
            vec![
                ScopeParam::optional("page", ParamKind::Integer, 1),
                ScopeParam::optional("per_page", ParamKind::Integer, 20).with_alias("size"),
            ],
            |q, args| {
                let page = u32::try_from(args.i64("page")?)
                    .map_err(|_| ScopeError::invalid_argument(args.scope(), "page", "must be positive"))?;
                let per_page = u32::try_from(args.i64("per_page")?)
                    .map_err(|_| ScopeError::invalid_argument(args.scope(), "per_page", "must be positive"))?;
                Ok(q.paginate(page, per_page))
            },
        )
}

pub fn product_model(input: MemoryInput, logger: Arc<MemoryLogger>) -> Model {
    Model::builder("products")
        .registry(product_registry())
        .input_manager(input)
        .shared_logger(logger)
        .build()
}

/// A user-defined model type, constructed with `Default` like a framework model
pub struct ProductModel {
    inner: Model,
}

impl Default for ProductModel {
    fn default() -> Self {
        Self {
            inner: Model::builder("products")
                .registry(product_registry())
                .input_manager(MemoryInput::new())
                .build(),
        }
    }
}

impl ProductModel {
    pub fn into_model(self) -> Model {
        self.inner
    }
}

impl ScopedQuery for ProductModel {
    type Target = QueryBuilder;

    fn input_manager(&self) -> &Arc<dyn InputManager> {
        self.inner.input_manager()
    }

    fn logger(&self) -> &Arc<dyn ScopeLogger> {
        self.inner.logger()
    }

    fn scope_registry(&self) -> &ScopeRegistry<QueryBuilder> {
        self.inner.scope_registry()
    }

    fn config(&self) -> &ApplicatorConfig {
        self.inner.config()
    }

    fn new_query(&self) -> QueryBuilder {
        self.inner.new_query()
    }
}
