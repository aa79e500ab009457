//! Facade defaults driven by the process environment

mod common;

use common::product_registry;
use parking_lot::{const_mutex, Mutex};
use scope_applicator::config::{ENV_PREFIX_VAR, KEY_SEPARATOR_VAR};
use scope_applicator::facade::{Model, Repository, ScopedQuery};
use scope_applicator::input::MemoryInput;
use scope_applicator::logging::MemoryLogger;
use scope_applicator::scopes::{ParamKind, ScopeList, ScopeParam};
use serde_json::json;
use std::sync::Arc;

/// Tests in this binary mutate process-wide variables
static ENV_LOCK: Mutex<()> = const_mutex(());

fn warehouse_model() -> Model {
    Model::builder("products")
        .scope(
            "fromWarehouse",
            vec![ScopeParam::required("code", ParamKind::String)],
            |q, args| Ok(q.where_eq("warehouse", json!(args.str("code")?))),
        )
        .build()
}

#[test]
fn test_default_input_reads_prefixed_variables() {
    let _guard = ENV_LOCK.lock();
    std::env::set_var("SCOPE_FROMWAREHOUSE_CODE", "north");

    let model = warehouse_model();
    let result = model.apply_scopes(&ScopeList::from(["fromWarehouse"]));
    let repository_result = Repository::new(warehouse_model())
        .apply_scopes(&ScopeList::from(["fromWarehouse"]));
    std::env::remove_var("SCOPE_FROMWAREHOUSE_CODE");

    assert_eq!(
        result.unwrap().build_sql(),
        "SELECT * FROM products WHERE warehouse = 'north'"
    );
    assert_eq!(
        repository_result.unwrap().build_sql(),
        "SELECT * FROM products WHERE warehouse = 'north'"
    );
}

#[test]
fn test_env_prefix_override_reaches_default_input() {
    let _guard = ENV_LOCK.lock();
    std::env::set_var(ENV_PREFIX_VAR, "SHOP");
    std::env::set_var("SHOP_FROMWAREHOUSE_CODE", "south");

    let model = warehouse_model();
    let result = model.apply_scopes(&ScopeList::from(["fromWarehouse"]));
    std::env::remove_var("SHOP_FROMWAREHOUSE_CODE");
    std::env::remove_var(ENV_PREFIX_VAR);

    assert_eq!(model.config().env_prefix, "SHOP");
    assert_eq!(
        result.unwrap().build_sql(),
        "SELECT * FROM products WHERE warehouse = 'south'"
    );
}

#[test]
fn test_env_separator_changes_input_keys() {
    let _guard = ENV_LOCK.lock();
    std::env::set_var(KEY_SEPARATOR_VAR, "__");

    let logger = Arc::new(MemoryLogger::new());
    let model = Model::builder("products")
        .registry(product_registry())
        .input_manager(
            MemoryInput::new()
                .with("withinRange__min", 5)
                .with("withinRange__max", 15)
                .with("withinRange.min", 100)
                .with("withinRange.max", 200),
        )
        .shared_logger(logger.clone())
        .build();
    std::env::remove_var(KEY_SEPARATOR_VAR);

    let query = model
        .apply_scopes(&ScopeList::from(["withinRange"]))
        .unwrap();

    assert_eq!(model.config().key_separator, "__");
    assert_eq!(
        query.build_sql(),
        "SELECT * FROM products WHERE price BETWEEN 5 AND 15"
    );
    assert_eq!(logger.scopes(), vec!["withinRange"]);
}

#[test]
fn test_invalid_env_value_falls_back_to_defaults() {
    let _guard = ENV_LOCK.lock();
    std::env::set_var(KEY_SEPARATOR_VAR, "   ");

    let model = Model::builder("products").build();
    std::env::remove_var(KEY_SEPARATOR_VAR);

    assert_eq!(model.config().key_separator, ".");
}
