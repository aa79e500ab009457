mod common;

use common::product_model;
use common::strategies::*;
use proptest::prelude::*;
use scope_applicator::facade::ScopedQuery;
use scope_applicator::input::MemoryInput;
use scope_applicator::logging::MemoryLogger;
use scope_applicator::scopes::{ScopeList, ScopeResolver};
use scope_applicator::ScopeError;
use std::sync::Arc;

proptest! {
    /// Property: every scope in a resolvable list is logged exactly once, in list order
    #[test]
    fn resolvable_lists_log_one_record_per_scope(names in resolvable_scope_list_strategy()) {
        let logger = Arc::new(MemoryLogger::new());
        let model = product_model(MemoryInput::new(), logger.clone());

        let result = model.apply_scopes(&ScopeList::from(names.clone()));

        prop_assert!(result.is_ok());
        prop_assert_eq!(logger.scopes(), names);
    }

    /// Property: an unknown scope aborts the list exactly at its position
    #[test]
    fn unknown_scope_stops_at_its_position(
        prefix in resolvable_scope_list_strategy(),
        unknown in unknown_scope_name_strategy(),
        suffix in resolvable_scope_list_strategy(),
    ) {
        let logger = Arc::new(MemoryLogger::new());
        let model = product_model(MemoryInput::new(), logger.clone());

        let names: Vec<String> = prefix
            .iter()
            .map(|s| s.to_string())
            .chain(std::iter::once(unknown.clone()))
            .chain(suffix.iter().map(|s| s.to_string()))
            .collect();

        let error = model.apply_scopes(&ScopeList::from(names)).unwrap_err();

        prop_assert_eq!(error, ScopeError::not_found(unknown));
        prop_assert_eq!(logger.scopes(), prefix);
    }

    /// Property: pure filter scopes reproduce the same query on repeated application
    #[test]
    fn repeated_application_is_deterministic(names in resolvable_scope_list_strategy()) {
        let model = product_model(MemoryInput::new(), Arc::new(MemoryLogger::new()));
        let scopes = ScopeList::from(names);

        let first = model.apply_scopes(&scopes).unwrap();
        let second = model.apply_scopes(&scopes).unwrap();

        prop_assert_eq!(first.build_sql(), second.build_sql());
    }

    /// Property: handler identifiers are idempotent under the naming convention
    #[test]
    fn handler_ids_are_idempotent(name in "[a-zA-Z][a-zA-Z0-9_-]{0,24}") {
        let id = ScopeResolver::handler_id(&name);
        prop_assert_eq!(ScopeResolver::handler_id(&id), id.clone());
        prop_assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
    }
}
