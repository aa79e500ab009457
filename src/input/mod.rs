//! # Input Sources
//!
//! Scope arguments are never hard-coded by the caller. They are looked up by key
//! (`<scope>.<slot>`, e.g. `withinRange.min`) in an [`InputManager`].
//!
//! ## Available Sources
//!
//! - [`MemoryInput`] - in-memory map, built key by key or from a JSON document
//! - [`EnvInput`] - process environment variables under a prefix
//! - [`ConfigInput`] - layered files and environment through the `config` crate
//!
//! The applicator always probes [`InputManager::has`] before calling
//! [`InputManager::get`]. An absent key (including a `KeyNotFound` from `get`)
//! becomes [`crate::error::ScopeError::MissingScopeArgument`]; any other source
//! failure becomes [`crate::error::ScopeError::InvalidScopeArgument`].

mod config_source;
mod env;
mod memory;

pub use config_source::ConfigInput;
pub use env::EnvInput;
pub use memory::MemoryInput;

use crate::error::InputResult;
use serde_json::Value;

/// Keyed source of scope argument values
pub trait InputManager: Send + Sync {
    /// Whether a value exists for `key`
    fn has(&self, key: &str) -> bool;

    /// Fetch the value stored under `key`
    fn get(&self, key: &str) -> InputResult<Value>;
}

impl<I: InputManager + ?Sized> InputManager for std::sync::Arc<I> {
    fn has(&self, key: &str) -> bool {
        (**self).has(key)
    }

    fn get(&self, key: &str) -> InputResult<Value> {
        (**self).get(key)
    }
}
