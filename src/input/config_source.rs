use super::InputManager;
use crate::error::{ConfigResult, InputResult};
use config::{Config, Environment, File};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Input backed by a layered `config::Config`.
///
/// Useful for batch jobs and CLIs where scope arguments live in a settings file
/// that the environment may override.
#[derive(Debug, Clone)]
pub struct ConfigInput {
    config: Config,
}

impl ConfigInput {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load a single settings file, format inferred from its extension
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading scope input from file");

        let config = Config::builder()
            .add_source(File::from(path))
            .build()?;
        Ok(Self::new(config))
    }

    /// Load a settings file, then let `<PREFIX>__<SCOPE>__<SLOT>` variables override it
    pub fn from_file_with_env(path: impl AsRef<Path>, env_prefix: &str) -> ConfigResult<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(Environment::with_prefix(env_prefix).separator("__"))
            .build()?;
        Ok(Self::new(config))
    }

    fn lookup(&self, key: &str) -> InputResult<Value> {
        match self.config.get::<Value>(key) {
            Ok(value) => Ok(value),
            Err(config::ConfigError::NotFound(_)) if key.chars().any(char::is_uppercase) => {
                // File and environment sources may fold keys to lowercase
                Ok(self.config.get::<Value>(&key.to_lowercase())?)
            }
            Err(error) => Err(error.into()),
        }
    }
}

impl InputManager for ConfigInput {
    fn has(&self, key: &str) -> bool {
        self.lookup(key).is_ok()
    }

    fn get(&self, key: &str) -> InputResult<Value> {
        self.lookup(key)
    }
}
