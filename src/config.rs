use crate::error::{ConfigResult, ConfigurationError};

pub const KEY_SEPARATOR_VAR: &str = "SCOPE_APPLICATOR_KEY_SEPARATOR";
pub const LOG_EVENT_VAR: &str = "SCOPE_APPLICATOR_LOG_EVENT";
pub const ENV_PREFIX_VAR: &str = "SCOPE_APPLICATOR_ENV_PREFIX";

/// Settings shared by the applicator and the default input sources
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicatorConfig {
    /// Joins the scope prefix and argument slot into an input key (`withinRange.min`)
    pub key_separator: String,
    /// Event name handed to the logger for every applied scope
    pub log_event: String,
    /// Prefix used by [`crate::input::EnvInput`] when mapping keys to variables
    pub env_prefix: String,
}

impl Default for ApplicatorConfig {
    fn default() -> Self {
        Self {
            key_separator: ".".to_string(),
            log_event: "scope_applied".to_string(),
            env_prefix: "SCOPE".to_string(),
        }
    }
}

impl ApplicatorConfig {
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Ok(separator) = std::env::var(KEY_SEPARATOR_VAR) {
            config.key_separator = non_empty(KEY_SEPARATOR_VAR, separator)?;
        }

        if let Ok(event) = std::env::var(LOG_EVENT_VAR) {
            config.log_event = non_empty(LOG_EVENT_VAR, event)?;
        }

        if let Ok(prefix) = std::env::var(ENV_PREFIX_VAR) {
            config.env_prefix = non_empty(ENV_PREFIX_VAR, prefix)?;
        }

        Ok(config)
    }

    /// Derive the input key for an argument slot
    pub fn input_key(&self, prefix: &str, slot: &str) -> String {
        format!("{prefix}{}{slot}", self.key_separator)
    }
}

fn non_empty(key: &str, value: String) -> ConfigResult<String> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::InvalidValue {
            key: key.to_string(),
            reason: "value must not be empty".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_key() {
        let config = ApplicatorConfig::default();
        assert_eq!(config.input_key("withinRange", "min"), "withinRange.min");
    }

    #[test]
    fn test_custom_separator() {
        let config = ApplicatorConfig {
            key_separator: "__".to_string(),
            ..ApplicatorConfig::default()
        };
        assert_eq!(config.input_key("withinRange", "max"), "withinRange__max");
    }

    #[test]
    fn test_from_env_rejects_empty_values() {
        std::env::set_var(LOG_EVENT_VAR, "  ");
        let result = ApplicatorConfig::from_env();
        std::env::remove_var(LOG_EVENT_VAR);

        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidValue { ref key, .. }) if key == LOG_EVENT_VAR
        ));
    }
}
