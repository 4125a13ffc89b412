//! Configuration validation utilities.

use super::error::{ConfigError, ConfigResult};
use super::schema::{LogOutput, LoggingConfig, RoutingConfig, SwitchyardConfig};

/// Validates the entire configuration.
pub fn validate_config(config: &SwitchyardConfig) -> ConfigResult<()> {
    validate_logging_config(&config.logging)?;
    validate_routing_config(&config.routing)?;
    Ok(())
}

/// Validates logging settings.
fn validate_logging_config(logging: &LoggingConfig) -> ConfigResult<()> {
    if logging.output == LogOutput::File && logging.file_path.is_none() {
        return Err(ConfigError::missing_field("logging.file_path"));
    }

    if logging.max_files == 0 {
        return Err(ConfigError::validation(
            "logging.max_files must be greater than 0",
        ));
    }

    if logging.filters.keys().any(|module| module.trim().is_empty()) {
        return Err(ConfigError::validation(
            "logging.filters keys must be non-empty module paths",
        ));
    }

    Ok(())
}

/// Validates payload pointers.
fn validate_routing_config(routing: &RoutingConfig) -> ConfigResult<()> {
    validate_pointer("routing.action_pointer", &routing.action_pointer)?;
    validate_pointer("routing.request_id_pointer", &routing.request_id_pointer)?;
    Ok(())
}

/// Validates a JSON pointer. The empty pointer addresses the whole payload
/// and is never a string field, so it is rejected too.
fn validate_pointer(field: &str, pointer: &str) -> ConfigResult<()> {
    if pointer.is_empty() {
        return Err(ConfigError::missing_field(field));
    }

    if !pointer.starts_with('/') {
        return Err(ConfigError::invalid_pointer(field, pointer));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;

    #[test]
    fn test_validate_default_config() {
        let config = SwitchyardConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_file_output_requires_path() {
        let mut config = SwitchyardConfig::default();
        config.logging.output = LogOutput::File;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::MissingField { .. })
        ));

        config.logging.file_path = Some("logs/switchyard.log".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_max_files() {
        let mut config = SwitchyardConfig::default();
        config.logging.max_files = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_validate_filters() {
        let mut config = SwitchyardConfig::default();
        config
            .logging
            .filters
            .insert("switchyard_framework".to_string(), LogLevel::Trace);
        assert!(validate_config(&config).is_ok());

        config.logging.filters.insert(" ".to_string(), LogLevel::Debug);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_pointers() {
        let mut config = SwitchyardConfig::default();
        config.routing.action_pointer = "jwt_payload/action_id".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidPointer { .. })
        ));

        config.routing.action_pointer = "/jwt_payload/action_id".to_string();
        config.routing.request_id_pointer = String::new();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::MissingField { .. })
        ));
    }
}
