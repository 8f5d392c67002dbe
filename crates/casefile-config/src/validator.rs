//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Convert the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_logging(config, &mut result);
        Self::validate_registry(config, &mut result);

        result
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        // A bare level is the common case; full EnvFilter directives such as
        // "casefile_core=debug,info" are passed through unchecked.
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        } else if !level.contains('=')
            && !level.contains(',')
            && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        {
            result.add_error(ValidationError::new(
                "logging.level",
                format!("Unknown log level '{}', valid values: {:?}", level, LOG_LEVELS),
            ));
        }
    }

    fn validate_registry(config: &Config, result: &mut ValidationResult) {
        let mut seen = HashSet::new();
        let declared: HashSet<&str> = config
            .registry
            .types
            .iter()
            .map(|t| t.name.as_str())
            .collect();

        for (index, error_type) in config.registry.types.iter().enumerate() {
            let path = format!("registry.types[{}]", index);

            if error_type.name.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("{}.name", path),
                    "Type name cannot be empty",
                ));
                continue;
            }

            if !seen.insert(error_type.name.as_str()) {
                result.add_error(ValidationError::new(
                    format!("{}.name", path),
                    format!("Type '{}' is declared more than once", error_type.name),
                ));
            }

            if let Some(supertype) = &error_type.supertype {
                if supertype == &error_type.name {
                    result.add_error(ValidationError::new(
                        format!("{}.supertype", path),
                        format!("Type '{}' cannot extend itself", error_type.name),
                    ));
                } else if !config.registry.include_builtins && !declared.contains(supertype.as_str()) {
                    result.add_warning(ValidationWarning::new(
                        format!("{}.supertype", path),
                        format!(
                            "Supertype '{}' is not declared and builtins are disabled; \
                             classification will stop at '{}'",
                            supertype, error_type.name
                        ),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
