//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Error-type registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Register the builtin JVM/WebDriver error types.
    #[serde(default = "default_true")]
    pub include_builtins: bool,

    #[serde(default)]
    pub types: Vec<ErrorTypeConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtins: true,
            types: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// An error type registered from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTypeConfig {
    pub name: String,

    #[serde(default)]
    pub supertype: Option<String>,

    #[serde(default)]
    pub constructor: ConstructorKind,
}

/// Constructor available for a configured error type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructorKind {
    /// Single text argument.
    #[default]
    Text,
    /// Single object argument.
    Object,
    /// No usable single-argument constructor; classification only.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.registry.include_builtins);
        assert!(config.registry.types.is_empty());
    }

    #[test]
    fn test_constructor_kind_default() {
        assert_eq!(ConstructorKind::default(), ConstructorKind::Text);
    }

    #[test]
    fn test_error_type_config_defaults() {
        let parsed: ErrorTypeConfig = toml::from_str(r#"name = "com.acme.CheckoutError""#).unwrap();
        assert_eq!(parsed.name, "com.acme.CheckoutError");
        assert!(parsed.supertype.is_none());
        assert_eq!(parsed.constructor, ConstructorKind::Text);
    }

    #[test]
    fn test_constructor_kind_names() {
        let parsed: ErrorTypeConfig = toml::from_str(
            r#"
            name = "org.junit.ComparisonFailure"
            constructor = "none"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.constructor, ConstructorKind::None);
    }
}
