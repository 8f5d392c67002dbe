//! Error-type registration for casefile.

use tracing::{debug, info};

use casefile_config::{ConstructorKind, ErrorTypeConfig, RegistryConfig};
use casefile_core::registry::{ErrorType, ErrorTypeRegistry};
use casefile_protocols::error::RegistryError;

/// Build the error-type registry described by the configuration.
pub(crate) fn build_registry(config: &RegistryConfig) -> Result<ErrorTypeRegistry, RegistryError> {
    let registry = if config.include_builtins {
        ErrorTypeRegistry::with_builtins()
    } else {
        ErrorTypeRegistry::new()
    };

    for type_config in &config.types {
        debug!("Registering error type {}", type_config.name);
        registry.register(error_type_from_config(type_config))?;
    }

    info!(
        "Error-type registry ready: {} types ({} from config)",
        registry.len(),
        config.types.len()
    );
    Ok(registry)
}

fn error_type_from_config(config: &ErrorTypeConfig) -> ErrorType {
    let mut error_type = ErrorType::new(config.name.clone());
    if let Some(supertype) = &config.supertype {
        error_type = error_type.extends(supertype.clone());
    }
    match config.constructor {
        ConstructorKind::Text => error_type.with_text_constructor(),
        ConstructorKind::Object => error_type.with_object_constructor(),
        ConstructorKind::None => error_type,
    }
}
