//! Error-type registry.

use std::sync::Arc;

use tracing::warn;

use casefile_protocols::error::RegistryError;
use casefile_protocols::throwable::THROWABLE_TYPE;

use super::base::BaseRegistry;
use super::builtin;
use super::error_type::ErrorType;

/// Registry mapping type identifiers to constructible error descriptors.
///
/// Populated explicitly at startup. Identifiers that were never registered are
/// treated as unresolvable by reconstruction.
pub struct ErrorTypeRegistry {
    inner: BaseRegistry<ErrorType>,
}

impl ErrorTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Create a registry holding the builtin error types.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for error_type in builtin::error_types() {
            let name = error_type.name().to_string();
            if let Err(e) = registry.register(error_type) {
                warn!("Failed to register builtin error type {}: {}", name, e);
            }
        }
        registry
    }

    /// Register an error type.
    pub fn register(&self, error_type: ErrorType) -> Result<(), RegistryError> {
        if error_type.name().trim().is_empty() {
            return Err(RegistryError::InvalidDefinition {
                name: error_type.name().to_string(),
                message: "type name cannot be empty".to_string(),
            });
        }
        if error_type.supertype() == Some(error_type.name()) {
            return Err(RegistryError::InvalidDefinition {
                name: error_type.name().to_string(),
                message: "type cannot extend itself".to_string(),
            });
        }
        self.inner.register(Arc::new(error_type))
    }

    /// Unregister an error type.
    pub fn unregister(&self, name: &str) -> Result<(), RegistryError> {
        self.inner.unregister(name)
    }

    /// Resolve a type identifier.
    pub fn resolve(&self, name: &str) -> Option<Arc<ErrorType>> {
        self.inner.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    /// Registered type identifiers, sorted.
    pub fn list_ids(&self) -> Vec<String> {
        let mut ids = self.inner.list_ids();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The top-level error-type marker.
    ///
    /// Returns the registered descriptor when there is one, otherwise a
    /// constructor-less marker.
    pub fn throwable(&self) -> Arc<ErrorType> {
        self.resolve(THROWABLE_TYPE)
            .unwrap_or_else(|| Arc::new(ErrorType::new(THROWABLE_TYPE)))
    }

    /// Whether `name` is `ancestor` or transitively extends it.
    ///
    /// Every type is a subtype of the top-level marker. Supertype chains are
    /// followed through registered types only, and a cyclic chain stops after
    /// visiting each registered type once.
    pub fn is_subtype_of(&self, name: &str, ancestor: &str) -> bool {
        if name == ancestor || ancestor == THROWABLE_TYPE {
            return true;
        }

        let mut current = self.resolve(name);
        let mut remaining = self.len();
        while let Some(error_type) = current {
            if remaining == 0 {
                break;
            }
            remaining -= 1;

            match error_type.supertype() {
                Some(supertype) if supertype == ancestor => return true,
                Some(supertype) => current = self.resolve(supertype),
                None => break,
            }
        }
        false
    }
}

impl Default for ErrorTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
