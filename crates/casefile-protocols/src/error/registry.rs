//! Error-type registry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Error type already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Error type not found: {0}")]
    NotFound(String),

    #[error("Invalid error type definition for {name}: {message}")]
    InvalidDefinition { name: String, message: String },
}
