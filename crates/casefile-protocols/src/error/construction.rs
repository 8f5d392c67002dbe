//! Errors raised while instantiating a registered error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("No text or object constructor registered for {0}")]
    NoConstructor(String),

    #[error("Constructor for {type_name} rejected its argument: {message}")]
    Rejected { type_name: String, message: String },

    #[error("Constructor for {0} panicked")]
    Panicked(String),
}
