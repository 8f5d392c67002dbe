//! Top-level protocol error type.

use thiserror::Error;

use super::{ConstructionError, RegistryError};

/// Top-level protocol error type.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
