//! Error types for the casefile protocol layer.

mod construction;
mod protocol;
mod registry;

pub use construction::*;
pub use protocol::*;
pub use registry::*;
