//! Error-type registry: type identifiers to constructible error descriptors.

pub mod base;
mod builtin;
mod error_type;
mod types;

pub use builtin::BUILTIN_TYPE_NAMES;
pub use error_type::{ConstructorShape, ErrorConstructor, ErrorType, ObjectFactory, TextFactory};
pub use types::ErrorTypeRegistry;
