//! # casefile Core
//!
//! Portable test-failure causes.
//!
//! ## Components
//!
//! - [`FailureCause`] - The serializable failure value and its reconstruction
//! - [`ErrorTypeRegistry`] - Type identifiers to constructible error types
//! - [`message`] - Normalization of driver-wrapped failure messages

pub mod failure_cause;
pub mod message;
pub mod registry;

pub use failure_cause::FailureCause;
pub use message::{
    normalize, normalize_message, ERROR_MESSAGE_LABEL_DOUBLE_QUOTED,
    ERROR_MESSAGE_LABEL_SINGLE_QUOTED,
};
pub use registry::{ConstructorShape, ErrorConstructor, ErrorType, ErrorTypeRegistry};
