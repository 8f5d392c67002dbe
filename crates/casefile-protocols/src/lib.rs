//! # casefile Protocols
//!
//! Shared definitions for the casefile workspace.
//! Contains the boundary types only - no reconstruction logic.
//!
//! ## Core Types
//!
//! - [`StackFrame`] - One call-site record of a captured stack trace
//! - [`Throwable`] - Trait for live errors that can be encoded and reconstructed
//! - [`TestFailure`] - The concrete error produced by reconstruction
//! - [`RemoteDriverError`] - Wrapper around an error reported by a remote driver

pub mod error;
pub mod stack;
pub mod throwable;

pub use error::{ConstructionError, ProtocolError, RegistryError};
pub use stack::StackFrame;
pub use throwable::{
    render_stack_trace, RemoteDriverError, TestFailure, Throwable, GENERIC_ERROR_TYPE,
    REMOTE_DRIVER_ERROR_TYPE, THROWABLE_TYPE,
};
