//! The portable failure-cause value.
//!
//! A [`FailureCause`] is captured from a live [`Throwable`] when a test fails,
//! carried across a process boundary as JSON, and turned back into a live
//! error with [`FailureCause::to_exception`] on the consuming side.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use casefile_protocols::error::{ConstructionError, ProtocolError};
use casefile_protocols::stack::StackFrame;
use casefile_protocols::throwable::{TestFailure, Throwable};

use crate::message::normalize_message;
use crate::registry::{ErrorType, ErrorTypeRegistry};

/// Type identifier, normalized message and stack trace of a failure.
///
/// The message is normalized on construction and again on deserialization.
/// A message that still starts with a wrapper prefix after one normalization
/// therefore loses another layer when read back from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureCause {
    #[serde(default)]
    error_type: String,

    #[serde(default, deserialize_with = "deserialize_message")]
    message: Option<String>,

    #[serde(default)]
    stack_trace: Vec<StackFrame>,
}

fn deserialize_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let message = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_message(message.as_deref()))
}

/// Type identifier recorded for a live error.
///
/// Remote-driver wrappers record the type the driver reported.
fn error_type_of<T: Throwable + ?Sized>(cause: &T) -> String {
    cause
        .reported_type()
        .unwrap_or_else(|| cause.type_name())
        .to_string()
}

impl FailureCause {
    /// Build from already-serialized fields. The message is normalized.
    pub fn new(
        error_type: impl Into<String>,
        message: Option<&str>,
        stack_trace: Vec<StackFrame>,
    ) -> Self {
        Self {
            error_type: error_type.into(),
            message: normalize_message(message),
            stack_trace,
        }
    }

    /// Capture a live error.
    pub fn from_error<T: Throwable + ?Sized>(cause: &T) -> Self {
        Self::from_error_with_trace(cause, cause.stack_trace().to_vec())
    }

    /// Capture a live error, recording `stack_trace` instead of its own.
    pub fn from_error_with_trace<T: Throwable + ?Sized>(
        cause: &T,
        stack_trace: Vec<StackFrame>,
    ) -> Self {
        Self::new(error_type_of(cause), cause.message(), stack_trace)
    }

    /// Parse a serialized failure cause.
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn stack_trace(&self) -> &[StackFrame] {
        &self.stack_trace
    }

    /// Replace the stack trace reattached by reconstruction.
    pub fn set_stack_trace(&mut self, stack_trace: Vec<StackFrame>) {
        self.stack_trace = stack_trace;
    }

    /// Resolve the error type, or the top-level marker when it is unknown.
    pub fn error_class(&self, registry: &ErrorTypeRegistry) -> Arc<ErrorType> {
        registry
            .resolve(&self.error_type)
            .unwrap_or_else(|| registry.throwable())
    }

    /// Whether the failure is of type `category` or one of its subtypes.
    pub fn is_instance_of(&self, registry: &ErrorTypeRegistry, category: &str) -> bool {
        let class = self.error_class(registry);
        registry.is_subtype_of(class.name(), category)
    }

    /// Rebuild a live error approximating the original failure.
    ///
    /// Never fails: when the type is unknown or cannot be instantiated, a
    /// generic error whose message names the original type is returned.
    /// The result always carries this cause's current stack trace.
    pub fn to_exception(&self, registry: &ErrorTypeRegistry) -> Box<dyn Throwable> {
        let mut exception = self
            .restore_exception(registry)
            .unwrap_or_else(|| {
                Box::new(TestFailure::generic(&self.error_type, self.message())) as Box<dyn Throwable>
            });
        exception.set_stack_trace(self.stack_trace.clone());
        exception
    }

    fn restore_exception(&self, registry: &ErrorTypeRegistry) -> Option<Box<dyn Throwable>> {
        let Some(error_type) = registry.resolve(&self.error_type) else {
            debug!(error_type = %self.error_type, "Unknown error type, using generic failure");
            return None;
        };

        let restored = match error_type.constructor() {
            Some(constructor) => constructor.instantiate(error_type.name(), self.message()),
            None => Err(ConstructionError::NoConstructor(error_type.name().to_string())),
        };

        match restored {
            Ok(exception) => Some(exception),
            Err(e) => {
                warn!("Failed to restore {}: {}", error_type.name(), e);
                None
            }
        }
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.error_type, message)?,
            None => write!(f, "{}", self.error_type)?,
        }
        for frame in &self.stack_trace {
            write!(f, "\n\tat {}", frame)?;
        }
        Ok(())
    }
}

impl<T: Throwable> From<&T> for FailureCause {
    fn from(cause: &T) -> Self {
        Self::from_error(cause)
    }
}

#[cfg(test)]
#[path = "failure_cause_tests.rs"]
mod tests;
