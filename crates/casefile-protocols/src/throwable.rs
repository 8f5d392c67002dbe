//! Live error boundary.
//!
//! A [`Throwable`] is what test runners hand to casefile when a failure is
//! captured, and what reconstruction hands back. Implementors expose a type
//! identifier, an optional message and a replaceable stack trace.

use std::fmt;

use crate::stack::StackFrame;

/// Type identifier of the generic error used when a failure cannot be rebuilt
/// with its original type.
pub const GENERIC_ERROR_TYPE: &str = "java.lang.RuntimeException";

/// Top-level error-type marker.
pub const THROWABLE_TYPE: &str = "java.lang.Throwable";

/// Type identifier of [`RemoteDriverError`] itself.
pub const REMOTE_DRIVER_ERROR_TYPE: &str = "casefile.RemoteDriverError";

/// A live error that carries a type identifier and a stack trace.
pub trait Throwable: std::error::Error + Send + Sync {
    /// Fully qualified type identifier of this error.
    fn type_name(&self) -> &str;

    /// Human-readable message, if any.
    fn message(&self) -> Option<&str>;

    /// Captured stack trace, innermost frame first.
    fn stack_trace(&self) -> &[StackFrame];

    /// Replace the stack trace.
    fn set_stack_trace(&mut self, stack_trace: Vec<StackFrame>);

    /// Type reported by the remote process this error wraps.
    ///
    /// Only wrappers around remote-driver errors return `Some`.
    fn reported_type(&self) -> Option<&str> {
        None
    }
}

/// Render a throwable the way a stack dump prints it:
/// `Type: message` followed by one `\tat frame` line per frame.
pub fn render_stack_trace(throwable: &dyn Throwable) -> String {
    let mut out = match throwable.message() {
        Some(message) => format!("{}: {}", throwable.type_name(), message),
        None => throwable.type_name().to_string(),
    };
    for frame in throwable.stack_trace() {
        out.push_str("\n\tat ");
        out.push_str(&frame.to_string());
    }
    out
}

/// General-purpose error with an arbitrary type identifier.
///
/// Reconstruction produces these, both for registered types and for the
/// generic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFailure {
    type_name: String,
    message: Option<String>,
    stack_trace: Vec<StackFrame>,
}

impl TestFailure {
    pub fn new(type_name: impl Into<String>, message: Option<&str>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.map(str::to_string),
            stack_trace: Vec::new(),
        }
    }

    /// Generic fallback whose message names the original type.
    pub fn generic(original_type: &str, message: Option<&str>) -> Self {
        let text = match message {
            Some(message) => format!("{}: {}", original_type, message),
            None => original_type.to_string(),
        };
        Self::new(GENERIC_ERROR_TYPE, Some(&text))
    }

    pub fn with_stack_trace(mut self, stack_trace: Vec<StackFrame>) -> Self {
        self.stack_trace = stack_trace;
        self
    }
}

impl fmt::Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str(&self.type_name),
        }
    }
}

impl std::error::Error for TestFailure {}

impl Throwable for TestFailure {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn stack_trace(&self) -> &[StackFrame] {
        &self.stack_trace
    }

    fn set_stack_trace(&mut self, stack_trace: Vec<StackFrame>) {
        self.stack_trace = stack_trace;
    }
}

/// An error raised on a remote automation driver and re-raised locally.
///
/// Its own type is [`REMOTE_DRIVER_ERROR_TYPE`]; the type the driver reported
/// is kept separately so encoding records the underlying failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDriverError {
    reported_type: String,
    message: Option<String>,
    stack_trace: Vec<StackFrame>,
}

impl RemoteDriverError {
    pub fn new(reported_type: impl Into<String>, message: Option<&str>) -> Self {
        Self {
            reported_type: reported_type.into(),
            message: message.map(str::to_string),
            stack_trace: Vec::new(),
        }
    }

    pub fn with_stack_trace(mut self, stack_trace: Vec<StackFrame>) -> Self {
        self.stack_trace = stack_trace;
        self
    }
}

impl fmt::Display for RemoteDriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Remote driver error ({})", self.reported_type)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for RemoteDriverError {}

impl Throwable for RemoteDriverError {
    fn type_name(&self) -> &str {
        REMOTE_DRIVER_ERROR_TYPE
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn stack_trace(&self) -> &[StackFrame] {
        &self.stack_trace
    }

    fn set_stack_trace(&mut self, stack_trace: Vec<StackFrame>) {
        self.stack_trace = stack_trace;
    }

    fn reported_type(&self) -> Option<&str> {
        Some(&self.reported_type)
    }
}

#[cfg(test)]
#[path = "throwable_tests.rs"]
mod tests;
