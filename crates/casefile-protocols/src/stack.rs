//! Stack frame records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One call-site record of a captured stack trace.
///
/// Frames are stored innermost first. They are passed through untouched:
/// nothing in casefile interprets their contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    #[serde(rename = "declaringClass")]
    pub declaring_type: String,

    pub method_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
}

impl StackFrame {
    /// Create a frame with no source location.
    pub fn new(declaring_type: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            method_name: method_name.into(),
            file_name: None,
            line_number: None,
        }
    }

    /// Set the source file and line.
    pub fn at(mut self, file_name: impl Into<String>, line_number: u32) -> Self {
        self.file_name = Some(file_name.into());
        self.line_number = Some(line_number);
        self
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.declaring_type, self.method_name)?;
        match (&self.file_name, self.line_number) {
            (Some(file), Some(line)) => write!(f, "{}:{}", file, line)?,
            (Some(file), None) => write!(f, "{}", file)?,
            (None, _) => write!(f, "Unknown Source")?,
        }
        write!(f, ")")
    }
}
