//! Constructible error-type descriptors.
//!
//! An [`ErrorType`] is what a type identifier resolves to: its supertype for
//! classification, and the constructor shapes it can be rebuilt with.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde_json::Value;

use casefile_protocols::error::ConstructionError;
use casefile_protocols::throwable::{TestFailure, Throwable};

use super::base::Registerable;

/// Factory taking the message as text.
pub type TextFactory =
    dyn Fn(Option<&str>) -> Result<Box<dyn Throwable>, ConstructionError> + Send + Sync;

/// Factory taking the message as a generic value (`null` when absent).
pub type ObjectFactory =
    dyn Fn(&Value) -> Result<Box<dyn Throwable>, ConstructionError> + Send + Sync;

/// Single-argument constructor shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorShape {
    Text,
    Object,
}

impl ConstructorShape {
    /// Order in which shapes are tried during reconstruction. First match wins.
    pub const SEARCH_ORDER: [ConstructorShape; 2] = [ConstructorShape::Text, ConstructorShape::Object];
}

/// A registered single-argument constructor.
#[derive(Clone)]
pub enum ErrorConstructor {
    Text(Arc<TextFactory>),
    Object(Arc<ObjectFactory>),
}

impl ErrorConstructor {
    pub fn text<F>(factory: F) -> Self
    where
        F: Fn(Option<&str>) -> Result<Box<dyn Throwable>, ConstructionError> + Send + Sync + 'static,
    {
        Self::Text(Arc::new(factory))
    }

    pub fn object<F>(factory: F) -> Self
    where
        F: Fn(&Value) -> Result<Box<dyn Throwable>, ConstructionError> + Send + Sync + 'static,
    {
        Self::Object(Arc::new(factory))
    }

    pub fn shape(&self) -> ConstructorShape {
        match self {
            Self::Text(_) => ConstructorShape::Text,
            Self::Object(_) => ConstructorShape::Object,
        }
    }

    /// Call the factory with `message`.
    ///
    /// A panicking factory is reported as [`ConstructionError::Panicked`].
    pub fn instantiate(
        &self,
        type_name: &str,
        message: Option<&str>,
    ) -> Result<Box<dyn Throwable>, ConstructionError> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match self {
            Self::Text(factory) => factory(message),
            Self::Object(factory) => {
                let argument = message.map_or(Value::Null, |m| Value::String(m.to_string()));
                factory(&argument)
            }
        }));
        outcome.unwrap_or_else(|_| Err(ConstructionError::Panicked(type_name.to_string())))
    }
}

impl fmt::Debug for ErrorConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorConstructor::{:?}", self.shape())
    }
}

/// Descriptor of a resolvable error type.
#[derive(Debug, Clone)]
pub struct ErrorType {
    name: String,
    supertype: Option<String>,
    constructors: Vec<ErrorConstructor>,
}

impl ErrorType {
    /// A classification-only type with no constructors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertype: None,
            constructors: Vec::new(),
        }
    }

    pub fn extends(mut self, supertype: impl Into<String>) -> Self {
        self.supertype = Some(supertype.into());
        self
    }

    pub fn with_constructor(mut self, constructor: ErrorConstructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Add a text constructor building a [`TestFailure`] of this type.
    pub fn with_text_constructor(self) -> Self {
        let name = self.name.clone();
        self.with_constructor(ErrorConstructor::text(move |message| {
            Ok(Box::new(TestFailure::new(name.clone(), message)) as Box<dyn Throwable>)
        }))
    }

    /// Add an object constructor building a [`TestFailure`] of this type.
    ///
    /// Strings are used as-is, `null` means no message, anything else is
    /// rendered as JSON.
    pub fn with_object_constructor(self) -> Self {
        let name = self.name.clone();
        self.with_constructor(ErrorConstructor::object(move |value| {
            let message = match value {
                Value::Null => None,
                Value::String(text) => Some(text.clone()),
                other => Some(other.to_string()),
            };
            Ok(Box::new(TestFailure::new(name.clone(), message.as_deref())) as Box<dyn Throwable>)
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supertype(&self) -> Option<&str> {
        self.supertype.as_deref()
    }

    pub fn constructors(&self) -> &[ErrorConstructor] {
        &self.constructors
    }

    /// The constructor reconstruction uses, following
    /// [`ConstructorShape::SEARCH_ORDER`].
    pub fn constructor(&self) -> Option<&ErrorConstructor> {
        ConstructorShape::SEARCH_ORDER.iter().find_map(|shape| {
            self.constructors
                .iter()
                .find(|constructor| constructor.shape() == *shape)
        })
    }

    /// True when the type has no usable constructor.
    pub fn is_marker(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Registerable for ErrorType {
    fn registry_id(&self) -> &str {
        &self.name
    }
}
