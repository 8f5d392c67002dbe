//! Builtin error types.
//!
//! The JVM and WebDriver error types test runners commonly report.

use casefile_protocols::throwable::{GENERIC_ERROR_TYPE, THROWABLE_TYPE};

use super::error_type::ErrorType;

const EXCEPTION: &str = "java.lang.Exception";
const ERROR: &str = "java.lang.Error";
const ASSERTION_ERROR: &str = "java.lang.AssertionError";
const WEBDRIVER_EXCEPTION: &str = "org.openqa.selenium.WebDriverException";

/// Names of all builtin error types.
pub const BUILTIN_TYPE_NAMES: &[&str] = &[
    THROWABLE_TYPE,
    EXCEPTION,
    ERROR,
    GENERIC_ERROR_TYPE,
    "java.lang.IllegalStateException",
    "java.lang.IllegalArgumentException",
    "java.lang.NullPointerException",
    "java.lang.UnsupportedOperationException",
    ASSERTION_ERROR,
    "org.opentest4j.AssertionFailedError",
    "org.junit.ComparisonFailure",
    WEBDRIVER_EXCEPTION,
    "org.openqa.selenium.NoSuchElementException",
    "org.openqa.selenium.TimeoutException",
    "org.openqa.selenium.StaleElementReferenceException",
    "org.openqa.selenium.ElementNotInteractableException",
];

pub(crate) fn error_types() -> Vec<ErrorType> {
    vec![
        ErrorType::new(THROWABLE_TYPE).with_text_constructor(),
        ErrorType::new(EXCEPTION).extends(THROWABLE_TYPE).with_text_constructor(),
        ErrorType::new(ERROR).extends(THROWABLE_TYPE).with_text_constructor(),
        ErrorType::new(GENERIC_ERROR_TYPE).extends(EXCEPTION).with_text_constructor(),
        ErrorType::new("java.lang.IllegalStateException")
            .extends(GENERIC_ERROR_TYPE)
            .with_text_constructor(),
        ErrorType::new("java.lang.IllegalArgumentException")
            .extends(GENERIC_ERROR_TYPE)
            .with_text_constructor(),
        ErrorType::new("java.lang.NullPointerException")
            .extends(GENERIC_ERROR_TYPE)
            .with_text_constructor(),
        ErrorType::new("java.lang.UnsupportedOperationException")
            .extends(GENERIC_ERROR_TYPE)
            .with_text_constructor(),
        // AssertionError only has an object-argument single-argument constructor.
        ErrorType::new(ASSERTION_ERROR).extends(ERROR).with_object_constructor(),
        ErrorType::new("org.opentest4j.AssertionFailedError")
            .extends(ASSERTION_ERROR)
            .with_text_constructor(),
        // Needs (message, expected, actual); resolvable for classification only.
        ErrorType::new("org.junit.ComparisonFailure").extends(ASSERTION_ERROR),
        ErrorType::new(WEBDRIVER_EXCEPTION)
            .extends(GENERIC_ERROR_TYPE)
            .with_text_constructor(),
        ErrorType::new("org.openqa.selenium.NoSuchElementException")
            .extends(WEBDRIVER_EXCEPTION)
            .with_text_constructor(),
        ErrorType::new("org.openqa.selenium.TimeoutException")
            .extends(WEBDRIVER_EXCEPTION)
            .with_text_constructor(),
        ErrorType::new("org.openqa.selenium.StaleElementReferenceException")
            .extends(WEBDRIVER_EXCEPTION)
            .with_text_constructor(),
        ErrorType::new("org.openqa.selenium.ElementNotInteractableException")
            .extends(WEBDRIVER_EXCEPTION)
            .with_text_constructor(),
    ]
}
