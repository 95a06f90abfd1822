//! Unified error types for Pagewait

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Pagewait
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Element not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Stale element reference: the underlying DOM node has been replaced
    /// or removed since the handle was obtained
    #[error("Stale element reference: {0}")]
    StaleElement(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Navigation failed
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// Script execution failed
    #[error("Script execution failed: {0}")]
    ScriptExecutionFailed(String),

    /// Window not found
    #[error("Window not found: {0}")]
    WindowNotFound(String),

    /// Assertion failed
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unclassified driver error
    #[error("Driver error: {0}")]
    Driver(String),
}

impl Error {
    /// Create a new element not found error
    pub fn element_not_found<S: Into<String>>(id: S) -> Self {
        Error::ElementNotFound(id.into())
    }

    /// Create a new stale element reference error
    pub fn stale_element<S: Into<String>>(id: S) -> Self {
        Error::StaleElement(id.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new navigation failed error
    pub fn navigation_failed<S: Into<String>>(msg: S) -> Self {
        Error::NavigationFailed(msg.into())
    }

    /// Create a new script execution failed error
    pub fn script_execution_failed<S: Into<String>>(msg: S) -> Self {
        Error::ScriptExecutionFailed(msg.into())
    }

    /// Create a new window not found error
    pub fn window_not_found<S: Into<String>>(msg: S) -> Self {
        Error::WindowNotFound(msg.into())
    }

    /// Create a new assertion error
    pub fn assertion<S: Into<String>>(msg: S) -> Self {
        Error::Assertion(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new unclassified driver error
    pub fn driver<S: Into<String>>(msg: S) -> Self {
        Error::Driver(msg.into())
    }

    /// Whether this is a transient not-ready condition that a bounded wait
    /// swallows and retries instead of aborting on.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::ElementNotFound(_) | Error::StaleElement(_))
    }
}
