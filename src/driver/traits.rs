//! Driver abstraction traits
//!
//! This module defines the abstract interface to the browser-automation
//! driver. Concrete bindings (WebDriver, CDP, ...) implement these traits;
//! the page layer only ever sees the trait objects.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

/// Shared element reference
pub type Element = Arc<dyn ElementHandle>;

/// Window handle identifying one tab/window of a browser session
pub type WindowHandle = String;

/// Locator for resolving elements in the page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// CSS selector (e.g. `.spinner`, `#id`, `[attr=value]`)
    Css(String),
    /// XPath expression
    XPath(String),
}

impl Locator {
    /// Create a CSS selector locator
    pub fn css<S: Into<String>>(selector: S) -> Self {
        Locator::Css(selector.into())
    }

    /// Create an XPath locator
    pub fn xpath<S: Into<String>>(expression: S) -> Self {
        Locator::XPath(expression.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(selector) => write!(f, "css={}", selector),
            Locator::XPath(expression) => write!(f, "xpath={}", expression),
        }
    }
}

/// Browser session trait
///
/// Represents a running browser session. One page object owns exactly one
/// driver handle; sharing a handle across threads is unsupported.
///
/// Error contract: implementations signal a missing element as
/// [`Error::ElementNotFound`](crate::Error::ElementNotFound) and an
/// invalidated element as [`Error::StaleElement`](crate::Error::StaleElement);
/// the wait loops in the page layer special-case exactly those two classes.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigate the session to a URL
    async fn navigate(&self, url: &str) -> Result<(), crate::Error>;

    /// Reload the current page
    async fn refresh(&self) -> Result<(), crate::Error>;

    /// Execute a script with positional arguments and return its result
    async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value, crate::Error>;

    /// Resolve all elements currently matching a locator.
    ///
    /// An empty vec means nothing matches; that is not an error.
    async fn find_elements(&self, locator: &Locator) -> Result<Vec<Element>, crate::Error>;

    /// Enumerate open window handles.
    ///
    /// Precondition on implementations: enumeration order must follow window
    /// open order, so the last handle is the most recently opened window.
    /// A binding whose driver does not guarantee insertion order must derive
    /// the order itself (e.g. by diffing handle sets against a snapshot
    /// taken before the window was opened).
    async fn window_handles(&self) -> Result<Vec<WindowHandle>, crate::Error>;

    /// Switch the session context to the given window
    async fn switch_to_window(&self, handle: &WindowHandle) -> Result<(), crate::Error>;

    /// Maximize the current window's viewport
    async fn maximize_window(&self) -> Result<(), crate::Error>;
}

/// Element handle trait
///
/// Represents a DOM element in a page. The handle may become stale at any
/// point; every method can surface that as a stale-reference error.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// Get element ID
    fn id(&self) -> &str;

    /// JSON encoding of this element for use as a script argument
    fn script_arg(&self) -> Value {
        // W3C WebDriver element reference encoding
        json!({ "element-6066-11e4-a52e-4f735466cecf": self.id() })
    }

    /// Whether the element is currently displayed
    async fn is_displayed(&self) -> Result<bool, crate::Error>;

    /// Whether the element is enabled (not disabled/obscured)
    async fn is_enabled(&self) -> Result<bool, crate::Error>;

    /// Click the element
    async fn click(&self) -> Result<(), crate::Error>;

    /// Clear the element's current value
    async fn clear(&self) -> Result<(), crate::Error>;

    /// Type text into the element
    async fn type_text(&self, text: &str) -> Result<(), crate::Error>;

    /// Get the element's visible text
    async fn text(&self) -> Result<String, crate::Error>;

    /// Hover the pointer over the element without clicking
    async fn hover(&self) -> Result<(), crate::Error>;
}
