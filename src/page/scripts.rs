//! JavaScript script constants
//!
//! Centralizes the scripts the page layer executes in the browser.

/// Scroll the element passed as the first argument into view.
///
/// Used before clicks to get the target out from under a fixed navigation
/// header or a transient error banner, both of which can overlay elements
/// after a scroll.
pub const SCROLL_INTO_VIEW_SCRIPT: &str = "arguments[0].scrollIntoView(true);";

/// Read the current form value of the element passed as the first argument
pub const READ_VALUE_SCRIPT: &str = "return arguments[0].value";
