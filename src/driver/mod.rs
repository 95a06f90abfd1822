//! # Driver abstraction layer
//!
//! Defines the interface to the external browser-automation driver and an
//! in-memory mock implementation for tests.
//!
//! ## Core concepts
//! - **Driver**: one browser session; navigation, script execution, window
//!   management, locator resolution
//! - **ElementHandle**: reference to a DOM node; may go stale between
//!   resolution and use
//!
//! ## Module structure
//! - `traits`: the driver and element trait definitions
//! - `mock`: mock implementations with scriptable readiness behavior

pub mod traits;
pub mod mock;

#[cfg(test)]
mod tests;

pub use traits::{Driver, Element, ElementHandle, Locator, WindowHandle};

// Re-export mock implementations for downstream test code
pub use mock::{MockDriver, MockElement, MockFailure};
