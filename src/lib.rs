//! Pagewait: reliable page-object primitives for browser test automation
//!
//! This library sits between test code and a browser-automation driver and
//! makes interaction with possibly-not-yet-ready or transiently-stale UI
//! elements reliable, by retrying against a time budget instead of failing
//! immediately.

pub mod error;
pub mod config;

pub mod driver;
pub mod page;

// Re-exports
pub use config::Config;
pub use driver::{Driver, Element, ElementHandle, Locator};
pub use error::{Error, Result};
pub use page::{BasePage, DropdownSelection, Presence, WaitPolicy};

/// Pagewait library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
