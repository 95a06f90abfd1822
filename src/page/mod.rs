//! # Page object layer
//!
//! The element readiness controller and its wait policies.
//!
//! ## Main functionality
//! - **Bounded waits**: visibility, invisibility and clickable waits that
//!   swallow transient not-ready conditions and degrade softly on timeout
//! - **Click retry**: stale-aware click with a fixed attempt budget
//! - **Interaction utilities**: typing, scrolling, hovering, script
//!   execution, custom dropdown selection, tab switching
//! - **Navigation**: load/refresh against the configured base URL
//!
//! ## Module structure
//! - `wait`: wait policies and the bounded poll loop
//! - `base`: the `BasePage` controller
//! - `scripts`: JavaScript snippets executed in the page

pub mod base;
pub mod scripts;
pub mod wait;


pub use base::{BasePage, DropdownSelection, Presence};
pub use wait::WaitPolicy;
