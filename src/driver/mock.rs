//! Mock driver implementation for testing
//!
//! This module provides mock implementations of the driver traits with
//! scriptable readiness behavior: elements that become visible after a
//! number of polls, go stale for the first N clicks, or fail their state
//! queries outright.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::traits::{Driver, Element, ElementHandle, Locator, WindowHandle};
use crate::Error;

/// Failure class a mock element can be scripted to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Element not found
    NotFound,
    /// Stale element reference
    Stale,
    /// Unclassified driver error
    Driver,
}

impl MockFailure {
    fn into_error(self, id: &str) -> Error {
        match self {
            MockFailure::NotFound => Error::element_not_found(id),
            MockFailure::Stale => Error::stale_element(id),
            MockFailure::Driver => Error::driver(format!("mock driver failure on {}", id)),
        }
    }
}

/// Mock DOM element with scriptable readiness behavior
pub struct MockElement {
    id: String,
    tag_name: String,
    text_content: Option<String>,
    /// Number of displayed-checks that report false before reporting true
    displayed_after: usize,
    /// Number of enabled-checks that report false before reporting true
    enabled_after: usize,
    /// Number of leading click attempts that fail with a stale reference
    stale_clicks: usize,
    /// When set, every state query fails with this class
    state_failure: Option<MockFailure>,
    /// When set, every click fails with this class (takes precedence over
    /// `stale_clicks`)
    click_failure: Option<MockFailure>,
    displayed_checks: AtomicUsize,
    enabled_checks: AtomicUsize,
    clicks: AtomicUsize,
    clears: AtomicUsize,
    hovers: AtomicUsize,
    typed: RwLock<Vec<String>>,
}

impl MockElement {
    /// Create a new mock element, immediately displayed and enabled
    pub fn new(tag_name: &str, text_content: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tag_name: tag_name.to_string(),
            text_content: text_content.map(str::to_string),
            displayed_after: 0,
            enabled_after: 0,
            stale_clicks: 0,
            state_failure: None,
            click_failure: None,
            displayed_checks: AtomicUsize::new(0),
            enabled_checks: AtomicUsize::new(0),
            clicks: AtomicUsize::new(0),
            clears: AtomicUsize::new(0),
            hovers: AtomicUsize::new(0),
            typed: RwLock::new(Vec::new()),
        }
    }

    /// Report not-displayed for the first `polls` checks
    pub fn displayed_after(mut self, polls: usize) -> Self {
        self.displayed_after = polls;
        self
    }

    /// Never report displayed
    pub fn never_displayed(mut self) -> Self {
        self.displayed_after = usize::MAX;
        self
    }

    /// Report disabled for the first `polls` checks
    pub fn enabled_after(mut self, polls: usize) -> Self {
        self.enabled_after = polls;
        self
    }

    /// Fail the first `clicks` click attempts with a stale reference
    pub fn stale_for(mut self, clicks: usize) -> Self {
        self.stale_clicks = clicks;
        self
    }

    /// Fail every click attempt with a stale reference
    pub fn always_stale(mut self) -> Self {
        self.stale_clicks = usize::MAX;
        self
    }

    /// Fail every state query with the given class
    pub fn failing_state(mut self, failure: MockFailure) -> Self {
        self.state_failure = Some(failure);
        self
    }

    /// Fail every click with the given class
    pub fn failing_click(mut self, failure: MockFailure) -> Self {
        self.click_failure = Some(failure);
        self
    }

    /// Tag name this element was created with
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Number of displayed-checks performed so far
    pub fn displayed_checks(&self) -> usize {
        self.displayed_checks.load(Ordering::SeqCst)
    }

    /// Number of click attempts performed so far
    pub fn click_attempts(&self) -> usize {
        self.clicks.load(Ordering::SeqCst)
    }

    /// Number of clear calls performed so far
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    /// Number of hover gestures performed so far
    pub fn hover_count(&self) -> usize {
        self.hovers.load(Ordering::SeqCst)
    }

    /// Text typed into the element, in call order
    pub async fn typed(&self) -> Vec<String> {
        self.typed.read().await.clone()
    }
}

#[async_trait]
impl ElementHandle for MockElement {
    fn id(&self) -> &str {
        &self.id
    }

    async fn is_displayed(&self) -> Result<bool, Error> {
        if let Some(failure) = self.state_failure {
            return Err(failure.into_error(&self.id));
        }
        let seen = self.displayed_checks.fetch_add(1, Ordering::SeqCst);
        Ok(seen >= self.displayed_after)
    }

    async fn is_enabled(&self) -> Result<bool, Error> {
        if let Some(failure) = self.state_failure {
            return Err(failure.into_error(&self.id));
        }
        let seen = self.enabled_checks.fetch_add(1, Ordering::SeqCst);
        Ok(seen >= self.enabled_after)
    }

    async fn click(&self) -> Result<(), Error> {
        let attempt = self.clicks.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.click_failure {
            return Err(failure.into_error(&self.id));
        }
        if attempt < self.stale_clicks {
            return Err(Error::stale_element(&self.id));
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), Error> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<(), Error> {
        self.typed.write().await.push(text.to_string());
        Ok(())
    }

    async fn text(&self) -> Result<String, Error> {
        Ok(self.text_content.clone().unwrap_or_default())
    }

    async fn hover(&self) -> Result<(), Error> {
        self.hovers.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Mock browser session
///
/// Records every navigation, script and window operation, and serves
/// scripted locator-match sequences and script results.
pub struct MockDriver {
    navigations: RwLock<Vec<String>>,
    refreshes: AtomicUsize,
    scripts: RwLock<Vec<(String, Vec<Value>)>>,
    script_results: RwLock<VecDeque<Value>>,
    /// Per-locator sequence of match counts served by successive
    /// `find_elements` calls; the last entry repeats once the sequence is
    /// exhausted, unknown locators match nothing
    locator_matches: RwLock<HashMap<Locator, VecDeque<usize>>>,
    find_calls: AtomicUsize,
    windows: RwLock<Vec<WindowHandle>>,
    current_window: RwLock<Option<WindowHandle>>,
    maximized: AtomicBool,
}

impl MockDriver {
    /// Create a new mock driver with a single open window
    pub fn new() -> Self {
        Self {
            navigations: RwLock::new(Vec::new()),
            refreshes: AtomicUsize::new(0),
            scripts: RwLock::new(Vec::new()),
            script_results: RwLock::new(VecDeque::new()),
            locator_matches: RwLock::new(HashMap::new()),
            find_calls: AtomicUsize::new(0),
            windows: RwLock::new(vec![Uuid::new_v4().to_string()]),
            current_window: RwLock::new(None),
            maximized: AtomicBool::new(false),
        }
    }

    /// Replace the open windows with the given handles, in open order
    pub async fn set_windows(&self, handles: Vec<&str>) {
        *self.windows.write().await = handles.into_iter().map(str::to_string).collect();
    }

    /// Script the match counts served for a locator by successive
    /// `find_elements` calls
    pub async fn set_matches(&self, locator: Locator, counts: Vec<usize>) {
        self.locator_matches
            .write()
            .await
            .insert(locator, counts.into());
    }

    /// Queue a result for the next `execute_script` call
    pub async fn push_script_result(&self, value: Value) {
        self.script_results.write().await.push_back(value);
    }

    /// URLs navigated to, in call order
    pub async fn navigations(&self) -> Vec<String> {
        self.navigations.read().await.clone()
    }

    /// Number of page reloads performed
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    /// Scripts executed so far, with their arguments
    pub async fn scripts(&self) -> Vec<(String, Vec<Value>)> {
        self.scripts.read().await.clone()
    }

    /// Number of `find_elements` calls performed
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Window the session is currently switched to, if any switch happened
    pub async fn current_window(&self) -> Option<WindowHandle> {
        self.current_window.read().await.clone()
    }

    /// Whether the current window was maximized
    pub fn was_maximized(&self) -> bool {
        self.maximized.load(Ordering::SeqCst)
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn navigate(&self, url: &str) -> Result<(), Error> {
        self.navigations.write().await.push(url.to_string());
        Ok(())
    }

    async fn refresh(&self) -> Result<(), Error> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value, Error> {
        self.scripts
            .write()
            .await
            .push((script.to_string(), args));
        Ok(self
            .script_results
            .write()
            .await
            .pop_front()
            .unwrap_or(Value::Null))
    }

    async fn find_elements(&self, locator: &Locator) -> Result<Vec<Element>, Error> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let mut table = self.locator_matches.write().await;
        let count = match table.get_mut(locator) {
            Some(sequence) if sequence.len() > 1 => sequence.pop_front().unwrap_or(0),
            Some(sequence) => sequence.front().copied().unwrap_or(0),
            None => 0,
        };
        Ok((0..count)
            .map(|_| Arc::new(MockElement::new("div", None)) as Element)
            .collect())
    }

    async fn window_handles(&self) -> Result<Vec<WindowHandle>, Error> {
        Ok(self.windows.read().await.clone())
    }

    async fn switch_to_window(&self, handle: &WindowHandle) -> Result<(), Error> {
        if !self.windows.read().await.contains(handle) {
            return Err(Error::window_not_found(handle));
        }
        *self.current_window.write().await = Some(handle.clone());
        Ok(())
    }

    async fn maximize_window(&self) -> Result<(), Error> {
        self.maximized.store(true, Ordering::SeqCst);
        Ok(())
    }
}
