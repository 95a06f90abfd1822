//! Page object base
//!
//! `BasePage` is the element readiness controller: it wraps a driver handle
//! with bounded waits, a stale-aware click retry, and the interaction
//! utilities page objects build on.

use crate::config::Config;
use crate::driver::{Driver, Element, ElementHandle, Locator, WindowHandle};
use crate::error::{Error, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::scripts;
use super::wait::WaitPolicy;

/// Total click attempts before giving up on a stale element
const CLICK_ATTEMPTS: usize = 3;

/// Fixed message raised when a field error fly-out shows the wrong text
const HINT_TEXT_MISMATCH: &str = "Hint Text isn't expected";

/// Outcome of a presence probe.
///
/// Keeps the failure mode that made the element "absent" instead of
/// collapsing everything into a boolean; `BasePage::is_element_present` is
/// the boolean convenience on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The element reports as displayed
    Present,
    /// The element reports as not displayed, or its reference could not be
    /// resolved (not found / stale)
    AbsentNotFound,
    /// A driver error outside the not-found classes occurred
    AbsentError,
}

/// Outcome of a custom dropdown selection.
///
/// No-match is surfaced explicitly rather than completing silently; the
/// caller decides whether absence of the option is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownSelection {
    /// An option matched and was clicked
    Matched,
    /// No option matched; nothing was clicked
    NotMatched,
}

/// Page object base over one driver handle.
///
/// Construction takes the driver and an immutable [`Config`] loaded once by
/// the test setup; there is no process-global configuration state.
pub struct BasePage {
    driver: Arc<dyn Driver>,
    config: Config,
    visibility: WaitPolicy,
    invisibility: WaitPolicy,
}

impl BasePage {
    /// Create a page object with the two fixed wait policies
    pub fn new(driver: Arc<dyn Driver>, config: Config) -> Self {
        Self::with_policies(
            driver,
            config,
            WaitPolicy::visibility(),
            WaitPolicy::invisibility(),
        )
    }

    /// Create a page object with explicit wait policies
    pub fn with_policies(
        driver: Arc<dyn Driver>,
        config: Config,
        visibility: WaitPolicy,
        invisibility: WaitPolicy,
    ) -> Self {
        Self {
            driver,
            config,
            visibility,
            invisibility,
        }
    }

    /// The driver handle this page object operates on
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// The injected environment configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Navigate to the configured base URL
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<()> {
        info!("Loading page: {}", self.config.application_url);
        self.driver.navigate(&self.config.application_url).await
    }

    /// The configured base URL
    pub fn page_url(&self) -> &str {
        &self.config.application_url
    }

    /// Reload the current page
    #[instrument(skip(self))]
    pub async fn refresh_page(&self) -> Result<()> {
        self.driver.refresh().await
    }

    /// Wait until the element is displayed.
    ///
    /// Returns `Ok(None)` when the wait budget runs out; the caller must
    /// handle the missing result. Non-transient driver errors propagate.
    #[instrument(skip_all, fields(element = element.id()))]
    pub async fn wait_for_visibility(&self, element: &Element) -> Result<Option<Element>> {
        let probe = element.clone();
        let outcome = self
            .visibility
            .until("element visibility", || {
                let el = probe.clone();
                async move { el.is_displayed().await }
            })
            .await;

        match outcome {
            Ok(()) => Ok(Some(element.clone())),
            Err(Error::Timeout(_)) => {
                warn!(
                    "element {} still not visible after the wait budget",
                    element.id()
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Wait until no element matches the locator.
    ///
    /// Never signals failure: a timeout is logged and swallowed.
    #[instrument(skip(self))]
    pub async fn wait_for_invisibility(&self, locator: &Locator) -> Result<()> {
        let driver = self.driver.clone();
        let target = locator.clone();
        let outcome = self
            .invisibility
            .until("element invisibility", || {
                let driver = driver.clone();
                let locator = target.clone();
                async move { Ok(driver.find_elements(&locator).await?.is_empty()) }
            })
            .await;

        match outcome {
            Ok(()) => Ok(()),
            Err(Error::Timeout(_)) => {
                warn!("{} still present after the wait budget", locator);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Wait until the element is displayed and enabled.
    ///
    /// Best effort: on timeout the original element is returned unchanged
    /// and the caller may still attempt to use it at its own risk.
    #[instrument(skip_all, fields(element = element.id()))]
    pub async fn wait_for_clickable(&self, element: &Element) -> Result<Element> {
        self.wait_for_visibility(element).await?;

        let probe = element.clone();
        let outcome = self
            .visibility
            .until("element clickable", || {
                let el = probe.clone();
                async move { Ok(el.is_displayed().await? && el.is_enabled().await?) }
            })
            .await;

        match outcome {
            Ok(()) => Ok(element.clone()),
            Err(Error::Timeout(_)) => {
                warn!(
                    "element {} still not clickable after the wait budget",
                    element.id()
                );
                Ok(element.clone())
            }
            Err(e) => Err(e),
        }
    }

    /// Wait for the element to be clickable, then click it.
    ///
    /// A stale reference during the click is retried, re-checking readiness
    /// each time, up to 3 total attempts with no backoff. Returns `true` iff
    /// an attempt completed without going stale; `false` once the attempt
    /// budget is spent. Other error classes propagate.
    #[instrument(skip_all, fields(element = element.id()))]
    pub async fn click(&self, element: &Element) -> Result<bool> {
        for attempt in 1..=CLICK_ATTEMPTS {
            let target = self.wait_for_clickable(element).await?;
            match target.click().await {
                Ok(()) => return Ok(true),
                Err(Error::StaleElement(_)) => {
                    debug!("stale reference on click attempt {}, retrying", attempt);
                }
                Err(e) => return Err(e),
            }
        }
        warn!(
            "element {} went stale on all {} click attempts",
            element.id(),
            CLICK_ATTEMPTS
        );
        Ok(false)
    }

    /// Wait for the element to be clickable, clear its value, then type the
    /// text verbatim
    #[instrument(skip_all, fields(element = element.id()))]
    pub async fn send_keys(&self, element: &Element, text: &str) -> Result<()> {
        let target = self.wait_for_clickable(element).await?;
        target.clear().await?;
        target.type_text(text).await
    }

    /// Probe whether the element is displayed, keeping the failure mode
    pub async fn presence(&self, element: &Element) -> Presence {
        match element.is_displayed().await {
            Ok(true) => Presence::Present,
            Ok(false) => Presence::AbsentNotFound,
            Err(e) if e.is_transient() => Presence::AbsentNotFound,
            Err(e) => {
                debug!("presence probe for {} failed: {}", element.id(), e);
                Presence::AbsentError
            }
        }
    }

    /// Boolean convenience over [`BasePage::presence`]; never raises
    pub async fn is_element_present(&self, element: &Element) -> bool {
        matches!(self.presence(element).await, Presence::Present)
    }

    /// Open a custom (non-native) dropdown via its trigger and click the
    /// first option whose text matches `text_to_select` case-insensitively.
    ///
    /// The scan stops at the first match. No match clicks nothing and
    /// reports [`DropdownSelection::NotMatched`].
    #[instrument(skip_all, fields(target = text_to_select))]
    pub async fn select_custom_drop_down(
        &self,
        trigger: &Element,
        options: &[Element],
        text_to_select: &str,
    ) -> Result<DropdownSelection> {
        let wanted = text_to_select.to_lowercase();
        self.wait_for_clickable(trigger).await?.click().await?;

        for option in options {
            let option = self.wait_for_clickable(option).await?;
            if option.text().await?.to_lowercase() == wanted {
                option.click().await?;
                return Ok(DropdownSelection::Matched);
            }
        }

        debug!("no dropdown option matched '{}'", text_to_select);
        Ok(DropdownSelection::NotMatched)
    }

    /// Wait for the element to be clickable, then hover the pointer over it
    /// without clicking
    #[instrument(skip_all, fields(element = element.id()))]
    pub async fn move_mouse_cursor_to_element(&self, element: &Element) -> Result<()> {
        let target = self.wait_for_clickable(element).await?;
        target.hover().await
    }

    /// Scroll the element into view via script; returns the element for
    /// chaining. See [`scripts::SCROLL_INTO_VIEW_SCRIPT`] for why this runs
    /// before clicks.
    #[instrument(skip_all, fields(element = element.id()))]
    pub async fn scroll_to_element(&self, element: &Element) -> Result<Element> {
        self.execute_js(scripts::SCROLL_INTO_VIEW_SCRIPT, vec![element.script_arg()])
            .await?;
        Ok(element.clone())
    }

    /// Pass a script and positional arguments through to the driver's
    /// script-execution facility; the result is whatever the driver returns
    pub async fn execute_js(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.driver.execute_script(script, args).await
    }

    /// Read the element's current form value as text
    #[instrument(skip_all, fields(element = element.id()))]
    pub async fn get_value_from_element(&self, element: &Element) -> Result<String> {
        let value = self
            .execute_js(scripts::READ_VALUE_SCRIPT, vec![element.script_arg()])
            .await?;
        Ok(match value {
            Value::String(text) => text,
            other => other.to_string(),
        })
    }

    /// Switch to the most recently opened tab, maximize it, and return its
    /// handle.
    ///
    /// Relies on the driver's insertion-ordered window enumeration; see
    /// [`Driver::window_handles`].
    #[instrument(skip(self))]
    pub async fn switch_to_newly_opened_tab(&self) -> Result<WindowHandle> {
        let handles = self.driver.window_handles().await?;
        let newest = handles
            .last()
            .cloned()
            .ok_or_else(|| Error::window_not_found("no open windows"))?;
        self.driver.switch_to_window(&newest).await?;
        self.driver.maximize_window().await?;
        debug!("switched to newly opened tab {}", newest);
        Ok(newest)
    }

    /// Hover the error container to reveal its fly-out, wait for the
    /// fly-out, then assert its text equals `reason` exactly.
    ///
    /// The one hard failure in this layer: a mismatch raises
    /// [`Error::Assertion`].
    #[instrument(skip_all, fields(expected = reason))]
    pub async fn verify_field_error_notifier(
        &self,
        container: &Element,
        fly_out: &Element,
        reason: &str,
    ) -> Result<()> {
        self.scroll_to_element(container).await?;
        self.wait_for_clickable(container).await?;
        self.move_mouse_cursor_to_element(container).await?;
        self.wait_for_visibility(fly_out).await?;

        let actual = fly_out.text().await?;
        if actual != reason {
            return Err(Error::assertion(format!(
                "{}: wanted '{}', got '{}'",
                HINT_TEXT_MISMATCH, reason, actual
            )));
        }
        Ok(())
    }
}
