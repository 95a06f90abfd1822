//! Bounded wait policies
//!
//! A wait policy pairs a time budget with a poll interval. Polling swallows
//! transient not-ready conditions (element not found, stale reference) and
//! keeps checking until the condition holds or the budget runs out.

use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::trace;

/// Wait budget shared by the two fixed policies, in seconds
pub const WAIT_BUDGET_SECS: u64 = 100;

/// Wait policy: a timeout and a poll interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    timeout: Duration,
    poll_interval: Duration,
}

impl WaitPolicy {
    /// Create a policy with the given timeout and poll interval
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Coarse-poll policy for elements becoming visible: poll every second
    /// within the shared budget
    pub fn visibility() -> Self {
        Self::new(
            Duration::from_secs(WAIT_BUDGET_SECS),
            Duration::from_secs(1),
        )
    }

    /// Fine-poll policy for elements disappearing: poll every 10 ms within
    /// the shared budget
    pub fn invisibility() -> Self {
        Self::new(
            Duration::from_secs(WAIT_BUDGET_SECS),
            Duration::from_millis(10),
        )
    }

    /// Configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Configured poll interval
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Poll `check` until it reports ready or the timeout elapses.
    ///
    /// Transient conditions during a check are swallowed and polling
    /// continues; any other error aborts the wait immediately. Expiry is
    /// reported as [`Error::Timeout`] naming `what`.
    pub async fn until<F, Fut>(&self, what: &str, mut check: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        let deadline = Instant::now() + self.timeout;
        loop {
            match check().await {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(e) if e.is_transient() => {
                    trace!("transient condition while waiting for {}: {}", what, e);
                }
                Err(e) => return Err(e),
            }
            if Instant::now() >= deadline {
                return Err(Error::timeout(what));
            }
            sleep(self.poll_interval).await;
        }
    }
}
