//! Polling wait engine.
//!
//! Repeatedly evaluates an asynchronous predicate until it reports `true`,
//! fails, or the deadline passes. Between evaluations the task sleeps on the
//! tokio timer; nothing busy-waits.
//!
//! # Semantics
//!
//! - `Ok(true)` resolves the wait.
//! - `Err(_)` is propagated unchanged (predicates decide which errors mean
//!   "not yet" themselves).
//! - `Ok(false)` after the deadline fails with [`Error::Timeout`] carrying
//!   the configured message and element, and polling stops.
//! - A predicate evaluation already in flight is never cancelled.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use webdriver_element::wait::{WaitOptions, poll_until};
//!
//! poll_until(
//!     || async { Ok(button.is_enabled().await?) },
//!     WaitOptions::new("button never became enabled", Duration::from_secs(5)),
//! )
//! .await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::future::Future;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::time::{Instant, sleep};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::identifiers::ElementId;

// ============================================================================
// Constants
// ============================================================================

/// Default pause between two evaluations.
const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

// ============================================================================
// Types
// ============================================================================

/// Boxed predicate accepted by object-safe APIs such as
/// [`Transport::poll_until`](crate::transport::Transport::poll_until).
pub type PollPredicate<'a> = Box<dyn FnMut() -> BoxFuture<'a, Result<bool>> + Send + 'a>;

/// Configuration of one wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOptions {
    /// Message carried by the timeout error.
    pub error_message: String,

    /// Deadline measured from the first evaluation.
    pub timeout: Duration,

    /// Pause between evaluations.
    pub interval: Duration,

    /// Element the condition is tied to, for diagnostics.
    pub element_id: Option<ElementId>,
}

impl WaitOptions {
    /// Creates options with the default interval.
    #[must_use]
    pub fn new(error_message: impl Into<String>, timeout: Duration) -> Self {
        Self {
            error_message: error_message.into(),
            timeout,
            interval: DEFAULT_INTERVAL,
            element_id: None,
        }
    }

    /// Sets the pause between evaluations.
    #[inline]
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Ties the wait to an element.
    #[inline]
    #[must_use]
    pub fn with_element(mut self, element_id: ElementId) -> Self {
        self.element_id = Some(element_id);
        self
    }

    fn timeout_error(&self) -> Error {
        Error::timeout(
            self.error_message.clone(),
            self.element_id.clone(),
            u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
        )
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Polls `predicate` until it holds or `options.timeout` elapses.
///
/// # Errors
///
/// - [`Error::Timeout`] once the deadline passes with the condition unmet
/// - Any error returned by the predicate
pub async fn poll_until<F, Fut>(mut predicate: F, options: WaitOptions) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let started = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        if predicate().await? {
            debug!(
                attempt,
                elapsed_ms = started.elapsed().as_millis() as u64,
                element_id = ?options.element_id,
                "Wait condition satisfied"
            );
            return Ok(());
        }

        let elapsed = started.elapsed();
        if elapsed >= options.timeout {
            debug!(
                attempt,
                timeout_ms = options.timeout.as_millis() as u64,
                element_id = ?options.element_id,
                message = %options.error_message,
                "Wait timed out"
            );
            return Err(options.timeout_error());
        }

        trace!(attempt, element_id = ?options.element_id, "Wait condition not met, polling again");
        sleep(options.interval.min(options.timeout - elapsed)).await;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_resolves_when_predicate_holds() {
        let calls = AtomicUsize::new(0);
        let result = poll_until(
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move { Ok(n >= 3) }
            },
            WaitOptions::new("never", Duration::from_secs(5)),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_and_stops_polling() {
        let calls = AtomicUsize::new(0);
        let options = WaitOptions::new("still hidden", Duration::from_millis(1000))
            .with_interval(Duration::from_millis(100))
            .with_element(ElementId::new("e9"));

        let started = Instant::now();
        let err = poll_until(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(false) }
            },
            options,
        )
        .await
        .unwrap_err();

        assert!(started.elapsed() >= Duration::from_millis(1000));
        match err {
            Error::Timeout {
                message,
                element_id,
                timeout_ms,
            } => {
                assert_eq!(message, "still hidden");
                assert_eq!(element_id, Some(ElementId::new("e9")));
                assert_eq!(timeout_ms, 1000);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let after = calls.load(Ordering::SeqCst);
        sleep(Duration::from_secs(2)).await;
        assert_eq!(calls.load(Ordering::SeqCst), after);
    }

    #[tokio::test(start_paused = true)]
    async fn test_propagates_predicate_error() {
        let calls = AtomicUsize::new(0);
        let err = poll_until(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<bool, _>(Error::transport("connection reset")) }
            },
            WaitOptions::new("x", Duration::from_secs(5)),
        )
        .await
        .unwrap_err();

        assert!(err.is_transport_error());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_timeout_evaluates_once() {
        let calls = AtomicUsize::new(0);
        let err = poll_until(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(false) }
            },
            WaitOptions::new("x", Duration::ZERO),
        )
        .await
        .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_boxed_predicate() {
        let mut remaining = 2;
        let predicate: PollPredicate<'_> = Box::new(move || -> BoxFuture<'static, Result<bool>> {
            remaining -= 1;
            let done = remaining <= 0;
            Box::pin(async move { Ok(done) })
        });

        assert!(
            poll_until(predicate, WaitOptions::new("x", Duration::from_secs(1)))
                .await
                .is_ok()
        );
    }
}
