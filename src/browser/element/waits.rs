//! Element-scoped polling waits.
//!
//! All waits go through the transport's polling primitive
//! ([`Transport::poll_until`](crate::transport::Transport::poll_until)).
//! Disappearance and detachment are two predicates over that primitive; both
//! resolve to the owning [`Session`] because the element may no longer be a
//! meaningful handle afterwards.

use std::future::Future;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tracing::debug;

use crate::error::Result;
use crate::session::Session;
use crate::wait::{PollPredicate, WaitOptions};

use super::Element;

// ============================================================================
// Element - Generic Wait
// ============================================================================

impl Element {
    /// Polls `predicate` until it reports `true`.
    ///
    /// The element's ID is attached to `options` so a timeout names it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use std::time::Duration;
    /// use webdriver_element::wait::WaitOptions;
    ///
    /// let button = &button;
    /// button
    ///     .wait_until(
    ///         move || async move { button.is_enabled().await },
    ///         WaitOptions::new("button stayed disabled", Duration::from_secs(5)),
    ///     )
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::Timeout`](crate::Error::Timeout) when the deadline passes
    /// - Any error returned by `predicate`
    pub async fn wait_until<'a, F, Fut>(&'a self, mut predicate: F, options: WaitOptions) -> Result<()>
    where
        F: FnMut() -> Fut + Send + 'a,
        Fut: Future<Output = Result<bool>> + Send + 'a,
    {
        let options = options.with_element(self.inner.id.clone());
        let predicate: PollPredicate<'a> =
            Box::new(move || -> BoxFuture<'a, Result<bool>> { Box::pin(predicate()) });

        self.transport().poll_until(predicate, options).await
    }
}

// ============================================================================
// Element - Disappearance & Detachment
// ============================================================================

impl Element {
    /// Waits until the element is no longer visible.
    ///
    /// A stale element counts as gone. `timeout` defaults to
    /// [`Timeouts::wait_for_element_disappear`](crate::Timeouts::wait_for_element_disappear).
    pub async fn wait_for_disappear(&self, timeout: Option<Duration>) -> Result<Session> {
        let session = &self.inner.session;
        let timeout = timeout.unwrap_or(session.timeouts().wait_for_element_disappear);
        debug!(
            element_id = %self.inner.id,
            timeout_ms = timeout.as_millis() as u64,
            "Waiting for element to disappear"
        );

        let options = WaitOptions::new("Element did not disappear", timeout)
            .with_interval(session.timeouts().poll_interval);

        let element = self;
        self.wait_until(
            move || async move {
                match element.is_visible().await {
                    Ok(visible) => Ok(!visible),
                    Err(err) if err.is_stale() => Ok(true),
                    Err(err) => Err(err),
                }
            },
            options,
        )
        .await?;

        Ok(session.clone())
    }

    /// Waits until the element is detached from the page.
    ///
    /// Only a stale element error counts as detached; a successful read or
    /// any other error means "not yet". `timeout` defaults to
    /// [`Timeouts::wait_for_detach`](crate::Timeouts::wait_for_detach).
    pub async fn wait_for_detach(&self, timeout: Option<Duration>) -> Result<Session> {
        let session = &self.inner.session;
        let timeout = timeout.unwrap_or(session.timeouts().wait_for_detach);
        debug!(
            element_id = %self.inner.id,
            timeout_ms = timeout.as_millis() as u64,
            "Waiting for element to detach"
        );

        let options = WaitOptions::new("Element was not detached", timeout)
            .with_interval(session.timeouts().poll_interval);

        let element = self;
        self.wait_until(
            move || async move {
                match element.tag_name().await {
                    Err(err) if err.is_stale() => Ok(true),
                    _ => Ok(false),
                }
            },
            options,
        )
        .await?;

        Ok(session.clone())
    }
}
