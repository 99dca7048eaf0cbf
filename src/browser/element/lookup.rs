//! Lookups scoped to an element's descendants.

use std::time::Duration;

use crate::browser::selector::By;
use crate::error::Result;

use super::Element;

// ============================================================================
// Element - Nested Search
// ============================================================================

impl Element {
    /// Finds the first descendant matching `by`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use webdriver_element::By;
    ///
    /// let form = session.find_element(By::id("login-form")).await?;
    /// let btn = form.find_element(By::css("button[type='submit']")).await?;
    /// ```
    pub async fn find_element(&self, by: impl Into<By>) -> Result<Element> {
        self.inner
            .session
            .lookup_one(&by.into(), Some(&self.inner.id))
            .await
    }

    /// Finds every descendant matching `by`.
    pub async fn find_elements(&self, by: impl Into<By>) -> Result<Vec<Element>> {
        self.inner
            .session
            .lookup_all(&by.into(), Some(&self.inner.id))
            .await
    }

    /// Waits until a descendant matching `by` appears.
    ///
    /// `timeout` defaults to [`Timeouts::wait_for_element`](crate::Timeouts::wait_for_element).
    pub async fn wait_for_element(
        &self,
        by: impl Into<By>,
        timeout: Option<Duration>,
    ) -> Result<Element> {
        self.inner
            .session
            .lookup_when_present(&by.into(), Some(&self.inner.id), timeout)
            .await
    }
}
