//! Session handle.
//!
//! A [`Session`] owns the transport, the read-only configuration and the
//! per-page script helper state. It is cheap to clone; every [`Element`]
//! keeps one.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use webdriver_element::{By, HttpTransport, Session, Timeouts};
//!
//! let transport = HttpTransport::new("http://localhost:4444/wd/hub", "3f2a9c")?;
//! let session = Session::builder(Arc::new(transport))
//!     .timeouts(Timeouts::new().with_poll_interval(Duration::from_millis(100)))
//!     .build();
//!
//! let button = session.find_element(By::css("#submit")).await?;
//! button.click().await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

use crate::browser::Element;
use crate::browser::selector::By;
use crate::config::{BridgeConfig, Timeouts};
use crate::error::Result;
use crate::identifiers::{ElementId, SessionId};
use crate::transport::Transport;
use crate::wait::WaitOptions;

// ============================================================================
// Types
// ============================================================================

/// Script helper install state, scoped to page navigations.
#[derive(Debug, Default)]
pub(crate) struct HelperState {
    /// Current navigation epoch.
    pub epoch: u64,

    /// Epoch in which the helper was last installed.
    pub installed_epoch: Option<u64>,
}

/// Internal shared state for a session.
pub(crate) struct SessionInner {
    /// Local session identity.
    pub id: SessionId,

    /// Remote call collaborator.
    pub transport: Arc<dyn Transport>,

    /// Wait durations.
    pub timeouts: Timeouts,

    /// Script bridge settings.
    pub bridge: BridgeConfig,

    /// Visibility helper state.
    pub helper: Mutex<HelperState>,
}

// ============================================================================
// Session
// ============================================================================

/// Handle to one remote browser session.
#[derive(Clone)]
pub struct Session {
    pub(crate) inner: Arc<SessionInner>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.inner.id)
            .field("timeouts", &self.inner.timeouts)
            .field("bridge", &self.inner.bridge)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// SessionBuilder
// ============================================================================

/// Builder for [`Session`].
pub struct SessionBuilder {
    transport: Arc<dyn Transport>,
    timeouts: Timeouts,
    bridge: BridgeConfig,
}

impl SessionBuilder {
    /// Sets the wait durations.
    #[inline]
    #[must_use]
    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Sets the script bridge settings.
    #[inline]
    #[must_use]
    pub fn bridge(mut self, bridge: BridgeConfig) -> Self {
        self.bridge = bridge;
        self
    }

    /// Builds the session.
    #[must_use]
    pub fn build(self) -> Session {
        let id = SessionId::generate();
        debug!(session_id = %id, "Session created");

        Session {
            inner: Arc::new(SessionInner {
                id,
                transport: self.transport,
                timeouts: self.timeouts,
                bridge: self.bridge,
                helper: Mutex::new(HelperState::default()),
            }),
        }
    }
}

// ============================================================================
// Session - Constructor & Accessors
// ============================================================================

impl Session {
    /// Starts building a session over `transport`.
    #[must_use]
    pub fn builder(transport: Arc<dyn Transport>) -> SessionBuilder {
        SessionBuilder {
            transport,
            timeouts: Timeouts::default(),
            bridge: BridgeConfig::default(),
        }
    }

    /// Returns the local session ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.inner.id
    }

    /// Returns the configured wait durations.
    #[inline]
    #[must_use]
    pub fn timeouts(&self) -> &Timeouts {
        &self.inner.timeouts
    }

    /// Returns the script bridge settings.
    #[inline]
    #[must_use]
    pub fn bridge_config(&self) -> &BridgeConfig {
        &self.inner.bridge
    }

    /// Returns the transport.
    #[inline]
    #[must_use]
    pub fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }

    /// Returns `true` if both handles refer to the same session.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Session) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// ============================================================================
// Session - Page Lifetime
// ============================================================================

impl Session {
    /// Records that the page navigated.
    ///
    /// Page-global helpers installed by the script bridge are gone after a
    /// navigation; the next visibility probe reinstalls them.
    pub fn navigated(&self) {
        let mut helper = self.inner.helper.lock();
        helper.epoch += 1;
        debug!(session_id = %self.inner.id, epoch = helper.epoch, "Navigation recorded");
    }

    /// Returns the current navigation epoch.
    #[must_use]
    pub fn navigation_epoch(&self) -> u64 {
        self.inner.helper.lock().epoch
    }

    /// Returns `true` if the visibility helper is known to be installed in
    /// the current page.
    #[must_use]
    pub fn helper_installed(&self) -> bool {
        let helper = self.inner.helper.lock();
        helper.installed_epoch == Some(helper.epoch)
    }

    /// Records a helper install performed during `epoch`.
    ///
    /// An install racing with a navigation stays attributed to the old page.
    pub(crate) fn mark_helper_installed(&self, epoch: u64) {
        self.inner.helper.lock().installed_epoch = Some(epoch);
    }

    /// Forgets a helper install for the current page.
    pub(crate) fn mark_helper_missing(&self) {
        self.inner.helper.lock().installed_epoch = None;
    }
}

// ============================================================================
// Session - Lookups
// ============================================================================

impl Session {
    /// Finds the first element matching `by`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`](crate::Error::NoSuchElement) if nothing matches.
    pub async fn find_element(&self, by: impl Into<By>) -> Result<Element> {
        self.lookup_one(&by.into(), None).await
    }

    /// Finds every element matching `by`.
    pub async fn find_elements(&self, by: impl Into<By>) -> Result<Vec<Element>> {
        self.lookup_all(&by.into(), None).await
    }

    /// Waits until an element matching `by` appears.
    ///
    /// `timeout` defaults to [`Timeouts::wait_for_element`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`](crate::Error::Timeout) if nothing appears in time.
    pub async fn wait_for_element(
        &self,
        by: impl Into<By>,
        timeout: Option<Duration>,
    ) -> Result<Element> {
        self.lookup_when_present(&by.into(), None, timeout).await
    }

    /// Runs a synchronous script in the page.
    pub async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.transport().execute_script(script, args, false).await
    }

    /// Runs an asynchronous script in the page.
    pub async fn execute_async_script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.transport().execute_script(script, args, true).await
    }

    pub(crate) async fn lookup_one(&self, by: &By, parent: Option<&ElementId>) -> Result<Element> {
        debug!(session_id = %self.inner.id, %by, parent = ?parent, "Finding element");
        let id = self.transport().find_one(by, parent).await?;
        Ok(Element::new(id, self.clone()))
    }

    pub(crate) async fn lookup_all(
        &self,
        by: &By,
        parent: Option<&ElementId>,
    ) -> Result<Vec<Element>> {
        debug!(session_id = %self.inner.id, %by, parent = ?parent, "Finding elements");
        let ids = self.transport().find_all(by, parent).await?;
        Ok(ids
            .into_iter()
            .map(|id| Element::new(id, self.clone()))
            .collect())
    }

    pub(crate) async fn lookup_when_present(
        &self,
        by: &By,
        parent: Option<&ElementId>,
        timeout: Option<Duration>,
    ) -> Result<Element> {
        let timeout = timeout.unwrap_or(self.inner.timeouts.wait_for_element);
        debug!(
            session_id = %self.inner.id,
            %by,
            parent = ?parent,
            timeout_ms = timeout.as_millis() as u64,
            "Waiting for element"
        );

        let mut options = WaitOptions::new(format!("Element {by} did not appear"), timeout)
            .with_interval(self.inner.timeouts.poll_interval);
        if let Some(parent) = parent {
            options = options.with_element(parent.clone());
        }

        let id = self
            .transport()
            .wait_for_appearance(by, parent, options)
            .await?;
        Ok(Element::new(id, self.clone()))
    }
}

// ============================================================================
// Tests
// ============================================================================
