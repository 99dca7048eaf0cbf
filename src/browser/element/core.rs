//! Core Element struct, accessors and command dispatch.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::chain::ChainExt;
use crate::error::Result;
use crate::identifiers::ElementId;
use crate::protocol::ElementCommand;
use crate::session::Session;
use crate::transport::Transport;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for an element.
pub(crate) struct ElementInner {
    /// Remote element reference.
    pub id: ElementId,

    /// Owning session.
    pub session: Session,
}

// ============================================================================
// Element
// ============================================================================

/// A handle to one remote DOM element.
///
/// Commands whose remote result carries nothing hand back the element
/// itself, so calls chain:
///
/// ```ignore
/// let field = session.find_element(By::name("q")).await?;
/// field.clear().await?.send_keys("rust").await?.submit().await?;
/// ```
///
/// Clones share one allocation; [`Element::ptr_eq`] tells whether two
/// handles are the same proxy. A handle is valid while its node stays
/// attached; afterwards commands fail with
/// [`Error::StaleElement`](crate::Error::StaleElement).
#[derive(Clone)]
pub struct Element {
    /// Shared inner state.
    pub(crate) inner: Arc<ElementInner>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .field("session_id", &self.inner.session.id())
            .finish_non_exhaustive()
    }
}

impl Element {
    /// Creates a new element handle.
    pub(crate) fn new(id: ElementId, session: Session) -> Self {
        Self {
            inner: Arc::new(ElementInner { id, session }),
        }
    }
}

// ============================================================================
// Element - Accessors
// ============================================================================

impl Element {
    /// Returns this element's ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ElementId {
        &self.inner.id
    }

    /// Returns the owning session.
    #[inline]
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Returns `true` if both handles are the same proxy.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// ============================================================================
// Element - Internal
// ============================================================================

impl Element {
    /// Returns the session transport.
    #[inline]
    pub(crate) fn transport(&self) -> &dyn Transport {
        self.inner.session.transport()
    }

    /// Issues a command and hands back this element on success.
    pub(crate) async fn perform(&self, command: ElementCommand) -> Result<Element> {
        self.query(command).chain(self.clone()).await
    }

    /// Issues a command and returns the raw result.
    pub(crate) async fn query(&self, command: ElementCommand) -> Result<Value> {
        let pending = command.into_pending(&self.inner.id);
        debug!(
            element_id = %self.inner.id,
            method = %pending.method,
            path = %pending.path,
            "Dispatching element command"
        );
        self.transport().issue_command(pending).await
    }
}

// ============================================================================
// Tests
// ============================================================================
