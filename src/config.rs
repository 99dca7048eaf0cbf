//! Session configuration.
//!
//! Timeouts, script bridge settings and HTTP client settings shared by every
//! element of a [`Session`](crate::Session). Configuration is read-only once
//! the session is built.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use webdriver_element::Timeouts;
//!
//! let timeouts = Timeouts::new()
//!     .with_wait_for_element_disappear(Duration::from_secs(5))
//!     .with_poll_interval(Duration::from_millis(100));
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for waiting on element appearance.
const DEFAULT_WAIT_FOR_ELEMENT: Duration = Duration::from_secs(10);

/// Default timeout for waiting on element disappearance.
const DEFAULT_WAIT_FOR_DISAPPEAR: Duration = Duration::from_secs(10);

/// Default timeout for waiting on element detachment.
const DEFAULT_WAIT_FOR_DETACH: Duration = Duration::from_secs(10);

/// Default pause between two polls.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Default HTTP request timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default page-side utility library global.
const DEFAULT_BRIDGE_LIBRARY: &str = "jQuery";

// ============================================================================
// Timeouts
// ============================================================================

/// Wait durations used by lookups and polling waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Upper bound for `wait_for_element` lookups.
    pub wait_for_element: Duration,

    /// Upper bound for `wait_for_disappear`.
    pub wait_for_element_disappear: Duration,

    /// Upper bound for `wait_for_detach`.
    pub wait_for_detach: Duration,

    /// Pause between two predicate evaluations.
    pub poll_interval: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeouts {
    /// Creates timeouts with default values.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wait_for_element: DEFAULT_WAIT_FOR_ELEMENT,
            wait_for_element_disappear: DEFAULT_WAIT_FOR_DISAPPEAR,
            wait_for_detach: DEFAULT_WAIT_FOR_DETACH,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Sets the element appearance timeout.
    #[inline]
    #[must_use]
    pub fn with_wait_for_element(mut self, timeout: Duration) -> Self {
        self.wait_for_element = timeout;
        self
    }

    /// Sets the element disappearance timeout.
    #[inline]
    #[must_use]
    pub fn with_wait_for_element_disappear(mut self, timeout: Duration) -> Self {
        self.wait_for_element_disappear = timeout;
        self
    }

    /// Sets the element detachment timeout.
    #[inline]
    #[must_use]
    pub fn with_wait_for_detach(mut self, timeout: Duration) -> Self {
        self.wait_for_detach = timeout;
        self
    }

    /// Sets the pause between polls.
    #[inline]
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

// ============================================================================
// BridgeConfig
// ============================================================================

/// Script bridge settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Global name of the page-side utility library (e.g. `jQuery`).
    pub library: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            library: DEFAULT_BRIDGE_LIBRARY.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Sets the library global.
    #[inline]
    #[must_use]
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = library.into();
        self
    }
}

// ============================================================================
// HttpConfig
// ============================================================================

/// HTTP transport settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    /// Timeout applied to every HTTP request.
    pub request_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl HttpConfig {
    /// Sets the per-request timeout.
    #[inline]
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
