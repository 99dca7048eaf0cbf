//! Error types for the element client.
//!
//! Every fallible operation returns [`Result<T>`] which uses [`Error`].
//! Failures are always returned, never panicked.
//!
//! # Usage
//!
//! ```ignore
//! use webdriver_element::{Error, Result};
//!
//! async fn example(element: &Element) -> Result<()> {
//!     match element.click().await {
//!         Ok(_) => {}
//!         Err(e) if e.is_stale() => println!("element went away"),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Element | [`Error::StaleElement`], [`Error::NoSuchElement`] |
//! | Transport | [`Error::Transport`], [`Error::Http`], [`Error::Url`], [`Error::Json`] |
//! | Protocol | [`Error::Protocol`], [`Error::ScriptError`] |
//! | Waiting | [`Error::Timeout`] |
//! | Caller | [`Error::InvalidArgument`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

use crate::identifiers::ElementId;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Element Errors
    // ========================================================================
    /// The element is no longer attached to the page.
    ///
    /// Distinct from every other failure: disappearance and detachment
    /// waits treat it as success.
    #[error("Stale element{}: {message}", fmt_element(.element_id))]
    StaleElement {
        /// The stale element's ID, when known.
        element_id: Option<ElementId>,
        /// Message reported by the remote end.
        message: String,
    },

    /// No element matched a lookup.
    #[error("No such element: {selector}")]
    NoSuchElement {
        /// Locator used for the search.
        selector: String,
    },

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// Remote end reported a failure that has no dedicated variant.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },

    /// HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid endpoint URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// Response body did not have the expected shape.
    #[error("Protocol error: {message}")]
    Protocol {
        /// Description of the violation.
        message: String,
    },

    /// In-page script threw.
    #[error("Script error: {message}")]
    ScriptError {
        /// Error message from script execution.
        message: String,
    },

    // ========================================================================
    // Waiting Errors
    // ========================================================================
    /// A polled condition did not hold before its deadline.
    #[error("Timeout after {timeout_ms}ms{}: {message}", fmt_element(.element_id))]
    Timeout {
        /// Caller-supplied description of the awaited condition.
        message: String,
        /// Element the condition was tied to, if any.
        element_id: Option<ElementId>,
        /// Milliseconds waited before giving up.
        timeout_ms: u64,
    },

    // ========================================================================
    // Caller Errors
    // ========================================================================
    /// Malformed arguments.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },
}

fn fmt_element(element_id: &Option<ElementId>) -> String {
    match element_id {
        Some(id) => format!(" (element {id})"),
        None => String::new(),
    }
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a stale element error.
    #[inline]
    pub fn stale_element(element_id: Option<ElementId>, message: impl Into<String>) -> Self {
        Self::StaleElement {
            element_id,
            message: message.into(),
        }
    }

    /// Creates a no such element error.
    #[inline]
    pub fn no_such_element(selector: impl Into<String>) -> Self {
        Self::NoSuchElement {
            selector: selector.into(),
        }
    }

    /// Creates a transport error.
    #[inline]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[inline]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates a script error.
    #[inline]
    pub fn script_error(message: impl Into<String>) -> Self {
        Self::ScriptError {
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    #[inline]
    pub fn timeout(
        message: impl Into<String>,
        element_id: Option<ElementId>,
        timeout_ms: u64,
    ) -> Self {
        Self::Timeout {
            message: message.into(),
            element_id,
            timeout_ms,
        }
    }

    /// Creates an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if the element is no longer attached to the page.
    #[inline]
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleElement { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` if a lookup matched nothing.
    #[inline]
    #[must_use]
    pub fn is_no_such_element(&self) -> bool {
        matches!(self, Self::NoSuchElement { .. })
    }

    /// Returns `true` if this is a network or protocol-level failure.
    #[inline]
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::Http(_)
                | Self::Url(_)
                | Self::Json(_)
                | Self::Protocol { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_display_includes_element() {
        let err = Error::stale_element(Some(ElementId::new("e1")), "node detached");
        assert_eq!(err.to_string(), "Stale element (element e1): node detached");
    }

    #[test]
    fn test_timeout_display() {
        let err = Error::timeout("element did not disappear", Some(ElementId::new("e2")), 500);
        assert_eq!(
            err.to_string(),
            "Timeout after 500ms (element e2): element did not disappear"
        );

        let err = Error::timeout("condition", None, 10);
        assert_eq!(err.to_string(), "Timeout after 10ms: condition");
    }

    #[test]
    fn test_predicates() {
        assert!(Error::stale_element(None, "x").is_stale());
        assert!(!Error::transport("x").is_stale());
        assert!(Error::timeout("x", None, 1).is_timeout());
        assert!(Error::no_such_element("css selector:#a").is_no_such_element());
        assert!(Error::transport("x").is_transport_error());
        assert!(Error::protocol("x").is_transport_error());
        assert!(!Error::script_error("x").is_transport_error());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_transport_error());
    }

    #[test]
    fn test_from_url_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert!(matches!(err, Error::Url(_)));
    }
}
