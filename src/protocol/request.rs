//! Pending command type.
//!
//! A [`PendingCommand`] is the transport-neutral description of one remote
//! call: a session-relative path, an HTTP method and an optional JSON body.
//! It exists only for the duration of one dispatch.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde_json::Value;

// ============================================================================
// HttpMethod
// ============================================================================

/// HTTP method of a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read-only query.
    Get,
    /// State-changing command.
    Post,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PendingCommand
// ============================================================================

/// One remote call, relative to the session root.
///
/// # Example
///
/// ```ignore
/// let command = PendingCommand::post("/element/0.1-2/click", None);
/// assert_eq!(command.path, "/element/0.1-2/click");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCommand {
    /// Session-relative path, always starting with `/`.
    pub path: String,

    /// HTTP method.
    pub method: HttpMethod,

    /// JSON payload, if any.
    pub data: Option<Value>,
}

impl PendingCommand {
    /// Creates a GET command.
    #[inline]
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            data: None,
        }
    }

    /// Creates a POST command.
    ///
    /// POST requests always carry a body on the wire; `None` is sent as `{}`.
    #[inline]
    #[must_use]
    pub fn post(path: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Post,
            data,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let get = PendingCommand::get("/element/1/text");
        assert_eq!(get.method, HttpMethod::Get);
        assert!(get.data.is_none());

        let post = PendingCommand::post("/element/1/value", Some(serde_json::json!({"value": ["a"]})));
        assert_eq!(post.method, HttpMethod::Post);
        assert!(post.data.is_some());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
