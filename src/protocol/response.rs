//! Remote response decoding.
//!
//! Remote ends answer in one of two shapes:
//!
//! Legacy JSON wire protocol:
//! ```json
//! { "sessionId": "...", "status": 0, "value": { ... } }
//! ```
//!
//! W3C WebDriver (error case, always with a non-2xx HTTP status):
//! ```json
//! { "value": { "error": "stale element reference", "message": "..." } }
//! ```
//!
//! [`Response::into_result`] folds both into [`Result<Value>`], mapping
//! failures onto the crate error kinds. Stale references always become
//! [`Error::StaleElement`] so polling waits can recognize them.
//!
//! A legacy reply is judged by `status` alone, a W3C reply by the HTTP
//! status. A successful value that happens to carry an `error` field (a
//! script result, a `dataset`) is returned as is.

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Legacy status: success.
const STATUS_SUCCESS: i64 = 0;

/// Legacy status: no such element.
const STATUS_NO_SUCH_ELEMENT: i64 = 7;

/// Legacy status: stale element reference.
const STATUS_STALE_ELEMENT: i64 = 10;

/// Legacy status: JavaScript error.
const STATUS_JAVASCRIPT_ERROR: i64 = 17;

// ============================================================================
// Response
// ============================================================================

/// A decoded remote response body.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// Legacy status code, absent for W3C remote ends.
    #[serde(default)]
    pub status: Option<i64>,

    /// Result payload or error object.
    #[serde(default)]
    pub value: Value,
}

impl Response {
    /// Parses a response body.
    ///
    /// An empty body is a successful `null` result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the body is not JSON.
    pub fn from_body(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Ok(Self {
                status: None,
                value: Value::Null,
            });
        }
        Ok(serde_json::from_str(body)?)
    }

    /// Returns the W3C error code, if this is a W3C error response.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.value.get("error").and_then(Value::as_str)
    }

    /// Returns the error message carried in `value.message`.
    #[must_use]
    pub fn message(&self) -> String {
        self.value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.value.to_string())
    }

    /// Extracts the result value.
    ///
    /// `http_success` is whether the reply came with a 2xx status. It only
    /// matters for W3C replies, which carry no `status` field.
    ///
    /// # Errors
    ///
    /// | Remote failure | Error |
    /// |----------------|-------|
    /// | `stale element reference` / status 10 | [`Error::StaleElement`] |
    /// | `no such element` / status 7 | [`Error::NoSuchElement`] |
    /// | `javascript error` / status 17 | [`Error::ScriptError`] |
    /// | anything else | [`Error::Transport`] |
    pub fn into_result(self, http_success: bool) -> Result<Value> {
        match self.status {
            Some(STATUS_SUCCESS) => Ok(self.value),
            Some(status) => Err(error_from_status(status, self.message())),
            None if http_success => Ok(self.value),
            None => match self.error_code() {
                Some(code) => Err(error_from_code(code, self.message())),
                None => Ok(self.value),
            },
        }
    }
}

fn error_from_code(code: &str, message: String) -> Error {
    match code {
        "stale element reference" => Error::stale_element(None, message),
        "no such element" => Error::no_such_element(message),
        "javascript error" => Error::script_error(message),
        other => Error::transport(format!("{other}: {message}")),
    }
}

fn error_from_status(status: i64, message: String) -> Error {
    match status {
        STATUS_STALE_ELEMENT => Error::stale_element(None, message),
        STATUS_NO_SUCH_ELEMENT => Error::no_such_element(message),
        STATUS_JAVASCRIPT_ERROR => Error::script_error(message),
        other => Error::transport(format!("status {other}: {message}")),
    }
}

// ============================================================================
// Tests
// ============================================================================
