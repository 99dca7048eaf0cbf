//! Script bridge: page-side utility library calls and the visibility helper.
//!
//! Queries the remote protocol does not expose run as small in-page scripts
//! with the element bound as `arguments[0]`. Supported library calls form the
//! closed set [`BridgeOp`]; each variant has a fixed number of string
//! arguments, so no free-form expression ever reaches the page.
//!
//! # Visibility Helper
//!
//! [`Element::is_visible`] relies on a helper function kept in the page's
//! global scope. The probe script calls it when present and returns a
//! sentinel otherwise; on the sentinel the helper source is sent once along
//! with the probe. The install is recorded on the [`Session`](crate::Session)
//! for the current navigation epoch.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::protocol::element_ref;

use super::Element;
use super::queries::expect_bool;

// ============================================================================
// Constants
// ============================================================================

/// Returned by the probe when the helper is not installed.
const HELPER_MISSING: &str = "__wd_helper_missing__";

/// Probe: call the helper if present.
const VISIBILITY_PROBE: &str = "return typeof window.__wdIsVisible === 'function' \
     ? window.__wdIsVisible(arguments[0]) \
     : '__wd_helper_missing__';";

/// Helper source installed into the page.
const VISIBILITY_HELPER: &str = r#"window.__wdIsVisible = function (el) {
  if (!el || !el.ownerDocument || !el.isConnected) { return false; }
  var view = el.ownerDocument.defaultView;
  for (var node = el; node && node.nodeType === 1; node = node.parentElement) {
    var style = view.getComputedStyle(node);
    if (style.display === 'none') { return false; }
    if (node === el && (style.visibility === 'hidden' || style.visibility === 'collapse')) { return false; }
    if (parseFloat(style.opacity) === 0) { return false; }
  }
  var rect = el.getBoundingClientRect();
  return rect.width > 0 && rect.height > 0;
};"#;

// ============================================================================
// BridgeOp
// ============================================================================

/// A page-side utility library method with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BridgeOp {
    /// `css(property)`: computed style value.
    Css(String),
    /// `hasClass(name)`.
    HasClass(String),
    /// `attr(name)`.
    Attr(String),
    /// `prop(name)`.
    Prop(String),
    /// `is(selector)`.
    Is(String),
    /// `val()`.
    Val,
    /// `text()`.
    Text,
    /// `html()`.
    Html,
    /// `width()`.
    Width,
    /// `height()`.
    Height,
    /// `innerWidth()`.
    InnerWidth,
    /// `innerHeight()`.
    InnerHeight,
    /// `outerWidth()`.
    OuterWidth,
    /// `outerHeight()`.
    OuterHeight,
    /// `offset()`: document-relative `{top, left}`.
    Offset,
    /// `position()`: offset-parent-relative `{top, left}`.
    Position,
}

impl BridgeOp {
    /// Returns the library method name.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::Css(_) => "css",
            Self::HasClass(_) => "hasClass",
            Self::Attr(_) => "attr",
            Self::Prop(_) => "prop",
            Self::Is(_) => "is",
            Self::Val => "val",
            Self::Text => "text",
            Self::Html => "html",
            Self::Width => "width",
            Self::Height => "height",
            Self::InnerWidth => "innerWidth",
            Self::InnerHeight => "innerHeight",
            Self::OuterWidth => "outerWidth",
            Self::OuterHeight => "outerHeight",
            Self::Offset => "offset",
            Self::Position => "position",
        }
    }

    /// Returns the number of positional arguments the method takes.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.args().len()
    }

    /// Returns the positional arguments.
    #[must_use]
    pub fn args(&self) -> Vec<&str> {
        match self {
            Self::Css(arg)
            | Self::HasClass(arg)
            | Self::Attr(arg)
            | Self::Prop(arg)
            | Self::Is(arg) => vec![arg.as_str()],
            _ => Vec::new(),
        }
    }

    /// Builds the script that applies this call to `arguments[0]`.
    ///
    /// Arguments are emitted as JSON string literals.
    #[must_use]
    pub fn script(&self, library: &str) -> String {
        let args = self
            .args()
            .into_iter()
            .map(json_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("return {library}(arguments[0]).{}({args});", self.method())
    }
}

// ============================================================================
// Element - Library Calls
// ============================================================================

impl Element {
    /// Runs a page-side library call against this element.
    ///
    /// Returns the raw script result.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the configured library name is not a
    ///   plain identifier
    /// - Any transport or script error
    pub async fn invoke(&self, op: BridgeOp) -> Result<Value> {
        let library = &self.inner.session.bridge_config().library;
        if !is_identifier(library) {
            return Err(Error::invalid_argument(format!(
                "Bridge library '{library}' is not a valid identifier"
            )));
        }

        let script = op.script(library);
        debug!(element_id = %self.inner.id, method = op.method(), "Invoking bridge method");

        self.transport()
            .execute_script(&script, vec![element_ref(&self.inner.id)], false)
            .await
    }

    /// Gets a computed style property through the page-side library.
    pub async fn computed_css(&self, property: &str) -> Result<Value> {
        self.invoke(BridgeOp::Css(property.to_string())).await
    }

    /// Checks for a class through the page-side library.
    pub async fn has_class(&self, name: &str) -> Result<bool> {
        let value = self.invoke(BridgeOp::HasClass(name.to_string())).await?;
        expect_bool(value, "hasClass")
    }
}

// ============================================================================
// Element - Visibility
// ============================================================================

impl Element {
    /// Checks visibility with the page-side helper.
    ///
    /// Installs the helper on first use in a page.
    pub async fn is_visible(&self) -> Result<bool> {
        let session = &self.inner.session;
        let epoch = session.navigation_epoch();
        let args = vec![element_ref(&self.inner.id)];

        let probed = self
            .transport()
            .execute_script(VISIBILITY_PROBE, args.clone(), false)
            .await?;

        let result = if is_helper_missing(&probed) {
            if session.helper_installed() {
                warn!(
                    element_id = %self.inner.id,
                    session_id = %session.id(),
                    "Visibility helper lost without recorded navigation, reinstalling"
                );
                session.mark_helper_missing();
            } else {
                debug!(element_id = %self.inner.id, epoch, "Installing visibility helper");
            }

            let install = format!("{VISIBILITY_HELPER}\n{VISIBILITY_PROBE}");
            let installed = self.transport().execute_script(&install, args, false).await?;
            if is_helper_missing(&installed) {
                return Err(Error::script_error("Visibility helper could not be installed"));
            }
            session.mark_helper_installed(epoch);
            installed
        } else {
            if !session.helper_installed() {
                session.mark_helper_installed(epoch);
            }
            probed
        };

        expect_bool(result, "visibility")
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escapes a string for safe use in JavaScript.
fn json_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

fn is_helper_missing(value: &Value) -> bool {
    value.as_str() == Some(HELPER_MISSING)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => chars
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.'),
        _ => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
