//! Command definitions.
//!
//! Each variant maps one-to-one onto a session-relative REST path and an
//! HTTP method. Element-scoped commands live in [`ElementCommand`], commands
//! addressed to the session root (lookups, script execution, pointer state)
//! live in [`SessionCommand`].
//!
//! # Path Table
//!
//! | Command | Method | Path |
//! |---------|--------|------|
//! | `Click` | POST | `/element/{id}/click` |
//! | `SendKeys` | POST | `/element/{id}/value` |
//! | `GetAttribute` | GET | `/element/{id}/attribute/{name}` |
//! | `GetCss` | GET | `/element/{id}/css/{property}` |
//! | `Find` | POST | `/element` or `/element/{parent}/element` |
//! | `Execute` | POST | `/execute` |
//! | `MoveTo` | POST | `/moveto` |

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::identifiers::ElementId;

use super::PendingCommand;

// ============================================================================
// Constants
// ============================================================================

/// Legacy JSON wire protocol element reference key.
pub const LEGACY_ELEMENT_KEY: &str = "ELEMENT";

/// W3C WebDriver element reference key.
pub const W3C_ELEMENT_KEY: &str = "element-6066-11e4-a52f-4a32d6a7c2f8";

// ============================================================================
// Element References
// ============================================================================

/// Serializes an element reference for use in request bodies and script
/// arguments.
///
/// Both the legacy and the W3C key are written so either kind of remote end
/// accepts it.
#[must_use]
pub fn element_ref(id: &ElementId) -> Value {
    let mut map = Map::new();
    map.insert(LEGACY_ELEMENT_KEY.to_string(), Value::String(id.as_str().to_string()));
    map.insert(W3C_ELEMENT_KEY.to_string(), Value::String(id.as_str().to_string()));
    Value::Object(map)
}

/// Reads an element reference from a response value.
#[must_use]
pub fn parse_element_ref(value: &Value) -> Option<ElementId> {
    value
        .get(W3C_ELEMENT_KEY)
        .or_else(|| value.get(LEGACY_ELEMENT_KEY))
        .and_then(Value::as_str)
        .map(ElementId::new)
}

// ============================================================================
// Input Types
// ============================================================================

/// Mouse button for pointer commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button.
    #[default]
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

impl MouseButton {
    /// Returns the protocol button index.
    #[inline]
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

/// Pointer offset relative to the top-left corner of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal offset in CSS pixels.
    pub x: i64,
    /// Vertical offset in CSS pixels.
    pub y: i64,
}

impl Offset {
    /// Creates an offset.
    #[inline]
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Element Commands
// ============================================================================

/// Commands scoped to a single element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementCommand {
    /// Click the element.
    Click,
    /// Submit the element's form.
    Submit,
    /// Clear a text field.
    Clear,
    /// Send a key sequence, one entry per character.
    SendKeys {
        /// Characters (or special key codepoints) to send.
        keys: Vec<String>,
    },
    /// Single-finger tap.
    Tap,
    /// Touch flick starting on the element.
    Flick {
        /// Horizontal distance in pixels.
        xoffset: i64,
        /// Vertical distance in pixels.
        yoffset: i64,
        /// Pixels per second.
        speed: u32,
    },
    /// Read an attribute.
    GetAttribute {
        /// Attribute name.
        name: String,
    },
    /// Read the visible text.
    GetText,
    /// Read the tag name.
    GetTagName,
    /// Read the enabled state.
    IsEnabled,
    /// Read the displayed state.
    IsDisplayed,
    /// Read the selected state.
    IsSelected,
    /// Read a computed style property.
    GetCss {
        /// CSS property name.
        property: String,
    },
    /// Read the page location.
    GetLocation,
    /// Read the location after scrolling into view.
    GetLocationInView,
    /// Read the rendered size.
    GetSize,
    /// Compare against another element.
    Equals {
        /// Element to compare with.
        other: ElementId,
    },
}

impl ElementCommand {
    /// Builds the pending command for the given element.
    ///
    /// Caller-supplied path segments are percent-encoded.
    #[must_use]
    pub fn into_pending(self, id: &ElementId) -> PendingCommand {
        let base = format!("/element/{}", urlencoding::encode(id.as_str()));

        match self {
            Self::Click => PendingCommand::post(format!("{base}/click"), None),
            Self::Submit => PendingCommand::post(format!("{base}/submit"), None),
            Self::Clear => PendingCommand::post(format!("{base}/clear"), None),
            Self::SendKeys { keys } => {
                PendingCommand::post(format!("{base}/value"), Some(json!({ "value": keys })))
            }
            Self::Tap => {
                PendingCommand::post("/touch/click", Some(json!({ "element": id.as_str() })))
            }
            Self::Flick {
                xoffset,
                yoffset,
                speed,
            } => PendingCommand::post(
                "/touch/flick",
                Some(json!({
                    "element": id.as_str(),
                    "xoffset": xoffset,
                    "yoffset": yoffset,
                    "speed": speed,
                })),
            ),
            Self::GetAttribute { name } => {
                PendingCommand::get(format!("{base}/attribute/{}", urlencoding::encode(&name)))
            }
            Self::GetText => PendingCommand::get(format!("{base}/text")),
            Self::GetTagName => PendingCommand::get(format!("{base}/name")),
            Self::IsEnabled => PendingCommand::get(format!("{base}/enabled")),
            Self::IsDisplayed => PendingCommand::get(format!("{base}/displayed")),
            Self::IsSelected => PendingCommand::get(format!("{base}/selected")),
            Self::GetCss { property } => {
                PendingCommand::get(format!("{base}/css/{}", urlencoding::encode(&property)))
            }
            Self::GetLocation => PendingCommand::get(format!("{base}/location")),
            Self::GetLocationInView => PendingCommand::get(format!("{base}/location_in_view")),
            Self::GetSize => PendingCommand::get(format!("{base}/size")),
            Self::Equals { other } => PendingCommand::get(format!(
                "{base}/equals/{}",
                urlencoding::encode(other.as_str())
            )),
        }
    }
}

// ============================================================================
// Session Commands
// ============================================================================

/// Commands addressed to the session root.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Find one element, optionally below a parent.
    Find {
        /// Locator strategy name.
        using: String,
        /// Locator value.
        value: String,
        /// Scope of the search.
        parent: Option<ElementId>,
    },
    /// Find all matching elements, optionally below a parent.
    FindAll {
        /// Locator strategy name.
        using: String,
        /// Locator value.
        value: String,
        /// Scope of the search.
        parent: Option<ElementId>,
    },
    /// Run a synchronous script.
    Execute {
        /// Script body.
        script: String,
        /// Bound arguments (`arguments[n]`).
        args: Vec<Value>,
    },
    /// Run an asynchronous script.
    ExecuteAsync {
        /// Script body.
        script: String,
        /// Bound arguments (`arguments[n]`).
        args: Vec<Value>,
    },
    /// Move the virtual pointer.
    MoveTo {
        /// Target element; `None` moves relative to the current position.
        element: Option<ElementId>,
        /// Offset from the element's top-left corner.
        offset: Option<Offset>,
    },
    /// Press a mouse button.
    ButtonDown {
        /// Button to press.
        button: MouseButton,
    },
    /// Release a mouse button.
    ButtonUp {
        /// Button to release.
        button: MouseButton,
    },
    /// Double-click at the current pointer position.
    DoubleClick,
}

impl SessionCommand {
    /// Builds the pending command.
    #[must_use]
    pub fn into_pending(self) -> PendingCommand {
        match self {
            Self::Find {
                using,
                value,
                parent,
            } => PendingCommand::post(
                scoped_path(parent.as_ref(), "element"),
                Some(json!({ "using": using, "value": value })),
            ),
            Self::FindAll {
                using,
                value,
                parent,
            } => PendingCommand::post(
                scoped_path(parent.as_ref(), "elements"),
                Some(json!({ "using": using, "value": value })),
            ),
            Self::Execute { script, args } => {
                PendingCommand::post("/execute", Some(json!({ "script": script, "args": args })))
            }
            Self::ExecuteAsync { script, args } => PendingCommand::post(
                "/execute_async",
                Some(json!({ "script": script, "args": args })),
            ),
            Self::MoveTo { element, offset } => {
                let mut body = Map::new();
                if let Some(element) = element {
                    body.insert("element".to_string(), Value::String(element.as_str().to_string()));
                }
                if let Some(offset) = offset {
                    body.insert("xoffset".to_string(), json!(offset.x));
                    body.insert("yoffset".to_string(), json!(offset.y));
                }
                PendingCommand::post("/moveto", Some(Value::Object(body)))
            }
            Self::ButtonDown { button } => {
                PendingCommand::post("/buttondown", Some(json!({ "button": button.index() })))
            }
            Self::ButtonUp { button } => {
                PendingCommand::post("/buttonup", Some(json!({ "button": button.index() })))
            }
            Self::DoubleClick => PendingCommand::post("/doubleclick", None),
        }
    }
}

fn scoped_path(parent: Option<&ElementId>, leaf: &str) -> String {
    match parent {
        Some(parent) => format!("/element/{}/{leaf}", urlencoding::encode(parent.as_str())),
        None => format!("/{leaf}"),
    }
}

// ============================================================================
// Tests
// ============================================================================
