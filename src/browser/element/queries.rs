//! Read-only element queries.
//!
//! These map one-to-one onto remote reads and return the requested value,
//! not the element.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::protocol::ElementCommand;

use super::Element;

// ============================================================================
// Types
// ============================================================================

/// Position of an element in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// Rendered size of an element in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Size {
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

// ============================================================================
// Element - Attributes & Text
// ============================================================================

impl Element {
    /// Gets an attribute value.
    ///
    /// Returns `None` if the attribute is absent.
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        if name.is_empty() {
            return Err(Error::invalid_argument("Attribute name must not be empty"));
        }

        let value = self
            .query(ElementCommand::GetAttribute {
                name: name.to_string(),
            })
            .await?;

        Ok(match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
    }

    /// Gets the `value` attribute (for form fields).
    pub async fn value(&self) -> Result<Option<String>> {
        self.attribute("value").await
    }

    /// Gets the visible text.
    pub async fn text(&self) -> Result<String> {
        let value = self.query(ElementCommand::GetText).await?;
        expect_string(value, "text")
    }

    /// Returns `true` if the visible text contains `needle`.
    pub async fn text_present(&self, needle: &str) -> Result<bool> {
        Ok(self.text().await?.contains(needle))
    }

    /// Gets the lowercase tag name.
    pub async fn tag_name(&self) -> Result<String> {
        let value = self.query(ElementCommand::GetTagName).await?;
        expect_string(value, "tag name")
    }

    /// Gets a computed CSS property as reported by the remote end.
    pub async fn css_value(&self, property: &str) -> Result<String> {
        if property.is_empty() {
            return Err(Error::invalid_argument("CSS property name must not be empty"));
        }

        let value = self
            .query(ElementCommand::GetCss {
                property: property.to_string(),
            })
            .await?;
        expect_string(value, "css value")
    }
}

// ============================================================================
// Element - State
// ============================================================================

impl Element {
    /// Checks if the element is enabled.
    pub async fn is_enabled(&self) -> Result<bool> {
        let value = self.query(ElementCommand::IsEnabled).await?;
        expect_bool(value, "enabled")
    }

    /// Checks if the element is disabled.
    pub async fn is_disabled(&self) -> Result<bool> {
        Ok(!self.is_enabled().await?)
    }

    /// Checks if the element is displayed, as decided by the remote end.
    ///
    /// See [`is_visible`](Self::is_visible) for the page-side check.
    pub async fn is_displayed(&self) -> Result<bool> {
        let value = self.query(ElementCommand::IsDisplayed).await?;
        expect_bool(value, "displayed")
    }

    /// Checks if an option, checkbox or radio button is selected.
    pub async fn is_selected(&self) -> Result<bool> {
        let value = self.query(ElementCommand::IsSelected).await?;
        expect_bool(value, "selected")
    }

    /// Checks if both handles refer to the same DOM node.
    pub async fn equals(&self, other: &Element) -> Result<bool> {
        let value = self
            .query(ElementCommand::Equals {
                other: other.inner.id.clone(),
            })
            .await?;
        expect_bool(value, "equals")
    }
}

// ============================================================================
// Element - Geometry
// ============================================================================

impl Element {
    /// Gets the element's position on the page.
    pub async fn location(&self) -> Result<Point> {
        let value = self.query(ElementCommand::GetLocation).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Scrolls the element into view and gets its position in the viewport.
    pub async fn location_in_view(&self) -> Result<Point> {
        let value = self.query(ElementCommand::GetLocationInView).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Gets the element's rendered size.
    pub async fn size(&self) -> Result<Size> {
        let value = self.query(ElementCommand::GetSize).await?;
        Ok(serde_json::from_value(value)?)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn expect_string(value: Value, what: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(Error::protocol(format!("Expected {what} string, got {other}"))),
    }
}

pub(crate) fn expect_bool(value: Value, what: &str) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::protocol(format!("Expected {what} boolean, got {value}")))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_expect_string() {
        assert_eq!(expect_string(json!("div"), "tag name").expect("ok"), "div");
        assert!(matches!(
            expect_string(json!(3), "tag name"),
            Err(Error::Protocol { .. })
        ));
    }

    #[test]
    fn test_expect_bool() {
        assert!(expect_bool(json!(true), "enabled").expect("ok"));
        assert!(expect_bool(json!(null), "enabled").is_err());
    }

    #[test]
    fn test_geometry_decoding() {
        let point: Point = serde_json::from_value(json!({"x": 10, "y": 20.5})).expect("point");
        assert_eq!(point, Point { x: 10.0, y: 20.5 });

        let size: Size =
            serde_json::from_value(json!({"width": 100, "height": 40, "extra": 1})).expect("size");
        assert_eq!(size.width, 100.0);
    }
}
