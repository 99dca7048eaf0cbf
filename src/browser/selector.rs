//! Element locator strategies.
//!
//! A [`By`] value becomes the `{ "using": ..., "value": ... }` body of a
//! lookup. Strategy names are the ones defined by the WebDriver protocol.
//!
//! | Constructor | `using` |
//! |-------------|---------|
//! | [`By::css`] | `css selector` |
//! | [`By::xpath`] | `xpath` |
//! | [`By::id`] | `id` |
//! | [`By::name`] | `name` |
//! | [`By::class`] | `class name` |
//! | [`By::tag`] | `tag name` |
//! | [`By::link_text`] | `link text` |
//! | [`By::partial_link_text`] | `partial link text` |
//!
//! Plain strings convert to CSS selectors:
//!
//! ```ignore
//! let rows = table.find_elements("tbody > tr").await?;
//! let next = session.find_element(By::link_text("Next")).await?;
//! ```

use std::fmt;

// ============================================================================
// By
// ============================================================================

/// How to locate an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum By {
    /// CSS selector.
    Css(String),
    /// XPath expression, evaluated against the search root.
    XPath(String),
    /// `id` attribute.
    Id(String),
    /// `name` attribute.
    Name(String),
    /// One class name (no dots, no spaces).
    Class(String),
    /// Tag name.
    Tag(String),
    /// Exact anchor text.
    LinkText(String),
    /// Substring of anchor text.
    PartialLinkText(String),
}

impl By {
    #[inline]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    #[inline]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    #[inline]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    #[inline]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    #[inline]
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    #[inline]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    #[inline]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    #[inline]
    pub fn partial_link_text(text: impl Into<String>) -> Self {
        Self::PartialLinkText(text.into())
    }

    /// Returns the protocol strategy name (`using`).
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Css(_) => "css selector",
            Self::XPath(_) => "xpath",
            Self::Id(_) => "id",
            Self::Name(_) => "name",
            Self::Class(_) => "class name",
            Self::Tag(_) => "tag name",
            Self::LinkText(_) => "link text",
            Self::PartialLinkText(_) => "partial link text",
        }
    }

    /// Returns the locator value (`value`).
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Css(v)
            | Self::XPath(v)
            | Self::Id(v)
            | Self::Name(v)
            | Self::Class(v)
            | Self::Tag(v)
            | Self::LinkText(v)
            | Self::PartialLinkText(v) => v,
        }
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.strategy(), self.value())
    }
}

impl From<&str> for By {
    fn from(selector: &str) -> Self {
        Self::css(selector)
    }
}

impl From<String> for By {
    fn from(selector: String) -> Self {
        Self::Css(selector)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        let cases = [
            (By::css("a"), "css selector"),
            (By::xpath("//a"), "xpath"),
            (By::id("a"), "id"),
            (By::name("a"), "name"),
            (By::class("a"), "class name"),
            (By::tag("a"), "tag name"),
            (By::link_text("a"), "link text"),
            (By::partial_link_text("a"), "partial link text"),
        ];
        for (by, using) in cases {
            assert_eq!(by.strategy(), using);
            assert_eq!(by.value(), if using == "xpath" { "//a" } else { "a" });
        }
    }

    #[test]
    fn test_display_names_strategy() {
        assert_eq!(By::tag("li").to_string(), "tag name:li");
    }

    #[test]
    fn test_strings_are_css() {
        assert_eq!(By::from("tbody > tr"), By::css("tbody > tr"));
        assert_eq!(By::from(String::from("#q")), By::Css("#q".into()));
    }
}
