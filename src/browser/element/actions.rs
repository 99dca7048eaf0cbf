//! Chainable element commands.
//!
//! Every method here resolves to the element it was called on, so calls
//! chain. Optional parameters take `None` for their documented default.

use tracing::debug;

use crate::browser::keyboard::{Key, key_sequence};
use crate::chain::ChainExt;
use crate::error::{Error, Result};
use crate::protocol::{ElementCommand, MouseButton, Offset, SessionCommand};

use super::Element;

// ============================================================================
// Constants
// ============================================================================

/// Default flick speed in pixels per second.
const DEFAULT_FLICK_SPEED: u32 = 100;

// ============================================================================
// Element - Basic Actions
// ============================================================================

impl Element {
    /// Clicks the element.
    pub async fn click(&self) -> Result<Element> {
        self.perform(ElementCommand::Click).await
    }

    /// Submits the form this element belongs to.
    pub async fn submit(&self) -> Result<Element> {
        self.perform(ElementCommand::Submit).await
    }

    /// Clears a text input or textarea.
    pub async fn clear(&self) -> Result<Element> {
        self.perform(ElementCommand::Clear).await
    }
}

// ============================================================================
// Element - Keyboard Input
// ============================================================================

impl Element {
    /// Sends a key sequence to the element.
    ///
    /// Special keys can be embedded with [`Key`]'s `Display` impl. An empty
    /// sequence is rejected with [`Error::InvalidArgument`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// element.send_keys("user@example.com").await?;
    /// ```
    pub async fn send_keys(&self, keys: &str) -> Result<Element> {
        if keys.is_empty() {
            return Err(Error::invalid_argument("Key sequence must not be empty"));
        }
        debug!(element_id = %self.inner.id, key_count = keys.chars().count(), "Sending keys");
        self.perform(ElementCommand::SendKeys {
            keys: key_sequence(keys),
        })
        .await
    }

    /// Types into the element, clearing it first when `clear` is `Some(true)`.
    ///
    /// `clear` defaults to `false`. A failed clear is returned without
    /// sending any keys; empty `keys` are rejected before anything is sent.
    pub async fn type_text(&self, keys: &str, clear: Option<bool>) -> Result<Element> {
        if keys.is_empty() {
            return Err(Error::invalid_argument("Key sequence must not be empty"));
        }
        if clear.unwrap_or(false) {
            self.clear().await?;
        }
        self.send_keys(keys).await
    }

    /// Presses one special key.
    pub async fn press(&self, key: Key) -> Result<Element> {
        self.send_keys(&key.to_string()).await
    }
}

// ============================================================================
// Element - Mouse Input
// ============================================================================

impl Element {
    /// Moves the pointer to the element.
    ///
    /// `offset` is measured from the element's top-left corner; `None`
    /// targets the element's center.
    pub async fn move_to(&self, offset: Option<Offset>) -> Result<Element> {
        debug!(element_id = %self.inner.id, offset = ?offset, "Moving pointer to element");
        self.transport()
            .pointer_move_to(Some(&self.inner.id), offset)
            .chain(self.clone())
            .await
    }

    /// Presses a mouse button over the element (without release).
    ///
    /// The pointer is moved to the element first. `button` defaults to
    /// [`MouseButton::Left`].
    pub async fn mouse_down(
        &self,
        button: Option<MouseButton>,
        offset: Option<Offset>,
    ) -> Result<Element> {
        let button = button.unwrap_or_default();
        debug!(element_id = %self.inner.id, ?button, "Mouse down on element");

        self.move_to(offset).await?;
        self.transport()
            .pointer_button_down(button)
            .chain(self.clone())
            .await
    }

    /// Releases a mouse button over the element.
    ///
    /// The pointer is moved to the element first. `button` defaults to
    /// [`MouseButton::Left`].
    pub async fn mouse_up(
        &self,
        button: Option<MouseButton>,
        offset: Option<Offset>,
    ) -> Result<Element> {
        let button = button.unwrap_or_default();
        debug!(element_id = %self.inner.id, ?button, "Mouse up on element");

        self.move_to(offset).await?;
        self.transport()
            .pointer_button_up(button)
            .chain(self.clone())
            .await
    }

    /// Double-clicks the element.
    pub async fn double_click(&self) -> Result<Element> {
        debug!(element_id = %self.inner.id, "Double clicking element");

        self.move_to(None).await?;
        self.transport()
            .issue_command(SessionCommand::DoubleClick.into_pending())
            .chain(self.clone())
            .await
    }
}

// ============================================================================
// Element - Touch Input
// ============================================================================

impl Element {
    /// Taps the element.
    pub async fn tap(&self) -> Result<Element> {
        self.perform(ElementCommand::Tap).await
    }

    /// Flicks starting on the element.
    ///
    /// `speed` is in pixels per second and defaults to 100.
    pub async fn flick(&self, xoffset: i64, yoffset: i64, speed: Option<u32>) -> Result<Element> {
        self.perform(ElementCommand::Flick {
            xoffset,
            yoffset,
            speed: speed.unwrap_or(DEFAULT_FLICK_SPEED),
        })
        .await
    }
}
