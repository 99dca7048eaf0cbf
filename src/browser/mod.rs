//! Browser entities module.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Element`] | Remote DOM element proxy |
//! | [`By`] | Locator strategy |
//! | [`Key`] | Special key codepoints |
//!
//! # Example
//!
//! ```ignore
//! use webdriver_element::{By, Key};
//!
//! let search = session.find_element(By::name("q")).await?;
//! search.send_keys("webdriver").await?.press(Key::Enter).await?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Remote DOM element proxy.
pub mod element;

/// Special key definitions.
pub mod keyboard;

/// Element locator strategies.
pub mod selector;

// ============================================================================
// Re-exports
// ============================================================================

pub use element::{BridgeOp, Element, Point, Size};
pub use keyboard::Key;
pub use selector::By;
