//! Remote DOM element proxy.
//!
//! An [`Element`] wraps one remote element reference and its owning
//! session. Commands are translated into remote calls; chainable commands
//! hand back the element itself.
//!
//! # Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | `core` | Element struct, accessors, command dispatch |
//! | `actions` | Chainable commands (click, keys, pointer, touch) |
//! | `queries` | Read-only queries (attributes, state, geometry) |
//! | `lookup` | Descendant lookups |
//! | `bridge` | Page-side library calls and visibility helper |
//! | `waits` | Polling waits (disappear, detach, custom) |
//!
//! # Example
//!
//! ```ignore
//! let field = session.find_element(By::name("email")).await?;
//!
//! // Chain
//! field.type_text("user@example.com", Some(true)).await?.submit().await?;
//!
//! // Query
//! let color = field.computed_css("border-color").await?;
//!
//! // Wait
//! let spinner = session.find_element(".spinner").await?;
//! spinner.wait_for_disappear(None).await?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod actions;
mod bridge;
mod core;
mod lookup;
mod queries;
mod waits;

// ============================================================================
// Re-exports
// ============================================================================

pub use bridge::BridgeOp;
pub use core::Element;
pub use queries::{Point, Size};
