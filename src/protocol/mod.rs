//! Remote protocol message types.
//!
//! This module describes remote calls independently of how they travel:
//! commands become [`PendingCommand`]s, bodies come back as [`Response`]s.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | Element and session command definitions |
//! | `request` | Pending command and HTTP method |
//! | `response` | Response decoding and error mapping |

// ============================================================================
// Submodules
// ============================================================================

/// Command definitions and element references.
pub mod command;

/// Pending command type.
pub mod request;

/// Response decoding.
pub mod response;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{
    ElementCommand, LEGACY_ELEMENT_KEY, MouseButton, Offset, SessionCommand, W3C_ELEMENT_KEY,
    element_ref, parse_element_ref,
};
pub use request::{HttpMethod, PendingCommand};
pub use response::Response;
