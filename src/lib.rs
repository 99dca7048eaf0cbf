//! WebDriver element client - fluent proxies for remote DOM elements.
//!
//! This library lets calling code address one remote element (click it,
//! read its attributes, wait for state changes) over a WebDriver-style REST
//! protocol without building protocol paths, normalizing optional arguments
//! or re-injecting page helpers by hand.
//!
//! # Architecture
//!
//! ```text
//! caller ──► Element ──► PendingCommand ──► Transport ──► remote end
//!   ▲                                           │
//!   └──── Ok(element) / Ok(value) / Err(..) ◄───┘
//! ```
//!
//! Key design principles:
//!
//! - An [`Element`] is a cheap handle: remote ID + owning [`Session`]
//! - Commands without a meaningful result resolve to the element itself
//! - Queries the protocol lacks run as in-page library calls ([`BridgeOp`])
//! - Waits poll through one engine ([`wait::poll_until`]) with timeouts and
//!   stale-element awareness
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use webdriver_element::{By, HttpTransport, Result, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Bind to a session created elsewhere
//!     let transport = HttpTransport::new("http://localhost:4444/wd/hub", "3f2a9c")?;
//!     let session = Session::builder(Arc::new(transport)).build();
//!
//!     // Find, interact, chain
//!     let field = session.find_element(By::name("q")).await?;
//!     field.type_text("webdriver", Some(true)).await?.submit().await?;
//!
//!     // Wait for the results overlay to go away
//!     let overlay = session.find_element(By::css(".loading")).await?;
//!     overlay.wait_for_disappear(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`browser`] | [`Element`], [`By`], [`Key`] |
//! | [`chain`] | Success-value substitution for chaining |
//! | [`config`] | [`Timeouts`] and transport/bridge settings |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Commands, pending commands, response decoding |
//! | [`session`] | [`Session`] handle |
//! | [`transport`] | [`Transport`] trait and [`HttpTransport`] |
//! | [`wait`] | Polling wait engine |

// ============================================================================
// Modules
// ============================================================================

/// Browser entities: Element, locators, keys.
pub mod browser;

/// Success-value substitution for fluent chaining.
pub mod chain;

/// Session configuration.
pub mod config;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers.
pub mod identifiers;

/// Remote protocol message types.
pub mod protocol;

/// Session handle.
pub mod session;

/// Transport layer.
pub mod transport;

/// Polling wait engine.
pub mod wait;

// ============================================================================
// Re-exports
// ============================================================================

// Browser types
pub use browser::{BridgeOp, By, Element, Key, Point, Size};

// Chaining
pub use chain::ChainExt;

// Configuration
pub use config::{BridgeConfig, HttpConfig, Timeouts};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{ElementId, SessionId};

// Protocol types
pub use protocol::{MouseButton, Offset, PendingCommand};

// Session
pub use session::{Session, SessionBuilder};

// Transport
pub use transport::{HttpTransport, Transport};

// Waiting
pub use wait::WaitOptions;
