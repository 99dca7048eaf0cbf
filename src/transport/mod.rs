//! Transport layer.
//!
//! [`Transport`] is the collaborator every [`Session`](crate::Session) talks
//! through. Only [`Transport::issue_command`] is required; lookups, script
//! execution, polling and pointer state have default implementations built
//! on it, which a transport may override (e.g. to use a native wait).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   PendingCommand   ┌───────────────┐     HTTP     ┌────────────┐
//! │   Element    │ ─────────────────► │   Transport   │ ───────────► │ Remote end │
//! │  (Session)   │ ◄───────────────── │ (HttpTransport)│ ◄─────────── │ (WebDriver)│
//! └──────────────┘   Result<Value>    └───────────────┘   Response   └────────────┘
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `http` | `reqwest`-based transport bound to an existing session |

// ============================================================================
// Submodules
// ============================================================================

/// HTTP transport.
pub mod http;

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use parking_lot::Mutex;
use serde_json::Value;

use crate::browser::selector::By;
use crate::error::{Error, Result};
use crate::identifiers::ElementId;
use crate::protocol::{MouseButton, Offset, PendingCommand, SessionCommand, parse_element_ref};
use crate::wait::{self, PollPredicate, WaitOptions};

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpTransport;

// ============================================================================
// Transport
// ============================================================================

/// Issues remote protocol calls for a session.
///
/// Implementations must map stale element references to
/// [`Error::StaleElement`] and empty lookups to [`Error::NoSuchElement`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one remote call and returns the decoded result value.
    async fn issue_command(&self, command: PendingCommand) -> Result<Value>;

    /// Runs a script in the page.
    ///
    /// `args` are exposed to the script as `arguments[n]`.
    async fn execute_script(&self, script: &str, args: Vec<Value>, is_async: bool) -> Result<Value> {
        let command = if is_async {
            SessionCommand::ExecuteAsync {
                script: script.to_string(),
                args,
            }
        } else {
            SessionCommand::Execute {
                script: script.to_string(),
                args,
            }
        };
        self.issue_command(command.into_pending()).await
    }

    /// Finds the first element matching `by`, below `parent` when given.
    async fn find_one(&self, by: &By, parent: Option<&ElementId>) -> Result<ElementId> {
        let command = SessionCommand::Find {
            using: by.strategy().to_string(),
            value: by.value().to_string(),
            parent: parent.cloned(),
        };
        let value = self.issue_command(command.into_pending()).await?;
        parse_element_ref(&value).ok_or_else(|| {
            Error::protocol(format!("Lookup for {by} returned no element reference: {value}"))
        })
    }

    /// Finds every element matching `by`, below `parent` when given.
    async fn find_all(&self, by: &By, parent: Option<&ElementId>) -> Result<Vec<ElementId>> {
        let command = SessionCommand::FindAll {
            using: by.strategy().to_string(),
            value: by.value().to_string(),
            parent: parent.cloned(),
        };
        let value = self.issue_command(command.into_pending()).await?;
        let items = value
            .as_array()
            .ok_or_else(|| Error::protocol(format!("Lookup for {by} did not return a list")))?;
        Ok(items.iter().filter_map(parse_element_ref).collect())
    }

    /// Polls [`find_one`](Self::find_one) until an element appears.
    ///
    /// [`Error::NoSuchElement`] means "not yet"; other errors end the wait.
    async fn wait_for_appearance(
        &self,
        by: &By,
        parent: Option<&ElementId>,
        options: WaitOptions,
    ) -> Result<ElementId> {
        let found = Mutex::new(None);
        let slot = &found;

        let predicate: PollPredicate<'_> = Box::new(move || {
            let attempt: BoxFuture<'_, Result<bool>> = Box::pin(async move {
                match self.find_one(by, parent).await {
                    Ok(id) => {
                        *slot.lock() = Some(id);
                        Ok(true)
                    }
                    Err(err) if err.is_no_such_element() => Ok(false),
                    Err(err) => Err(err),
                }
            });
            attempt
        });

        self.poll_until(predicate, options).await?;
        found
            .into_inner()
            .ok_or_else(|| Error::no_such_element(by.to_string()))
    }

    /// Generic polling primitive.
    async fn poll_until<'a>(&'a self, predicate: PollPredicate<'a>, options: WaitOptions) -> Result<()> {
        wait::poll_until(predicate, options).await
    }

    /// Moves the virtual pointer to `element` (or relative to its current
    /// position when `None`), optionally offset.
    async fn pointer_move_to(&self, element: Option<&ElementId>, offset: Option<Offset>) -> Result<()> {
        let command = SessionCommand::MoveTo {
            element: element.cloned(),
            offset,
        };
        self.issue_command(command.into_pending()).await?;
        Ok(())
    }

    /// Presses a mouse button at the current pointer position.
    async fn pointer_button_down(&self, button: MouseButton) -> Result<()> {
        self.issue_command(SessionCommand::ButtonDown { button }.into_pending())
            .await?;
        Ok(())
    }

    /// Releases a mouse button at the current pointer position.
    async fn pointer_button_up(&self, button: MouseButton) -> Result<()> {
        self.issue_command(SessionCommand::ButtonUp { button }.into_pending())
            .await?;
        Ok(())
    }
}
