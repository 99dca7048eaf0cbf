//! Shared test support: a scripted in-memory transport.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use webdriver_element::{
    By, Element, PendingCommand, Result, Session, Timeouts, Transport,
};

// ============================================================================
// ScriptedTransport
// ============================================================================

type Handler = Box<dyn Fn(&PendingCommand) -> Result<Value> + Send + Sync>;

/// Transport answering every command through a closure and recording it.
pub struct ScriptedTransport {
    handler: Handler,
    commands: Mutex<Vec<PendingCommand>>,
}

impl ScriptedTransport {
    pub fn new<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&PendingCommand) -> Result<Value> + Send + Sync + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
            commands: Mutex::new(Vec::new()),
        })
    }

    /// Returns every command issued so far.
    pub fn commands(&self) -> Vec<PendingCommand> {
        self.commands.lock().clone()
    }

    /// Returns the paths of every command issued so far.
    pub fn paths(&self) -> Vec<String> {
        self.commands.lock().iter().map(|c| c.path.clone()).collect()
    }

    /// Returns the scripts sent through `/execute`.
    pub fn scripts(&self) -> Vec<String> {
        self.commands
            .lock()
            .iter()
            .filter(|c| c.path == "/execute")
            .filter_map(|c| c.data.as_ref())
            .filter_map(|d| d["script"].as_str().map(str::to_string))
            .collect()
    }

    /// Forgets recorded commands.
    pub fn reset(&self) {
        self.commands.lock().clear();
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn issue_command(&self, command: PendingCommand) -> Result<Value> {
        let result = (self.handler)(&command);
        self.commands.lock().push(command);
        result
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Installs a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Short timeouts for polling tests.
pub fn fast_timeouts() -> Timeouts {
    Timeouts::new()
        .with_wait_for_element(Duration::from_millis(500))
        .with_wait_for_element_disappear(Duration::from_millis(500))
        .with_wait_for_detach(Duration::from_millis(500))
        .with_poll_interval(Duration::from_millis(50))
}

/// Builds a session over `transport` with fast timeouts.
pub fn session(transport: Arc<ScriptedTransport>) -> Session {
    Session::builder(transport).timeouts(fast_timeouts()).build()
}

/// Looks up the element `e1` through the unscoped lookup path.
pub async fn element(session: &Session) -> Element {
    session
        .find_element(By::css("#target"))
        .await
        .expect("lookup")
}

/// Legacy element reference body.
pub fn element_value(id: &str) -> Value {
    json!({ "ELEMENT": id })
}

/// Answers the unscoped lookup with `e1`, everything else with `null`.
pub fn lookup_or_null(command: &PendingCommand) -> Result<Value> {
    if command.path == "/element" {
        Ok(element_value("e1"))
    } else {
        Ok(Value::Null)
    }
}
