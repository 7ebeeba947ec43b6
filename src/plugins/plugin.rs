//! # Core plugin trait
//!
//! `Plugin` is the extension point for attaching sinks to a
//! [`Scribe`](crate::Scribe). Each invocation runs on its own spawned task, so
//! implementations do **not** block the caller of `log()` nor other plugins.
//!
//! ## Contract
//! - The event passed in is fully formed and immutable for the duration of the
//!   call; every plugin sees the same value.
//! - A plugin is invoked at most once per event, and a failed invocation is
//!   never retried.
//! - Plugins own their mutable state and its synchronization (an open file
//!   handle, an HTTP client, a counter). The dispatcher adds no locking on a
//!   plugin's behalf, and plugins sharing a resource are not coordinated.
//!
//! ## Example (skeleton)
//! ```rust
//! use scribe::{Event, Plugin, PluginError};
//!
//! struct Audit;
//!
//! #[async_trait::async_trait]
//! impl Plugin for Audit {
//!     async fn handle(&self, event: &Event) -> Result<(), PluginError> {
//!         // write audit record...
//!         let _ = event;
//!         Ok(())
//!     }
//!     fn name(&self) -> &'static str { "audit" }
//! }
//! ```

use async_trait::async_trait;

use crate::error::PluginError;
use crate::events::Event;

/// Contract for event sinks.
///
/// Called from a per-invocation spawned task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Plugin: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    ///
    /// # Errors
    /// Any failure is scoped to this invocation and surfaced through the
    /// dispatch handle; sibling plugins are unaffected.
    async fn handle(&self, event: &Event) -> Result<(), PluginError>;

    /// Human-readable name (for error attribution and logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
