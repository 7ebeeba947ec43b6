//! # scribe
//!
//! **Scribe** is a pluggable structured-logging façade: callers emit leveled,
//! structured events; registered sink plugins consume each event
//! asynchronously, without ever blocking or failing the caller.
//!
//! ## Architecture
//! ```text
//!     caller ── trace()/info()/error()/... ──► Scribe::log()
//!                                                  │
//!                                  build immutable Event (ambient + explicit metadata)
//!                                                  │
//!                          ┌───────────────────────┼──────────────────────────┐
//!                          ▼                       ▼                          ▼
//!                    LineWriter             one task per plugin          DispatchHandle
//!                 (log facade line)       ┌───────┬────────┐           (awaitable fan-in,
//!                                         ▼       ▼        ▼            first failure wins)
//!                                     FilePlugin HttpPlugin custom
//! ```
//!
//! ## Contract
//! - `log()` **never fails and never blocks**; it returns a [`DispatchHandle`]
//!   that resolves only after every plugin invocation has resolved.
//! - Dropping the handle is fire-and-forget: plugins still run to completion,
//!   and unobserved failures are dropped by design.
//! - Plugins run concurrently; registration order fixes invocation start order
//!   only. No delivery guarantees, no retries, no cross-call effect ordering.
//!
//! ## Features
//! | Area           | Description                                              | Key types / traits                |
//! |----------------|----------------------------------------------------------|-----------------------------------|
//! | **Events**     | Immutable leveled events with structured metadata.       | [`Event`], [`Level`], [`Metadata`]|
//! | **Plugins**    | Sink contract plus file and HTTP built-ins.              | [`Plugin`], [`FilePlugin`], [`HttpPlugin`] |
//! | **Dispatch**   | Per-event async fan-out with awaitable completion.       | [`Scribe`], [`DispatchHandle`]    |
//! | **Rendering**  | Line output through the `log` facade, overridable.       | [`LineWriter`], [`LogWriter`]     |
//! | **Errors**     | Typed per-plugin and aggregate dispatch failures.        | [`PluginError`], [`DispatchError`]|
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use scribe::{FilePlugin, Scribe, ScribeConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let dir = std::env::temp_dir();
//!     let sink = FilePlugin::new(dir, "scribe.doc.log", |ev| {
//!         Ok(Some(format!("{}: {}", ev.level.as_str().to_uppercase(), ev.message)))
//!     });
//!
//!     let scribe = Scribe::new(ScribeConfig::new("docs"), vec![Arc::new(sink)]);
//!
//!     // Fire-and-forget: ignore the handle...
//!     scribe.debug("warming up", None, None);
//!
//!     // ...or await it to observe the fan-out outcome.
//!     let handle = scribe.info("ready", None, Some("main"));
//!     handle.await.ok();
//! }
//! ```

mod core;
mod error;
mod events;
mod plugins;

// ---- Public re-exports ----

pub use core::{DispatchHandle, LineWriter, LogWriter, MetadataProvider, Scribe, ScribeConfig};
pub use error::{DispatchError, PluginError};
pub use events::{Event, Level, Metadata, MetadataValue};
pub use plugins::{
    storage, BodyFormatter, FilePlugin, HttpPlugin, HttpResponse, HttpTransport, OutputFormatter,
    Plugin, ResponseHandler, Transport,
};
