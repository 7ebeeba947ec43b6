//! # Scribe: the dispatch engine.
//!
//! [`Scribe`] owns the ordered plugin sequence and performs the per-event
//! fan-out. One `log()` call:
//!
//! 1. builds the immutable [`Event`] (merging ambient provider metadata under
//!    the explicit per-call metadata);
//! 2. hands the event to the line writer (outside the fan-out);
//! 3. spawns one task per plugin, in registration order, each isolated against
//!    panics;
//! 4. spawns one aggregator task that joins every plugin task and settles the
//!    returned [`DispatchHandle`].
//!
//! ```text
//!    log(level, msg, meta, source)
//!        │ build Event, write line          (Arc-clone per plugin)
//!        ├────────────────► task P1 ─► P1.handle(&event) ─┐
//!        ├────────────────► task P2 ─► P2.handle(&event) ─┼─► aggregator ─► DispatchHandle
//!        └────────────────► task PN ─► PN.handle(&event) ─┘   (first failure wins)
//! ```
//!
//! ## Guarantees
//! - `log()` never fails and never blocks; suspension happens only if the
//!   caller awaits the handle.
//! - Registration order fixes invocation *start* order only; completion order
//!   across plugins is unspecified, and so is effect ordering across separate
//!   `log()` calls. Await each handle before the next call if per-event effect
//!   ordering matters.
//! - A failing or panicking plugin never short-circuits its siblings; the
//!   aggregator joins every invocation before settling.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::task::JoinHandle;

use crate::error::DispatchError;
use crate::events::{Event, Level, Metadata};
use crate::plugins::Plugin;

use super::config::{MetadataProvider, ScribeConfig};
use super::handle::DispatchHandle;
use super::writer::{LineWriter, LogWriter};

/// The logging façade: a line writer plus an ordered set of sink plugins.
///
/// Construct with [`Scribe::new`]; emit with [`Scribe::log`] or the
/// level-specific helpers.
pub struct Scribe {
    label: Arc<str>,
    writer: Arc<dyn LineWriter>,
    metadata_provider: Option<MetadataProvider>,
    plugins: Vec<Arc<dyn Plugin>>,
}

impl Scribe {
    /// Creates a scribe from a configuration and an initial plugin sequence.
    pub fn new(config: ScribeConfig, plugins: Vec<Arc<dyn Plugin>>) -> Self {
        Self {
            label: config.label.into(),
            writer: config.writer.unwrap_or_else(|| Arc::new(LogWriter)),
            metadata_provider: config.metadata_provider,
            plugins,
        }
    }

    /// The identifying label this scribe renders under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Appends a plugin; it observes events from subsequent `log()` calls.
    pub fn push_plugin(&mut self, plugin: Arc<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    /// Removes every plugin with the given name.
    ///
    /// In-flight invocations are unaffected: dispatched tasks hold their own
    /// `Arc` to the plugin and run to completion. Returns `true` if anything
    /// was removed.
    pub fn remove_plugin(&mut self, name: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|p| p.name() != name);
        self.plugins.len() != before
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Dispatches one event to the line writer and every registered plugin.
    ///
    /// Never fails and returns without waiting for any plugin; failures are
    /// observable only by awaiting the returned [`DispatchHandle`]. Must be
    /// called within a tokio runtime context.
    pub fn log(
        &self,
        level: Level,
        message: impl Into<Arc<str>>,
        metadata: Option<Metadata>,
        source: Option<&str>,
    ) -> DispatchHandle {
        let event = self.build_event(level, message, metadata, source);

        self.writer.write_line(&self.label, &event);

        let event = Arc::new(event);
        let mut invocations: Vec<(&'static str, JoinHandle<Result<(), DispatchError>>)> =
            Vec::with_capacity(self.plugins.len());

        for plugin in &self.plugins {
            let plugin = Arc::clone(plugin);
            let name = plugin.name();
            let ev = Arc::clone(&event);

            let worker = tokio::spawn(async move {
                let fut = async move { plugin.handle(ev.as_ref()).await };
                match AssertUnwindSafe(fut).catch_unwind().await {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(source)) => Err(DispatchError::Plugin {
                        plugin: name,
                        source,
                    }),
                    Err(_) => Err(DispatchError::Panicked { plugin: name }),
                }
            });

            invocations.push((name, worker));
        }

        DispatchHandle::new(tokio::spawn(async move {
            let mut first_failure: Option<DispatchError> = None;

            // Join in registration order so "first failure" is deterministic.
            // Every invocation is joined even after a failure is recorded.
            for (name, worker) in invocations {
                let outcome = match worker.await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(DispatchError::Panicked { plugin: name }),
                };
                if first_failure.is_none() {
                    if let Err(e) = outcome {
                        first_failure = Some(e);
                    }
                }
            }

            match first_failure {
                None => Ok(()),
                Some(e) => Err(e),
            }
        }))
    }

    fn build_event(
        &self,
        level: Level,
        message: impl Into<Arc<str>>,
        metadata: Option<Metadata>,
        source: Option<&str>,
    ) -> Event {
        let metadata = match (&self.metadata_provider, metadata) {
            (None, explicit) => explicit,
            (Some(provider), None) => Some(provider()),
            (Some(provider), Some(explicit)) => {
                let mut merged = provider();
                merged.extend(explicit);
                Some(merged)
            }
        };

        let mut event = Event::new(level, message);
        if let Some(metadata) = metadata {
            event = event.with_metadata(metadata);
        }
        if let Some(source) = source {
            event = event.with_source(source);
        }
        event
    }
}

// ---- Level helpers ----

impl Scribe {
    /// Logs at [`Level::Trace`].
    pub fn trace(
        &self,
        message: impl Into<Arc<str>>,
        metadata: Option<Metadata>,
        source: Option<&str>,
    ) -> DispatchHandle {
        self.log(Level::Trace, message, metadata, source)
    }

    /// Logs at [`Level::Debug`].
    pub fn debug(
        &self,
        message: impl Into<Arc<str>>,
        metadata: Option<Metadata>,
        source: Option<&str>,
    ) -> DispatchHandle {
        self.log(Level::Debug, message, metadata, source)
    }

    /// Logs at [`Level::Info`].
    pub fn info(
        &self,
        message: impl Into<Arc<str>>,
        metadata: Option<Metadata>,
        source: Option<&str>,
    ) -> DispatchHandle {
        self.log(Level::Info, message, metadata, source)
    }

    /// Logs at [`Level::Notice`].
    pub fn notice(
        &self,
        message: impl Into<Arc<str>>,
        metadata: Option<Metadata>,
        source: Option<&str>,
    ) -> DispatchHandle {
        self.log(Level::Notice, message, metadata, source)
    }

    /// Logs at [`Level::Warning`].
    pub fn warning(
        &self,
        message: impl Into<Arc<str>>,
        metadata: Option<Metadata>,
        source: Option<&str>,
    ) -> DispatchHandle {
        self.log(Level::Warning, message, metadata, source)
    }

    /// Logs at [`Level::Error`].
    pub fn error(
        &self,
        message: impl Into<Arc<str>>,
        metadata: Option<Metadata>,
        source: Option<&str>,
    ) -> DispatchHandle {
        self.log(Level::Error, message, metadata, source)
    }

    /// Logs at [`Level::Critical`].
    pub fn critical(
        &self,
        message: impl Into<Arc<str>>,
        metadata: Option<Metadata>,
        source: Option<&str>,
    ) -> DispatchHandle {
        self.log(Level::Critical, message, metadata, source)
    }
}
