//! # File sink plugin.
//!
//! [`FilePlugin`] appends one formatted line per event to a line-oriented file
//! via read-modify-write: read the stored sequence (missing file ⇒ empty),
//! append the new line, rewrite the file.
//!
//! ## Known limitation
//! The read-modify-write is unlocked. Two invocations targeting the same file
//! — from the same dispatch or from overlapping `log()` calls — race: the last
//! writer wins and intermediate appends can be lost. Callers that need an
//! ordered append-only file must await each dispatch handle before issuing the
//! next `log()` call.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use scribe::{FilePlugin, Scribe, ScribeConfig};
//!
//! let plugin = FilePlugin::new("/var/log/app", "events.log", |ev| {
//!     Ok(Some(format!("{}: {}", ev.level.as_str().to_uppercase(), ev.message)))
//! });
//! let scribe = Scribe::new(ScribeConfig::new("app"), vec![Arc::new(plugin)]);
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PluginError;
use crate::events::Event;

use super::plugin::Plugin;
use super::storage;

/// Converts an event into a sink's textual output line.
///
/// Returning `Ok(None)` means "skip this event": the plugin performs no effect
/// and reports success.
pub type OutputFormatter = Arc<dyn Fn(&Event) -> Result<Option<String>, PluginError> + Send + Sync>;

/// A plugin that appends formatted events to a file.
pub struct FilePlugin {
    path: PathBuf,
    formatter: OutputFormatter,
}

impl FilePlugin {
    /// Creates a file plugin writing to `filename` inside `dir`.
    ///
    /// The formatter decides the line written for each event; returning
    /// `Ok(None)` skips the event entirely.
    pub fn new<F>(dir: impl Into<PathBuf>, filename: &str, formatter: F) -> Self
    where
        F: Fn(&Event) -> Result<Option<String>, PluginError> + Send + Sync + 'static,
    {
        Self {
            path: dir.into().join(filename),
            formatter: Arc::new(formatter),
        }
    }

    /// The full path this plugin writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Plugin for FilePlugin {
    async fn handle(&self, event: &Event) -> Result<(), PluginError> {
        let Some(line) = (self.formatter)(event)? else {
            return Ok(());
        };

        let mut lines = storage::read_lines(&self.path).await?;
        lines.push(line);
        storage::write_lines(&self.path, &lines).await?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
