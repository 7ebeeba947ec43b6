//! Error types used by the dispatcher and plugins.
//!
//! This module defines two main error enums:
//!
//! - [`PluginError`] — a failure inside one plugin invocation.
//! - [`DispatchError`] — the aggregate outcome surfaced through a
//!   [`DispatchHandle`](crate::DispatchHandle), attributing the first failure
//!   to the plugin that produced it.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics.
//!
//! Note that `log()` itself has no error path: event construction is total and
//! dispatch always starts. Failures exist only inside plugin invocations and
//! are only observable by awaiting the returned handle.

use thiserror::Error;

/// # Errors produced by a single plugin invocation.
///
/// Always scoped to one plugin's handling of one event; a failure here never
/// aborts sibling plugin invocations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PluginError {
    /// The plugin's output formatter failed to produce a representation.
    #[error("formatter failed: {error}")]
    Format {
        /// The underlying formatter error message.
        error: String,
    },

    /// A file storage operation failed.
    #[error("storage failure: {source}")]
    Storage {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A network transport operation failed.
    #[error("transport failure: {error}")]
    Transport {
        /// The underlying transport error message.
        error: String,
    },

    /// An application-level plugin failure.
    #[error("plugin failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl PluginError {
    /// Creates a formatter failure from any displayable error.
    pub fn format(error: impl std::fmt::Display) -> Self {
        PluginError::Format {
            error: error.to_string(),
        }
    }

    /// Creates a transport failure from any displayable error.
    pub fn transport(error: impl std::fmt::Display) -> Self {
        PluginError::Transport {
            error: error.to_string(),
        }
    }

    /// Creates an application-level failure from any displayable error.
    pub fn fail(error: impl std::fmt::Display) -> Self {
        PluginError::Fail {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use scribe::PluginError;
    ///
    /// let err = PluginError::fail("boom");
    /// assert_eq!(err.as_label(), "plugin_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PluginError::Format { .. } => "plugin_format",
            PluginError::Storage { .. } => "plugin_storage",
            PluginError::Transport { .. } => "plugin_transport",
            PluginError::Fail { .. } => "plugin_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PluginError::Format { error } => format!("format: {error}"),
            PluginError::Storage { source } => format!("storage: {source}"),
            PluginError::Transport { error } => format!("transport: {error}"),
            PluginError::Fail { error } => format!("error: {error}"),
        }
    }
}

/// # Aggregate outcome of one dispatch.
///
/// Surfaced through the completion handle when at least one plugin invocation
/// did not succeed. "First" failure means first by plugin registration order,
/// which is deterministic; all plugin invocations run to completion regardless.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A plugin returned a failure for this event.
    #[error("plugin '{plugin}' failed: {source}")]
    Plugin {
        /// Name of the failing plugin.
        plugin: &'static str,
        /// The plugin's own error.
        #[source]
        source: PluginError,
    },

    /// A plugin panicked while handling this event.
    ///
    /// Carries the reserved name `"dispatch"` instead of a plugin name in the
    /// one case where the aggregation task itself failed to join (not expected
    /// in practice; it neither panics nor gets aborted).
    #[error("plugin '{plugin}' panicked")]
    Panicked {
        /// Name of the panicking plugin, or the reserved `"dispatch"`.
        plugin: &'static str,
    },
}

impl DispatchError {
    /// Returns the name of the plugin this failure is attributed to.
    ///
    /// The reserved name `"dispatch"` means the fan-in itself failed rather
    /// than any registered plugin; see [`DispatchError::Panicked`].
    pub fn plugin(&self) -> &'static str {
        match self {
            DispatchError::Plugin { plugin, .. } => plugin,
            DispatchError::Panicked { plugin } => plugin,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use scribe::{DispatchError, PluginError};
    ///
    /// let err = DispatchError::Plugin {
    ///     plugin: "file",
    ///     source: PluginError::fail("boom"),
    /// };
    /// assert_eq!(err.as_label(), "dispatch_plugin_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::Plugin { .. } => "dispatch_plugin_failed",
            DispatchError::Panicked { .. } => "dispatch_plugin_panicked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = PluginError::from(io);
        assert_eq!(err.as_label(), "plugin_storage");
    }

    #[test]
    fn test_dispatch_error_attribution() {
        let err = DispatchError::Plugin {
            plugin: "http",
            source: PluginError::transport("connection refused"),
        };
        assert_eq!(err.plugin(), "http");
        assert!(err.to_string().contains("http"));
        assert!(err.to_string().contains("connection refused"));
    }
}
