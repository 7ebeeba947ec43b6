//! # Log severity levels.
//!
//! [`Level`] is a seven-step severity scale, totally ordered from
//! [`Level::Trace`] (lowest) to [`Level::Critical`] (highest). The ordering is
//! derived from declaration order, so `Level::Trace < Level::Critical` holds.
//!
//! Levels map onto the five-step scale of the [`log`] facade when events are
//! rendered as text lines: `Notice` folds into `Info`, `Critical` into `Error`.
//!
//! ## Example
//! ```rust
//! use scribe::Level;
//!
//! assert!(Level::Debug < Level::Warning);
//! assert_eq!(Level::Notice.as_str(), "notice");
//! ```

use serde::Serialize;

/// Severity of a log event.
///
/// Ordered by severity; comparison follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Fine-grained tracing, usually disabled in production.
    Trace,
    /// Diagnostic detail for developers.
    Debug,
    /// Routine operational messages.
    Info,
    /// Normal but noteworthy conditions.
    Notice,
    /// Something unexpected that the system recovered from.
    Warning,
    /// An operation failed.
    Error,
    /// The system is in a state that demands immediate attention.
    Critical,
}

impl Level {
    /// Returns the lowercase label for this level.
    ///
    /// # Example
    /// ```
    /// use scribe::Level;
    ///
    /// assert_eq!(Level::Critical.as_str(), "critical");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }

    /// Maps this level onto the [`log`] facade's five-step scale.
    ///
    /// `Notice` has no direct counterpart and folds into `Info`;
    /// `Critical` folds into `Error`.
    pub fn to_log_level(self) -> log::Level {
        match self {
            Level::Trace => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info | Level::Notice => log::Level::Info,
            Level::Warning => log::Level::Warn,
            Level::Error | Level::Critical => log::Level::Error,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
