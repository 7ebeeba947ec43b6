//! # The immutable log event.
//!
//! [`Event`] is the value handed to every registered plugin and to the line
//! writer. It is constructed once per `log()` call and never mutated afterwards;
//! the dispatcher shares it behind an `Arc`, so every plugin observes exactly
//! the same value.
//!
//! [`Metadata`] is a string-keyed map of [`MetadataValue`]s — a string, a
//! nested map, or a sequence, recursively. Keys are unique; insertion order is
//! irrelevant (the map is a `BTreeMap`, so rendering is deterministic).
//!
//! ## Example
//! ```rust
//! use scribe::{Event, Level, Metadata};
//!
//! let mut meta = Metadata::new();
//! meta.insert("request_id".into(), "a1b2".into());
//!
//! let ev = Event::new(Level::Warning, "slow query")
//!     .with_metadata(meta)
//!     .with_source("db");
//!
//! assert_eq!(ev.level, Level::Warning);
//! assert_eq!(ev.source.as_deref(), Some("db"));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::SystemTime;

use serde::Serialize;

use super::level::Level;

/// String-keyed structured metadata attached to an event.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A structured metadata value: a string, a nested map, or a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// A plain string value.
    String(String),
    /// A nested map of metadata.
    Map(Metadata),
    /// An ordered sequence of metadata values.
    Sequence(Vec<MetadataValue>),
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::String(s.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::String(s)
    }
}

impl std::fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataValue::String(s) => f.write_str(s),
            MetadataValue::Map(m) => {
                f.write_str("{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{k}={v}")?;
                }
                f.write_str("}")
            }
            MetadataValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// One immutable log occurrence.
///
/// Construction is total: only `level` and `message` are required, and no
/// combination of inputs is rejected. `metadata` and `source` default to
/// absent.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    /// Severity of this event.
    pub level: Level,
    /// The text payload of the log line.
    pub message: Arc<str>,
    /// Structured context, if any.
    pub metadata: Option<Metadata>,
    /// Producing subsystem, if known.
    pub source: Option<Arc<str>>,
    /// Wall-clock timestamp, captured at construction (used by line writers).
    pub at: SystemTime,
}

impl Event {
    /// Creates a new event with the current timestamp.
    pub fn new(level: Level, message: impl Into<Arc<str>>) -> Self {
        Self {
            level,
            message: message.into(),
            metadata: None,
            source: None,
            at: SystemTime::now(),
        }
    }

    /// Attaches structured metadata.
    #[inline]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attaches the producing subsystem's name.
    #[inline]
    pub fn with_source(mut self, source: impl Into<Arc<str>>) -> Self {
        self.source = Some(source.into());
        self
    }
}
