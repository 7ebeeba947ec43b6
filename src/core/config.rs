//! # Scribe configuration.
//!
//! [`ScribeConfig`] collects everything a [`Scribe`](crate::Scribe) needs
//! besides its plugins:
//!
//! - `label`: required identifying string, used as the line writer's target;
//! - `writer`: optional override for line rendering (defaults to
//!   [`LogWriter`](crate::LogWriter) over the [`log`] facade);
//! - `metadata_provider`: optional ambient metadata injected into every event,
//!   with explicit per-call metadata winning on key conflicts.
//!
//! ## Example
//! ```rust
//! use scribe::{Metadata, ScribeConfig};
//!
//! let cfg = ScribeConfig::new("payments").with_metadata_provider(|| {
//!     let mut meta = Metadata::new();
//!     meta.insert("host".into(), "web-1".into());
//!     meta
//! });
//! assert_eq!(cfg.label, "payments");
//! ```

use std::sync::Arc;

use crate::events::Metadata;

use super::writer::LineWriter;

/// Supplies ambient metadata merged into every event at construction.
pub type MetadataProvider = Arc<dyn Fn() -> Metadata + Send + Sync>;

/// Configuration for a [`Scribe`](crate::Scribe) instance.
#[derive(Clone)]
pub struct ScribeConfig {
    /// Identifying label, used as the rendering target.
    pub label: String,
    /// Line rendering override; `None` means the default [`log`] facade writer.
    pub writer: Option<Arc<dyn LineWriter>>,
    /// Ambient metadata injection; `None` means no ambient metadata.
    pub metadata_provider: Option<MetadataProvider>,
}

impl ScribeConfig {
    /// Creates a configuration with the given label and all overrides unset.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            writer: None,
            metadata_provider: None,
        }
    }

    /// Overrides how lines are rendered.
    #[inline]
    pub fn with_writer(mut self, writer: Arc<dyn LineWriter>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Installs an ambient metadata provider.
    #[inline]
    pub fn with_metadata_provider<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Metadata + Send + Sync + 'static,
    {
        self.metadata_provider = Some(Arc::new(provider));
        self
    }
}
