//! Dispatch core: event construction, line rendering, and fan-out.
//!
//! Modules:
//! - [`scribe`]: the [`Scribe`] dispatcher and its level helpers;
//! - [`handle`]: the per-call [`DispatchHandle`] completion token;
//! - [`config`]: the [`ScribeConfig`] construction options;
//! - [`writer`]: the [`LineWriter`] rendering collaborator.

mod config;
mod handle;
mod scribe;
mod writer;

pub use config::{MetadataProvider, ScribeConfig};
pub use handle::DispatchHandle;
pub use scribe::Scribe;
pub use writer::{LineWriter, LogWriter};
