//! # The event model.
//!
//! One [`Event`] is built per `log()` call and fanned out, read-only, to every
//! registered plugin and to the line writer. [`Level`] orders the seven
//! severities; [`Metadata`] carries structured context.

mod event;
mod level;

pub use event::{Event, Metadata, MetadataValue};
pub use level::Level;
