//! # Event sink plugins.
//!
//! This module provides the [`Plugin`] trait and the two built-in sinks.
//!
//! ## Event flow
//! ```text
//!   Scribe::log(..) ── Event ──► one spawned task per plugin
//!                                     │
//!                                ┌────┴──────┬──────────┐
//!                                ▼           ▼          ▼
//!                            FilePlugin  HttpPlugin  custom ...
//! ```
//!
//! ## Plugin kinds
//! - **Passive sinks** — ship the event somewhere ([`FilePlugin`], [`HttpPlugin`])
//! - **Stateful plugins** — maintain their own synchronized state (counters,
//!   batchers); the dispatcher neither assumes statelessness nor adds locking
//!
//! Anything implementing [`Plugin`] participates; see the trait docs for the
//! invocation contract.

mod file;
mod http;
mod plugin;
pub mod storage;

pub use file::{FilePlugin, OutputFormatter};
pub use http::{BodyFormatter, HttpPlugin, HttpResponse, HttpTransport, ResponseHandler, Transport};
pub use plugin::Plugin;
