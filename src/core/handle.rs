//! # The dispatch completion handle.
//!
//! [`DispatchHandle`] is the forward-only token returned by every `log()`
//! call. Awaiting it resolves only after **every** plugin invocation for that
//! event has resolved (full fan-in), yielding `Ok(())` or the first failure.
//!
//! ## Rules
//! - **Fire-and-forget by default**: dropping the handle detaches it; the
//!   plugin invocations still run to completion, and their failures are
//!   silently dropped.
//! - **No cancellation**: there is no way to stop an in-flight dispatch.
//! - **One per call**: handles are created fresh per `log()` call and are
//!   never reused.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::error::DispatchError;

/// Completion token for one dispatched event.
///
/// Resolves to `Ok(())` once every plugin invocation succeeded, or to the
/// first failure (by plugin registration order) otherwise.
#[derive(Debug)]
pub struct DispatchHandle {
    inner: JoinHandle<Result<(), DispatchError>>,
}

impl DispatchHandle {
    pub(crate) fn new(inner: JoinHandle<Result<(), DispatchError>>) -> Self {
        Self { inner }
    }

    /// True once the whole fan-out has resolved (success or failure).
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl Future for DispatchHandle {
    type Output = Result<(), DispatchError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.get_mut().inner).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // The aggregator task itself never panics and is never aborted;
            // map the unreachable join failure rather than unwrap it.
            Poll::Ready(Err(_)) => Poll::Ready(Err(DispatchError::Panicked { plugin: "dispatch" })),
            Poll::Pending => Poll::Pending,
        }
    }
}
