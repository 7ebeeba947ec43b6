//! # Line writer: the human-readable rendering collaborator.
//!
//! Every event is handed to exactly one [`LineWriter`] before the plugin
//! fan-out starts. The writer renders one text line; it never participates in
//! the fan-out nor in the dispatch handle's outcome.
//!
//! [`LogWriter`] is the default: it forwards the rendered line to the [`log`]
//! facade with the scribe's label as the target, so whatever logger the host
//! application installed picks it up. Replace it through
//! [`ScribeConfig::with_writer`](crate::ScribeConfig::with_writer).

use std::fmt::Write as _;

use crate::events::Event;

/// Renders one event as a text line, synchronously.
///
/// Writers must not block for long; they run inline on the `log()` caller's
/// task, before dispatch starts.
pub trait LineWriter: Send + Sync + 'static {
    /// Renders `event` as one line under the given scribe label.
    fn write_line(&self, label: &str, event: &Event);
}

/// Default writer that forwards lines to the [`log`] facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

impl LineWriter for LogWriter {
    fn write_line(&self, label: &str, event: &Event) {
        let line = render_line(event);
        log::logger().log(
            &log::Record::builder()
                .level(event.level.to_log_level())
                .target(label)
                .args(format_args!("{line}"))
                .build(),
        );
    }
}

/// Renders `message`, then ` source=..`, then one ` key=value` per metadata
/// entry (keys in sorted order).
pub(crate) fn render_line(event: &Event) -> String {
    let mut line = event.message.to_string();
    if let Some(source) = &event.source {
        let _ = write!(line, " source={source}");
    }
    if let Some(metadata) = &event.metadata {
        for (key, value) in metadata {
            let _ = write!(line, " {key}={value}");
        }
    }
    line
}
