//! # Line-oriented file storage collaborator.
//!
//! The file sink stores its log as an ordered sequence of lines and rewrites
//! the whole file on every append. This module is that storage surface:
//! [`read_lines`] treats a missing file as an empty sequence (not an error),
//! [`write_lines`] replaces the file's contents with the given sequence.
//!
//! No locking is performed here; callers that share a path race (see
//! [`FilePlugin`](crate::FilePlugin)).

use std::io;
use std::path::Path;

use tokio::fs;

/// Reads the stored line sequence at `path`.
///
/// A file that does not exist yields an empty sequence. Any other I/O failure
/// is returned as-is.
pub async fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    match fs::read_to_string(path).await {
        Ok(contents) => Ok(contents.lines().map(str::to_owned).collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Replaces the contents of `path` with the given line sequence.
///
/// Lines are joined with `\n`; a trailing newline is written when the sequence
/// is non-empty, so `read_lines` round-trips the exact sequence.
pub async fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut contents = lines.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }
    fs::write(path, contents).await
}
