//! Output delivery: resolve a sink identifier and write the encoded text.

use crate::config::Sink;
use crate::error::MapConvError;
use std::io::{self, Write};
use tracing::debug;

/// Write `text` plus a trailing newline to the sink named by `sink_id`.
///
/// # Errors
/// - [`MapConvError::UnknownSink`] if `sink_id` is not `stdout`
/// - [`MapConvError::Io`] if the write or flush fails
pub fn push(sink_id: &str, text: &str) -> Result<(), MapConvError> {
    let sink: Sink = sink_id.parse()?;
    match sink {
        Sink::Stdout => write_to(io::stdout().lock(), text),
    }
}

/// Write `text` followed by a newline to `writer` and flush it.
pub fn write_to<W: Write>(mut writer: W, text: &str) -> Result<(), MapConvError> {
    writer.write_all(text.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!("Wrote {} bytes of output", text.len() + 1);
    Ok(())
}
