//! Input acquisition: resolve a source identifier and read the whole document.
//!
//! The document is read to end-of-stream as one blob. There is no chunked or
//! line-based processing; decoding needs the complete text anyway.

use crate::config::Source;
use crate::error::MapConvError;
use std::io::{self, Read};
use tracing::debug;

/// Read the full document from the source named by `source_id`.
///
/// # Errors
/// - [`MapConvError::UnknownSource`] if `source_id` is not `stdin`
/// - [`MapConvError::Io`] if the stream cannot be read or is not UTF-8
pub fn pull(source_id: &str) -> Result<String, MapConvError> {
    let source: Source = source_id.parse()?;
    match source {
        Source::Stdin => read_from(io::stdin().lock()),
    }
}

/// Read `reader` to end-of-stream as UTF-8 text.
pub fn read_from<R: Read>(mut reader: R) -> Result<String, MapConvError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    debug!("Read {} bytes of input", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_whole_stream() {
        let text = read_from(Cursor::new("a: 1\nb: 2\n")).unwrap();
        assert_eq!(text, "a: 1\nb: 2\n");
    }

    #[test]
    fn empty_stream_is_empty_text() {
        assert_eq!(read_from(io::empty()).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let err = read_from(Cursor::new(vec![0xff, 0xfe, 0x00])).unwrap_err();
        match err {
            MapConvError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_source_is_rejected_before_reading() {
        let err = pull("file").unwrap_err();
        assert_eq!(err.to_string(), "Unknown input: file");
    }
}
