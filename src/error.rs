//! Error type for the mapconv library.
//!
//! Every failure is fatal: the pipeline never retries a stage and never
//! emits partial output. The variants group into four kinds:
//!
//! * **Configuration**: an identifier outside the closed set
//!   ([`MapConvError::UnknownSource`], [`MapConvError::UnknownFormat`],
//!   [`MapConvError::UnknownSink`], [`MapConvError::InvalidConfig`]).
//! * **Decode**: input is neither a JSON nor a YAML mapping
//!   ([`MapConvError::DecodeFailed`]).
//! * **Encode**: the target encoder refused the document
//!   ([`MapConvError::EncodeFailed`]).
//! * **I/O**: reading stdin or writing stdout failed ([`MapConvError::Io`]).

use crate::config::Format;
use thiserror::Error;

/// All errors returned by the mapconv library.
#[derive(Debug, Error)]
pub enum MapConvError {
    // ── Config errors ─────────────────────────────────────────────────────
    /// The source identifier is not one of the supported inputs.
    #[error("Unknown input: {source_id}")]
    UnknownSource { source_id: String },

    /// The dump format identifier is neither `json` nor `yaml`.
    #[error("Unknown dump format: {format}")]
    UnknownFormat { format: String },

    /// The sink identifier is not one of the supported outputs.
    #[error("Unknown output: {sink}")]
    UnknownSink { sink: String },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Decode errors ─────────────────────────────────────────────────────
    /// Both the JSON and the YAML attempt failed.
    ///
    /// The message stays generic; the per-format reasons are kept here so
    /// callers (and `debug` logs) can still see why each attempt failed.
    #[error("Cannot decode input")]
    DecodeFailed { json: String, yaml: String },

    // ── Encode errors ─────────────────────────────────────────────────────
    /// The encoder for `format` rejected the document.
    #[error("{detail}")]
    EncodeFailed { format: Format, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Reading the source or writing the sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MapConvError {
    /// True for errors caused by an identifier outside the supported set.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MapConvError::UnknownSource { .. }
                | MapConvError::UnknownFormat { .. }
                | MapConvError::UnknownSink { .. }
                | MapConvError::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_display() {
        let e = MapConvError::UnknownFormat {
            format: "toml".into(),
        };
        assert_eq!(e.to_string(), "Unknown dump format: toml");
        assert!(e.is_config_error());
    }

    #[test]
    fn unknown_source_and_sink_display() {
        let src = MapConvError::UnknownSource {
            source_id: "file".into(),
        };
        let sink = MapConvError::UnknownSink {
            sink: "stderr".into(),
        };
        assert_eq!(src.to_string(), "Unknown input: file");
        assert_eq!(sink.to_string(), "Unknown output: stderr");
    }

    #[test]
    fn decode_failed_hides_reasons_in_display() {
        let e = MapConvError::DecodeFailed {
            json: "expected value at line 1 column 1".into(),
            yaml: "did not find expected node content".into(),
        };
        assert_eq!(e.to_string(), "Cannot decode input");
        assert!(!e.is_config_error());
    }

    #[test]
    fn encode_failed_is_verbatim() {
        let e = MapConvError::EncodeFailed {
            format: Format::Yaml,
            detail: "unsupported value".into(),
        };
        assert_eq!(e.to_string(), "unsupported value");
    }

    #[test]
    fn io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let e = MapConvError::from(io);
        assert_eq!(e.to_string(), "pipe closed");
    }
}
