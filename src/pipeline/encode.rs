//! Format encoding: [`Document`] → text in the target format.
//!
//! Both encoders are driven by the document's `Serialize` impl, so every
//! value kind the decoders can produce is covered. The returned text never
//! carries a trailing newline; the sink appends exactly one.

use crate::config::Format;
use crate::document::Document;
use crate::error::MapConvError;
use tracing::debug;

/// Encode `doc` in the format named by `format_id`.
///
/// `pretty` indents JSON output; YAML is always block style.
///
/// # Errors
/// - [`MapConvError::UnknownFormat`] if `format_id` is not `json` or `yaml`
/// - [`MapConvError::EncodeFailed`] if the encoder rejects the document
pub fn dump(format_id: &str, doc: &Document, pretty: bool) -> Result<String, MapConvError> {
    let format: Format = format_id.parse()?;
    let text = match format {
        Format::Json => to_json(doc, pretty)?,
        Format::Yaml => to_yaml(doc)?,
    };
    debug!("Encoded {} keys as {} ({} bytes)", doc.len(), format, text.len());
    Ok(text)
}

/// Encode `doc` as a single JSON object.
///
/// JSON has no literal for infinities or NaN, so a document holding one
/// (only possible from YAML input) is rejected instead of being written as
/// `null`.
pub fn to_json(doc: &Document, pretty: bool) -> Result<String, MapConvError> {
    if let Some(f) = doc.first_non_finite() {
        return Err(MapConvError::EncodeFailed {
            format: Format::Json,
            detail: format!("json: unsupported value: {f}"),
        });
    }
    let text = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    text.map_err(|e| MapConvError::EncodeFailed {
        format: Format::Json,
        detail: e.to_string(),
    })
}

/// Encode `doc` as a block-style YAML mapping.
///
/// The encoder's final newline is trimmed so the sink's newline is the only
/// one. Output therefore ends in a single `\n`, not the blank line a plain
/// "marshal then println" would leave.
pub fn to_yaml(doc: &Document) -> Result<String, MapConvError> {
    let text = serde_yaml::to_string(doc).map_err(|e| MapConvError::EncodeFailed {
        format: Format::Yaml,
        detail: e.to_string(),
    })?;
    Ok(text.trim_end_matches('\n').to_string())
}
