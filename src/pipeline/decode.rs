//! Format decoding: raw text → [`Document`], with the format inferred.
//!
//! The caller never says which format the input is in. Instead we try JSON
//! first and fall back to YAML only if JSON fails. Most JSON documents are
//! also valid YAML, so the order is the tie-break: anything that parses as a
//! JSON mapping is taken as JSON, even when a YAML reading would differ.
//!
//! Each attempt decodes into a generic [`Value`] and then checks the root.
//! A mapping is accepted, a null root (`null`, `~`, an empty YAML stream)
//! becomes the empty document, and a sequence or scalar root fails that
//! attempt.

use crate::config::Format;
use crate::document::{value_kind, Document, Value};
use crate::error::MapConvError;
use serde::Deserialize;
use tracing::debug;

/// Decode `text` as a JSON mapping, falling back to a YAML mapping.
///
/// # Errors
/// [`MapConvError::DecodeFailed`] when neither attempt yields a mapping.
pub fn load(text: &str) -> Result<Document, MapConvError> {
    load_detected(text).map(|(_, doc)| doc)
}

/// Like [`load`], but also report which format the input was decoded as.
pub fn load_detected(text: &str) -> Result<(Format, Document), MapConvError> {
    let json_err = match from_json(text) {
        Ok(doc) => {
            debug!("Decoded input as json ({} keys)", doc.len());
            return Ok((Format::Json, doc));
        }
        Err(e) => e,
    };

    let yaml_err = match from_yaml(text) {
        Ok(doc) => {
            debug!("Decoded input as yaml ({} keys)", doc.len());
            return Ok((Format::Yaml, doc));
        }
        Err(e) => e,
    };

    debug!(json = %json_err, yaml = %yaml_err, "Input is neither json nor yaml");
    Err(MapConvError::DecodeFailed {
        json: json_err,
        yaml: yaml_err,
    })
}

/// Decode `text` strictly as a JSON mapping.
pub fn from_json(text: &str) -> Result<Document, String> {
    let root: serde_json::Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    into_document(Value::from(root))
}

/// Decode the first document of `text` strictly as a YAML mapping.
///
/// Later documents in a multi-document stream are ignored. Merge keys
/// (`<<`) are applied and tags are dropped before the root is checked.
pub fn from_yaml(text: &str) -> Result<Document, String> {
    // A stream with no document is a null root.
    if text.trim().is_empty() {
        return Ok(Document::new());
    }
    let mut root = match serde_yaml::Deserializer::from_str(text).next() {
        Some(de) => serde_yaml::Value::deserialize(de).map_err(|e| e.to_string())?,
        None => serde_yaml::Value::Null,
    };
    root.apply_merge().map_err(|e| e.to_string())?;
    into_document(Value::try_from(root)?)
}

fn into_document(root: Value) -> Result<Document, String> {
    Document::from_root(root)
        .map_err(|other| format!("expected a mapping at the root, found {}", value_kind(&other)))
}
