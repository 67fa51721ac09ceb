//! Conversion entry points.
//!
//! [`convert`] runs the whole pipeline against the configured source and
//! sink. [`convert_with`] runs the same stages against caller-supplied
//! reader and writer, and [`convert_str`] stops after encoding and hands the
//! text back. All three go Reading → Decoding → Encoding → Writing in that
//! order and stop at the first failure.

use crate::config::{ConverterConfig, Format};
use crate::document::Document;
use crate::error::MapConvError;
use crate::pipeline::{decode, encode, input, output};
use std::io::{Read, Write};
use std::time::Instant;
use tracing::info;

/// Pull, load, dump and push one document as described by `config`.
///
/// # Errors
/// Any stage failure is returned as-is; nothing is written to the sink
/// unless every earlier stage succeeded.
pub fn convert(config: &ConverterConfig) -> Result<(), MapConvError> {
    let start = Instant::now();

    let text = input::pull(&config.pull_from)?;
    let (detected, encoded) = decode_and_encode(&text, config)?;
    output::push(&config.push_to, &encoded)?;

    info!(
        "Converted {} → {} in {}ms",
        detected,
        config.dump_to,
        start.elapsed().as_millis()
    );
    Ok(())
}

/// Run the pipeline with an explicit reader and writer.
///
/// `config.pull_from` and `config.push_to` are ignored; `config.dump_to` and
/// `config.pretty` still apply.
pub fn convert_with<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: &ConverterConfig,
) -> Result<(), MapConvError> {
    let text = input::read_from(reader)?;
    let (_, encoded) = decode_and_encode(&text, config)?;
    output::write_to(writer, &encoded)
}

/// Decode `text` and re-encode it in the configured format.
///
/// The result has no trailing newline.
///
/// # Example
/// ```rust
/// use mapconv::{convert_str, ConverterConfig};
///
/// let config = ConverterConfig::builder().dump_to("json").build().unwrap();
/// let json = convert_str("a: 1\nb: [true, null]\n", &config).unwrap();
/// assert_eq!(json, r#"{"a":1,"b":[true,null]}"#);
/// ```
pub fn convert_str(text: &str, config: &ConverterConfig) -> Result<String, MapConvError> {
    decode_and_encode(text, config).map(|(_, encoded)| encoded)
}

fn decode_and_encode(
    text: &str,
    config: &ConverterConfig,
) -> Result<(Format, String), MapConvError> {
    let (detected, doc): (Format, Document) = decode::load_detected(text)?;
    let encoded = encode::dump(&config.dump_to, &doc, config.pretty)?;
    Ok((detected, encoded))
}
