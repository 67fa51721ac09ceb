//! Configuration types for map conversion.
//!
//! A run is parameterised by one [`ConverterConfig`]: where to pull the
//! document from, which format to dump it to, and where to push the result.
//! The three options are kept as plain identifier strings and only resolved
//! to [`Source`], [`Format`] and [`Sink`] when the corresponding pipeline
//! stage is dispatched, so an unknown identifier fails exactly at the stage
//! that needs it.

use crate::error::MapConvError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Configuration for a single conversion run.
///
/// Built via [`ConverterConfig::builder()`] or using
/// [`ConverterConfig::default()`].
///
/// # Example
/// ```rust
/// use mapconv::ConverterConfig;
///
/// let config = ConverterConfig::builder()
///     .dump_to("json")
///     .pretty(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.pull_from, "stdin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Input source identifier. Default: `stdin`.
    pub pull_from: String,

    /// Output format identifier, `yaml` or `json`. Default: `yaml`.
    pub dump_to: String,

    /// Output sink identifier. Default: `stdout`.
    pub push_to: String,

    /// Indent JSON output instead of emitting it on one line. Default: false.
    ///
    /// YAML output is always block style, so this has no effect there.
    pub pretty: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            pull_from: Source::Stdin.to_string(),
            dump_to: Format::Yaml.to_string(),
            push_to: Sink::Stdout.to_string(),
            pretty: false,
        }
    }
}

impl ConverterConfig {
    /// Create a new builder for `ConverterConfig`.
    pub fn builder() -> ConverterConfigBuilder {
        ConverterConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConverterConfig`].
#[derive(Debug)]
pub struct ConverterConfigBuilder {
    config: ConverterConfig,
}

impl ConverterConfigBuilder {
    pub fn pull_from(mut self, source: impl Into<String>) -> Self {
        self.config.pull_from = source.into();
        self
    }

    pub fn dump_to(mut self, format: impl Into<String>) -> Self {
        self.config.dump_to = format.into();
        self
    }

    pub fn push_to(mut self, sink: impl Into<String>) -> Self {
        self.config.push_to = sink.into();
        self
    }

    pub fn pretty(mut self, v: bool) -> Self {
        self.config.pretty = v;
        self
    }

    /// Build the configuration.
    ///
    /// Only empty identifiers are rejected here. Unknown identifiers are
    /// reported by the stage that dispatches on them.
    pub fn build(self) -> Result<ConverterConfig, MapConvError> {
        let c = &self.config;
        for (name, value) in [
            ("input source", &c.pull_from),
            ("dump format", &c.dump_to),
            ("output sink", &c.push_to),
        ] {
            if value.trim().is_empty() {
                return Err(MapConvError::InvalidConfig(format!(
                    "{name} must not be empty"
                )));
            }
        }
        Ok(self.config)
    }
}

// ── Identifiers ──────────────────────────────────────────────────────────

/// Where the input document is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The process's standard input, read to end-of-stream.
    Stdin,
}

impl FromStr for Source {
    type Err = MapConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdin" => Ok(Source::Stdin),
            other => Err(MapConvError::UnknownSource {
                source_id: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("stdin"),
        }
    }
}

/// A document serialization format.
///
/// Used both as the dump target and to report which format the input was
/// detected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Yaml,
}

impl FromStr for Format {
    type Err = MapConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            other => Err(MapConvError::UnknownFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Yaml => f.write_str("yaml"),
        }
    }
}

/// Where the encoded document is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sink {
    /// The process's standard output, followed by a newline.
    Stdout,
}

impl FromStr for Sink {
    type Err = MapConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(Sink::Stdout),
            other => Err(MapConvError::UnknownSink {
                sink: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("stdout"),
        }
    }
}
