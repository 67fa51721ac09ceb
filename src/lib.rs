//! # mapconv
//!
//! Convert map-like documents between JSON and YAML.
//!
//! The input format is never declared: the text is decoded as JSON if it
//! can be, and as YAML otherwise. The resulting string-keyed mapping is then
//! re-encoded in the requested format. Integers, floats, booleans and nulls
//! keep their type across the trip, and nested mappings and sequences are
//! carried through unchanged.
//!
//! ## Pipeline Overview
//!
//! ```text
//! stdin
//!  │
//!  ├─ 1. Input   read the whole stream as text
//!  ├─ 2. Decode  JSON, else YAML; root must be a mapping
//!  ├─ 3. Encode  json (compact or pretty) or block yaml
//!  └─ 4. Output  text + "\n" to stdout
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use mapconv::{convert_str, ConverterConfig};
//!
//! let config = ConverterConfig::builder().dump_to("yaml").build().unwrap();
//! let yaml = convert_str(r#"{"name": "demo", "ports": [80, 443]}"#, &config).unwrap();
//! assert_eq!(yaml, "name: demo\nports:\n- 80\n- 443");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `mapconv` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConverterConfig, ConverterConfigBuilder, Format, Sink, Source};
pub use convert::{convert, convert_str, convert_with};
pub use document::{value_kind, Document, Value};
pub use error::MapConvError;
pub use pipeline::decode::{load, load_detected};
pub use pipeline::encode::dump;
