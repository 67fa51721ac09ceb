//! Pipeline stages for map conversion.
//!
//! Each submodule implements exactly one step and dispatches on its own
//! identifier, so an unknown identifier is reported by the stage that
//! needs it.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ decode ──▶ encode ──▶ output
//! (stdin)   (json|yaml) (json|yaml) (stdout)
//! ```
//!
//! 1. [`input`]: read the whole source stream as text
//! 2. [`decode`]: JSON first, YAML as fallback, mapping roots only
//! 3. [`encode`]: re-encode the document in the target format
//! 4. [`output`]: write the text plus a trailing newline

pub mod decode;
pub mod encode;
pub mod input;
pub mod output;
