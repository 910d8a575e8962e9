//! livepen-core - the GUI-free half of the livepen playground
//!
//! Everything here runs without a window: composing the three editor
//! contents into one renderable document, the naive line-based formatter,
//! and the fixed-key snapshot cache that a separate consumer view reads.

pub mod compose;
pub mod error;
pub mod format;
pub mod language;
pub mod snapshot;

pub use error::{Error, Result};
pub use language::LanguageKind;
