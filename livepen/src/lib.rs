//! livepen - a native live code playground
//!
//! Three editors (markup, styling, script) whose combined output is
//! composed into a single renderable document, shown in a live preview
//! column and published to a shared snapshot cache.

pub mod gui;
