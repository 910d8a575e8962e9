//! Shared application state for livepen

mod app;
mod editor;

pub use app::{AppState, MIN_COLUMN_PCT, PANE_COUNT, resolve_split};
pub use editor::{CursorPlacement, EditorPane, PaneSet};
