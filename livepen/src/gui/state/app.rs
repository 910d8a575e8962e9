//! Global application state

use floem::prelude::*;

/// Number of editor panes. The pane index is always in `0..PANE_COUNT`.
pub const PANE_COUNT: usize = 3;

/// Lower bound for either column of the split, as percent of total width.
pub const MIN_COLUMN_PCT: f64 = 20.0;

const DEFAULT_EDITOR_PCT: f64 = 50.0;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Currently active editor pane
    pub active_pane: RwSignal<usize>,
    /// Whether the preview column is shown
    pub show_preview: RwSignal<bool>,
    /// Editor column width, percent of the split container
    pub editor_pct: RwSignal<f64>,
    /// Show line numbers in the editors
    pub show_line_numbers: RwSignal<bool>,
    /// Status message shown in the bottom bar
    pub status_message: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_pane: RwSignal::new(0),
            show_preview: RwSignal::new(true),
            editor_pct: RwSignal::new(DEFAULT_EDITOR_PCT),
            show_line_numbers: RwSignal::new(true),
            status_message: RwSignal::new(String::new()),
        }
    }

    /// Make pane `index` the visible one. An out-of-range index is a caller
    /// error and leaves the active pane unchanged.
    pub fn switch_pane(&self, index: usize) {
        if index < PANE_COUNT {
            self.active_pane.set(index);
        }
    }

    /// Whether the pane/tab pair at `index` is the active one.
    pub fn is_active(&self, index: usize) -> bool {
        self.active_pane.get() == index
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a splitter drag to a new editor-column percentage.
///
/// Returns `None` when the drag would push either column below
/// [`MIN_COLUMN_PCT`] of the total width; the caller then keeps the
/// previous valid value.
pub fn resolve_split(pointer_x: f64, total_width: f64) -> Option<f64> {
    if total_width <= 0.0 {
        return None;
    }
    let editor_pct = pointer_x / total_width * 100.0;
    let preview_pct = 100.0 - editor_pct;
    (editor_pct >= MIN_COLUMN_PCT && preview_pct >= MIN_COLUMN_PCT).then_some(editor_pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_pane_is_active_after_a_switch() {
        let state = AppState::new();
        for target in 0..PANE_COUNT {
            state.switch_pane(target);
            let active: Vec<usize> = (0..PANE_COUNT).filter(|&i| state.is_active(i)).collect();
            assert_eq!(active, vec![target]);
        }
    }

    #[test]
    fn out_of_range_switch_is_ignored() {
        let state = AppState::new();
        state.switch_pane(1);
        state.switch_pane(PANE_COUNT);
        assert_eq!(state.active_pane.get(), 1);
    }

    #[test]
    fn pane_zero_is_active_at_startup() {
        let state = AppState::new();
        assert!(state.is_active(0));
    }

    #[test]
    fn drags_below_the_floor_are_rejected() {
        // 5% of a 1000px container
        assert_eq!(resolve_split(50.0, 1000.0), None);
        // 85% editor leaves the preview at 15%
        assert_eq!(resolve_split(850.0, 1000.0), None);
        // Degenerate container
        assert_eq!(resolve_split(100.0, 0.0), None);
    }

    #[test]
    fn in_range_drags_resolve_to_percentages() {
        assert_eq!(resolve_split(500.0, 1000.0), Some(50.0));
        assert_eq!(resolve_split(200.0, 1000.0), Some(20.0));
        assert_eq!(resolve_split(800.0, 1000.0), Some(80.0));
    }
}
