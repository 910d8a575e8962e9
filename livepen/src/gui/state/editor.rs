//! Editor pane state

use floem::prelude::*;
use livepen_core::LanguageKind;

/// Where to place the cursor after a programmatic content replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorPlacement {
    /// Leave the cursor wherever the widget puts it.
    #[default]
    Keep,
    /// Move the cursor to the end of the document.
    DocumentEnd,
}

/// State for a single editor pane
#[derive(Clone)]
pub struct EditorPane {
    pub language: LanguageKind,
    pub content: RwSignal<String>,
    /// Bumped on programmatic replacement so the widget rebuilds.
    pub generation: RwSignal<u64>,
    /// Cursor placement applied at the next widget rebuild.
    pub pending_cursor: RwSignal<CursorPlacement>,
}

impl EditorPane {
    pub fn new(language: LanguageKind, seed: &str) -> Self {
        Self {
            language,
            content: RwSignal::new(seed.to_string()),
            generation: RwSignal::new(0),
            pending_cursor: RwSignal::new(CursorPlacement::Keep),
        }
    }

    /// Current text.
    pub fn text(&self) -> String {
        self.content.get()
    }

    /// Replace the whole content and rebuild the widget with the requested
    /// cursor placement. Keystroke-level edits go through the widget's own
    /// document instead.
    pub fn replace_text(&self, text: String, cursor: CursorPlacement) {
        self.content.set(text);
        self.pending_cursor.set(cursor);
        self.generation.update(|g| *g += 1);
    }
}

const STARTER_MARKUP: &str = "<h1>Hello, livepen!</h1>\n<p>Edit any pane and watch the preview update.</p>\n";
const STARTER_STYLING: &str = "h1 {\n  color: #2196f3;\n}\n";
const STARTER_SCRIPT: &str = "console.log(\"livepen ready\");\n";

/// The fixed set of three panes, in markup/styling/script order.
#[derive(Clone)]
pub struct PaneSet {
    pub panes: [EditorPane; 3],
}

impl PaneSet {
    pub fn new() -> Self {
        Self {
            panes: [
                EditorPane::new(LanguageKind::Markup, STARTER_MARKUP),
                EditorPane::new(LanguageKind::Styling, STARTER_STYLING),
                EditorPane::new(LanguageKind::Script, STARTER_SCRIPT),
            ],
        }
    }

    /// Pane at `index`, if in range.
    pub fn pane(&self, index: usize) -> Option<&EditorPane> {
        self.panes.get(index)
    }
}

impl Default for PaneSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_order_matches_language_order() {
        let set = PaneSet::new();
        for (index, kind) in LanguageKind::ALL.iter().enumerate() {
            assert_eq!(set.pane(index).unwrap().language, *kind);
        }
        assert!(set.pane(3).is_none());
    }

    #[test]
    fn replace_text_bumps_generation_and_requests_cursor() {
        let pane = EditorPane::new(LanguageKind::Script, "");
        let before = pane.generation.get();

        pane.replace_text("alert(1)".to_string(), CursorPlacement::DocumentEnd);

        assert_eq!(pane.text(), "alert(1)");
        assert_eq!(pane.generation.get(), before + 1);
        assert_eq!(pane.pending_cursor.get(), CursorPlacement::DocumentEnd);
    }
}
