//! Editor pane view

use floem::prelude::*;
use floem::views::text_editor;

use crate::gui::shared::current_theme;
use crate::gui::state::{CursorPlacement, EditorPane};

use super::syntax::SyntaxStyling;

/// One text editor bound to a pane's signals.
///
/// The widget is recreated when the content is replaced programmatically
/// (generation bump), when the theme flips, or when the line-number toggle
/// changes; width/resize is handled by floem's reactive viewport tracking.
pub fn editor_pane(pane: EditorPane, show_line_numbers: RwSignal<bool>) -> impl IntoView {
    let content = pane.content;
    let generation = pane.generation;
    let pending_cursor = pane.pending_cursor;
    let language = pane.language;

    dyn_container(
        move || (generation.get(), current_theme(), show_line_numbers.get()),
        move |(_generation, theme, show_lines)| {
            let text = content.get();
            let styling = SyntaxStyling::new(&text, language, theme);

            text_editor(text)
                .styling(styling)
                .editor_style(move |s| s.hide_gutter(!show_lines))
                .style(move |s| {
                    let s = s.width_full().height_full();
                    if show_lines { s } else { s.padding_left(12.0) }
                })
                .placeholder("Start typing, or import a file...")
                .with_editor(move |editor| {
                    // Apply the requested cursor placement from a
                    // programmatic replacement, then clear the request.
                    if pending_cursor.get_untracked() == CursorPlacement::DocumentEnd {
                        let end = editor.doc().text().len();
                        editor.cursor.update(|c| c.set_offset(end, false, false));
                        pending_cursor.set(CursorPlacement::Keep);
                    }

                    // Sync widget edits back into the pane's content signal.
                    // This is the "content changed" publication the preview
                    // pipeline subscribes to.
                    let doc = editor.doc();
                    let cache_rev = doc.cache_rev();
                    let editor_for_sync = editor.clone();
                    floem::reactive::create_effect(move |prev_rev: Option<u64>| {
                        let current_rev = cache_rev.get();
                        // Only sync if revision changed (actual edit occurred)
                        if prev_rev.is_some() && prev_rev != Some(current_rev) {
                            let new_text = editor_for_sync.doc().text().to_string();
                            content.set(new_text);
                        }
                        current_rev
                    });
                })
                .style(|s| s.size_full().flex_grow(1.0))
                .into_any()
        },
    )
    .style(|s| s.size_full().flex_grow(1.0))
}
