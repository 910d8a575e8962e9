//! Bottom status bar

use floem::prelude::*;
use livepen_core::LanguageKind;

use crate::gui::shared::colors;
use crate::gui::state::{AppState, PaneSet};

pub fn status_bar(app_state: AppState, panes: PaneSet) -> impl IntoView {
    let active_pane = app_state.active_pane;
    let status_message = app_state.status_message;
    let panes_counts = panes.clone();

    h_stack((
        // Active language
        label(move || {
            LanguageKind::from_index(active_pane.get())
                .map(LanguageKind::label)
                .unwrap_or_default()
                .to_string()
        })
        .style(|s| {
            let c = colors();
            s.font_size(12.0).color(c.text_secondary)
        }),
        // Line/char counts for the active pane
        label(move || {
            panes_counts
                .pane(active_pane.get())
                .map(|pane| {
                    let text = pane.content.get();
                    format!("{} lines · {} chars", text.split('\n').count(), text.len())
                })
                .unwrap_or_default()
        })
        .style(|s| {
            let c = colors();
            s.font_size(12.0).color(c.text_muted).margin_left(12.0)
        }),
        empty().style(|s| s.flex_grow(1.0)),
        // Last status message
        label(move || status_message.get()).style(|s| {
            let c = colors();
            s.font_size(12.0).color(c.text_secondary).margin_right(12.0)
        }),
    ))
    .style(move |s| {
        let c = colors();
        s.width_full()
            .height(28.0)
            .padding_horiz(12.0)
            .items_center()
            .background(c.bg_surface)
            .border_top(1.0)
            .border_color(c.border)
    })
}
