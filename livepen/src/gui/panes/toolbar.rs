//! Toolbar: import, format, preview and theme controls

use floem::prelude::*;
use livepen_core::format::reindent;

use crate::gui::shared::{colors, current_theme, toggle_theme};
use crate::gui::state::{AppState, CursorPlacement, PaneSet};

use super::import::open_import_dialog;

/// Common toolbar button style for consistent height
fn toolbar_button_style(s: floem::style::Style) -> floem::style::Style {
    s.min_height(0.0)
        .height(24.0)
        .max_height(24.0)
        .padding_horiz(8.0)
        .padding_vert(2.0)
        .items_center()
        .justify_center()
}

pub fn toolbar(app_state: AppState, panes: PaneSet) -> impl IntoView {
    let app_state_import = app_state.clone();
    let panes_import = panes.clone();
    let app_state_format = app_state.clone();
    let panes_format = panes;
    let show_preview = app_state.show_preview;

    h_stack((
        // Active-pane operations group
        h_stack((
            button("📂 Import")
                .style(toolbar_button_style)
                .action(move || {
                    // Capture the target pane now; the read completion
                    // writes to this pane even if the user switches tabs.
                    let index = app_state_import.active_pane.get();
                    if let Some(pane) = panes_import.pane(index) {
                        open_import_dialog(pane.clone(), app_state_import.status_message);
                    }
                }),
            button("✨ Format")
                .style(toolbar_button_style)
                .action(move || {
                    let index = app_state_format.active_pane.get();
                    if let Some(pane) = panes_format.pane(index) {
                        let formatted = reindent(&pane.text(), pane.language);
                        pane.replace_text(formatted, CursorPlacement::DocumentEnd);
                        app_state_format
                            .status_message
                            .set(format!("Formatted {}", pane.language.label()));
                    }
                }),
        ))
        .style(|s| s.gap(8.0).items_center()),
        separator(),
        // View controls group
        h_stack((
            preview_toggle(show_preview),
            view_option_toggle("#", app_state.show_line_numbers),
            theme_toggle_button(),
        ))
        .style(|s| s.gap(8.0).items_center()),
        // Spacer
        empty().style(|s| s.flex_grow(1.0)),
        // App info
        label(|| "livepen v0.1.0").style(|s| {
            let c = colors();
            s.color(c.text_muted).font_size(12.0)
        }),
    ))
    .style(move |s| {
        let c = colors();
        s.width_full()
            .height(44.0)
            .padding_horiz(10.0)
            .gap(8.0)
            .items_center()
            .background(c.bg_surface)
            .border_bottom(1.0)
            .border_color(c.border)
    })
}

fn separator() -> impl IntoView {
    empty().style(|s| {
        let c = colors();
        s.width(1.0).height(24.0).background(c.border).margin_horiz(4.0)
    })
}

/// Toggle for the preview column, styled active while it is shown.
fn preview_toggle(show_preview: RwSignal<bool>) -> impl IntoView {
    button("👁 Preview")
        .style(move |s| {
            let c = colors();
            let s = toolbar_button_style(s).border_radius(4.0).font_size(12.0);
            if show_preview.get() {
                s.background(c.accent).color(Color::WHITE)
            } else {
                s.background(c.bg_elevated)
                    .color(c.text_secondary)
                    .hover(move |s| s.background(c.bg_hover))
            }
        })
        .action(move || {
            show_preview.set(!show_preview.get());
        })
}

/// Small on/off toggle for a view option like line numbers.
fn view_option_toggle(label_text: &'static str, signal: RwSignal<bool>) -> impl IntoView {
    button(label_text)
        .style(move |s| {
            let c = colors();
            let s = toolbar_button_style(s)
                .border_radius(4.0)
                .font_size(12.0)
                .font_family("monospace".to_string());
            if signal.get() {
                s.background(c.accent).color(Color::WHITE)
            } else {
                s.background(c.bg_elevated)
                    .color(c.text_secondary)
                    .hover(move |s| s.background(c.bg_hover))
            }
        })
        .action(move || {
            signal.set(!signal.get());
        })
}

/// Theme toggle showing the glyph for the current mode.
fn theme_toggle_button() -> impl IntoView {
    dyn_container(
        move || current_theme(),
        move |theme| {
            button(theme.glyph())
                .style(toolbar_button_style)
                .action(toggle_theme)
                .into_any()
        },
    )
}
