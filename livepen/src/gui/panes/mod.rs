//! Pane views: the tab bar, the three editors, the preview column

mod editor;
mod import;
mod preview;
mod status_bar;
mod syntax;
mod toolbar;

use floem::prelude::*;
use livepen_core::LanguageKind;

use crate::gui::shared::colors;
use crate::gui::state::{AppState, PaneSet};

pub use editor::editor_pane;
pub use import::open_import_dialog;
pub use preview::{PreviewState, install_preview_pipeline, preview_panel};
pub use status_bar::status_bar;
pub use toolbar::toolbar;

/// The editor column: pane tabs on top, the one visible editor below.
pub fn editor_column(app_state: AppState, panes: PaneSet) -> impl IntoView {
    let active_pane = app_state.active_pane;
    let show_line_numbers = app_state.show_line_numbers;

    v_stack((
        pane_bar(app_state),
        dyn_container(
            move || active_pane.get(),
            move |index| {
                // The active-pane invariant keeps the index in range; fall
                // back to the markup pane if it ever is not.
                let pane = match panes.pane(index) {
                    Some(pane) => pane.clone(),
                    None => panes.panes[0].clone(),
                };
                editor_pane(pane, show_line_numbers).into_any()
            },
        )
        .style(|s| {
            s.width_full()
                .flex_grow(1.0)
                .flex_basis(0.0)
                .min_height(0.0)
        }),
    ))
    .style(|s| s.height_full().min_width(0.0))
}

fn pane_bar(app_state: AppState) -> impl IntoView {
    h_stack((
        pane_button(LanguageKind::Markup, app_state.clone()),
        pane_button(LanguageKind::Styling, app_state.clone()),
        pane_button(LanguageKind::Script, app_state),
        empty().style(|s| s.flex_grow(1.0)),
    ))
    .style(move |s| {
        let c = colors();
        s.width_full()
            .height(36.0)
            .padding_horiz(8.0)
            .gap(4.0)
            .items_center()
            .background(c.bg_surface)
            .border_bottom(1.0)
            .border_color(c.border)
    })
}

fn pane_button(kind: LanguageKind, app_state: AppState) -> impl IntoView {
    let index = kind.index();
    let text = format!("{} {}", kind.glyph(), kind.label());
    let app_state_style = app_state.clone();

    button(text)
        .style(move |s| {
            let c = colors();
            let is_active = app_state_style.is_active(index);
            let s = s
                .padding_horiz(14.0)
                .padding_vert(6.0)
                .border_radius(6.0)
                .font_size(13.0);

            if is_active {
                s.background(c.bg_selected).color(c.text_primary)
            } else {
                s.background(Color::TRANSPARENT)
                    .color(c.text_secondary)
                    .hover(move |s| s.background(c.bg_hover).color(c.text_primary))
            }
        })
        .action(move || {
            app_state.switch_pane(index);
        })
}
