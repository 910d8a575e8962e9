//! Live preview column.
//!
//! The composed document's source is shown in-app; the same document is
//! published to the snapshot cache for the external consumer view, which
//! renders (and executes) it with its own privilege.

use std::rc::Rc;

use floem::prelude::*;
use floem::text::Weight;
use livepen_core::compose::{RenderTarget, combined_document};

use crate::gui::shared::colors;
use crate::gui::state::PaneSet;

/// Source signal backing the in-app preview panel.
#[derive(Clone)]
pub struct PreviewState {
    pub document: RwSignal<String>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self {
            document: RwSignal::new(String::new()),
        }
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for PreviewState {
    fn set_source(&self, doc: &str) {
        self.document.set(doc.to_string());
    }
}

/// Subscribe the compositor to the three pane content signals.
///
/// The effect runs once immediately and again after every pane edit; each
/// run recomposes the document and pushes it into every target.
pub fn install_preview_pipeline(panes: &PaneSet, targets: Vec<Rc<dyn RenderTarget>>) {
    let markup = panes.panes[0].content;
    let styling = panes.panes[1].content;
    let script = panes.panes[2].content;

    floem::reactive::create_effect(move |_| {
        let doc = combined_document(&markup.get(), &styling.get(), &script.get());
        for target in &targets {
            target.set_source(&doc);
        }
    });
}

pub fn preview_panel(preview: PreviewState, snapshot_hint: String) -> impl IntoView {
    let document = preview.document;

    v_stack((
        preview_header(snapshot_hint),
        scroll(
            label(move || document.get()).style(|s| {
                let c = colors();
                s.font_family("monospace".to_string())
                    .font_size(13.0)
                    .padding(12.0)
                    .color(c.text_secondary)
            }),
        )
        .style(|s| {
            s.width_full()
                .flex_grow(1.0)
                .flex_basis(0.0)
                .min_height(0.0)
        }),
    ))
    .style(move |s| {
        let c = colors();
        s.height_full()
            .flex_grow(1.0)
            .flex_basis(0.0)
            .min_width(0.0)
            .background(c.bg_surface)
    })
}

fn preview_header(snapshot_hint: String) -> impl IntoView {
    h_stack((
        label(|| "Live Preview").style(|s| {
            let c = colors();
            s.font_size(13.0)
                .font_weight(Weight::SEMIBOLD)
                .color(c.text_primary)
        }),
        empty().style(|s| s.flex_grow(1.0)),
        // Where the external consumer view finds the snapshot
        label(move || snapshot_hint.clone()).style(|s| {
            let c = colors();
            s.font_size(11.0)
                .color(c.text_muted)
                .text_ellipsis()
                .max_width(320.0)
        }),
    ))
    .style(move |s| {
        let c = colors();
        s.width_full()
            .height(36.0)
            .padding_horiz(12.0)
            .items_center()
            .background(c.bg_elevated)
            .border_bottom(1.0)
            .border_color(c.border)
    })
}
