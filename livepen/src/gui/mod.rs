//! livepen GUI - a live code playground
//!
//! Three editors (markup, styling, script) in one column, a live preview
//! in the other, a draggable divider between them. Features include:
//! - Per-language syntax highlighting
//! - Live composition of the three panes into one renderable document
//! - Snapshot publishing for an external consumer view
//! - Light/dark theme toggle
//! - File import into the active pane
//! - Naive re-indentation of the active pane

pub mod panes;
pub mod shared;
pub mod state;

use std::rc::Rc;

use floem::Application;
use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, Modifiers};
use floem::prelude::*;
use floem::window::WindowConfig;

use livepen_core::compose::RenderTarget;
use livepen_core::snapshot::SnapshotStore;

use panes::{
    PreviewState, editor_column, install_preview_pipeline, open_import_dialog, preview_panel,
    status_bar, toolbar,
};
use shared::{Theme, colors, init_theme};
use state::{AppState, PaneSet, resolve_split};

/// Run the livepen GUI application
pub fn run_app() {
    Application::new()
        .window(
            move |_| app_view(),
            Some(
                WindowConfig::default()
                    .size((1280.0, 800.0))
                    .title("livepen"),
            ),
        )
        .run();
}

fn app_view() -> impl IntoView {
    init_theme(Theme::default());

    // Initialize all state
    let app_state = AppState::new();
    let panes = PaneSet::new();
    let preview = PreviewState::new();

    // The compositor publishes to the in-app panel and the snapshot cache
    let snapshot = SnapshotStore::new();
    let snapshot_hint = snapshot
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let targets: Vec<Rc<dyn RenderTarget>> = vec![Rc::new(preview.clone()), Rc::new(snapshot)];
    install_preview_pipeline(&panes, targets);

    let app_state_for_keys = app_state.clone();
    let panes_for_keys = panes.clone();

    v_stack((
        toolbar(app_state.clone(), panes.clone()),
        main_split(app_state.clone(), panes.clone(), preview, snapshot_hint),
        status_bar(app_state.clone(), panes),
    ))
    .style(move |s| {
        let c = colors();
        s.width_full().height_full().background(c.bg_base)
    })
    .window_title(|| "livepen".to_string())
    .on_event_cont(EventListener::KeyDown, move |e| {
        // Global keyboard shortcuts
        if let Event::KeyDown(key_event) = e {
            let is_cmd_or_ctrl = key_event.modifiers.contains(Modifiers::META)
                || key_event.modifiers.contains(Modifiers::CONTROL);
            if !is_cmd_or_ctrl {
                return;
            }

            if let Key::Character(c) = &key_event.key.logical_key {
                match c.as_str() {
                    // CMD+1/2/3 - switch pane
                    "1" => app_state_for_keys.switch_pane(0),
                    "2" => app_state_for_keys.switch_pane(1),
                    "3" => app_state_for_keys.switch_pane(2),
                    // CMD+O - import into the active pane
                    s if s.eq_ignore_ascii_case("o") => {
                        let index = app_state_for_keys.active_pane.get();
                        if let Some(pane) = panes_for_keys.pane(index) {
                            open_import_dialog(pane.clone(), app_state_for_keys.status_message);
                        }
                    }
                    _ => {}
                }
            }
        }
    })
}

/// Editor column, divider and preview column with adjustable split
fn main_split(
    app_state: AppState,
    panes: PaneSet,
    preview: PreviewState,
    snapshot_hint: String,
) -> impl IntoView {
    let editor_pct = app_state.editor_pct;
    let show_preview = app_state.show_preview;

    // Drag state - tracked at parent level so we get events even when the
    // pointer leaves the divider
    let is_dragging = RwSignal::new(false);
    let total_width = RwSignal::new(0.0_f64);

    h_stack((
        // Editor column (left side) - percentage width from signal
        editor_column(app_state, panes).style(move |s| {
            let s = s.height_full().min_width(0.0);
            if show_preview.get() {
                s.width_pct(editor_pct.get())
            } else {
                s.width_full()
            }
        }),
        // Draggable divider
        divider_handle(is_dragging, show_preview),
        // Preview column (right side) - takes remaining space
        container(preview_panel(preview, snapshot_hint)).style(move |s| {
            let s = s
                .height_full()
                .flex_grow(1.0)
                .flex_basis(0.0)
                .min_width(0.0);
            if show_preview.get() {
                s
            } else {
                s.display(floem::style::Display::None)
            }
        }),
    ))
    .on_resize(move |rect| total_width.set(rect.width()))
    .style(move |s| {
        s.width_full()
            .flex_grow(1.0)
            .flex_basis(0.0)
            .min_height(0.0)
            .cursor(if is_dragging.get() {
                floem::style::CursorStyle::ColResize
            } else {
                floem::style::CursorStyle::Default
            })
    })
    .on_event(EventListener::PointerMove, move |e| {
        if is_dragging.get() {
            if let Event::PointerMove(pe) = e {
                // A drag past the 20% floor keeps the previous valid width
                if let Some(pct) = resolve_split(pe.pos.x, total_width.get()) {
                    editor_pct.set(pct);
                }
            }
        }
        EventPropagation::Continue
    })
    .on_event_stop(EventListener::PointerUp, move |_| {
        is_dragging.set(false);
    })
}

/// Divider handle that initiates drag
fn divider_handle(is_dragging: RwSignal<bool>, show_preview: RwSignal<bool>) -> impl IntoView {
    empty()
        .style(move |s| {
            let c = colors();
            let s = s
                .width(6.0)
                .height_full()
                .cursor(floem::style::CursorStyle::ColResize)
                .background(if is_dragging.get() { c.accent } else { c.border })
                .hover(move |s| s.background(c.accent_hover));
            if show_preview.get() {
                s
            } else {
                s.display(floem::style::Display::None)
            }
        })
        .on_event_stop(EventListener::PointerDown, move |_| {
            is_dragging.set(true);
        })
}
