//! File import into an editor pane.
//!
//! The target pane is captured when the dialog opens and carried through
//! the asynchronous read, so switching tabs while the read is in flight
//! cannot reroute the loaded content.

use std::fs;
use std::path::Path;

use floem::ext_event::create_ext_action;
use floem::prelude::*;
use floem_reactive::Scope;

use crate::gui::state::{CursorPlacement, EditorPane};

/// Import dialog for the captured pane. Cancelling is a silent no-op.
pub fn open_import_dialog(pane: EditorPane, status: RwSignal<String>) {
    let (filter_name, extensions) = pane.language.dialog_filter();
    let dialog = rfd::FileDialog::new()
        .set_title(&format!("Import {}", pane.language.label()))
        .add_filter(filter_name, extensions)
        .add_filter("All Files", &["*"]);

    if let Some(path) = dialog.pick_file() {
        load_into_pane(&path, pane, status);
    }
}

/// Read `path` off the UI thread and deliver the text to the captured pane,
/// replacing its content with the cursor at the document end.
fn load_into_pane(path: &Path, pane: EditorPane, status: RwSignal<String>) {
    let path_buf = path.to_path_buf();
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "file".to_string());

    let send = create_ext_action(Scope::new(), move |result: std::io::Result<String>| {
        match result {
            Ok(text) => {
                pane.replace_text(text, CursorPlacement::DocumentEnd);
                status.set(format!("Imported {filename}"));
            }
            Err(e) => {
                tracing::warn!("failed to import {}: {}", path_buf.display(), e);
                status.set(format!("Could not read {filename}"));
            }
        }
    });

    let read_path = path.to_path_buf();
    rayon::spawn(move || {
        let result = fs::read_to_string(&read_path);
        send(result);
    });
}
