// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, info};

use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.rows.is_empty() {
        app.status("Nothing to copy");
        debug!("copy: clicked, but there's nothing to copy");
        return;
    }

    let text = super::current_batch(app).map(|batch| {
        info!(view = ?app.state.gui.batch_view, records = batch.len(), "copy");
        file::to_export_string(&app.state.options.export, &batch)
    });

    match text {
        Some(Ok(txt)) => {
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Some(Err(e)) => app.status(format!("Copy failed: {e}")),
        None => app.status("Nothing to copy"),
    }
}
