// src/gui/actions/export.rs
use tracing::error;

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    if app.run.is_none() {
        app.status("Nothing to export");
        return;
    }
    app.apply_out_path();

    let result = super::current_batch(app)
        .map(|batch| file::write_export(&app.state.options.export, &batch).map(|p| (p, batch.len())));

    match result {
        Some(Ok((path, n))) => app.status(format!("Exported {n} records → {}", path.display())),
        Some(Err(e)) => {
            error!(error = %e, "export failed");
            app.status(format!("Export failed: {e}"));
        }
        None => app.status("Nothing to export"),
    }
}
