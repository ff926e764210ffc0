// src/gui/components/action_buttons.rs

use std::path::{Path, PathBuf};

use eframe::egui::{self, widgets::Spinner};
use tracing::{debug, error, info};

use crate::{
    config::options::{BatchView, ExportFormat},
    gui::{actions, app::App},
    scrape::Trigger,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- View ---
    let prev_view = app.state.gui.batch_view;
    ui.horizontal(|ui| {
        ui.label("View:");
        for view in BatchView::ALL {
            ui.selectable_value(&mut app.state.gui.batch_view, view, view.label());
        }
    });
    if app.state.gui.batch_view != prev_view {
        info!(view = ?app.state.gui.batch_view, "gui: batch view changed");
        app.rebuild_view();
    }

    // --- Format + Include headers ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");

            ui.add_enabled(
                export.format != ExportFormat::Json,
                egui::Checkbox::new(&mut export.include_headers, "Include headers"),
            );
        });

        if export.format != prev_fmt {
            info!(format = ?export.format, "gui: export format changed");
            // Keep the extension in the text field in step with the format.
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
                debug!("gui: out_path_text refreshed to match format");
            }
        }
    }

    // --- Output field ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }
        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }
    });
    if open_folder_clicked {
        open_output_folder(app);
    }

    // --- Copy / Export / Scrape ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let button_scrape = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("SCRAPE").color(egui::Color32::BLACK).strong()).fill(red),
        );
        if button_scrape.clicked() {
            actions::scrape(app, Trigger::Refetch);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status.as_str());
    });
}

fn open_output_folder(app: &mut App) {
    app.apply_out_path();
    let path = app.state.options.export.out_path();
    let folder = nearest_existing_dir(path.parent().unwrap_or(Path::new(".")));

    let result = std::fs::canonicalize(&folder)
        .map_err(|e| format!("Cannot resolve folder path: {e}"))
        .and_then(|abs| open_in_file_manager(&abs).map(|()| abs));

    match result {
        Ok(abs) => info!(path = %abs.display(), "gui: opened folder"),
        Err(msg) => {
            error!("{msg}");
            app.status(msg);
        }
    }
}

fn nearest_existing_dir(path: &Path) -> PathBuf {
    path.ancestors()
        .find(|p| !p.as_os_str().is_empty() && p.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn open_in_file_manager(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    std::process::Command::new(program)
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("Failed to spawn {program}: {e}"))
}
