// src/gui/components/data_table.rs
//
// Draws the live table from app.headers/app.rows. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

// Rank, Title, ReleaseYear, Rating, VoteCount, Genres
const WIDTHS: [f32; 6] = [50.0, 280.0, 90.0, 60.0, 90.0, 260.0];
const TEXT_COLS: [usize; 2] = [1, 5];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.rows.is_empty() {
        ui.label(if app.run.is_some() { "The selected view has no records." } else { "No data loaded." });
        return;
    }

    let cols = app.headers.len();
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for ci in 0..cols {
                let w = WIDTHS.get(ci).copied().unwrap_or(80.0);
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in app.headers.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            cell(ui, ci, RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.rows.len(), |mut row| {
                        let Some(data) = app.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let text = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                cell(ui, ci, RichText::new(text));
                            });
                        }
                    });
                });
        });
}

fn cell(ui: &mut egui::Ui, ci: usize, text: RichText) {
    if TEXT_COLS.contains(&ci) {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.add(egui::Label::new(text).selectable(false));
        });
    } else {
        ui.centered_and_justified(|ui| {
            ui.add(egui::Label::new(text).selectable(false));
        });
    }
}
