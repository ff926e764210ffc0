// src/gui/pages/charts.rs
use eframe::egui;
use tracing::info;

use crate::{
    config::options::{ChartKind, PageKind::{self, *}},
    gui::{app::App, components},
};

use super::Page;

pub struct ChartsPage;
pub static PAGE: ChartsPage = ChartsPage;

impl Page for ChartsPage {
    fn kind(&self) -> PageKind { Charts }
    fn title(&self) -> &'static str { "Charts" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let before = app.state.gui.chart_kind;
        ui.horizontal(|ui| {
            ui.label("Chart:");
            egui::ComboBox::from_id_salt("chart_kind")
                .selected_text(before.map(ChartKind::title).unwrap_or("Select a chart…"))
                .show_ui(ui, |ui| {
                    for kind in ChartKind::ALL {
                        ui.selectable_value(&mut app.state.gui.chart_kind, Some(kind), kind.title());
                    }
                });
        });
        if app.state.gui.chart_kind != before {
            info!(kind = ?app.state.gui.chart_kind, "gui: chart selected");
            app.rebuild_view();
        }

        if components::capping_controls::draw(ui, &mut app.state.options.capping) {
            app.rebuild_view();
        }

        ui.separator();

        let Some(kind) = app.state.gui.chart_kind else {
            ui.label("Pick a chart type to draw it.");
            return;
        };

        ui.heading(kind.heading());
        match &app.series {
            Some(series) => components::chart::draw(ui, series),
            None => {
                ui.label("No data to plot.");
            }
        }
    }
}
