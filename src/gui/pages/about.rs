// src/gui/pages/about.rs
use std::time::SystemTime;

use eframe::egui;

use crate::{
    config::options::PageKind::{self, *},
    gui::app::App,
};

use super::Page;

pub struct AboutPage;
pub static PAGE: AboutPage = AboutPage;

impl Page for AboutPage {
    fn kind(&self) -> PageKind { About }
    fn title(&self) -> &'static str { "About" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Top Chart Scraper");
        ui.add_space(6.0);
        ui.label(
            "Fetches the top chart page, reads the JSON payload embedded in it \
             and turns every chart entry into one record.",
        );
        ui.add_space(4.0);
        ui.label("• Data: the extracted records, or their capped / cleaned views. Copy or export them.");
        ui.label("• Charts: ratings by genre, average rating per year, rating vs. vote count.");
        ui.add_space(4.0);
        ui.label(
            "Capping clamps ratings to [lower, upper]. A bound left on \"computed\" is \
             mean ± 3·σ of the current ratings.",
        );

        ui.separator();

        match &app.run {
            Some(run) => {
                let age = SystemTime::now()
                    .duration_since(run.fetched_at)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                ui.label(format!(
                    "Current data: {} records ({:?}, {} s ago)",
                    run.base().len(),
                    run.trigger,
                    age
                ));
            }
            None => {
                ui.label("No data loaded.");
            }
        }
        ui.label(format!("Source: {}", app.state.options.fetch.url));
        ui.label(format!("Status: {}", app.status));
    }
}
