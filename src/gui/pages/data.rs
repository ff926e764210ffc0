// src/gui/pages/data.rs
use eframe::egui;

use crate::{
    config::options::PageKind::{self, *},
    gui::{app::App, components},
};

use super::Page;

pub struct DataPage;
pub static PAGE: DataPage = DataPage;

impl Page for DataPage {
    fn kind(&self) -> PageKind { Data }
    fn title(&self) -> &'static str { "Data" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        components::action_buttons::draw(ui, app);

        if components::capping_controls::draw(ui, &mut app.state.options.capping) {
            app.rebuild_view();
        }

        ui.separator();

        components::data_table::draw(ui, app);
    }
}
