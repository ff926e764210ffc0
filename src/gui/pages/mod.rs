// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::app::App};

pub mod about;
pub mod charts;
pub mod data;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body below the tabs.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, app: &mut App) {
        app.rebuild_view();
    }
}
