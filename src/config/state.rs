// src/config/state.rs
use super::options::{AppOptions, BatchView, ChartKind};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Data tab -> which derived batch the table shows
    pub batch_view: BatchView,

    /// Charts tab -> nothing drawn until the user picks one
    pub chart_kind: Option<ChartKind>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            batch_view: BatchView::Base,
            chart_kind: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
