// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;
use tracing::{debug, info, warn};

use crate::{
    chart::ChartSeries,
    config::{
        options::{AppOptions, PageKind},
        settings,
        state::{AppState, GuiState},
    },
    model::RecordBatch,
    scrape::{ChartRun, Trigger},
    store,
};

use super::{actions, components, pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let settings_path = settings::default_path();
    let opts = settings::load(&settings_path);
    eframe::run_native(
        "Top Chart Scraper",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(opts, settings_path)))),
    )?;
    Ok(())
}

/// Where the first fetch stands. The window paints once before the
/// (blocking) initial run so the user sees "Fetching…" instead of nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InitialLoad {
    Pending,
    Painted,
    Done,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful run; None after a failed or empty one
    pub run: Option<ChartRun>,

    // table for the current batch view
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,

    // chart for state.gui.chart_kind
    pub series: Option<ChartSeries>,

    // output text field UX (mapped <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
    pub running: bool,

    initial: InitialLoad,
    settings_path: PathBuf,
    saved_options: AppOptions,
}

impl App {
    pub fn new(options: AppOptions, settings_path: PathBuf) -> Self {
        let out_path_text = options.export.out_path().to_string_lossy().into_owned();
        let state = AppState { options: options.clone(), gui: GuiState::default() };

        let mut app = Self {
            state,
            run: None,
            headers: RecordBatch::headers(),
            rows: Vec::new(),
            series: None,
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
            running: false,
            initial: InitialLoad::Pending,
            settings_path,
            saved_options: options,
        };

        match store::load_batch() {
            Ok(Some(batch)) if !batch.is_empty() => {
                info!(records = batch.len(), "cache: loaded");
                app.run = Some(ChartRun::new(batch, Trigger::InitialLoad));
                app.status = s!("Loaded local data");
            }
            Ok(_) => debug!("cache: nothing stored yet"),
            Err(e) => warn!(error = %e, "cache: unreadable, ignoring"),
        }

        app.rebuild_view();
        info!(page = ?app.current_page_kind(), "gui: init");
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Recompute the table and the chart from the current run and options.
    pub fn rebuild_view(&mut self) {
        let cap = &self.state.options.capping;
        self.rows = match &self.run {
            Some(run) => run.view(self.state.gui.batch_view, cap).to_rows(),
            None => Vec::new(),
        };
        self.series = match (&self.run, self.state.gui.chart_kind) {
            (Some(run), Some(kind)) => run.series(kind, cap),
            _ => None,
        };
        debug!(view = ?self.state.gui.batch_view, rows = self.rows.len(), "gui: view rebuilt");
    }

    /// Pull a typed-in output path into the export options.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            self.out_path_dirty = false;
        }
        self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
    }

    fn persist_settings(&mut self) {
        if self.state.options == self.saved_options {
            return;
        }
        match settings::save(&self.settings_path, &self.state.options) {
            Ok(()) => debug!(path = %self.settings_path.display(), "settings: saved"),
            Err(e) => warn!(error = %e, "settings: save failed"),
        }
        self.saved_options = self.state.options.clone();
    }

    fn drive_initial_load(&mut self, ctx: &egui::Context) {
        match self.initial {
            InitialLoad::Pending => {
                self.initial = InitialLoad::Painted;
                self.running = true;
                self.status("Fetching chart…");
                ctx.request_repaint();
            }
            InitialLoad::Painted => {
                self.initial = InitialLoad::Done;
                actions::scrape(self, Trigger::InitialLoad);
            }
            InitialLoad::Done => {}
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });

        self.drive_initial_load(ctx);
        self.persist_settings();
    }
}
