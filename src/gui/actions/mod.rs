// src/gui/actions/mod.rs
mod copy;
mod export;
mod scrape;

pub use copy::copy;
pub use export::export;
pub use scrape::scrape;

use std::borrow::Cow;

use crate::{gui::app::App, model::RecordBatch};

/// The batch the Data tab currently shows, or None before any run.
fn current_batch(app: &App) -> Option<Cow<'_, RecordBatch>> {
    let run = app.run.as_ref()?;
    Some(run.view(app.state.gui.batch_view, &app.state.options.capping))
}
