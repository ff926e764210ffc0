// src/gui/actions/scrape.rs
use tracing::{error, info, warn};

use crate::{
    core::HttpFetcher,
    gui::{app::App, progress::GuiProgress},
    scrape::{self, RunOutcome, Trigger},
    store,
};

pub fn scrape(app: &mut App, trigger: Trigger) {
    info!(?trigger, "gui: scrape begin");
    app.running = true;

    let fetcher = HttpFetcher::new(app.state.options.fetch.timeout());
    let outcome = {
        let mut prog = GuiProgress::new(&mut app.status);
        // → This is where the scrape happens ←
        scrape::run(trigger, &fetcher, &app.state.options.fetch, Some(&mut prog))
    };
    app.running = false;

    // No stale data survives a run that produced nothing.
    match outcome {
        Ok(RunOutcome::Data(run)) => {
            let n = run.base().len();
            match store::save_batch(run.base()) {
                Ok(p) => info!(path = %p.display(), "cache: saved"),
                Err(e) => error!(error = %e, "cache: save failed"),
            }
            app.run = Some(run);
            app.status(format!("Ready: {n} records"));
        }
        Ok(RunOutcome::NoData) => {
            warn!("gui: no payload on page");
            app.run = None;
            app.status("No data: the page has no embedded chart payload");
        }
        Err(e) => {
            error!(error = %e, "gui: scrape failed");
            app.run = None;
            app.status(format!("Error: {e}"));
        }
    }

    app.rebuild_view();
}
