// src/scrape.rs
//
// Pipeline entry point: fetch → locate → extract. One call = one independent
// run; nothing carries over between runs except what the caller keeps.
//
// The result (`ChartRun`) holds only the base batch. Capped/cleaned batches
// and chart series are derived from it on demand.

use std::{borrow::Cow, time::SystemTime};

use tracing::{info, warn};

use crate::{
    analysis::{self, Capped},
    chart::{self, ChartSeries},
    config::options::{BatchView, CapOptions, ChartKind, FetchOptions},
    core::net::Fetcher,
    error::Result,
    model::RecordBatch,
    progress::{NullProgress, Progress, Stage},
    specs,
};

/// Why a run happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// First load of a front end.
    InitialLoad,
    /// User asked for fresh data.
    Refetch,
}

/// A run either produced a batch or found no payload on the page.
#[derive(Clone, Debug)]
pub enum RunOutcome {
    Data(ChartRun),
    /// The page had no embedded payload (layout changed, error page, …).
    NoData,
}

impl RunOutcome {
    pub fn into_run(self) -> Option<ChartRun> {
        match self {
            RunOutcome::Data(run) => Some(run),
            RunOutcome::NoData => None,
        }
    }
}

/// Result of one successful fetch-and-extract cycle.
#[derive(Clone, Debug)]
pub struct ChartRun {
    base: RecordBatch,
    pub trigger: Trigger,
    pub fetched_at: SystemTime,
}

impl ChartRun {
    pub fn new(base: RecordBatch, trigger: Trigger) -> Self {
        Self { base, trigger, fetched_at: SystemTime::now() }
    }

    pub fn base(&self) -> &RecordBatch {
        &self.base
    }

    pub fn capped(&self, cap: &CapOptions) -> Capped {
        let (lower, upper) = cap.explicit();
        analysis::cap(&self.base, lower, upper)
    }

    pub fn cleaned(&self) -> RecordBatch {
        analysis::clean(&self.base)
    }

    pub fn view(&self, view: BatchView, cap: &CapOptions) -> Cow<'_, RecordBatch> {
        match view {
            BatchView::Base => Cow::Borrowed(&self.base),
            BatchView::Capped => Cow::Owned(self.capped(cap).batch),
            BatchView::Cleaned => Cow::Owned(self.cleaned()),
        }
    }

    /// None when there is nothing to draw.
    pub fn series(&self, kind: ChartKind, cap: &CapOptions) -> Option<ChartSeries> {
        chart::series(self, kind, cap)
    }
}

/// Re-invocation entry point used by every front end.
pub fn run(
    trigger: Trigger,
    fetcher: &dyn Fetcher,
    opts: &FetchOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunOutcome> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    info!(?trigger, url = %opts.url, "run: begin");
    progress.begin(Stage::COUNT);
    progress.log("Fetching chart…");

    let result = fetch_and_extract(trigger, fetcher, opts, progress);

    match &result {
        Ok(RunOutcome::Data(run)) => info!(records = run.base().len(), "run: ok"),
        Ok(RunOutcome::NoData) => warn!("run: no data"),
        Err(e) => warn!(error = %e, "run: failed"),
    }
    progress.finish();
    result
}

fn fetch_and_extract(
    trigger: Trigger,
    fetcher: &dyn Fetcher,
    opts: &FetchOptions,
    progress: &mut dyn Progress,
) -> Result<RunOutcome> {
    let body = fetcher.fetch(&opts.url, &opts.headers())?;
    progress.stage_done(Stage::Fetch);
    locate_and_extract(trigger, &body, progress)
}

/// Locate + extract over bytes already in hand.
pub fn from_markup(trigger: Trigger, body: &[u8], progress: Option<&mut dyn Progress>) -> Result<RunOutcome> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    locate_and_extract(trigger, body, progress)
}

fn locate_and_extract(trigger: Trigger, body: &[u8], progress: &mut dyn Progress) -> Result<RunOutcome> {
    let markup = String::from_utf8_lossy(body);

    let Some(payload) = specs::chart::locate(&markup) else {
        warn!(bytes = body.len(), "payload: no application/json script on page");
        return Ok(RunOutcome::NoData);
    };
    info!(bytes = payload.len(), "payload: located");
    progress.stage_done(Stage::Locate);

    let batch = specs::chart::extract(payload)?;
    progress.stage_done(Stage::Extract);

    Ok(RunOutcome::Data(ChartRun::new(batch, trigger)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;

    struct Failing;
    impl Fetcher for Failing {
        fn fetch(&self, _url: &str, _headers: &[(String, String)]) -> Result<Vec<u8>> {
            Err(ScrapeError::Transport(s!("down")))
        }
    }

    #[derive(Default)]
    struct Counts {
        began: usize,
        stages: usize,
        finished: usize,
    }

    impl Progress for Counts {
        fn begin(&mut self, _total: usize) {
            self.began += 1;
        }
        fn stage_done(&mut self, _stage: Stage) {
            self.stages += 1;
        }
        fn finish(&mut self) {
            self.finished += 1;
        }
    }

    #[test]
    fn progress_is_finished_after_a_failed_fetch() {
        let mut counts = Counts::default();
        let err = run(Trigger::Refetch, &Failing, &FetchOptions::default(), Some(&mut counts)).unwrap_err();
        assert!(matches!(err, ScrapeError::Transport(_)));
        assert_eq!((counts.began, counts.stages, counts.finished), (1, 0, 1));
    }

    #[test]
    fn markup_progress_counts_locate_and_extract() {
        let page = r#"<script type="application/json">{"props":{"pageProps":{"pageData":{"chartTitles":{"edges":[]}}}}}</script>"#;
        let mut counts = Counts::default();
        let outcome = from_markup(Trigger::Refetch, page.as_bytes(), Some(&mut counts)).unwrap();
        assert!(matches!(outcome, RunOutcome::Data(_)));
        assert_eq!(counts.stages, 2);
        assert!(from_markup(Trigger::Refetch, b"<html></html>", None).unwrap().into_run().is_none());
    }
}
