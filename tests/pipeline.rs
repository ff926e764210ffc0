// tests/pipeline.rs
mod common;

use chart_scrape::{
    config::options::{BatchView, CapOptions, ChartKind, FetchOptions},
    core::SavedPage,
    error::ScrapeError,
    progress::{Progress, Stage},
    scrape::{self, RunOutcome, Trigger},
};
use common::{fixture, fixture_path, StaticFetcher};

#[derive(Default)]
struct Recorder {
    total: usize,
    stages: Vec<Stage>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn stage_done(&mut self, stage: Stage) {
        self.stages.push(stage);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn fixture_page_yields_records_in_payload_order() {
    let fetcher = StaticFetcher::ok(fixture());
    let outcome = scrape::run(Trigger::InitialLoad, &fetcher, &FetchOptions::default(), None).unwrap();

    let run = outcome.into_run().expect("payload present");
    assert_eq!(run.trigger, Trigger::InitialLoad);

    let records = run.base().records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].rank, Some(1));
    assert_eq!(records[0].title.as_deref(), Some("The Shawshank Redemption"));
    assert_eq!(records[0].genres, "Drama");
    assert_eq!(records[1].title.as_deref(), Some("The Godfather"));
    assert_eq!(records[1].release_year, Some(1972));
    assert_eq!(records[1].rating, Some(9.2));
    assert_eq!(records[1].vote_count, Some(2_000_000));
    assert_eq!(records[1].genres, "Crime, Drama");
}

#[test]
fn sends_user_agent_once_per_run() {
    let fetcher = StaticFetcher::ok(fixture());
    let opts = FetchOptions::default();
    scrape::run(Trigger::Refetch, &fetcher, &opts, None).unwrap();

    assert_eq!(fetcher.calls.get(), 1);
    let headers = fetcher.last_headers.borrow();
    assert_eq!(headers.as_slice(), &[(String::from("User-Agent"), opts.user_agent.clone())]);
}

#[test]
fn page_without_payload_is_no_data() {
    let fetcher = StaticFetcher::ok("<html><body><script>var a = 1;</script></body></html>");
    let outcome = scrape::run(Trigger::Refetch, &fetcher, &FetchOptions::default(), None).unwrap();
    assert!(matches!(outcome, RunOutcome::NoData));
}

#[test]
fn transport_failure_fails_the_run() {
    let fetcher = StaticFetcher::failing("connection refused");
    let err = scrape::run(Trigger::Refetch, &fetcher, &FetchOptions::default(), None).unwrap_err();
    assert!(matches!(err, ScrapeError::Transport(ref m) if m == "connection refused"));
    assert!(err.is_run_failure());
}

#[test]
fn broken_payload_fails_the_run() {
    let page = r#"<script type="application/json">{"props": </script>"#;
    let err = scrape::run(Trigger::Refetch, &StaticFetcher::ok(page), &FetchOptions::default(), None).unwrap_err();
    assert!(matches!(err, ScrapeError::MalformedPayload(_)));

    let page = r#"<script type="application/json">{"props":{"pageProps":{"pageData":{}}}}</script>"#;
    let err = scrape::run(Trigger::Refetch, &StaticFetcher::ok(page), &FetchOptions::default(), None).unwrap_err();
    assert!(matches!(err, ScrapeError::ShapeMismatch(_)));
}

#[test]
fn runs_are_independent() {
    let opts = FetchOptions::default();
    let first = scrape::run(Trigger::InitialLoad, &StaticFetcher::ok(fixture()), &opts, None).unwrap();
    let second = scrape::run(Trigger::Refetch, &StaticFetcher::ok("<html></html>"), &opts, None).unwrap();

    assert_eq!(first.into_run().map(|r| r.base().len()), Some(2));
    assert!(second.into_run().is_none());
}

#[test]
fn progress_sees_every_stage() {
    let mut rec = Recorder::default();
    scrape::run(Trigger::Refetch, &StaticFetcher::ok(fixture()), &FetchOptions::default(), Some(&mut rec)).unwrap();
    assert_eq!(rec.total, Stage::COUNT);
    assert_eq!(rec.stages, vec![Stage::Fetch, Stage::Locate, Stage::Extract]);
    assert!(rec.finished);
}

#[test]
fn progress_finishes_on_failure() {
    let mut rec = Recorder::default();
    let _ = scrape::run(Trigger::Refetch, &StaticFetcher::failing("x"), &FetchOptions::default(), Some(&mut rec));
    assert!(rec.stages.is_empty());
    assert!(rec.finished);
}

#[test]
fn saved_page_goes_through_the_same_pipeline() {
    let fetcher = SavedPage::new(fixture_path());
    let run = scrape::run(Trigger::InitialLoad, &fetcher, &FetchOptions::default(), None)
        .unwrap()
        .into_run()
        .unwrap();
    assert_eq!(run.base().len(), 2);
}

#[test]
fn derived_views_leave_base_untouched() {
    let run = scrape::from_markup(Trigger::Refetch, &fixture(), None).unwrap().into_run().unwrap();
    let cap = CapOptions::default();

    let capped = run.view(BatchView::Capped, &cap);
    assert_eq!(capped.records()[0].rating, Some(8.6));
    assert_eq!(capped.records()[1].rating, Some(8.6));

    let cleaned = run.view(BatchView::Cleaned, &cap);
    assert_eq!(cleaned.records()[1].genres, "Crime");

    assert_eq!(run.base().records()[0].rating, Some(9.3));
    assert_eq!(run.base().records()[1].genres, "Crime, Drama");
}

#[test]
fn fixture_charts() {
    let run = scrape::from_markup(Trigger::Refetch, &fixture(), None).unwrap().into_run().unwrap();
    let cap = CapOptions::default();
    for kind in ChartKind::ALL {
        let series = run.series(kind, &cap).expect("fixture has data for every chart");
        assert_eq!(series.len(), 2, "{kind:?}");
    }
}
