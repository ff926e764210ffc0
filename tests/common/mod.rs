// tests/common/mod.rs
#![allow(dead_code)]

use std::{
    cell::Cell,
    path::PathBuf,
};

use chart_scrape::{
    core::Fetcher,
    error::{Result, ScrapeError},
    model::MovieRecord,
};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/top_chart.html")
}

pub fn fixture() -> Vec<u8> {
    std::fs::read(fixture_path()).unwrap()
}

/// Serves the same canned body (or transport failure) on every call.
pub struct StaticFetcher {
    body: std::result::Result<Vec<u8>, String>,
    pub calls: Cell<usize>,
    pub last_headers: std::cell::RefCell<Vec<(String, String)>>,
}

impl StaticFetcher {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self { body: Ok(body.into()), calls: Cell::new(0), last_headers: Default::default() }
    }

    pub fn failing(msg: &str) -> Self {
        Self { body: Err(msg.to_string()), calls: Cell::new(0), last_headers: Default::default() }
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, _url: &str, headers: &[(String, String)]) -> Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        *self.last_headers.borrow_mut() = headers.to_vec();
        self.body.clone().map_err(ScrapeError::Transport)
    }
}

pub fn rec(title: &str, year: i32, rating: Option<f64>, votes: Option<u64>, genres: &str) -> MovieRecord {
    MovieRecord {
        rank: Some(1),
        title: Some(title.to_string()),
        release_year: Some(year),
        rating,
        vote_count: votes,
        genres: genres.to_string(),
    }
}
