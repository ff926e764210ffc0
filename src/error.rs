// src/error.rs
//! Whole-run failures.
//!
//! A missing embedded payload is *not* in here: that is an expected outcome
//! (`scrape::RunOutcome::NoData`), not an error. Per-record gaps are not in
//! here either; they are absorbed into the data as empty fields.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// DNS, connect, timeout or body read failure. No partial output.
    #[error("transport error: {0}")]
    Transport(String),

    /// The located payload is not valid JSON.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Valid JSON, but the chart path is not where we expect it.
    #[error("payload shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("settings error: {0}")]
    Settings(String),
}

impl ScrapeError {
    /// Transport and payload failures abort the run; everything else is local
    /// to an export or settings action.
    pub fn is_run_failure(&self) -> bool {
        matches!(
            self,
            ScrapeError::Transport(_) | ScrapeError::MalformedPayload(_) | ScrapeError::ShapeMismatch(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
