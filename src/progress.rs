// src/progress.rs
/// Lightweight progress reporting for a pipeline run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one pipeline stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Locate,
    Extract,
}

impl Stage {
    pub const COUNT: usize = 3;

    pub fn label(self) -> &'static str {
        match self {
            Stage::Fetch => "Fetched page",
            Stage::Locate => "Located payload",
            Stage::Extract => "Extracted records",
        }
    }
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
