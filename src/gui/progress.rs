// src/gui/progress.rs
use crate::progress::{Progress, Stage};

/// Writes pipeline progress into the status line. The scrape runs on the UI
/// thread, so a plain borrow is enough.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    done: usize,
    total: usize,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status, done: 0, total: 0 }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        *self.status = msg.into();
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        let msg = format!("{} ({}/{})", stage.label(), self.done, self.total);
        self.set_status(msg);
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Fetch complete"));
        } else {
            let msg = format!("Fetch complete ({}/{})", self.done, self.total);
            self.set_status(msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_stages() {
        let mut status = s!("Idle");
        {
            let mut p = GuiProgress::new(&mut status);
            p.begin(Stage::COUNT);
            p.stage_done(Stage::Fetch);
            p.stage_done(Stage::Locate);
        }
        assert_eq!(status, "Located payload (2/3)");
    }
}
