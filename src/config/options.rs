// src/config/options.rs
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub capping: CapOptions,
    pub export: ExportOptions,
}

/* ---------- Fetch ---------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    pub url: String,
    pub user_agent: String,
    /// None = transport defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: s!(CHART_URL),
            user_agent: s!(USER_AGENT),
            timeout_secs: None,
        }
    }
}

impl FetchOptions {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn headers(&self) -> Vec<(String, String)> {
        vec![(s!("User-Agent"), self.user_agent.clone())]
    }
}

/* ---------- Capping ---------- */

/// One side of the capping range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    /// mean ± SIGMA·stddev over the batch
    Computed,
    Fixed(f64),
}

impl Bound {
    pub fn fixed(self) -> Option<f64> {
        match self {
            Bound::Computed => None,
            Bound::Fixed(v) => Some(v),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapOptions {
    pub lower: Bound,
    pub upper: Bound,
}

impl Default for CapOptions {
    fn default() -> Self {
        Self {
            lower: Bound::Computed,
            upper: Bound::Fixed(DEFAULT_CAP_UPPER),
        }
    }
}

impl CapOptions {
    /// Both sides computed from the batch.
    pub fn statistical() -> Self {
        Self { lower: Bound::Computed, upper: Bound::Computed }
    }

    /// `(lower, upper)` as explicit overrides; None means "compute it".
    pub fn explicit(&self) -> (Option<f64>, Option<f64>) {
        (self.lower.fixed(), self.upper.fixed())
    }
}

/* ---------- Views ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    About,
    Data,
    Charts,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ChartKind {
    /// Rating spread per genre (cleaned batch)
    Distribution,
    /// Mean rating per release year (capped batch)
    Trend,
    /// Vote count vs rating (capped batch)
    Correlation,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Distribution, ChartKind::Trend, ChartKind::Correlation];

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Distribution => "Boxplot",
            ChartKind::Trend => "Lineplot",
            ChartKind::Correlation => "Scatterplot",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ChartKind::Distribution => "Ratings by Genre",
            ChartKind::Trend => "Average Rating Over the Years",
            ChartKind::Correlation => "Rating vs. Vote Count",
        }
    }
}

/// Which derived batch a table or export shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum BatchView {
    #[default]
    Base,
    Capped,
    Cleaned,
}

impl BatchView {
    pub const ALL: [BatchView; 3] = [BatchView::Base, BatchView::Capped, BatchView::Cleaned];

    pub fn label(self) -> &'static str {
        match self {
            BatchView::Base => "Extracted",
            BatchView::Capped => "Capped",
            BatchView::Cleaned => "Cleaned",
        }
    }
}

/* ---------- Export ---------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        self.out_path.dir.join(join!(&self.out_path.file_stem, ".", self.format.ext()))
    }

    /// Parse GUI/CLI text into dir + stem. Ignores a pasted extension.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_string_lossy().into_owned();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct OutputPath {
    dir: PathBuf,
    file_stem: String, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
        }
    }
}
