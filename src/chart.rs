// src/chart.rs
//! Chart series handed to the presentation layer.
//!
//! Which batch feeds which chart is fixed here:
//! - `Distribution` reads the cleaned batch (first genre only, no gaps),
//! - `Trend` and `Correlation` read the capped batch.
//!
//! The raw extracted batch never feeds a chart directly.

use serde::Serialize;

use crate::{
    analysis::{aggregate, stats, GroupKey, GroupValue, ValueKey},
    config::options::{CapOptions, ChartKind},
    scrape::ChartRun,
};

/// Five-number summary plus mean for one genre.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenreBox {
    pub genre: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearMean {
    pub year: i32,
    pub mean: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VotePoint {
    pub vote_count: u64,
    pub rating: f64,
    pub genre: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ChartSeries {
    Distribution(Vec<GenreBox>),
    Trend(Vec<YearMean>),
    Correlation(Vec<VotePoint>),
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Distribution(v) => v.len(),
            ChartSeries::Trend(v) => v.len(),
            ChartSeries::Correlation(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Headers + rows for the CLI / clipboard.
    pub fn to_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let headers = |hs: &[&str]| hs.iter().map(|h| s!(*h)).collect::<Vec<_>>();
        match self {
            ChartSeries::Distribution(boxes) => (
                headers(&["Genre", "Count", "Min", "Q1", "Median", "Q3", "Max", "Mean"]),
                boxes
                    .iter()
                    .map(|b| {
                        let mut row = vec![b.genre.clone(), b.count.to_string()];
                        row.extend([b.min, b.q1, b.median, b.q3, b.max, b.mean].iter().map(|v| fmt2(*v)));
                        row
                    })
                    .collect(),
            ),
            ChartSeries::Trend(points) => (
                headers(&["ReleaseYear", "MeanRating"]),
                points.iter().map(|p| vec![p.year.to_string(), fmt2(p.mean)]).collect(),
            ),
            ChartSeries::Correlation(points) => (
                headers(&["VoteCount", "Rating", "Genre"]),
                points
                    .iter()
                    .map(|p| vec![p.vote_count.to_string(), p.rating.to_string(), p.genre.clone().unwrap_or_default()])
                    .collect(),
            ),
        }
    }
}

fn fmt2(v: f64) -> String {
    format!("{v:.2}")
}

pub fn series(run: &ChartRun, kind: ChartKind, cap: &CapOptions) -> Option<ChartSeries> {
    let series = match kind {
        ChartKind::Distribution => ChartSeries::Distribution(genre_boxes(run)),
        ChartKind::Trend => ChartSeries::Trend(year_means(run, cap)),
        ChartKind::Correlation => ChartSeries::Correlation(vote_points(run, cap)),
    };
    (!series.is_empty()).then_some(series)
}

fn genre_boxes(run: &ChartRun) -> Vec<GenreBox> {
    let cleaned = run.cleaned();
    let means = aggregate::aggregate(&cleaned, GroupKey::Genre, ValueKey::Rating);
    let mut values = aggregate::group_values(&cleaned, GroupKey::Genre, ValueKey::Rating);

    means
        .into_iter()
        .filter_map(|(key, mean)| {
            let mut vs = values.remove(&key)?;
            vs.sort_by(f64::total_cmp);
            let q = |p: f64| stats::quantile(&vs, p);
            Some(GenreBox {
                genre: key.to_string(),
                count: vs.len(),
                min: q(0.0)?,
                q1: q(0.25)?,
                median: q(0.5)?,
                q3: q(0.75)?,
                max: q(1.0)?,
                mean,
            })
        })
        .collect()
}

fn year_means(run: &ChartRun, cap: &CapOptions) -> Vec<YearMean> {
    let capped = run.capped(cap).batch;
    aggregate::aggregate(&capped, GroupKey::ReleaseYear, ValueKey::Rating)
        .into_iter()
        .filter_map(|(key, mean)| match key {
            GroupValue::Year(year) => Some(YearMean { year, mean }),
            GroupValue::Genre(_) => None,
        })
        .collect()
}

fn vote_points(run: &ChartRun, cap: &CapOptions) -> Vec<VotePoint> {
    let capped = run.capped(cap).batch;
    capped
        .iter()
        .filter_map(|r| {
            Some(VotePoint {
                vote_count: r.vote_count?,
                rating: r.rating?,
                genre: r.primary_genre().map(|g| s!(g)),
            })
        })
        .collect()
}
