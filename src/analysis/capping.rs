// src/analysis/capping.rs
//
// 3-sigma outlier capping of the Rating column. Explicit bounds always win
// over computed ones; a side with neither is left open.

use tracing::debug;

use crate::{
    config::consts::SIGMA,
    model::{MovieRecord, RecordBatch},
};
use super::stats;

/// The bounds actually applied. None = that side was not clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl Bounds {
    pub fn contains(&self, v: f64) -> bool {
        self.lower.is_none_or(|l| v >= l) && self.upper.is_none_or(|u| v <= u)
    }

    /// Upper is checked first, so an inverted range still caps high values
    /// to `upper`.
    pub fn clamp(&self, v: f64) -> f64 {
        match (self.upper, self.lower) {
            (Some(u), _) if v > u => u,
            (_, Some(l)) if v < l => l,
            _ => v,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Capped {
    pub batch: RecordBatch,
    pub bounds: Bounds,
}

/// Fill missing sides with mean ± SIGMA·stddev over the present ratings.
pub fn resolve_bounds(batch: &RecordBatch, lower: Option<f64>, upper: Option<f64>) -> Bounds {
    if lower.is_some() && upper.is_some() {
        return Bounds { lower, upper };
    }

    let ratings: Vec<f64> = batch.ratings().collect();
    let spread = match (stats::mean(&ratings), stats::sample_std(&ratings)) {
        (Some(m), Some(sd)) => Some((m - SIGMA * sd, m + SIGMA * sd)),
        _ => None,
    };

    Bounds {
        lower: lower.or(spread.map(|(lo, _)| lo)),
        upper: upper.or(spread.map(|(_, hi)| hi)),
    }
}

pub fn cap(batch: &RecordBatch, lower: Option<f64>, upper: Option<f64>) -> Capped {
    let bounds = resolve_bounds(batch, lower, upper);

    let mut changed = 0usize;
    let records: Vec<MovieRecord> = batch
        .iter()
        .map(|r| {
            let rating = r.rating.map(|v| bounds.clamp(v));
            if rating != r.rating {
                changed += 1;
            }
            MovieRecord { rating, ..r.clone() }
        })
        .collect();

    debug!(lower = ?bounds.lower, upper = ?bounds.upper, changed, "capped ratings");
    Capped { batch: RecordBatch::new(records), bounds }
}
