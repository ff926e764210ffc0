// src/analysis/cleaning.rs

use crate::model::{MovieRecord, RecordBatch};

/// Drop records with no genres or no rating; keep only the first genre.
///
/// The result is meant for per-genre grouping, not for listing genres.
pub fn clean(batch: &RecordBatch) -> RecordBatch {
    batch
        .iter()
        .filter(|r| r.rating.is_some())
        .filter_map(|r| {
            let first = r.primary_genre()?;
            Some(MovieRecord { genres: s!(first), ..r.clone() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(rating: Option<f64>, genres: &str) -> MovieRecord {
        MovieRecord { rating, genres: s!(genres), ..MovieRecord::default() }
    }

    #[test]
    fn drops_incomplete_and_keeps_first_genre() {
        let b = RecordBatch::new(vec![
            rec(Some(8.0), "Crime, Drama"),
            rec(None, "Horror"),
            rec(Some(7.0), ""),
            rec(Some(6.5), "Western"),
        ]);
        let c = clean(&b);
        assert_eq!(c.len(), 2);
        assert!(c.len() <= b.len());
        assert_eq!(c.records()[0].genres, "Crime");
        assert_eq!(c.records()[1].genres, "Western");
        for r in &c {
            assert!(r.rating.is_some());
            assert!(!r.genres.is_empty());
        }
    }

    #[test]
    fn base_batch_is_untouched() {
        let b = RecordBatch::new(vec![rec(Some(8.0), "Crime, Drama")]);
        let _ = clean(&b);
        assert_eq!(b.records()[0].genres, "Crime, Drama");
    }
}
