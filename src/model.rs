// src/model.rs
//! Record types shared by the pipeline, the cache and the front ends.

use serde::{Deserialize, Serialize};

use crate::config::consts::GENRE_SEP;

/// Column order of `MovieRecord::to_row` (and the cache/export header line).
pub const HEADERS: [&str; 6] = ["Rank", "Title", "ReleaseYear", "Rating", "VoteCount", "Genres"];

/// One chart entry.
///
/// Every scalar is optional: a node missing a sub-key still yields a record,
/// and `analysis::clean` decides what survives. `genres` is the `", "`-joined
/// label list; an empty string means the node had no genres.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    pub rank: Option<u32>,
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub rating: Option<f64>,
    pub vote_count: Option<u64>,
    pub genres: String,
}

impl MovieRecord {
    pub fn has_genres(&self) -> bool {
        self.primary_genre().is_some()
    }

    /// Labels in stored order.
    pub fn genre_list(&self) -> impl Iterator<Item = &str> {
        self.genres.split(GENRE_SEP).filter(|g| !g.is_empty())
    }

    /// First comma-delimited segment; the grouping genre.
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.split(',').next().map(str::trim).filter(|g| !g.is_empty())
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            opt_cell(self.rank),
            self.title.clone().unwrap_or_default(),
            opt_cell(self.release_year),
            opt_cell(self.rating),
            opt_cell(self.vote_count),
            self.genres.clone(),
        ]
    }

    /// Inverse of `to_row`. Unparseable cells come back empty, same as a
    /// node with a missing sub-key.
    pub fn from_row(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).map(|c| c.trim()).unwrap_or("");
        Self {
            rank: cell(0).parse().ok(),
            title: Some(cell(1)).filter(|t| !t.is_empty()).map(|t| s!(t)),
            release_year: cell(2).parse().ok(),
            rating: cell(3).parse().ok(),
            vote_count: cell(4).parse().ok(),
            genres: s!(cell(5)),
        }
    }
}

fn opt_cell<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

/// Ordered, immutable snapshot of one fetch-and-extract cycle.
///
/// Transformations build a new batch; nothing hands out `&mut` to the records.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordBatch {
    records: Vec<MovieRecord>,
}

impl RecordBatch {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Present ratings, in batch order.
    pub fn ratings(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().filter_map(|r| r.rating)
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(MovieRecord::to_row).collect()
    }

    pub fn headers() -> Vec<String> {
        HEADERS.iter().map(|h| s!(*h)).collect()
    }
}

impl From<Vec<MovieRecord>> for RecordBatch {
    fn from(records: Vec<MovieRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<MovieRecord> for RecordBatch {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordBatch {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(genres: &str) -> MovieRecord {
        MovieRecord { genres: s!(genres), ..MovieRecord::default() }
    }

    #[test]
    fn primary_genre_is_first_segment() {
        assert_eq!(rec("Crime, Drama").primary_genre(), Some("Crime"));
        assert_eq!(rec("Drama").primary_genre(), Some("Drama"));
        assert_eq!(rec("").primary_genre(), None);
        assert!(!rec("").has_genres());
    }

    #[test]
    fn genre_list_splits_on_separator() {
        let r = rec("Action, Adventure, Sci-Fi");
        assert_eq!(r.genre_list().collect::<Vec<_>>(), vec!["Action", "Adventure", "Sci-Fi"]);
    }

    #[test]
    fn row_roundtrip_keeps_missing_fields_missing() {
        let r = MovieRecord {
            rank: Some(3),
            title: Some(s!("Heat")),
            release_year: None,
            rating: Some(8.3),
            vote_count: None,
            genres: s!("Action, Crime"),
        };
        let row = r.to_row();
        assert_eq!(row[2], "");
        assert_eq!(row[3], "8.3");
        assert_eq!(MovieRecord::from_row(&row), r);
    }

    #[test]
    fn serializes_with_output_schema_names() {
        let r = MovieRecord { rank: Some(1), rating: Some(9.0), ..MovieRecord::default() };
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["Rank"], 1);
        assert_eq!(v["Rating"], 9.0);
        assert!(v.get("ReleaseYear").is_some());
        assert!(v.get("VoteCount").is_some());
    }
}
