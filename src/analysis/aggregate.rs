// src/analysis/aggregate.rs
//
// Group-by + mean. Groups come out in the key's natural order (genres
// lexicographic, years ascending); equal keys merge.

use std::{collections::BTreeMap, fmt};

use crate::model::{MovieRecord, RecordBatch};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Whole stored genre string; on a cleaned batch that is the first genre.
    Genre,
    ReleaseYear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Rating,
    VoteCount,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupValue {
    Genre(String),
    Year(i32),
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Genre(g) => f.write_str(g),
            GroupValue::Year(y) => write!(f, "{y}"),
        }
    }
}

impl GroupKey {
    fn of(self, r: &MovieRecord) -> Option<GroupValue> {
        match self {
            GroupKey::Genre => Some(&r.genres)
                .filter(|g| !g.is_empty())
                .map(|g| GroupValue::Genre(g.clone())),
            GroupKey::ReleaseYear => r.release_year.map(GroupValue::Year),
        }
    }
}

impl ValueKey {
    fn of(self, r: &MovieRecord) -> Option<f64> {
        match self {
            ValueKey::Rating => r.rating,
            ValueKey::VoteCount => r.vote_count.map(|v| v as f64),
        }
    }
}

/// Values per group, in batch order within each group. Records lacking the
/// key or the value are skipped.
pub fn group_values(batch: &RecordBatch, key: GroupKey, value: ValueKey) -> BTreeMap<GroupValue, Vec<f64>> {
    let mut groups: BTreeMap<GroupValue, Vec<f64>> = BTreeMap::new();
    for r in batch {
        let (Some(k), Some(v)) = (key.of(r), value.of(r)) else { continue };
        groups.entry(k).or_default().push(v);
    }
    groups
}

/// Mean of `value` per `key` group. Empty batch → empty series; callers
/// must not chart that.
pub fn aggregate(batch: &RecordBatch, key: GroupKey, value: ValueKey) -> Vec<(GroupValue, f64)> {
    group_values(batch, key, value)
        .into_iter()
        .filter_map(|(k, vs)| super::stats::mean(&vs).map(|m| (k, m)))
        .collect()
}
