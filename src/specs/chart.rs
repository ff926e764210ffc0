// src/specs/chart.rs
//! Top chart page: where the data lives and how to read it.
//!
//! The page ships its render state as JSON inside
//! `<script type="application/json">`. The chart sits at
//! `props.pageProps.pageData.chartTitles.edges`, one edge per title.
//!
//! Decoding is two-staged:
//! 1. the envelope down to `edges` is strict: if any of it is missing the page
//!    layout changed and the run fails with `ShapeMismatch`;
//! 2. each edge is lenient: a missing or mistyped sub-field leaves that record
//!    field empty and the rest of the batch goes through.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    config::consts::{GENRE_SEP, PAYLOAD_CONTENT_TYPE},
    core::html,
    error::{Result, ScrapeError},
    model::{MovieRecord, RecordBatch},
};

/* ---------------- Locate ---------------- */

/// Text of the first `<script type="application/json">` in document order.
/// None when the page has no such element.
pub fn locate(markup: &str) -> Option<&str> {
    let mut candidates = html::tag_blocks(markup, "script")
        .filter(|b| b.attr("type").is_some_and(|t| t.trim().eq_ignore_ascii_case(PAYLOAD_CONTENT_TYPE)));

    let first = candidates.next()?;
    if candidates.next().is_some() {
        debug!("payload: more than one JSON script, using the first");
    }
    Some(first.inner)
}

/* ---------------- Extract ---------------- */

pub fn extract(payload: &str) -> Result<RecordBatch> {
    let doc: Value = serde_json::from_str(payload)?;
    let doc: Document = serde_json::from_value(doc).map_err(|e| ScrapeError::ShapeMismatch(e.to_string()))?;

    let edges = doc.props.page_props.page_data.chart_titles.edges;
    let total = edges.len();
    let mut degraded = 0usize;

    let records: Vec<MovieRecord> = edges
        .into_iter()
        .enumerate()
        .map(|(ix, raw)| {
            let rec = record_from_edge(raw);
            if !is_complete(&rec) {
                degraded += 1;
                warn!(index = ix, rank = ?rec.rank, title = ?rec.title, "chart edge missing fields");
            }
            rec
        })
        .collect();

    info!(records = total, degraded, "extracted chart");
    Ok(RecordBatch::new(records))
}

fn record_from_edge(raw: Value) -> MovieRecord {
    // Not even an object: keep the row so counts line up, leave it empty.
    let edge: Edge = serde_json::from_value(raw).unwrap_or_default();
    let node = edge.node.unwrap_or_default();
    let ratings = node.ratings_summary.unwrap_or_default();

    let genres: Vec<String> = node
        .title_genres
        .and_then(|tg| tg.genres)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|g| g.genre.and_then(|g| g.text))
        .filter(|t| !t.is_empty())
        .collect();

    MovieRecord {
        rank: edge.current_rank,
        title: node.title_text.and_then(|t| t.text).filter(|t| !t.is_empty()),
        release_year: node.release_year.and_then(|y| y.year),
        rating: ratings.aggregate_rating,
        vote_count: ratings.vote_count,
        genres: genres.join(GENRE_SEP),
    }
}

fn is_complete(r: &MovieRecord) -> bool {
    r.rank.is_some()
        && r.title.is_some()
        && r.release_year.is_some()
        && r.rating.is_some()
        && r.vote_count.is_some()
        && !r.genres.is_empty()
}

/* ---------------- Payload schema ---------------- */

#[derive(Deserialize)]
struct Document {
    props: Props,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Props {
    page_props: PageProps,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageProps {
    page_data: PageData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageData {
    chart_titles: ChartTitles,
}

#[derive(Deserialize)]
struct ChartTitles {
    // Decoded one by one so a bad edge only costs its own fields.
    edges: Vec<Value>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Edge {
    #[serde(default, deserialize_with = "lenient")]
    current_rank: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    node: Option<Node>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Node {
    #[serde(default, deserialize_with = "lenient")]
    title_text: Option<Text>,
    #[serde(default, deserialize_with = "lenient")]
    release_year: Option<ReleaseYear>,
    #[serde(default, deserialize_with = "lenient")]
    ratings_summary: Option<RatingsSummary>,
    #[serde(default, deserialize_with = "lenient")]
    title_genres: Option<TitleGenres>,
}

#[derive(Default, Deserialize)]
struct Text {
    #[serde(default, deserialize_with = "lenient")]
    text: Option<String>,
}

#[derive(Default, Deserialize)]
struct ReleaseYear {
    #[serde(default, deserialize_with = "lenient")]
    year: Option<i32>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatingsSummary {
    #[serde(default, deserialize_with = "lenient")]
    aggregate_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    vote_count: Option<u64>,
}

#[derive(Default, Deserialize)]
struct TitleGenres {
    #[serde(default, deserialize_with = "lenient")]
    genres: Option<Vec<GenreEntry>>,
}

#[derive(Default, Deserialize)]
struct GenreEntry {
    #[serde(default, deserialize_with = "lenient")]
    genre: Option<Text>,
}

/// Present and well-typed → Some, anything else (null, wrong type) → None.
fn lenient<'de, D, T>(de: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(de)?;
    Ok(serde_json::from_value(raw).ok())
}
