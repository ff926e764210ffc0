// tests/export.rs
mod common;

use std::{fs, path::PathBuf};

use chart_scrape::{
    config::options::{ExportFormat, ExportOptions},
    csv::parse_rows,
    file,
    model::{MovieRecord, RecordBatch},
    scrape::{self, Trigger},
    store,
};
use common::fixture;

fn tmp_dir(name: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!("chart_scrape_{name}"));
    let _ = fs::remove_dir_all(&p);
    p
}

fn fixture_batch() -> RecordBatch {
    scrape::from_markup(Trigger::Refetch, &fixture(), None)
        .unwrap()
        .into_run()
        .unwrap()
        .base()
        .clone()
}

#[test]
fn csv_export_reads_back() {
    let batch = fixture_batch();
    let mut export = ExportOptions::default();
    export.set_path(tmp_dir("csv").join("chart").to_str().unwrap());

    let path = file::write_export(&export, &batch).unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));

    let rows = parse_rows(&fs::read_to_string(&path).unwrap(), ',');
    assert_eq!(rows[0], RecordBatch::headers());
    let back: RecordBatch = rows[1..].iter().map(|r| MovieRecord::from_row(r)).collect();
    assert_eq!(back, batch);
}

#[test]
fn tsv_without_headers() {
    let batch = fixture_batch();
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.include_headers = false;

    let text = file::to_export_string(&export, &batch).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "2\tThe Godfather\t1972\t9.2\t2000000\tCrime, Drama");
}

#[test]
fn json_export_is_an_array_of_records() {
    let batch = fixture_batch();
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Json;

    let text = file::to_export_string(&export, &batch).unwrap();
    let back: Vec<MovieRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, batch.records());
}

#[test]
fn cache_parse_matches_saved_rows() {
    let batch = fixture_batch();
    let text = chart_scrape::csv::rows_to_string(&batch.to_rows(), Some(&RecordBatch::headers()), ',');
    assert_eq!(store::parse_batch(&text), batch);
}
