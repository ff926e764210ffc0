// src/store.rs
//
// Local cache of the last good base batch, so the GUI has something to show
// before the first scrape. Only a startup convenience: a failed run never
// falls back to it.

use std::{fs, io, path::PathBuf};

use tracing::debug;

use crate::{
    config::consts::{CACHE_FILE, STORE_DIR},
    csv::{parse_rows, rows_to_string},
    error::Result,
    file::write_text,
    model::{MovieRecord, RecordBatch, HEADERS},
};

const STORE_SEP: char = ',';

pub fn cache_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(CACHE_FILE)
}

pub fn save_batch(batch: &RecordBatch) -> Result<PathBuf> {
    let path = cache_path();
    let headers = RecordBatch::headers();
    write_text(&path, &rows_to_string(&batch.to_rows(), Some(&headers), STORE_SEP))?;
    Ok(path)
}

/// Ok(None) when nothing has been cached yet.
pub fn load_batch() -> Result<Option<RecordBatch>> {
    let text = match fs::read_to_string(cache_path()) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(parse_batch(&text)))
}

pub fn parse_batch(text: &str) -> RecordBatch {
    let mut rows = parse_rows(text, STORE_SEP);
    if rows.first().is_some_and(|r| r.first().map(String::as_str) == Some(HEADERS[0])) {
        rows.remove(0);
    }
    debug!(rows = rows.len(), "cache: parsed");
    rows.iter().map(|r| MovieRecord::from_row(r)).collect()
}
