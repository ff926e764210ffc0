// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    config::options::{ExportFormat, ExportOptions},
    csv::rows_to_string,
    error::Result,
    model::RecordBatch,
};

/// Serialize a batch in the export format (CSV/TSV/JSON).
pub fn to_export_string(export: &ExportOptions, batch: &RecordBatch) -> Result<String> {
    match export.format.delim() {
        Some(sep) => {
            let headers = RecordBatch::headers();
            let headers = export.include_headers.then_some(headers.as_slice());
            Ok(rows_to_string(&batch.to_rows(), headers, sep))
        }
        None => {
            debug_assert_eq!(export.format, ExportFormat::Json);
            let mut s = serde_json::to_string_pretty(batch)?;
            s.push('\n');
            Ok(s)
        }
    }
}

/// Write a batch to `export.out_path()`. Returns the final path written to.
pub fn write_export(export: &ExportOptions, batch: &RecordBatch) -> Result<PathBuf> {
    let path = export.out_path();
    let contents = to_export_string(export, batch)?;
    write_text(&path, &contents)?;
    info!(path = %path.display(), records = batch.len(), format = ?export.format, "exported");
    Ok(path)
}

/// Write text, creating parent directories first.
pub fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        return if dir.is_dir() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", dir.display()),
            ))
        };
    }
    fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MovieRecord;

    fn batch() -> RecordBatch {
        RecordBatch::new(vec![MovieRecord {
            rank: Some(1),
            title: Some(s!("Oppenheimer")),
            release_year: Some(2023),
            rating: Some(8.3),
            vote_count: Some(900_000),
            genres: s!("Biography, Drama, History"),
        }])
    }

    #[test]
    fn csv_with_headers() {
        let export = ExportOptions::default();
        let s = to_export_string(&export, &batch()).unwrap();
        assert_eq!(
            s,
            "Rank,Title,ReleaseYear,Rating,VoteCount,Genres\n1,Oppenheimer,2023,8.3,900000,\"Biography, Drama, History\"\n"
        );
    }

    #[test]
    fn json_uses_record_schema() {
        let mut export = ExportOptions::default();
        export.format = ExportFormat::Json;
        let s = to_export_string(&export, &batch()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v[0]["Title"], "Oppenheimer");
        assert_eq!(v[0]["Genres"], "Biography, Drama, History");
    }

    #[test]
    fn write_export_creates_dirs() {
        let dir = std::env::temp_dir().join("chart_scrape_export_test").join("nested");
        let _ = fs::remove_dir_all(&dir);
        let mut export = ExportOptions::default();
        export.format = ExportFormat::Tsv;
        export.set_path(dir.join("chart").to_str().unwrap());

        let path = write_export(&export, &batch()).unwrap();
        assert!(path.ends_with("chart.tsv"));
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("Biography, Drama, History"));
    }
}
