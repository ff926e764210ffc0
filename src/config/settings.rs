// src/config/settings.rs
//
// User options persisted as TOML under the store dir.
// A missing or broken file never blocks startup: we log and use defaults.

use std::{fs, path::{Path, PathBuf}};

use tracing::{debug, warn};

use crate::error::{Result, ScrapeError};
use super::{consts::{SETTINGS_FILE, STORE_DIR}, options::AppOptions};

pub fn default_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
}

pub fn load(path: &Path) -> AppOptions {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "settings: not loaded, using defaults");
            return AppOptions::default();
        }
    };
    match parse(&text) {
        Ok(opts) => opts,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "settings: unreadable, using defaults");
            AppOptions::default()
        }
    }
}

pub fn parse(text: &str) -> Result<AppOptions> {
    toml::from_str(text).map_err(|e| ScrapeError::Settings(e.to_string()))
}

pub fn save(path: &Path, opts: &AppOptions) -> Result<()> {
    let text = toml::to_string_pretty(opts).map_err(|e| ScrapeError::Settings(e.to_string()))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{Bound, ExportFormat};

    #[test]
    fn partial_file_fills_defaults() {
        let opts = parse("[capping]\nupper = \"computed\"\n").unwrap();
        assert_eq!(opts.capping.upper, Bound::Computed);
        assert_eq!(opts.capping.lower, Bound::Computed);
        assert_eq!(opts.fetch, Default::default());
    }

    #[test]
    fn save_then_load_keeps_choices() {
        let dir = std::env::temp_dir().join("chart_scrape_settings_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("settings.toml");

        let mut opts = AppOptions::default();
        opts.capping.lower = Bound::Fixed(2.5);
        opts.export.format = ExportFormat::Tsv;
        save(&path, &opts).unwrap();

        assert_eq!(load(&path), opts);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert!(parse("capping = 12").is_err());
        let missing = std::env::temp_dir().join("chart_scrape_no_such_dir").join("x.toml");
        assert_eq!(load(&missing), AppOptions::default());
    }
}
