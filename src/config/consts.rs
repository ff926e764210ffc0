// src/config/consts.rs

// Net config
pub const CHART_URL: &str = "https://www.imdb.com/chart/top/?sort=release_date%2Cdesc";
// The site varies (or blocks) responses for non-browser clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36";
pub const PAYLOAD_CONTENT_TYPE: &str = "application/json";

// Records
pub const GENRE_SEP: &str = ", ";

// Capping
pub const DEFAULT_CAP_UPPER: f64 = 8.6;
pub const SIGMA: f64 = 3.0;

// Local store
pub const STORE_DIR: &str = ".store";
pub const CACHE_FILE: &str = "chart.csv";
pub const SETTINGS_FILE: &str = "settings.toml";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "top_chart";
