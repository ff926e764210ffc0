// src/specs/mod.rs
//! # Page “specs”
//!
//! Page-specific knowledge: *where the ground truth lives in the markup* and
//! *how to read it robustly*. Specs only extract. Fetching lives in
//! `core::net`, cleanup and aggregation in `analysis`, orchestration in
//! `scrape`.
//!
//! ## Conventions
//! - Case-insensitive tag detection via `core::html`; no full-document regexes.
//! - Structured payloads are decoded against declared serde types, so layout
//!   drift shows up as a typed error instead of a panic on a missing key.
//! - Specs must be testable offline against captured or synthetic pages.
pub mod chart;
