// src/core/mod.rs

pub mod html;
pub mod net;

pub use net::{Fetcher, HttpFetcher, SavedPage};
