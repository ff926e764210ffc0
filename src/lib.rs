// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;

pub mod analysis;
pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod log;
pub mod model;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod store;

pub use error::{Result, ScrapeError};
