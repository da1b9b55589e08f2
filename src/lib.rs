// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod export;
pub mod file;
pub mod logger;
pub mod runner;
pub mod scrape;
pub mod types;

pub use error::ScrapeError;
pub use scrape::{extract, parse, parse_bytes, parse_str, read_file, read_url, Extraction, RowError, SkippedRow};
pub use types::{Gateway, Position, RadioSettings, Reading};
