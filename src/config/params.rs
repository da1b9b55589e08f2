// src/config/params.rs
use std::path::PathBuf;

use log::LevelFilter;

/// Where the dashboard page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    /// One `Key=value` block per reading
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
}

/// Fully resolved run parameters.
#[derive(Clone, Debug)]
pub struct Params {
    pub source: Source,
    pub format: Format,
    pub out: Option<PathBuf>,        // stdout when None
    pub include_headers: bool,       // header line for csv/tsv
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,   // stderr when None
}

impl Params {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            format: Format::default(),
            out: None,
            include_headers: false,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}
