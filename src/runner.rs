// src/runner.rs
use std::{fmt, io};

use log::info;

use crate::{
    config::{Params, Source},
    error::ScrapeError,
    export, file,
    scrape::{self, Extraction},
};

/// Which stage of a run failed. The cause stays reachable through `source()`.
#[derive(Debug)]
pub enum RunError {
    Scrape(ScrapeError),
    Render(serde_json::Error),
    Write(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scrape(_) => write!(f, "extraction failed"),
            Self::Render(_) => write!(f, "could not render output"),
            Self::Write(_) => write!(f, "could not write output"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scrape(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Write(e) => Some(e),
        }
    }
}

/// Top-level runner: fetch, extract, render, write.
pub fn run(params: &Params) -> Result<Extraction, RunError> {
    let extraction = match &params.source {
        Source::File(path) => scrape::read_file(path),
        Source::Url(url) => scrape::read_url(url),
    }
    .map_err(RunError::Scrape)?;

    let contents = export::render(&extraction.readings, params.format, params.include_headers)
        .map_err(RunError::Render)?;
    file::write_output(params.out.as_deref(), &contents).map_err(RunError::Write)?;

    info!(
        "{} readings, {} gateways, {} rows skipped",
        extraction.readings.len(),
        extraction.readings.iter().map(|r| r.gateways().len()).sum::<usize>(),
        extraction.skipped.len()
    );
    Ok(extraction)
}
