// src/error.rs
//! Errors that abort a whole extraction.
//!
//! Row-level problems never end up here; see `scrape::RowError`.

use std::{fmt, io};

#[derive(Debug)]
pub enum ScrapeError {
    /// Reading the document (file, socket) failed
    Io(io::Error),
    /// URL is not something `core::net` can fetch
    Url { url: String, reason: &'static str },
    /// Server answered with something other than 200
    Http { status: String },
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read document: {e}"),
            Self::Url { url, reason } => write!(f, "cannot fetch '{url}': {reason}"),
            Self::Http { status } => write!(f, "HTTP error: {status}"),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Url { .. } | Self::Http { .. } => None,
        }
    }
}

impl From<io::Error> for ScrapeError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
