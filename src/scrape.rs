// src/scrape.rs
//! Extraction driver: table rows → `Reading`s.
//!
//! Rows are walked top to bottom. A full reading row starts a new reading;
//! gateway continuation rows right below it add gateways to that reading.
//! A row that fails to decode is skipped and reported, the rest of the page
//! still comes through.

use std::{fmt, fs::File, io::Read, path::Path};

use log::{debug, info, warn};
use scraper::{ElementRef, Html};

use crate::{
    core::{html::{child_elements, locate_table, text_of}, net, sanitize::preview},
    error::ScrapeError,
    specs::{classify, decode_gateway, decode_reading, FieldError, RowKind},
    types::{Gateway, Reading},
};

/// Characters of row text kept in skip diagnostics.
const ROW_PREVIEW: usize = 160;

/// Why a single row contributed nothing.
#[derive(Debug)]
pub enum RowError {
    Field(FieldError),
    /// Gateway continuation with no reading above it.
    OrphanContinuation,
    UnrecognizedShape { cells: usize },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(e) => write!(f, "{e}"),
            Self::OrphanContinuation => write!(f, "gateway row before any reading"),
            Self::UnrecognizedShape { cells } => write!(f, "unexpected number of cells: {cells}"),
        }
    }
}

impl std::error::Error for RowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldError> for RowError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

#[derive(Debug)]
pub struct SkippedRow {
    /// Index among the table's `tr` rows, header included.
    pub row: usize,
    /// Row text, whitespace-collapsed and shortened.
    pub content: String,
    pub reason: RowError,
}

/// Everything one page yielded.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Document order.
    pub readings: Vec<Reading>,
    pub skipped: Vec<SkippedRow>,
}

impl Extraction {
    pub fn into_readings(self) -> Vec<Reading> {
        self.readings
    }

    fn skip(&mut self, row: usize, tr: ElementRef<'_>, reason: RowError) {
        let content = preview(&text_of(tr), ROW_PREVIEW);
        warn!("row {row} skipped ({reason}): {content}");
        self.skipped.push(SkippedRow { row, content, reason });
    }
}

/// Extract readings from an already parsed document.
/// No table at all is an empty result, not an error.
pub fn extract(doc: &Html) -> Extraction {
    let mut out = Extraction::default();

    let Some(body) = locate_table(doc) else {
        debug!("no table in document");
        return out;
    };

    let rows = child_elements(body).filter(|el| el.value().name() == "tr");
    for (i, tr) in rows.enumerate() {
        let result = match classify(tr) {
            RowKind::Header => continue,
            RowKind::GatewayContinuation(cells) => {
                decode_gateway(&cells)
                    .map_err(RowError::from)
                    .and_then(|g| attach_gateway(&mut out.readings, g))
            }
            RowKind::FullReading(cells) => decode_reading(&cells)
                .map(|r| out.readings.push(r))
                .map_err(RowError::from),
            RowKind::Unrecognized { cells } => Err(RowError::UnrecognizedShape { cells }),
        };
        if let Err(reason) = result {
            out.skip(i, tr, reason);
        }
    }

    info!("extracted {} readings, skipped {} rows", out.readings.len(), out.skipped.len());
    out
}

/// Continuations belong to the nearest reading above, never to an earlier one.
fn attach_gateway(readings: &mut [Reading], gateway: Gateway) -> Result<(), RowError> {
    let last = readings.last_mut().ok_or(RowError::OrphanContinuation)?;
    last.push_gateway(gateway);
    Ok(())
}

pub fn parse_str(html: &str) -> Vec<Reading> {
    extract(&Html::parse_document(html)).into_readings()
}

/// Whole document from `r`. Only a failed read is fatal.
pub fn parse<R: Read>(mut r: R) -> Result<Extraction, ScrapeError> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    Ok(parse_bytes(&buf))
}

/// Invalid UTF-8 becomes U+FFFD; a damaged cell then fails its own row only.
pub fn parse_bytes(bytes: &[u8]) -> Extraction {
    let text = String::from_utf8_lossy(bytes);
    extract(&Html::parse_document(&text))
}

pub fn read_file(path: &Path) -> Result<Extraction, ScrapeError> {
    debug!("reading {}", path.display());
    parse(File::open(path)?)
}

/// Download the dashboard page and extract it.
pub fn read_url(url: &str) -> Result<Extraction, ScrapeError> {
    let body = net::http_get(url)?;
    info!("fetched {url} ({} bytes)", body.len());
    Ok(parse_bytes(&body))
}
