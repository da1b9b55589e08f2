// src/specs/mod.rs
//! # Dashboard scraping "specs"
//!
//! This module knows **where the data lives in the dashboard markup** and how
//! to turn it into typed records. One file per concern:
//!
//! - `rows`: what kind of row a `tr` is (header, full reading, gateway
//!   continuation, or something unexpected).
//! - `reading`: the 16-column reading row.
//! - `gateway`: the 5 gateway columns shared by both row kinds.
//! - `ident`: the sensor-id cell, which comes in several shapes.
//! - `coerce`: cell text → numbers, timestamps, positions, radio settings.
//!
//! ## What does **not** live here
//! - Finding the table in the document (`core::html`).
//! - Walking the rows and stitching continuations onto readings (`scrape`).
//! - Fetching pages, logging setup, export formats.
//!
//! ## Conventions
//! - Decoders take fixed-size cell arrays; the row shape is settled once, in
//!   `rows::classify`.
//! - A decoder either returns a complete value or a `coerce::FieldError`;
//!   the caller decides to skip the row.
//! - Sporadically blank cells (sensor id, gateway name, distance) fall back to
//!   empty/absent values instead of failing.

pub mod coerce;
pub mod gateway;
pub mod ident;
pub mod reading;
pub mod rows;

pub use coerce::FieldError;
pub use gateway::decode_gateway;
pub use ident::resolve_id;
pub use reading::decode_reading;
pub use rows::{classify, RowKind};

/// `td` cells of the first row of the first table in `doc`.
#[cfg(test)]
pub(crate) fn test_cells(doc: &scraper::Html) -> Vec<scraper::ElementRef<'_>> {
    use crate::core::html::{child_elements, locate_table};

    let row = locate_table(doc)
        .and_then(|body| child_elements(body).next())
        .expect("fixture has a row");
    rows::data_cells(row)
}
