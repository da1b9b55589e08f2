// src/specs/rows.rs
//! Row shapes of the dashboard table.

use scraper::ElementRef;

use crate::core::html::child_elements;
use super::gateway::GATEWAY_CELLS;
use super::reading::READING_CELLS;

/// What a `tr` is, judged purely by its cells.
#[derive(Debug, Clone, PartialEq)]
pub enum RowKind<'a> {
    /// `th` row, or a row without any `td`.
    Header,
    /// An extra gateway for the reading above it.
    GatewayContinuation([ElementRef<'a>; GATEWAY_CELLS]),
    FullReading([ElementRef<'a>; READING_CELLS]),
    Unrecognized { cells: usize },
}

/// `td` children of `row` in order. `th` cells used as separators and any
/// other markup are dropped.
pub fn data_cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    child_elements(row).filter(|c| c.value().name() == "td").collect()
}

pub fn classify(row: ElementRef<'_>) -> RowKind<'_> {
    if child_elements(row).next().is_some_and(|c| c.value().name() == "th") {
        return RowKind::Header;
    }

    let cells = data_cells(row);
    if cells.is_empty() {
        return RowKind::Header;
    }
    if let Ok(gateway) = <[ElementRef<'_>; GATEWAY_CELLS]>::try_from(cells.as_slice()) {
        return RowKind::GatewayContinuation(gateway);
    }
    if let Ok(reading) = <[ElementRef<'_>; READING_CELLS]>::try_from(cells.as_slice()) {
        return RowKind::FullReading(reading);
    }
    RowKind::Unrecognized { cells: cells.len() }
}
