// src/csv.rs
use std::io::{self, Write};

use crate::types::{Gateway, Reading};

/// One row per (reading, gateway) pair.
pub const HEADERS: [&str; 19] = [
    "Id", "Time", "Temp", "Humidity", "Light", "PM25", "PM10", "Voltage", "Firmware",
    "Lat", "Lng", "Fcnt", "Gateway", "Distance", "RSSI", "LSNR", "Frequency", "SF", "CR",
];

/* ---------------- Flattening ---------------- */

fn flat_row(r: &Reading, g: &Gateway) -> Vec<String> {
    vec![
        r.sensor_id.clone(),
        r.time.format("%Y-%m-%d %H:%M:%S").to_string(),
        r.temperature.to_string(),
        r.humidity.to_string(),
        r.light.to_string(),
        r.pm25.to_string(),
        r.pm10.to_string(),
        r.voltage.to_string(),
        r.firmware.clone(),
        r.position.lat.to_string(),
        r.position.lng.to_string(),
        r.fcnt.to_string(),
        g.name.clone(),
        g.distance_km.map(|d| d.to_string()).unwrap_or_default(),
        g.rssi.to_string(),
        g.lsnr.to_string(),
        g.radio.frequency.to_string(),
        g.radio.sf.clone(),
        g.radio.cr.clone(),
    ]
}

/// Readings repeated once per gateway, primary gateway first.
pub fn reading_rows(readings: &[Reading]) -> Vec<Vec<String>> {
    readings
        .iter()
        .flat_map(|r| r.gateways().iter().map(move |g| flat_row(r, g)))
        .collect()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full export text for `readings`.
/// - `include_headers`: whether to emit the header line
/// - `sep`: field separator
pub fn to_export_string(readings: &[Reading], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &HEADERS, sep);
    }
    for row in reading_rows(readings) {
        let _ = write_row(&mut buf, &row, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
