// src/specs/coerce.rs
//! Cell text → typed values.
//!
//! Every quantity on the dashboard is printed with its unit glued on
//! (`6.875°C`, `0.104km`, `868.5MHz`). The units live in one table below;
//! stripping checks that the expected suffix is really there, so a change in
//! the page's unit format fails the row instead of silently producing a wrong
//! number.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use chrono::NaiveDateTime;

use crate::types::{Position, RadioSettings};

/// Source timestamp format, local time without zone.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What to do when a cell is too short to hold a value plus its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnBlank {
    /// Row-local error.
    Reject,
    /// Field is absent (`None`).
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub field: &'static str,
    pub suffix: &'static str,
    pub on_blank: OnBlank,
}

pub const TEMPERATURE: Unit = Unit { field: "temperature", suffix: "°C", on_blank: OnBlank::Reject };
pub const HUMIDITY: Unit = Unit { field: "humidity", suffix: "%", on_blank: OnBlank::Reject };
pub const VOLTAGE: Unit = Unit { field: "voltage", suffix: "V", on_blank: OnBlank::Reject };
pub const DISTANCE: Unit = Unit { field: "distance", suffix: "km", on_blank: OnBlank::Absent };
pub const FREQUENCY: Unit = Unit { field: "frequency", suffix: "MHz", on_blank: OnBlank::Reject };

pub const UNITS: [Unit; 5] = [TEMPERATURE, HUMIDITY, VOLTAGE, DISTANCE, FREQUENCY];

impl Unit {
    /// Cut the unit off `text`, leaving the number part.
    pub fn strip<'t>(&self, text: &'t str) -> Result<&'t str, FieldError> {
        let t = text.trim();
        t.strip_suffix(self.suffix)
            .map(str::trim_end)
            .ok_or_else(|| FieldError::MissingUnit {
                field: self.field,
                expected: self.suffix,
                text: s!(t),
            })
    }

    /// Parse `text`, honouring the blank policy.
    pub fn parse(&self, text: &str) -> Result<Option<f64>, FieldError> {
        let t = text.trim();
        if self.on_blank == OnBlank::Absent && t.chars().count() <= self.suffix.chars().count() {
            return Ok(None);
        }
        number(self.field, self.strip(t)?).map(Some)
    }

    /// Parse `text`; a blank cell is an error even for `OnBlank::Absent` units.
    pub fn value(&self, text: &str) -> Result<f64, FieldError> {
        self.parse(text)?.ok_or(FieldError::Blank { field: self.field })
    }
}

#[derive(Debug)]
pub enum FieldError {
    MissingUnit { field: &'static str, expected: &'static str, text: String },
    Blank { field: &'static str },
    Number { field: &'static str, text: String, source: ParseFloatError },
    Integer { field: &'static str, text: String, source: ParseIntError },
    Timestamp { text: String, source: chrono::ParseError },
    /// No coordinate token at all
    Position { text: String },
    /// Needs exactly "<freq>MHz,<sf>,<cr>"
    Radio { text: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUnit { field, expected, text } => {
                write!(f, "{field}: expected unit '{expected}' in '{text}'")
            }
            Self::Blank { field } => write!(f, "{field}: cell is blank"),
            Self::Number { field, text, source } => write!(f, "{field}: '{text}' is not a number ({source})"),
            Self::Integer { field, text, source } => write!(f, "{field}: '{text}' is not an integer ({source})"),
            Self::Timestamp { text, source } => write!(f, "time: '{text}' is not {TIME_FORMAT} ({source})"),
            Self::Position { text } => write!(f, "position: '{text}' has no coordinates"),
            Self::Radio { text } => write!(f, "radio settings: '{text}' is not '<freq>MHz,<sf>,<cr>'"),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Number { source, .. } => Some(source),
            Self::Integer { source, .. } => Some(source),
            Self::Timestamp { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Signed decimal, e.g. RSSI `-47` or LSNR `9.5`.
pub fn number(field: &'static str, text: &str) -> Result<f64, FieldError> {
    let t = text.trim();
    t.parse::<f64>()
        .map_err(|source| FieldError::Number { field, text: s!(t), source })
}

pub fn integer(field: &'static str, text: &str) -> Result<u32, FieldError> {
    let t = text.trim();
    t.parse::<u32>()
        .map_err(|source| FieldError::Integer { field, text: s!(t), source })
}

pub fn timestamp(text: &str) -> Result<NaiveDateTime, FieldError> {
    let t = text.trim();
    NaiveDateTime::parse_from_str(t, TIME_FORMAT)
        .map_err(|source| FieldError::Timestamp { text: s!(t), source })
}

/// "60.430900 5.2325101": first token is latitude, last is longitude.
/// Anything in between (stray separators) is ignored. A lone token is both.
pub fn position(text: &str) -> Result<Position, FieldError> {
    let mut tokens = text.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(FieldError::Position { text: s!(text.trim()) });
    };
    let last = tokens.last().unwrap_or(first);
    Ok(Position {
        lat: number("latitude", first)?,
        lng: number("longitude", last)?,
    })
}

/// "868.5MHz,SF9BW125,4/5CR"
pub fn radio_settings(text: &str) -> Result<RadioSettings, FieldError> {
    let parts: Vec<&str> = text.trim().split(',').collect();
    let [freq, sf, cr] = parts.as_slice() else {
        return Err(FieldError::Radio { text: s!(text.trim()) });
    };
    Ok(RadioSettings {
        frequency: FREQUENCY.value(freq)?,
        sf: s!(sf.trim()),
        cr: s!(cr.trim()),
    })
}
