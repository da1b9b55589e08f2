// src/specs/reading.rs
//! Full reading rows.
//!
//! Column layout of the dashboard table (16 data cells):
//!
//! ```text
//!  0 sensor id        4 light   (unused)    8 firmware        11..15 gateway
//!  1 time             5 pm2.5   (unused)    9 position link
//!  2 temperature °C   6 pm10    (unused)   10 frame counter
//!  3 humidity %       7 voltage V
//! ```

use scraper::ElementRef;

use crate::core::html::{link_text, text_of};
use crate::types::Reading;
use super::coerce::{self, FieldError, HUMIDITY, TEMPERATURE, VOLTAGE};
use super::gateway::decode_gateway;
use super::ident::resolve_id;

pub const READING_CELLS: usize = 16;

/// Decode one reading row. Either every field parses or the row is rejected;
/// there is no half-filled `Reading`.
pub fn decode_reading(cells: &[ElementRef<'_>; READING_CELLS]) -> Result<Reading, FieldError> {
    let [id, time, temp, humidity, _light, _pm25, _pm10, voltage, firmware, position, fcnt, gateway @ ..] = cells;

    let sensor_id = resolve_id(*id);
    let time = coerce::timestamp(&text_of(*time))?;
    let temperature = TEMPERATURE.value(&text_of(*temp))?;
    let humidity = HUMIDITY.value(&text_of(*humidity))?;
    let voltage = VOLTAGE.value(&text_of(*voltage))?;
    let firmware = text_of(*firmware);
    let position = coerce::position(&link_text(*position).unwrap_or_default())?;
    let fcnt = coerce::integer("fcnt", &text_of(*fcnt))?;
    let primary = decode_gateway(gateway)?;

    Ok(Reading::new(sensor_id, time, temperature, humidity, voltage, firmware, position, fcnt, primary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::test_cells;
    use crate::types::{Position, RadioSettings};
    use chrono::NaiveDate;
    use scraper::Html;

    const GOOD: [&str; 16] = [
        "242",
        "2019-12-05 21:19:33",
        "6.875&deg;C",
        "107.250%",
        "0", "0", "0",
        "3.370V",
        "v2",
        r#" <a href="http://www.openstreetmap.org/?mlat=60.430900&amp;mlon=5.2325101">60.430900 5.2325101</a>"#,
        "28357",
        r#"<a href="https://www.openstreetmap.org/?mlat=60.431778&amp;mlon=5.231865">florvaag-1</a>"#,
        "0.104km",
        "-47",
        "9.5",
        "868.5MHz,SF9BW125,4/5CR",
    ];

    fn row(cells: [&str; 16]) -> Html {
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        Html::parse_document(&format!("<table><tr>{tds}</tr></table>"))
    }

    fn decode(doc: &Html) -> Result<Reading, FieldError> {
        let cells = test_cells(doc);
        decode_reading(&cells.try_into().unwrap())
    }

    fn with(i: usize, text: &'static str) -> [&'static str; 16] {
        let mut cells = GOOD;
        cells[i] = text;
        cells
    }

    #[test]
    fn decodes_dashboard_row() {
        let r = decode(&row(GOOD)).unwrap();
        let time = NaiveDate::from_ymd_opt(2019, 12, 5).and_then(|d| d.and_hms_opt(21, 19, 33)).unwrap();

        assert_eq!(r.sensor_id, "242");
        assert_eq!(r.time, time);
        assert_eq!(r.temperature, 6.875);
        assert_eq!(r.humidity, 107.25);
        assert_eq!(r.voltage, 3.37);
        assert_eq!(r.firmware, "v2");
        assert_eq!(r.position, Position { lat: 60.4309, lng: 5.2325101 });
        assert_eq!(r.fcnt, 28357);
        assert_eq!((r.light, r.pm25, r.pm10), (0.0, 0.0, 0.0));

        let g = r.primary_gateway();
        assert_eq!(r.gateways().len(), 1);
        assert_eq!(g.name, "florvaag-1");
        assert_eq!(g.distance_km, Some(0.104));
        assert_eq!(g.radio, RadioSettings { frequency: 868.5, sf: s!("SF9BW125"), cr: s!("4/5CR") });
    }

    #[test]
    fn linked_sensor_id() {
        let r = decode(&row(with(0, r#" <a href="/sensor/242">242</a>"#))).unwrap();
        assert_eq!(r.sensor_id, "242");
    }

    #[test]
    fn missing_id_does_not_reject_row() {
        let r = decode(&row(with(0, ""))).unwrap();
        assert_eq!(r.sensor_id, "");
    }

    #[test]
    fn bad_time_rejects_row() {
        let err = decode(&row(with(1, "yesterday"))).unwrap_err();
        assert!(matches!(err, FieldError::Timestamp { .. }));
    }

    #[test]
    fn bad_numbers_reject_row() {
        assert!(matches!(decode(&row(with(2, "warm"))), Err(FieldError::MissingUnit { field: "temperature", .. })));
        assert!(matches!(decode(&row(with(3, "n/a%"))), Err(FieldError::Number { field: "humidity", .. })));
        assert!(matches!(decode(&row(with(7, "3.370"))), Err(FieldError::MissingUnit { field: "voltage", .. })));
        assert!(matches!(decode(&row(with(10, "many"))), Err(FieldError::Integer { field: "fcnt", .. })));
    }

    #[test]
    fn position_needs_a_link() {
        let err = decode(&row(with(9, "60.430900 5.2325101"))).unwrap_err();
        assert!(matches!(err, FieldError::Position { .. }));
    }

    #[test]
    fn single_coordinate_keeps_the_row() {
        let r = decode(&row(with(9, r#"<a href="/map">60.43</a>"#))).unwrap();
        assert_eq!(r.position, Position { lat: 60.43, lng: 60.43 });
    }

    #[test]
    fn bad_primary_gateway_rejects_row() {
        assert!(matches!(decode(&row(with(13, "loud"))), Err(FieldError::Number { field: "rssi", .. })));
    }

    #[test]
    fn ignored_columns_may_hold_anything() {
        let mut cells = GOOD;
        cells[4] = "dark";
        cells[5] = "";
        cells[6] = "-";
        assert!(decode(&row(cells)).is_ok());
    }
}
