// src/specs/gateway.rs
//! Gateway columns: name, distance, RSSI, LSNR, radio settings.
//!
//! The same five columns close every reading row and make up the whole of a
//! continuation row.

use scraper::ElementRef;

use crate::core::html::{link_text, text_of};
use crate::types::Gateway;
use super::coerce::{self, FieldError, DISTANCE};

pub const GATEWAY_CELLS: usize = 5;

pub fn decode_gateway(cells: &[ElementRef<'_>; GATEWAY_CELLS]) -> Result<Gateway, FieldError> {
    let [name, distance, rssi, lsnr, radio] = *cells;

    Ok(Gateway {
        // Unlabelled link or no link at all: keep the row, lose the name.
        name: link_text(name).unwrap_or_default(),
        // TODO: lat/lng sit in the query string of the map link in this cell
        position: None,
        distance_km: DISTANCE.parse(&text_of(distance))?,
        rssi: coerce::number("rssi", &text_of(rssi))?,
        lsnr: coerce::number("lsnr", &text_of(lsnr))?,
        radio: coerce::radio_settings(&text_of(radio))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::test_cells;
    use crate::types::RadioSettings;
    use scraper::Html;

    fn row(cells: [&str; 5]) -> Html {
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        Html::parse_document(&format!("<table><tr>{tds}</tr></table>"))
    }

    fn decode(doc: &Html) -> Result<Gateway, FieldError> {
        let cells = test_cells(doc);
        decode_gateway(&cells.try_into().unwrap())
    }

    #[test]
    fn decodes_full_gateway() {
        let doc = row([
            r#"<a href="https://www.openstreetmap.org/?mlat=60.431778&amp;mlon=5.231865">florvaag-1</a>"#,
            "0.104km", "-47", "9.5", "868.5MHz,SF9BW125,4/5CR",
        ]);
        let g = decode(&doc).unwrap();
        assert_eq!(g, Gateway {
            name: s!("florvaag-1"),
            position: None,
            distance_km: Some(0.104),
            rssi: -47.0,
            lsnr: 9.5,
            radio: RadioSettings { frequency: 868.5, sf: s!("SF9BW125"), cr: s!("4/5CR") },
        });
    }

    #[test]
    fn short_distance_is_absent_not_error() {
        let doc = row(["<a>gw</a>", " - ", "-117", "-1", "868.5MHz,SF9BW125,4/5CR"]);
        let g = decode(&doc).unwrap();
        assert_eq!(g.distance_km, None);
        assert_eq!(g.lsnr, -1.0);
    }

    #[test]
    fn missing_link_gives_empty_name() {
        let doc = row(["<a></a>", "5.587km", "-117", "-1", "868.5MHz,SF9BW125,4/5CR"]);
        assert_eq!(decode(&doc).unwrap().name, "");
        let doc = row(["", "5.587km", "-117", "-1", "868.5MHz,SF9BW125,4/5CR"]);
        assert_eq!(decode(&doc).unwrap().name, "");
    }

    #[test]
    fn bad_signal_values_fail_the_row() {
        let doc = row(["<a>gw</a>", "1km", "strong", "9.5", "868.5MHz,SF9BW125,4/5CR"]);
        assert!(matches!(decode(&doc), Err(FieldError::Number { field: "rssi", .. })));
        let doc = row(["<a>gw</a>", "1km", "-47", "", "868.5MHz,SF9BW125,4/5CR"]);
        assert!(matches!(decode(&doc), Err(FieldError::Number { field: "lsnr", .. })));
        let doc = row(["<a>gw</a>", "1km", "-47", "9.5", "868.5MHz"]);
        assert!(matches!(decode(&doc), Err(FieldError::Radio { .. })));
    }

    #[test]
    fn malformed_distance_still_fails() {
        let doc = row(["<a>gw</a>", "far away", "-47", "9.5", "868.5MHz,SF9BW125,4/5CR"]);
        assert!(matches!(decode(&doc), Err(FieldError::MissingUnit { field: "distance", .. })));
    }
}
