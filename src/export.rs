// src/export.rs
//! Readings → output text in the requested format.

use crate::config::{consts::{CSV_SEP, TSV_SEP}, Format};
use crate::csv::to_export_string;
use crate::types::Reading;

pub fn render(readings: &[Reading], format: Format, include_headers: bool) -> Result<String, serde_json::Error> {
    let text = match format {
        Format::Text => {
            let mut s = s!();
            for r in readings {
                s.push_str(&r.to_string());
                s.push_str("\n\n");
            }
            s
        }
        Format::Json => {
            let mut s = serde_json::to_string_pretty(readings)?;
            s.push('\n');
            s
        }
        Format::Csv => to_export_string(readings, include_headers, CSV_SEP),
        Format::Tsv => to_export_string(readings, include_headers, TSV_SEP),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::parse_str;

    const PAGE: &str = r#"<table>
        <tr><td>242</td><td>2019-12-05 21:19:33</td><td>6.875°C</td><td>107.250%</td>
            <td>0</td><td>0</td><td>0</td><td>3.370V</td><td>v2</td>
            <td> <a href="/map">60.430900 5.2325101</a></td><td>28357</td>
            <td><a href="/gw">florvaag-1</a></td><td>0.104km</td><td>-47</td><td>9.5</td>
            <td>868.5MHz,SF9BW125,4/5CR</td></tr>
    </table>"#;

    #[test]
    fn json_is_an_array_of_readings() {
        let readings = parse_str(PAGE);
        let text = render(&readings, Format::Json, false).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v[0]["sensor_id"], "242");
        assert_eq!(v[0]["time"], "2019-12-05T21:19:33");
        assert_eq!(v[0]["fcnt"], 28357);
        assert_eq!(v[0]["gateways"][0]["name"], "florvaag-1");
        assert_eq!(v[0]["gateways"][0]["position"], serde_json::Value::Null);
        assert_eq!(v[0]["gateways"][0]["radio"]["sf"], "SF9BW125");
    }

    #[test]
    fn text_blocks_are_separated() {
        let readings = parse_str(PAGE);
        let text = render(&readings, Format::Text, false).unwrap();
        assert!(text.starts_with("ID=242\n"));
        assert!(text.ends_with("Cr=4/5CR\n\n"));
    }

    #[test]
    fn tabular_formats_use_their_separator() {
        let readings = parse_str(PAGE);
        assert!(render(&readings, Format::Tsv, true).unwrap().starts_with("Id\tTime\t"));
        assert!(render(&readings, Format::Csv, true).unwrap().starts_with("Id,Time,"));
    }

    #[test]
    fn nothing_to_render() {
        assert_eq!(render(&[], Format::Text, false).unwrap(), "");
        assert_eq!(render(&[], Format::Json, false).unwrap(), "[]\n");
    }
}
