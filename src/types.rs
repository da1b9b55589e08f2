// src/types.rs
//! Typed records decoded from the dashboard table.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// One sensor transmission.
///
/// A reading is created together with the gateway that relayed it (the
/// primary gateway), so the gateway list is never empty. Continuation rows
/// further down the table may append more gateways; nothing else changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub sensor_id: String,
    pub time: NaiveDateTime,
    /// °C
    pub temperature: f64,
    /// %
    pub humidity: f64,
    pub light: f64,
    pub pm25: f64,
    pub pm10: f64,
    /// Battery, V
    pub voltage: f64,
    pub firmware: String,
    pub position: Position,
    /// Uplink frame counter
    pub fcnt: u32,
    gateways: Vec<Gateway>,
}

impl Reading {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sensor_id: String,
        time: NaiveDateTime,
        temperature: f64,
        humidity: f64,
        voltage: f64,
        firmware: String,
        position: Position,
        fcnt: u32,
        primary: Gateway,
    ) -> Self {
        Self {
            sensor_id,
            time,
            temperature,
            humidity,
            light: 0.0,
            pm25: 0.0,
            pm10: 0.0,
            voltage,
            firmware,
            position,
            fcnt,
            gateways: vec![primary],
        }
    }

    /// Gateways in the order they were reported, primary first.
    pub fn gateways(&self) -> &[Gateway] {
        &self.gateways
    }

    pub fn primary_gateway(&self) -> &Gateway {
        &self.gateways[0]
    }

    /// Continuation rows only ever append.
    pub(crate) fn push_gateway(&mut self, gateway: Gateway) {
        self.gateways.push(gateway);
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID={}", self.sensor_id)?;
        writeln!(f, "Time={}", self.time.format("%Y-%m-%dT%H:%M:%S"))?;
        writeln!(f, "Temp={}", self.temperature)?;
        writeln!(f, "Humidity={}", self.humidity)?;
        writeln!(f, "Light={}", self.light)?;
        writeln!(f, "PM25={}", self.pm25)?;
        writeln!(f, "PM10={}", self.pm10)?;
        writeln!(f, "Voltage={}", self.voltage)?;
        writeln!(f, "Firmware={}", self.firmware)?;
        writeln!(f, "Position={}", self.position)?;
        writeln!(f, "Fcnt={}", self.fcnt)?;
        write!(f, "Gateways:")?;
        for (i, g) in self.gateways.iter().enumerate() {
            write!(f, "\n  {i} {g}")?;
        }
        Ok(())
    }
}

/// Latitude/longitude in decimal degrees.
///
/// `{0, 0}` looks exactly like "never set"; fields that may be missing are
/// wrapped in `Option` instead of relying on the zero value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lat, self.lng)
    }
}

/// A LoRaWAN gateway that received a reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gateway {
    pub name: String,
    /// Never filled: the page only carries it inside a map link.
    pub position: Option<Position>,
    /// km; `None` when the cell was blank.
    pub distance_km: Option<f64>,
    /// dBm
    pub rssi: f64,
    /// dB
    pub lsnr: f64,
    pub radio: RadioSettings,
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name={}", self.name)?;
        match &self.position {
            Some(p) => write!(f, " Position={p}")?,
            None => write!(f, " Position=-")?,
        }
        match self.distance_km {
            Some(d) => write!(f, " Distance={d}")?,
            None => write!(f, " Distance=-")?,
        }
        write!(f, " RSSI={} LSNR={} Radiosettings={}", self.rssi, self.lsnr, self.radio)
    }
}

/// Radio parameters of one transmission-to-gateway link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioSettings {
    /// MHz
    pub frequency: f64,
    /// Spreading factor + bandwidth, e.g. `SF9BW125`
    pub sf: String,
    /// Coding rate, e.g. `4/5CR`
    pub cr: String,
}

impl fmt::Display for RadioSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency={} Sf={} Cr={}", self.frequency, self.sf, self.cr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn gateway(name: &str) -> Gateway {
        Gateway {
            name: s!(name),
            position: None,
            distance_km: Some(0.104),
            rssi: -47.0,
            lsnr: 9.5,
            radio: RadioSettings { frequency: 868.5, sf: s!("SF9BW125"), cr: s!("4/5CR") },
        }
    }

    fn reading() -> Reading {
        let time = NaiveDate::from_ymd_opt(2019, 12, 5)
            .and_then(|d| d.and_hms_opt(21, 19, 33))
            .unwrap();
        Reading::new(
            s!("242"), time, 6.875, 107.25, 3.37, s!("v2"),
            Position { lat: 60.4309, lng: 5.2325101 }, 28357,
            gateway("florvaag-1"),
        )
    }

    #[test]
    fn new_reading_starts_with_primary_gateway() {
        let r = reading();
        assert_eq!(r.gateways().len(), 1);
        assert_eq!(r.primary_gateway().name, "florvaag-1");
        assert_eq!((r.light, r.pm25, r.pm10), (0.0, 0.0, 0.0));
    }

    #[test]
    fn push_gateway_appends_in_order() {
        let mut r = reading();
        r.push_gateway(gateway("second"));
        r.push_gateway(gateway("third"));
        let names: Vec<_> = r.gateways().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["florvaag-1", "second", "third"]);
        assert_eq!(r.primary_gateway().name, "florvaag-1");
    }

    #[test]
    fn display_lists_gateways() {
        let text = reading().to_string();
        assert!(text.starts_with("ID=242\nTime=2019-12-05T21:19:33\n"));
        assert!(text.contains("Position=60.4309:5.2325101"));
        assert!(text.contains(
            "\n  0 Name=florvaag-1 Position=- Distance=0.104 RSSI=-47 LSNR=9.5 \
             Radiosettings=Frequency=868.5 Sf=SF9BW125 Cr=4/5CR"
        ));
    }
}
