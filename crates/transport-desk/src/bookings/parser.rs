use super::domain::{BookingRecord, DEFAULT_DIRECTION, PICKUP_TIME_TBC};
use super::loader::LoadError;
use super::normalizer::{clean_header, parse_coordinate, title_case};
use csv::StringRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) const REQUIRED_COLUMNS: [&str; 5] = ["Code", "Name", "Route", "Pickup", "MapLink"];

/// Raw sheet row. Every cell is read as text; optional columns may be absent
/// from the header entirely.
#[derive(Debug, Deserialize)]
pub(crate) struct BookingRow {
    #[serde(rename = "Code", default, deserialize_with = "empty_string_as_none")]
    pub(crate) code: Option<String>,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Route", default)]
    route: String,
    #[serde(rename = "Pickup", default)]
    pickup: String,
    #[serde(rename = "MapLink", default, deserialize_with = "empty_string_as_none")]
    map_link: Option<String>,
    #[serde(rename = "Direction", default, deserialize_with = "empty_string_as_none")]
    direction: Option<String>,
    #[serde(rename = "PickupTime", default, deserialize_with = "empty_string_as_none")]
    pickup_time: Option<String>,
    #[serde(rename = "Lat", default, deserialize_with = "empty_string_as_none")]
    lat: Option<String>,
    #[serde(rename = "Lon", default, deserialize_with = "empty_string_as_none")]
    lon: Option<String>,
}

impl BookingRow {
    /// Finish the row under an already normalized (possibly inherited) code.
    pub(crate) fn into_record(self, code: String) -> BookingRecord {
        let direction = self
            .direction
            .as_deref()
            .map(title_case)
            .unwrap_or_else(|| DEFAULT_DIRECTION.to_string());
        let pickup_time = self
            .pickup_time
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| PICKUP_TIME_TBC.to_string());

        BookingRecord {
            code,
            name: self.name.trim().to_string(),
            route: self.route.trim().to_string(),
            pickup: self.pickup.trim().to_string(),
            pickup_time,
            direction,
            map_link: self.map_link.map(|link| link.trim().to_string()),
            lat: parse_coordinate(self.lat.as_deref()),
            lon: parse_coordinate(self.lon.as_deref()),
        }
    }
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<BookingRow>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: StringRecord = csv_reader.headers()?.iter().map(clean_header).collect();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    // Short rows are padded so missing trailing cells read as blanks.
    let width = headers.len();
    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let mut record = record?;
        while record.len() < width {
            record.push_field("");
        }
        rows.push(record.deserialize::<BookingRow>(Some(&headers))?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
