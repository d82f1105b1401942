use super::dataset::Dataset;
use super::normalizer::normalize_code;
use super::parser;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reasons a bookings source could not be turned into a [`Dataset`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("bookings source '{}' not found", path.display())]
    SourceNotFound { path: PathBuf },
    #[error("bookings source is missing required column '{column}'")]
    MissingColumn { column: String },
    #[error("failed to read bookings source: {0}")]
    Io(#[source] io::Error),
    #[error("invalid bookings CSV data: {0}")]
    Csv(#[from] csv::Error),
}

pub struct DatasetLoader;

impl DatasetLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io(err),
        })?;

        let dataset = Self::from_reader(file)?;
        info!(
            source = %path.display(),
            records = dataset.len(),
            skipped = dataset.skipped_rows(),
            "bookings loaded"
        );
        Ok(dataset)
    }

    /// Parse and normalize a sheet. Blank codes inherit the code above them,
    /// the way merged cells read in the spreadsheet the sheet came from.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
        let rows = parser::parse_rows(reader)?;
        let mut records = Vec::with_capacity(rows.len());
        let mut current_code: Option<String> = None;
        let mut skipped = 0;

        for (index, row) in rows.into_iter().enumerate() {
            let own_code = row
                .code
                .as_deref()
                .map(normalize_code)
                .filter(|code| !code.is_empty());
            if own_code.is_some() {
                current_code = own_code;
            }

            let Some(code) = current_code.clone() else {
                // header is line 1
                warn!(line = index + 2, "skipping booking row with no code to inherit");
                skipped += 1;
                continue;
            };
            records.push(row.into_record(code));
        }

        Ok(Dataset::new(records).with_skipped_rows(skipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::BadgeCategory;
    use std::io::Cursor;

    fn codes(dataset: &Dataset) -> Vec<&str> {
        dataset.iter().map(|record| record.code.as_str()).collect()
    }

    #[test]
    fn blank_codes_inherit_previous_code() {
        let csv = "Code,Name,Route,Pickup,MapLink\nA,Alice,R1,Gate,\n,Bob,R1,Gate,\nC,Cara,R2,Lobby,\n";
        let dataset = DatasetLoader::from_reader(Cursor::new(csv)).expect("load");
        assert_eq!(codes(&dataset), ["A", "A", "C"]);
    }

    #[test]
    fn whitespace_only_codes_count_as_blank() {
        let csv = "Code,Name,Route,Pickup,MapLink\n ham44 ,Alice,R1,Gate,\n   ,Bob,R1,Gate,\n";
        let dataset = DatasetLoader::from_reader(Cursor::new(csv)).expect("load");
        assert_eq!(codes(&dataset), ["HAM44", "HAM44"]);
    }

    #[test]
    fn rows_before_first_code_are_skipped() {
        let csv = "Code,Name,Route,Pickup,MapLink\n,Orphan,R1,Gate,\nB,Ben,R1,Gate,\n";
        let dataset = DatasetLoader::from_reader(Cursor::new(csv)).expect("load");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].name, "Ben");
        assert_eq!(dataset.skipped_rows(), 1);
    }

    #[test]
    fn forward_filled_rows_are_not_counted_as_skipped() {
        let csv = "Code,Name,Route,Pickup,MapLink\nA,Alice,R1,Gate,\n,Bob,R1,Gate,\n";
        let dataset = DatasetLoader::from_reader(Cursor::new(csv)).expect("load");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.skipped_rows(), 0);
    }

    #[test]
    fn blank_direction_cell_reads_as_both() {
        let csv = "Code,Name,Route,Pickup,MapLink,Direction\n\
A,Alice,R1,Gate,,\n\
A,Bob,R1,Gate,,   \n\
A,Cara,R1,Gate,,from venue\n";
        let dataset = DatasetLoader::from_reader(Cursor::new(csv)).expect("load");
        let records = dataset.records();
        assert_eq!(records[0].direction, "Both");
        assert_eq!(records[0].badge(), BadgeCategory::Both);
        assert_eq!(records[1].direction, "Both");
        assert_eq!(records[2].badge(), BadgeCategory::Return);
    }

    #[test]
    fn missing_optional_columns_get_defaults() {
        let csv = "Code,Name,Route,Pickup,MapLink\nA,Alice,R1,Gate,\nB,Ben,R2,Lobby,https://maps.example/b\n";
        let dataset = DatasetLoader::from_reader(Cursor::new(csv)).expect("load");
        assert!(dataset.iter().all(|record| record.direction == "Both"));
        assert!(dataset.iter().all(|record| record.pickup_time == "TBC"));
        assert!(dataset
            .iter()
            .all(|record| record.lat.is_none() && record.lon.is_none()));
    }

    #[test]
    fn bad_coordinate_only_affects_its_row() {
        let csv = "Code,Name,Route,Pickup,MapLink,Lat,Lon\n\
A,Alice,R1,Gate,,51.50,-0.12\n\
A,Bob,R1,Gate,,somewhere,-0.13\n\
A,Cara,R1,Gate,,51.52,-0.14\n";
        let dataset = DatasetLoader::from_reader(Cursor::new(csv)).expect("load");
        let records = dataset.records();
        assert_eq!(records[0].lat, Some(51.50));
        assert_eq!(records[1].lat, None);
        assert_eq!(records[1].lon, Some(-0.13));
        assert_eq!(records[2].lat, Some(51.52));
    }

    #[test]
    fn from_path_reports_missing_source() {
        let error = DatasetLoader::from_path("./does-not-exist.csv").expect_err("missing file");
        match error {
            LoadError::SourceNotFound { path } => {
                assert_eq!(path, PathBuf::from("./does-not-exist.csv"))
            }
            other => panic!("expected source not found, got {other:?}"),
        }
    }

    #[test]
    fn malformed_csv_is_an_error_not_a_panic() {
        let csv = b"Code,Name,Route,Pickup,MapLink\nA,\xff\xfe,R1,Gate,\n";
        let error = DatasetLoader::from_reader(&csv[..]).expect_err("invalid utf-8");
        assert!(matches!(error, LoadError::Csv(_)));
    }
}
