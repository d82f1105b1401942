use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::bookings::{BookingService, Dataset, DatasetLoader};
use crate::config::BookingsConfig;

pub(super) const SHEET: &str = "\
Code,Name,Route,Pickup,MapLink,Direction,PickupTime,Lat,Lon
HAM44,Alice Hart,Coach A - City Loop,Main gate,https://maps.example/ham44,both,18:30,51.5072,-0.1276
,Bob Hart,Coach A - City Loop,Main gate,https://maps.example/ham44,To Venue,18:30,51.5072,-0.1276
,Cara Hart,Coach A - City Loop,Main gate,,From Venue,,not-a-lat,-0.1276
KEW12,Dev Patel,Coach B - Riverside,Station car park,,to venue,19:00,,
MAX07,Eve Moss,Coach C - Hill Road,Library steps,https://maps.example/max07,Return,,,
";

pub(super) fn dataset() -> Dataset {
    DatasetLoader::from_reader(Cursor::new(SHEET)).expect("fixture loads")
}

/// A sheet written to a per-test temp path; removed on drop.
pub(super) struct TempSheet {
    path: PathBuf,
}

impl TempSheet {
    pub(super) fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "transport-desk-{}-{}.csv",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).expect("write temp sheet");
        Self { path }
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }

    pub(super) fn rewrite(&self, contents: &str) {
        fs::write(&self.path, contents).expect("rewrite temp sheet");
    }

    pub(super) fn remove(&self) {
        let _ = fs::remove_file(&self.path);
    }
}

impl Drop for TempSheet {
    fn drop(&mut self) {
        self.remove();
    }
}

pub(super) fn config_for(path: &Path) -> BookingsConfig {
    BookingsConfig {
        source: path.to_path_buf(),
        mailbox: "transport@yourteam.com".to_string(),
    }
}

pub(super) fn service_for(path: &Path) -> Arc<BookingService> {
    Arc::new(BookingService::new(&config_for(path)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
