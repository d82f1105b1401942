use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::amendment::{AmendmentRequest, AmendmentView};
use super::cache::DatasetCache;
use super::dataset::Dataset;
use super::finder::{BookingFinder, BookingMatch};
use super::loader::LoadError;
use crate::config::BookingsConfig;

/// Lookup facade over one configured bookings source.
pub struct BookingService {
    source: PathBuf,
    mailbox: String,
    cache: Arc<DatasetCache>,
}

impl BookingService {
    pub fn new(config: &BookingsConfig) -> Self {
        Self::with_cache(config, Arc::new(DatasetCache::default()))
    }

    pub fn with_cache(config: &BookingsConfig, cache: Arc<DatasetCache>) -> Self {
        Self {
            source: config.source.clone(),
            mailbox: config.mailbox.clone(),
            cache,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The cached dataset, loading it on first use.
    pub fn dataset(&self) -> Result<Arc<Dataset>, LoadError> {
        self.cache.get_or_load(&self.source)
    }

    pub fn lookup(&self, query: &str) -> Result<LookupOutcome, LoadError> {
        let dataset = self.dataset()?;
        let group = BookingFinder::find_group(&dataset, query);
        let amendment =
            AmendmentRequest::for_group(&group, &self.mailbox).map(|request| request.view());

        debug!(
            code = %group.code,
            passengers = group.passenger_count(),
            "booking lookup"
        );

        Ok(LookupOutcome {
            found: !group.is_empty(),
            code: group.code,
            passengers: group.passengers,
            amendment,
        })
    }

    /// Re-read the source, returning the new record count.
    pub fn reload(&self) -> Result<usize, LoadError> {
        let dataset = self.cache.reload(&self.source)?;
        Ok(dataset.len())
    }
}

/// Result of one lookup, ready for the CLI printer or a JSON response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupOutcome {
    pub code: String,
    pub found: bool,
    pub passengers: Vec<BookingMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amendment: Option<AmendmentView>,
}
