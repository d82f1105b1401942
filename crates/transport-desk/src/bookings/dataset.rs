use super::domain::BookingRecord;
use std::sync::Arc;

/// Normalized bookings in sheet order. Immutable once loaded; clones share
/// the same backing slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[BookingRecord]>,
    skipped_rows: usize,
}

impl Dataset {
    pub fn new(records: Vec<BookingRecord>) -> Self {
        Self {
            records: records.into(),
            skipped_rows: 0,
        }
    }

    pub(crate) fn with_skipped_rows(mut self, skipped_rows: usize) -> Self {
        self.skipped_rows = skipped_rows;
        self
    }

    /// Sheet rows dropped because no booking code could be inherited.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
