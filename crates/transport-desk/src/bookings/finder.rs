use super::dataset::Dataset;
use super::domain::{BadgeCategory, BookingRecord};
use super::normalizer::normalize_code;
use serde::Serialize;

/// A found passenger plus the display flags derived from its direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingMatch {
    #[serde(flatten)]
    pub record: BookingRecord,
    pub badge: BadgeCategory,
    pub show_pickup_time: bool,
    pub show_return_notice: bool,
    pub pickup_label: &'static str,
}

impl BookingMatch {
    fn from_record(record: &BookingRecord) -> Self {
        let badge = record.badge();
        Self {
            record: record.clone(),
            badge,
            show_pickup_time: badge.shows_pickup_time(),
            show_return_notice: badge.shows_return_notice(),
            pickup_label: badge.pickup_label(),
        }
    }
}

/// Every passenger travelling under one booking code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingGroup {
    pub code: String,
    pub passengers: Vec<BookingMatch>,
}

impl BookingGroup {
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// The first listed passenger is the group's contact for amendments.
    pub fn primary_contact(&self) -> Option<&str> {
        self.passengers
            .first()
            .map(|passenger| passenger.record.name.as_str())
    }
}

pub struct BookingFinder;

impl BookingFinder {
    /// Matches in sheet order. No match is an empty vector, not an error.
    pub fn find(dataset: &Dataset, query: &str) -> Vec<BookingMatch> {
        let code = normalize_code(query);
        Self::matches_for(dataset, &code)
    }

    pub fn find_group(dataset: &Dataset, query: &str) -> BookingGroup {
        let code = normalize_code(query);
        let passengers = Self::matches_for(dataset, &code);
        BookingGroup { code, passengers }
    }

    fn matches_for(dataset: &Dataset, code: &str) -> Vec<BookingMatch> {
        if code.is_empty() {
            return Vec::new();
        }

        dataset
            .iter()
            .filter(|record| record.code == code)
            .map(BookingMatch::from_record)
            .collect()
    }
}
