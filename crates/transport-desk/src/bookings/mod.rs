//! Booking lookup: load the passenger sheet once, then answer code queries.
//!
//! ```text
//!  bookings.csv -> parser -> loader (forward-fill, defaults) -> Dataset
//!  Dataset + code -> finder -> BookingGroup -> AmendmentRequest
//! ```

mod amendment;
mod cache;
mod dataset;
pub mod domain;
mod finder;
mod loader;
mod normalizer;
mod parser;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use amendment::{AmendmentRequest, AmendmentView};
pub use cache::DatasetCache;
pub use dataset::Dataset;
pub use domain::{BadgeCategory, BookingRecord, DEFAULT_DIRECTION, PICKUP_TIME_TBC};
pub use finder::{BookingFinder, BookingGroup, BookingMatch};
pub use loader::{DatasetLoader, LoadError};
pub use router::booking_router;
pub use service::{BookingService, LookupOutcome};
