use serde::{Deserialize, Serialize};
use std::fmt;

/// Pickup time shown until the transport team confirms one.
pub const PICKUP_TIME_TBC: &str = "TBC";

/// Direction used when the sheet does not say which legs a passenger needs.
pub const DEFAULT_DIRECTION: &str = "Both";

/// One passenger row after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub code: String,
    pub name: String,
    pub route: String,
    pub pickup: String,
    pub pickup_time: String,
    pub direction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl BookingRecord {
    pub fn badge(&self) -> BadgeCategory {
        BadgeCategory::from_direction(&self.direction)
    }

    /// Both coordinates, or nothing when either one is missing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lon)
    }
}

/// Which legs of the trip a passenger is booked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeCategory {
    Both,
    Outbound,
    Return,
}

impl BadgeCategory {
    /// Substring match on the title-cased direction. "Both" is checked first so
    /// that "Both To Venue" style values stay two-way.
    pub fn from_direction(direction: &str) -> Self {
        if direction.contains("Both") {
            Self::Both
        } else if direction.contains("To") {
            Self::Outbound
        } else {
            Self::Return
        }
    }

    pub const fn shows_pickup_time(self) -> bool {
        matches!(self, Self::Both | Self::Outbound)
    }

    pub const fn shows_return_notice(self) -> bool {
        matches!(self, Self::Both | Self::Return)
    }

    pub const fn pickup_label(self) -> &'static str {
        match self {
            Self::Both => "Pickup & Dropoff",
            Self::Outbound => "Pickup",
            Self::Return => "Dropoff",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Both => "\u{1f504}",
            Self::Outbound => "\u{27a1}\u{fe0f}",
            Self::Return => "\u{2b05}\u{fe0f}",
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Both => "BOTH",
            Self::Outbound => "OUTBOUND",
            Self::Return => "RETURN",
        };
        f.write_str(label)
    }
}
