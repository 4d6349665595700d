use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::{ColorToken, StatusBadge};

/// Identifier wrapper for dispatched trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId(pub String);

/// Lifecycle status attached to a dispatched trip.
///
/// The dispatch feed sends statuses as kebab-case strings; anything the feed
/// adds later lands on `Unknown` instead of failing deserialization, so badge
/// rendering keeps working against newer feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripStatus {
    Pending,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl TripStatus {
    /// Fallback parse for raw status strings held outside serde payloads.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "in-progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Unknown => "Unknown",
        }
    }

    pub const fn color(self) -> ColorToken {
        match self {
            Self::Pending => ColorToken::Amber,
            Self::InProgress => ColorToken::Green,
            Self::Completed | Self::Unknown => ColorToken::Gray,
        }
    }

    pub const fn badge(self) -> StatusBadge {
        StatusBadge {
            label: self.label(),
            color: self.color(),
        }
    }
}

/// A dispatched trip as shown on the current/upcoming screens.
///
/// Records are read-only here; the external source owns their lifecycle.
/// Pickup time and distance stay as display text because the feed delivers
/// them pre-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: TripId,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_time: String,
    pub status: TripStatus,
    pub customer_name: String,
    pub customer_phone: String,
    /// Fare in currency units, never negative.
    pub fare: f64,
    pub distance: String,
}

/// A finished trip from the history feed, carrying the rider rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTrip {
    pub id: TripId,
    pub date: NaiveDate,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub customer_name: String,
    pub fare: f64,
    /// Rider rating in [0, 5].
    pub rating: f64,
    pub duration: String,
    pub distance: String,
}

/// Period selector shown above the history stats. Selection is screen-local
/// state; the core only supplies the typed values and their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryPeriod {
    Week,
    Month,
    Year,
}

impl HistoryPeriod {
    pub const fn ordered() -> [Self; 3] {
        [Self::Week, Self::Month, Self::Year]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}
