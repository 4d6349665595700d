pub mod domain;
pub mod summary;

pub use domain::{CompletedTrip, HistoryPeriod, TripId, TripRecord, TripStatus};
pub use summary::{summarize, TripSummary};
