use serde::Serialize;

use super::domain::CompletedTrip;

/// Derived history figures for the stats cards. Recomputed from the current
/// record collection on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub total_earnings: f64,
    pub trip_count: usize,
    /// `None` when the history is empty. An unguarded mean over zero trips
    /// would produce NaN, so the absence of data is explicit and screens
    /// render a placeholder instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

/// Sums fares and averages rider ratings over the completed-trip history.
///
/// Pure and order-independent; float summation drift is below the two
/// decimal places the screens display.
pub fn summarize(trips: &[CompletedTrip]) -> TripSummary {
    let total_earnings: f64 = trips.iter().map(|trip| trip.fare).sum();
    let trip_count = trips.len();

    let average_rating = if trip_count == 0 {
        None
    } else {
        let total_rating: f64 = trips.iter().map(|trip| trip.rating).sum();
        Some(total_rating / trip_count as f64)
    };

    TripSummary {
        total_earnings,
        trip_count,
        average_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::domain::TripId;
    use chrono::NaiveDate;

    fn trip(id: &str, fare: f64, rating: f64) -> CompletedTrip {
        CompletedTrip {
            id: TripId(id.to_string()),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            pickup_location: "123 Main St, Downtown".to_string(),
            dropoff_location: "456 Oak Ave, Uptown".to_string(),
            customer_name: "John Smith".to_string(),
            fare,
            rating,
            duration: "28 min".to_string(),
            distance: "8.2 km".to_string(),
        }
    }

    #[test]
    fn sums_fares_and_averages_ratings() {
        let trips = vec![trip("1", 25.50, 4.8), trip("2", 32.75, 5.0)];

        let summary = summarize(&trips);

        assert_eq!(summary.trip_count, 2);
        assert!((summary.total_earnings - 58.25).abs() < 1e-9);
        let average = summary.average_rating.expect("two rated trips");
        assert!((average - 4.9).abs() < 1e-9);
    }

    #[test]
    fn empty_history_reports_no_rating_instead_of_nan() {
        let summary = summarize(&[]);

        assert_eq!(summary.trip_count, 0);
        assert_eq!(summary.total_earnings, 0.0);
        assert_eq!(summary.average_rating, None);
    }

    #[test]
    fn output_is_stable_under_reordering() {
        let forward = vec![trip("1", 18.25, 4.5), trip("2", 41.00, 4.9), trip("3", 55.25, 4.7)];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = summarize(&forward);
        let b = summarize(&reversed);

        assert_eq!(a.trip_count, b.trip_count);
        assert!((a.total_earnings - b.total_earnings).abs() < 1e-9);
        let (ra, rb) = (
            a.average_rating.expect("rated"),
            b.average_rating.expect("rated"),
        );
        assert!((ra - rb).abs() < 1e-9);
    }

    #[test]
    fn repeated_calls_yield_identical_output() {
        let trips = vec![trip("1", 25.50, 4.8)];
        assert_eq!(summarize(&trips), summarize(&trips));
    }
}
