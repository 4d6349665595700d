use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Driver record shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub name: String,
    pub age: u8,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub license_number: String,
    pub license_expiry: NaiveDate,
    pub join_date: NaiveDate,
    pub vehicle: AssignedVehicle,
    pub stats: DriverStats,
}

impl DriverProfile {
    /// Whole years between the join date and `today`.
    pub fn service_years(&self, today: NaiveDate) -> u32 {
        years_of_service(self.join_date, today)
    }
}

/// The vehicle currently assigned to the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedVehicle {
    pub make: String,
    pub model: String,
    pub year: u16,
    pub license_plate: String,
    pub color: String,
}

/// Career figures kept on the profile record. `total_trips` and
/// `total_earnings` cover the full career, not just the visible history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStats {
    pub total_trips: u32,
    pub rating: f64,
    pub total_earnings: f64,
    pub years_of_service: u32,
}

/// Completed years of service, floored; a join date in the future counts
/// as zero.
pub fn years_of_service(join_date: NaiveDate, today: NaiveDate) -> u32 {
    if today < join_date {
        return 0;
    }
    let mut years = today.year() - join_date.year();
    if (today.month(), today.day()) < (join_date.month(), join_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn counts_whole_years_only() {
        let join = date(2022, 3, 15);
        assert_eq!(years_of_service(join, date(2024, 3, 14)), 1);
        assert_eq!(years_of_service(join, date(2024, 3, 15)), 2);
        assert_eq!(years_of_service(join, date(2024, 8, 25)), 2);
    }

    #[test]
    fn future_join_date_counts_as_zero() {
        assert_eq!(years_of_service(date(2025, 1, 1), date(2024, 6, 1)), 0);
    }
}
