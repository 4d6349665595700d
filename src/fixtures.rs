//! Sample data standing in for the external dispatch and HR feeds.
//!
//! The screens read everything through these constructors until a real
//! backend lands; integration tests use them as their workload.

use std::sync::Mutex;

use chrono::NaiveDate;

use crate::driver::{AssignedVehicle, DriverProfile, DriverStats};
use crate::leave::{LeaveRepository, LeaveRequest, LeaveRequestId, LeaveStatus, RepositoryError};
use crate::trips::{CompletedTrip, TripId, TripRecord, TripStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
}

/// The trip currently underway.
pub fn current_trips() -> Vec<TripRecord> {
    vec![TripRecord {
        id: TripId("2".to_string()),
        pickup_location: "789 Pine Rd, City Center".to_string(),
        dropoff_location: "321 Elm St, Suburbs".to_string(),
        pickup_time: "2:15 PM".to_string(),
        status: TripStatus::InProgress,
        customer_name: "Sarah Johnson".to_string(),
        customer_phone: "+1 (555) 987-6543".to_string(),
        fare: 32.75,
        distance: "12.5 km".to_string(),
    }]
}

/// Trips scheduled for later today.
pub fn upcoming_trips() -> Vec<TripRecord> {
    vec![
        TripRecord {
            id: TripId("1".to_string()),
            pickup_location: "123 Main St, Downtown".to_string(),
            dropoff_location: "456 Oak Ave, Uptown".to_string(),
            pickup_time: "10:30 AM".to_string(),
            status: TripStatus::Pending,
            customer_name: "John Smith".to_string(),
            customer_phone: "+1 (555) 123-4567".to_string(),
            fare: 25.50,
            distance: "8.2 km".to_string(),
        },
        TripRecord {
            id: TripId("3".to_string()),
            pickup_location: "555 Beach Blvd, Waterfront".to_string(),
            dropoff_location: "777 Hill Top Dr, Heights".to_string(),
            pickup_time: "4:45 PM".to_string(),
            status: TripStatus::Pending,
            customer_name: "Mike Davis".to_string(),
            customer_phone: "+1 (555) 456-7890".to_string(),
            fare: 18.25,
            distance: "6.1 km".to_string(),
        },
        TripRecord {
            id: TripId("4".to_string()),
            pickup_location: "888 Commerce Way, Business District".to_string(),
            dropoff_location: "999 Residential Ln, Suburbs".to_string(),
            pickup_time: "6:15 PM".to_string(),
            status: TripStatus::Pending,
            customer_name: "Emily Wilson".to_string(),
            customer_phone: "+1 (555) 234-5678".to_string(),
            fare: 41.00,
            distance: "15.8 km".to_string(),
        },
    ]
}

/// Completed-trip history backing the stats cards.
pub fn trip_history() -> Vec<CompletedTrip> {
    vec![
        CompletedTrip {
            id: TripId("1".to_string()),
            date: date(2024, 1, 15),
            pickup_location: "123 Main St, Downtown".to_string(),
            dropoff_location: "456 Oak Ave, Uptown".to_string(),
            customer_name: "John Smith".to_string(),
            fare: 25.50,
            rating: 4.8,
            duration: "28 min".to_string(),
            distance: "8.2 km".to_string(),
        },
        CompletedTrip {
            id: TripId("2".to_string()),
            date: date(2024, 1, 15),
            pickup_location: "789 Pine Rd, City Center".to_string(),
            dropoff_location: "321 Elm St, Suburbs".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            fare: 32.75,
            rating: 5.0,
            duration: "35 min".to_string(),
            distance: "12.5 km".to_string(),
        },
        CompletedTrip {
            id: TripId("3".to_string()),
            date: date(2024, 1, 14),
            pickup_location: "555 Beach Blvd, Waterfront".to_string(),
            dropoff_location: "777 Hill Top Dr, Heights".to_string(),
            customer_name: "Mike Davis".to_string(),
            fare: 18.25,
            rating: 4.5,
            duration: "22 min".to_string(),
            distance: "6.1 km".to_string(),
        },
        CompletedTrip {
            id: TripId("4".to_string()),
            date: date(2024, 1, 14),
            pickup_location: "888 Commerce Way, Business District".to_string(),
            dropoff_location: "999 Residential Ln, Suburbs".to_string(),
            customer_name: "Emily Wilson".to_string(),
            fare: 41.00,
            rating: 4.9,
            duration: "42 min".to_string(),
            distance: "15.8 km".to_string(),
        },
        CompletedTrip {
            id: TripId("5".to_string()),
            date: date(2024, 1, 13),
            pickup_location: "111 Airport Rd, Terminal".to_string(),
            dropoff_location: "222 Hotel Plaza, Downtown".to_string(),
            customer_name: "Robert Brown".to_string(),
            fare: 55.25,
            rating: 4.7,
            duration: "38 min".to_string(),
            distance: "22.3 km".to_string(),
        },
    ]
}

/// Previously submitted leave requests, one per workflow state.
pub fn leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: LeaveRequestId("1".to_string()),
            start_date: "2024-01-20".to_string(),
            end_date: "2024-01-22".to_string(),
            reason: "Family emergency".to_string(),
            status: LeaveStatus::Approved,
            submitted_on: date(2024, 1, 15),
            note: Some("Approved by supervisor".to_string()),
        },
        LeaveRequest {
            id: LeaveRequestId("2".to_string()),
            start_date: "2024-01-28".to_string(),
            end_date: "2024-01-28".to_string(),
            reason: "Medical appointment".to_string(),
            status: LeaveStatus::Pending,
            submitted_on: date(2024, 1, 16),
            note: None,
        },
        LeaveRequest {
            id: LeaveRequestId("3".to_string()),
            start_date: "2024-01-10".to_string(),
            end_date: "2024-01-11".to_string(),
            reason: "Personal leave".to_string(),
            status: LeaveStatus::Rejected,
            submitted_on: date(2024, 1, 5),
            note: Some("Insufficient notice period".to_string()),
        },
    ]
}

/// The signed-in driver.
pub fn driver_profile() -> DriverProfile {
    DriverProfile {
        name: "Alex Thompson".to_string(),
        age: 32,
        phone: "+1 (555) 123-4567".to_string(),
        email: "alex.thompson@email.com".to_string(),
        address: "123 Maple Street, Springfield, IL 62701".to_string(),
        license_number: "DL123456789".to_string(),
        license_expiry: date(2026, 8, 15),
        join_date: date(2022, 3, 15),
        vehicle: AssignedVehicle {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2023,
            license_plate: "ABC-1234".to_string(),
            color: "Silver".to_string(),
        },
        stats: DriverStats {
            total_trips: 1248,
            rating: 4.8,
            total_earnings: 28750.50,
            years_of_service: 2,
        },
    }
}

/// Mutex-backed request store for demos and tests.
#[derive(Debug, Default)]
pub struct InMemoryLeaveRepository {
    records: Mutex<Vec<LeaveRequest>>,
}

impl InMemoryLeaveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the fixture requests.
    pub fn seeded() -> Self {
        Self {
            records: Mutex::new(leave_requests()),
        }
    }
}

impl LeaveRepository for InMemoryLeaveRepository {
    fn insert(&self, request: LeaveRequest) -> Result<LeaveRequest, RepositoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;
        if records.iter().any(|existing| existing.id == request.id) {
            return Err(RepositoryError::Conflict);
        }
        records.push(request.clone());
        Ok(request)
    }

    fn list(&self) -> Result<Vec<LeaveRequest>, RepositoryError> {
        let records = self
            .records
            .lock()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;
        Ok(records.clone())
    }
}
