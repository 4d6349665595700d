pub mod profile;

pub use profile::{years_of_service, AssignedVehicle, DriverProfile, DriverStats};
