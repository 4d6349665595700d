//! Screen-facing core for a ride-driver companion app.
//!
//! The rendering layer owns navigation, styling, and transient form state;
//! everything it needs to *compute* lives here: trip history summaries,
//! status-to-badge resolution, leave draft validation, and the fixture data
//! source the screens read from until a real backend exists.

pub mod config;
pub mod display;
pub mod driver;
pub mod error;
pub mod fixtures;
pub mod leave;
pub mod telemetry;
pub mod trips;
