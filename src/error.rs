use std::fmt;

use crate::leave::LeaveServiceError;
use crate::telemetry::TelemetryError;

#[derive(Debug)]
pub enum AppError {
    Telemetry(TelemetryError),
    Leave(LeaveServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Leave(err) => write!(f, "leave desk error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Telemetry(err) => Some(err),
            AppError::Leave(err) => Some(err),
        }
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<LeaveServiceError> for AppError {
    fn from(value: LeaveServiceError) -> Self {
        Self::Leave(value)
    }
}
