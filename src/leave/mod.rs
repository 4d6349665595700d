pub mod domain;
pub mod service;
pub mod validation;

pub use domain::{LeaveDraft, LeaveRequest, LeaveRequestId, LeaveStatus};
pub use service::{LeaveDeskService, LeaveRepository, LeaveServiceError, RepositoryError};
pub use validation::{validate_draft, LeaveField, LeaveValidationError, ValidatedLeave};
