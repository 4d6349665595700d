use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::domain::{LeaveDraft, LeaveRequest, LeaveRequestId};
use super::validation::{validate_draft, LeaveValidationError};

/// Storage abstraction so the leave desk can run against fixtures today and
/// a real backend later without changing the screens.
pub trait LeaveRepository: Send + Sync {
    fn insert(&self, request: LeaveRequest) -> Result<LeaveRequest, RepositoryError>;
    fn list(&self) -> Result<Vec<LeaveRequest>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> LeaveRequestId {
    let id = REQUEST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeaveRequestId(format!("leave-{id:04}"))
}

/// Service behind the leave screen: validates drafts, assigns identifiers,
/// and stores accepted requests as `Pending`.
pub struct LeaveDeskService<R> {
    repository: Arc<R>,
}

impl<R> LeaveDeskService<R>
where
    R: LeaveRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Submit a draft dated `today`, returning the stored record.
    ///
    /// On success the screen clears its draft fields and closes the form;
    /// that side effect belongs to the caller, not this service.
    pub fn submit(
        &self,
        draft: &LeaveDraft,
        today: NaiveDate,
    ) -> Result<LeaveRequest, LeaveServiceError> {
        let validated = validate_draft(draft, today)?;

        let request = LeaveRequest {
            id: next_request_id(),
            start_date: validated.start_date,
            end_date: validated.end_date,
            reason: validated.reason,
            status: validated.status,
            submitted_on: validated.submitted_on,
            note: None,
        };

        let stored = self.repository.insert(request)?;
        debug!(id = %stored.id.0, submitted_on = %stored.submitted_on, "leave request stored");
        Ok(stored)
    }

    /// Previously submitted requests, newest data source order preserved.
    pub fn history(&self) -> Result<Vec<LeaveRequest>, LeaveServiceError> {
        Ok(self.repository.list()?)
    }
}

/// Error raised by the leave desk service.
#[derive(Debug, thiserror::Error)]
pub enum LeaveServiceError {
    #[error(transparent)]
    Validation(#[from] LeaveValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
