use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{LeaveDraft, LeaveStatus};

/// Required fields on the leave request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveField {
    StartDate,
    EndDate,
    Reason,
}

impl LeaveField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartDate => "start date",
            Self::EndDate => "end date",
            Self::Reason => "reason",
        }
    }
}

/// Blocking validation failure surfaced to the form screen. Not recoverable
/// automatically; the driver corrects the input and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeaveValidationError {
    /// Every blank required field is listed, not just the first one found.
    #[error("missing required fields: {}", field_list(.0))]
    MissingFields(Vec<LeaveField>),
}

fn field_list(fields: &[LeaveField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A draft that passed validation: status forced to `Pending`, submission
/// date stamped, text fields carried through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedLeave {
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: LeaveStatus,
    pub submitted_on: NaiveDate,
}

/// Checks the three required fields of a leave draft.
///
/// `submitted_on` is the caller's "now" so the function stays pure and tests
/// are deterministic. Date text is not parsed and start/end ordering is not
/// checked; the original form never did either, and adding range rules here
/// would reject input the rest of the workflow accepts.
pub fn validate_draft(
    draft: &LeaveDraft,
    submitted_on: NaiveDate,
) -> Result<ValidatedLeave, LeaveValidationError> {
    let mut missing = Vec::new();
    if draft.start_date.trim().is_empty() {
        missing.push(LeaveField::StartDate);
    }
    if draft.end_date.trim().is_empty() {
        missing.push(LeaveField::EndDate);
    }
    if draft.reason.trim().is_empty() {
        missing.push(LeaveField::Reason);
    }

    if !missing.is_empty() {
        return Err(LeaveValidationError::MissingFields(missing));
    }

    Ok(ValidatedLeave {
        start_date: draft.start_date.clone(),
        end_date: draft.end_date.clone(),
        reason: draft.reason.clone(),
        status: LeaveStatus::Pending,
        submitted_on,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 16).expect("valid date")
    }

    fn draft(start: &str, end: &str, reason: &str) -> LeaveDraft {
        LeaveDraft {
            start_date: start.to_string(),
            end_date: end.to_string(),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_draft_and_forces_pending() {
        let validated = validate_draft(&draft("2024-01-20", "2024-01-22", "Family emergency"), today())
            .expect("complete draft validates");

        assert_eq!(validated.status, LeaveStatus::Pending);
        assert_eq!(validated.submitted_on, today());
        assert_eq!(validated.start_date, "2024-01-20");
        assert_eq!(validated.end_date, "2024-01-22");
        assert_eq!(validated.reason, "Family emergency");
    }

    #[test]
    fn rejects_blank_start_date() {
        let err = validate_draft(&draft("", "2024-01-20", "x"), today())
            .expect_err("blank start date blocks submission");

        assert_eq!(
            err,
            LeaveValidationError::MissingFields(vec![LeaveField::StartDate])
        );
    }

    #[test]
    fn reports_every_missing_field_at_once() {
        let err = validate_draft(&draft("", "  ", "\t"), today())
            .expect_err("all-blank draft blocks submission");

        let LeaveValidationError::MissingFields(fields) = err;
        assert_eq!(
            fields,
            vec![LeaveField::StartDate, LeaveField::EndDate, LeaveField::Reason]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let err = validate_draft(&draft("2024-01-20", "2024-01-22", "   "), today())
            .expect_err("whitespace reason blocks submission");

        assert_eq!(
            err,
            LeaveValidationError::MissingFields(vec![LeaveField::Reason])
        );
    }

    #[test]
    fn date_text_is_carried_verbatim_without_range_checks() {
        // End before start is accepted on purpose; ordering was never part of
        // the form contract.
        let validated = validate_draft(&draft("2024-01-22", "2024-01-20", "Medical appointment"), today())
            .expect("reversed dates still validate");
        assert_eq!(validated.start_date, "2024-01-22");
        assert_eq!(validated.end_date, "2024-01-20");
    }

    #[test]
    fn error_message_names_the_fields() {
        let err = validate_draft(&draft("", "", "ok"), today()).expect_err("blocks");
        assert_eq!(err.to_string(), "missing required fields: start date, end date");
    }
}
