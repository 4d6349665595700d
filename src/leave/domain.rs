use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::{ColorToken, IconToken, StatusBadge};

/// Identifier wrapper for submitted leave requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveRequestId(pub String);

/// Approval workflow state of a leave request. Approval and rejection are
/// performed by an external reviewer; this crate only ever creates `Pending`
/// records. Unrecognized wire values degrade to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }

    pub const fn color(self) -> ColorToken {
        match self {
            Self::Pending => ColorToken::Amber,
            Self::Approved => ColorToken::Green,
            Self::Rejected => ColorToken::Red,
            Self::Unknown => ColorToken::Gray,
        }
    }

    /// Glyph shown next to the label on the leave screen.
    pub const fn icon(self) -> IconToken {
        match self {
            Self::Pending => IconToken::Alert,
            Self::Approved => IconToken::Check,
            Self::Rejected => IconToken::Cross,
            Self::Unknown => IconToken::Clock,
        }
    }

    pub const fn badge(self) -> StatusBadge {
        StatusBadge {
            label: self.label(),
            color: self.color(),
        }
    }
}

/// A stored leave request as listed under "Previous Requests".
///
/// Start and end dates are the text the driver typed, carried verbatim; the
/// form never parses them or checks their ordering (a deliberate gap, see
/// `validation`). The submission date is real, set at validation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: LeaveStatus,
    pub submitted_on: NaiveDate,
    /// Reviewer note attached on approval or rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Unvalidated form input for a new leave request. Fields are free text and
/// may be empty or whitespace; the form screen owns this value until it
/// passes validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDraft {
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_leave_status_resolves_to_a_badge_and_icon() {
        let cases = [
            (LeaveStatus::Approved, ColorToken::Green, IconToken::Check),
            (LeaveStatus::Rejected, ColorToken::Red, IconToken::Cross),
            (LeaveStatus::Pending, ColorToken::Amber, IconToken::Alert),
            (LeaveStatus::Unknown, ColorToken::Gray, IconToken::Clock),
        ];
        for (status, color, icon) in cases {
            assert_eq!(status.badge().color, color);
            assert_eq!(status.icon(), icon);
            assert!(!status.label().is_empty());
        }
    }

    #[test]
    fn unrecognized_leave_status_falls_back_to_unknown() {
        assert_eq!(LeaveStatus::from_wire("escalated"), LeaveStatus::Unknown);
        let parsed: LeaveStatus =
            serde_json::from_str("\"escalated\"").expect("unknown status still deserializes");
        assert_eq!(parsed, LeaveStatus::Unknown);
    }
}
