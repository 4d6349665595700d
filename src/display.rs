use serde::{Deserialize, Serialize};

/// Palette token a screen maps to its concrete theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Green,
    Amber,
    Red,
    Gray,
}

impl ColorToken {
    /// Reference hex value from the companion app's badge palette.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#10B981",
            Self::Amber => "#F59E0B",
            Self::Red => "#EF4444",
            Self::Gray => "#6B7280",
        }
    }
}

/// Glyph token for statuses rendered with an icon next to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconToken {
    Check,
    Cross,
    Alert,
    Clock,
}

/// Resolved display pair for a status value. Resolution is total: every
/// status, including unrecognized wire values, produces a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: ColorToken,
}
