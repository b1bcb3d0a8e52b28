//! Resume domain types.

use serde::{Deserialize, Serialize};

/// Application pipeline state of a resume.
///
/// Wire format: the SCREAMING_SNAKE name, both in JSON bodies and in the
/// `resumes.status` / history `old_value`/`new_value` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResumeStatus {
    Apply,
    Interview1,
    Interview2,
    Pass,
    Drop,
    FinalPass,
}

impl ResumeStatus {
    /// All states, in pipeline order.
    pub const ALL: [Self; 6] = [
        Self::Apply,
        Self::Interview1,
        Self::Interview2,
        Self::Pass,
        Self::Drop,
        Self::FinalPass,
    ];

    /// Convert from the stored wire string. Returns `None` for unknown values.
    pub fn from_wire(v: &str) -> Option<Self> {
        match v {
            "APPLY" => Some(Self::Apply),
            "INTERVIEW1" => Some(Self::Interview1),
            "INTERVIEW2" => Some(Self::Interview2),
            "PASS" => Some(Self::Pass),
            "DROP" => Some(Self::Drop),
            "FINAL_PASS" => Some(Self::FinalPass),
            _ => None,
        }
    }

    /// Convert to the stored wire string.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Apply => "APPLY",
            Self::Interview1 => "INTERVIEW1",
            Self::Interview2 => "INTERVIEW2",
            Self::Pass => "PASS",
            Self::Drop => "DROP",
            Self::FinalPass => "FINAL_PASS",
        }
    }
}

/// Creation-time ordering for resume listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    Asc,
    #[default]
    Desc,
}

impl Sort {
    /// Parse a query-string value (`asc` / `desc`, any case). Returns `None`
    /// for anything else.
    pub fn from_query(v: &str) -> Option<Self> {
        match v.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}
