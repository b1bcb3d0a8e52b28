//! User domain types.

use serde::{Deserialize, Serialize};

/// Account role fixed at sign-up.
///
/// Wire format: `i16` column value (0 = Applicant, 1 = Recruiter).
/// Serialized as its SCREAMING_SNAKE name in JSON bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Applicant = 0,
    Recruiter = 1,
}

impl UserRole {
    /// Convert from the stored wire value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Applicant),
            1 => Some(Self::Recruiter),
            _ => None,
        }
    }

    /// Convert to the stored wire value.
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}
