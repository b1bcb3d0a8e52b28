use chrono::{DateTime, Utc};
use uuid::Uuid;

use hirelog_domain::resume::ResumeStatus;
use hirelog_domain::user::UserRole;

/// Credential record owned by the store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile record, 1:1 with [`User`]. Role never changes after sign-up.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Joined User + UserProfile view returned to the account owner.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Option<UserRole>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Authenticated caller, resolved by the auth gate and threaded explicitly
/// through every authorization decision. `role` is `None` when the profile
/// row is missing or carries an unknown wire value — such an identity is
/// never a member of any allowed-role set.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Option<UserRole>,
}

impl Identity {
    pub fn is_recruiter(&self) -> bool {
        self.role == Some(UserRole::Recruiter)
    }
}

/// Single live refresh session per user; only the token hash is stored.
#[derive(Debug, Clone)]
pub struct RefreshSession {
    pub user_id: Uuid,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub summary: String,
    pub status: ResumeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resume joined with its owner's profile name, for list/detail responses.
#[derive(Debug, Clone)]
pub struct ResumeWithAuthor {
    pub resume: Resume,
    pub author_name: String,
}

/// Append-only audit row for one status transition. `user_id` is the
/// acting recruiter; `old_value`/`new_value` are the wire strings of the
/// statuses immediately before and after.
#[derive(Debug, Clone)]
pub struct ResumeHistory {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub user_id: Uuid,
    pub old_value: String,
    pub new_value: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

/// History row joined with the acting recruiter's profile name.
#[derive(Debug, Clone)]
pub struct HistoryWithActor {
    pub history: ResumeHistory,
    pub actor_name: String,
}

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum summary length accepted when creating a resume.
pub const MIN_SUMMARY_LEN: usize = 150;

/// Plausibility check for an email address: one `@`, a non-empty local
/// part, a dotted domain, no whitespace. Deliverability is not our problem.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}
