#![allow(async_fn_in_trait)]

use uuid::Uuid;

use hirelog_domain::resume::{ResumeStatus, Sort};

use crate::domain::types::{
    HistoryWithActor, Identity, RefreshSession, Resume, ResumeHistory, ResumeWithAuthor, User,
    UserAccount, UserProfile,
};
use crate::error::ApiError;

/// Repository for user credentials and profiles.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Resolve a token's user id to an authenticated identity. `None` when
    /// the user row is gone (stale token for a deleted account).
    async fn find_identity(&self, id: Uuid) -> Result<Option<Identity>, ApiError>;

    /// Joined User + UserProfile view for the account owner.
    async fn find_account(&self, id: Uuid) -> Result<Option<UserAccount>, ApiError>;

    /// Insert the credential row and its profile atomically (same transaction).
    async fn create_with_profile(
        &self,
        user: &User,
        profile: &UserProfile,
    ) -> Result<(), ApiError>;
}

/// Repository for the single live refresh session per user.
pub trait RefreshSessionRepository: Send + Sync {
    /// Insert or overwrite the session for `user_id` (last writer wins).
    async fn upsert(&self, user_id: Uuid, token_hash: &str) -> Result<(), ApiError>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<RefreshSession>, ApiError>;

    /// Delete the session. Returns `true` if a row was removed.
    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for resumes and their status-transition audit log.
pub trait ResumeRepository: Send + Sync {
    async fn create(&self, resume: &Resume) -> Result<(), ApiError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resume>, ApiError>;

    async fn find_with_author(&self, id: Uuid) -> Result<Option<ResumeWithAuthor>, ApiError>;

    /// List resumes ordered by creation time. `owner = None` lists every
    /// resume (recruiter visibility).
    async fn list(
        &self,
        owner: Option<Uuid>,
        status: Option<ResumeStatus>,
        sort: Sort,
    ) -> Result<Vec<ResumeWithAuthor>, ApiError>;

    /// Update title and/or summary, returning the updated row.
    async fn update_fields(
        &self,
        id: Uuid,
        title: Option<&str>,
        summary: Option<&str>,
    ) -> Result<Resume, ApiError>;

    /// Delete a resume. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;

    /// Atomically apply a status transition and append its audit row, in a
    /// single read-committed transaction: re-read the resume under an
    /// exclusive row lock, write the new status, insert the history row
    /// with `old_value` taken from the locked read. Fails `NotFound` when
    /// the resume vanished before the lock was taken.
    async fn change_status(
        &self,
        resume_id: Uuid,
        actor_id: Uuid,
        new_status: ResumeStatus,
        reason: &str,
    ) -> Result<ResumeHistory, ApiError>;

    /// History rows for a resume, newest first, with actor names.
    async fn list_history(&self, resume_id: Uuid) -> Result<Vec<HistoryWithActor>, ApiError>;
}
