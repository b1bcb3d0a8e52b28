use uuid::Uuid;

use hirelog_domain::resume::ResumeStatus;

use crate::domain::repository::ResumeRepository;
use crate::domain::types::{HistoryWithActor, Identity, ResumeHistory};
use crate::error::ApiError;

// ── ChangeStatus ─────────────────────────────────────────────────────────────

pub struct ChangeStatusUseCase<R: ResumeRepository> {
    pub repo: R,
}

impl<R: ResumeRepository> ChangeStatusUseCase<R> {
    /// Apply a status transition and append its audit row.
    ///
    /// The caller has already been through the role gate (recruiters only);
    /// `actor` is threaded in explicitly and recorded as the history row's
    /// actor. The transition itself and the audit insert happen atomically
    /// in the repository, in one read-committed transaction.
    pub async fn execute(
        &self,
        resume_id: Uuid,
        actor: &Identity,
        new_status: &str,
        reason: &str,
    ) -> Result<ResumeHistory, ApiError> {
        self.repo
            .find_by_id(resume_id)
            .await?
            .ok_or(ApiError::NotFound)?;

        let status = ResumeStatus::from_wire(new_status).ok_or_else(|| {
            ApiError::Validation(format!("unknown resume status: {new_status}"))
        })?;
        if reason.trim().is_empty() {
            return Err(ApiError::Validation(
                "a reason for the status change is required".to_owned(),
            ));
        }

        self.repo
            .change_status(resume_id, actor.user_id, status, reason)
            .await
    }
}

// ── GetResumeLogs ────────────────────────────────────────────────────────────

pub struct GetResumeLogsUseCase<R: ResumeRepository> {
    pub repo: R,
}

impl<R: ResumeRepository> GetResumeLogsUseCase<R> {
    /// Transition history for one resume, newest first.
    pub async fn execute(&self, resume_id: Uuid) -> Result<Vec<HistoryWithActor>, ApiError> {
        self.repo
            .find_by_id(resume_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        self.repo.list_history(resume_id).await
    }
}
