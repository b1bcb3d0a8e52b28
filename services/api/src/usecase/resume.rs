use chrono::Utc;
use uuid::Uuid;

use hirelog_domain::resume::{ResumeStatus, Sort};

use crate::domain::repository::ResumeRepository;
use crate::domain::types::{Identity, MIN_SUMMARY_LEN, Resume, ResumeWithAuthor};
use crate::error::ApiError;

// ── CreateResume ─────────────────────────────────────────────────────────────

pub struct CreateResumeInput {
    pub title: String,
    pub summary: String,
}

pub struct CreateResumeUseCase<R: ResumeRepository> {
    pub repo: R,
}

impl<R: ResumeRepository> CreateResumeUseCase<R> {
    /// New resumes always enter the pipeline at APPLY.
    pub async fn execute(
        &self,
        owner_id: Uuid,
        input: CreateResumeInput,
    ) -> Result<Resume, ApiError> {
        if input.title.trim().is_empty() {
            return Err(ApiError::Validation("title is required".to_owned()));
        }
        if input.summary.chars().count() < MIN_SUMMARY_LEN {
            return Err(ApiError::Validation(format!(
                "summary must be at least {MIN_SUMMARY_LEN} characters"
            )));
        }

        let now = Utc::now();
        let resume = Resume {
            id: Uuid::now_v7(),
            user_id: owner_id,
            title: input.title,
            summary: input.summary,
            status: ResumeStatus::Apply,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&resume).await?;
        Ok(resume)
    }
}

// ── ListResumes ──────────────────────────────────────────────────────────────

pub struct ListResumesUseCase<R: ResumeRepository> {
    pub repo: R,
}

impl<R: ResumeRepository> ListResumesUseCase<R> {
    /// Applicants see their own resumes; recruiters see everyone's.
    pub async fn execute(
        &self,
        actor: &Identity,
        status: Option<ResumeStatus>,
        sort: Sort,
    ) -> Result<Vec<ResumeWithAuthor>, ApiError> {
        let owner = if actor.is_recruiter() {
            None
        } else {
            Some(actor.user_id)
        };
        self.repo.list(owner, status, sort).await
    }
}

// ── GetResume ────────────────────────────────────────────────────────────────

pub struct GetResumeUseCase<R: ResumeRepository> {
    pub repo: R,
}

impl<R: ResumeRepository> GetResumeUseCase<R> {
    /// Owner or recruiter only. A foreign resume answers `NotFound`, the
    /// same as an absent one, so ids cannot be probed.
    pub async fn execute(
        &self,
        actor: &Identity,
        resume_id: Uuid,
    ) -> Result<ResumeWithAuthor, ApiError> {
        let found = self
            .repo
            .find_with_author(resume_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        if !actor.is_recruiter() && found.resume.user_id != actor.user_id {
            return Err(ApiError::NotFound);
        }
        Ok(found)
    }
}

// ── UpdateResume ─────────────────────────────────────────────────────────────

pub struct UpdateResumeInput {
    pub title: Option<String>,
    pub summary: Option<String>,
}

pub struct UpdateResumeUseCase<R: ResumeRepository> {
    pub repo: R,
}

impl<R: ResumeRepository> UpdateResumeUseCase<R> {
    /// Owner-only field edit. Status is deliberately not editable here —
    /// it only moves through the status engine.
    pub async fn execute(
        &self,
        actor_id: Uuid,
        resume_id: Uuid,
        input: UpdateResumeInput,
    ) -> Result<Resume, ApiError> {
        if input.title.is_none() && input.summary.is_none() {
            return Err(ApiError::Validation(
                "nothing to update: provide a title or a summary".to_owned(),
            ));
        }

        let resume = self
            .repo
            .find_by_id(resume_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        if resume.user_id != actor_id {
            return Err(ApiError::NotFound);
        }

        self.repo
            .update_fields(resume_id, input.title.as_deref(), input.summary.as_deref())
            .await
    }
}

// ── DeleteResume ─────────────────────────────────────────────────────────────

pub struct DeleteResumeUseCase<R: ResumeRepository> {
    pub repo: R,
}

impl<R: ResumeRepository> DeleteResumeUseCase<R> {
    /// Owner-only. Returns the deleted id as confirmation.
    pub async fn execute(&self, actor_id: Uuid, resume_id: Uuid) -> Result<Uuid, ApiError> {
        let resume = self
            .repo
            .find_by_id(resume_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        if resume.user_id != actor_id {
            return Err(ApiError::NotFound);
        }

        self.repo.delete(resume_id).await?;
        Ok(resume_id)
    }
}
