use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hirelog_core::response;
use hirelog_domain::resume::{ResumeStatus, Sort};
use hirelog_domain::user::UserRole;

use crate::domain::types::{HistoryWithActor, Identity, Resume, ResumeHistory, ResumeWithAuthor};
use crate::error::ApiError;
use crate::extract::require_role;
use crate::handlers::required;
use crate::state::AppState;
use crate::usecase::resume::{
    CreateResumeInput, CreateResumeUseCase, DeleteResumeUseCase, GetResumeUseCase,
    ListResumesUseCase, UpdateResumeInput, UpdateResumeUseCase,
};
use crate::usecase::resume_status::{ChangeStatusUseCase, GetResumeLogsUseCase};

// ── Response types ───────────────────────────────────────────────────────────

/// Owner-facing resume view, returned from create/update.
#[derive(Serialize)]
pub struct ResumeResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub summary: String,
    pub status: ResumeStatus,
    #[serde(serialize_with = "hirelog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hirelog_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Resume> for ResumeResponse {
    fn from(resume: Resume) -> Self {
        Self {
            id: resume.id,
            user_id: resume.user_id,
            title: resume.title,
            summary: resume.summary,
            status: resume.status,
            created_at: resume.created_at,
            updated_at: resume.updated_at,
        }
    }
}

/// List/detail view carrying the author's profile name instead of the raw
/// owner id.
#[derive(Serialize)]
pub struct ResumeWithAuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub summary: String,
    pub status: ResumeStatus,
    #[serde(serialize_with = "hirelog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hirelog_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ResumeWithAuthor> for ResumeWithAuthorResponse {
    fn from(found: ResumeWithAuthor) -> Self {
        Self {
            id: found.resume.id,
            name: found.author_name,
            title: found.resume.title,
            summary: found.resume.summary,
            status: found.resume.status,
            created_at: found.resume.created_at,
            updated_at: found.resume.updated_at,
        }
    }
}

/// The audit row created by a status transition.
#[derive(Serialize)]
pub struct HistoryResponse {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub user_id: Uuid,
    pub old_value: String,
    pub new_value: String,
    pub reason: String,
    #[serde(serialize_with = "hirelog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ResumeHistory> for HistoryResponse {
    fn from(history: ResumeHistory) -> Self {
        Self {
            id: history.id,
            resume_id: history.resume_id,
            user_id: history.user_id,
            old_value: history.old_value,
            new_value: history.new_value,
            reason: history.reason,
            created_at: history.created_at,
        }
    }
}

/// Log-listing view with the acting recruiter's profile name.
#[derive(Serialize)]
pub struct HistoryWithActorResponse {
    pub id: Uuid,
    pub name: String,
    pub resume_id: Uuid,
    pub old_value: String,
    pub new_value: String,
    pub reason: String,
    #[serde(serialize_with = "hirelog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<HistoryWithActor> for HistoryWithActorResponse {
    fn from(entry: HistoryWithActor) -> Self {
        Self {
            id: entry.history.id,
            name: entry.actor_name,
            resume_id: entry.history.resume_id,
            old_value: entry.history.old_value,
            new_value: entry.history.new_value,
            reason: entry.history.reason,
            created_at: entry.history.created_at,
        }
    }
}

// ── POST /resumes ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateResumeRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
}

pub async fn create_resume(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateResumeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = CreateResumeInput {
        title: required(body.title, "title")?,
        summary: required(body.summary, "summary")?,
    };

    let usecase = CreateResumeUseCase {
        repo: state.resume_repo(),
    };
    let resume = usecase.execute(identity.user_id, input).await?;

    Ok(response::created(
        "resume created",
        ResumeResponse::from(resume),
    ))
}

// ── GET /resumes ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ResumeListQuery {
    pub status: Option<String>,
    pub sort: Option<String>,
}

pub async fn list_resumes(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<ResumeListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let status = query
        .status
        .map(|s| {
            ResumeStatus::from_wire(&s.to_ascii_uppercase())
                .ok_or_else(|| ApiError::Validation(format!("unknown resume status: {s}")))
        })
        .transpose()?;
    let sort = query
        .sort
        .map(|s| {
            Sort::from_query(&s)
                .ok_or_else(|| ApiError::Validation("sort must be asc or desc".to_owned()))
        })
        .transpose()?
        .unwrap_or_default();

    let usecase = ListResumesUseCase {
        repo: state.resume_repo(),
    };
    let resumes = usecase.execute(&identity, status, sort).await?;
    let items: Vec<ResumeWithAuthorResponse> = resumes
        .into_iter()
        .map(ResumeWithAuthorResponse::from)
        .collect();

    Ok(response::ok("resume list", items))
}

// ── GET /resumes/{id} ────────────────────────────────────────────────────────

pub async fn get_resume(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = GetResumeUseCase {
        repo: state.resume_repo(),
    };
    let found = usecase.execute(&identity, id).await?;

    Ok(response::ok(
        "resume details",
        ResumeWithAuthorResponse::from(found),
    ))
}

// ── PATCH /resumes/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateResumeRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
}

pub async fn update_resume(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateResumeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = UpdateResumeInput {
        title: body.title.filter(|t| !t.trim().is_empty()),
        summary: body.summary.filter(|s| !s.trim().is_empty()),
    };

    let usecase = UpdateResumeUseCase {
        repo: state.resume_repo(),
    };
    let resume = usecase.execute(identity.user_id, id, input).await?;

    Ok(response::ok("resume updated", ResumeResponse::from(resume)))
}

// ── DELETE /resumes/{id} ─────────────────────────────────────────────────────

pub async fn delete_resume(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = DeleteResumeUseCase {
        repo: state.resume_repo(),
    };
    let deleted_id = usecase.execute(identity.user_id, id).await?;

    Ok(response::ok(
        "resume deleted",
        serde_json::json!({ "id": deleted_id }),
    ))
}

// ── PATCH /resumes/{id}/status ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ChangeStatusRequest {
    pub status: Option<String>,
    pub reason: Option<String>,
}

pub async fn change_resume_status(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ChangeStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&identity, &[UserRole::Recruiter])?;

    let status = required(body.status, "status")?;
    let reason = required(body.reason, "reason")?;

    let usecase = ChangeStatusUseCase {
        repo: state.resume_repo(),
    };
    let history = usecase.execute(id, &identity, &status, &reason).await?;

    Ok(response::ok(
        "resume status changed",
        HistoryResponse::from(history),
    ))
}

// ── GET /resumes/{id}/logs ───────────────────────────────────────────────────

pub async fn get_resume_logs(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&identity, &[UserRole::Recruiter])?;

    let usecase = GetResumeLogsUseCase {
        repo: state.resume_repo(),
    };
    let logs = usecase.execute(id).await?;
    let items: Vec<HistoryWithActorResponse> = logs
        .into_iter()
        .map(HistoryWithActorResponse::from)
        .collect();

    Ok(response::ok("resume status logs", items))
}
