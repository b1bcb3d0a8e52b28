use std::collections::HashMap;

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IsolationLevel, Order, QueryFilter, QueryOrder, QuerySelect, TransactionError,
    TransactionTrait, sea_query::OnConflict,
};
use uuid::Uuid;

use hirelog_api_schema::{refresh_sessions, resume_histories, resumes, user_profiles, users};
use hirelog_domain::resume::{ResumeStatus, Sort};
use hirelog_domain::user::UserRole;

use crate::domain::repository::{RefreshSessionRepository, ResumeRepository, UserRepository};
use crate::domain::types::{
    HistoryWithActor, Identity, RefreshSession, Resume, ResumeHistory, ResumeWithAuthor, User,
    UserAccount, UserProfile,
};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_identity(&self, id: Uuid) -> Result<Option<Identity>, ApiError> {
        let found = users::Entity::find_by_id(id)
            .find_also_related(user_profiles::Entity)
            .one(&self.db)
            .await
            .context("find identity")?;
        Ok(found.map(|(user, profile)| Identity {
            user_id: user.id,
            role: profile.and_then(|p| UserRole::from_i16(p.role)),
        }))
    }

    async fn find_account(&self, id: Uuid) -> Result<Option<UserAccount>, ApiError> {
        let found = users::Entity::find_by_id(id)
            .find_also_related(user_profiles::Entity)
            .one(&self.db)
            .await
            .context("find account")?;
        Ok(found.map(|(user, profile)| {
            let (name, role) = match profile {
                Some(p) => (p.name, UserRole::from_i16(p.role)),
                None => (String::new(), None),
            };
            UserAccount {
                id: user.id,
                email: user.email,
                name,
                role,
                created_at: user.created_at,
                updated_at: user.updated_at,
            }
        }))
    }

    async fn create_with_profile(
        &self,
        user: &User,
        profile: &UserProfile,
    ) -> Result<(), ApiError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                let user = user.clone();
                let profile = profile.clone();
                Box::pin(async move {
                    users::ActiveModel {
                        id: Set(user.id),
                        email: Set(user.email),
                        password_hash: Set(user.password_hash),
                        created_at: Set(user.created_at),
                        updated_at: Set(user.updated_at),
                    }
                    .insert(txn)
                    .await?;
                    user_profiles::ActiveModel {
                        user_id: Set(profile.user_id),
                        name: Set(profile.name),
                        role: Set(profile.role.as_i16()),
                        created_at: Set(profile.created_at),
                        updated_at: Set(profile.updated_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("create user with profile")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── RefreshSession repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRefreshSessionRepository {
    pub db: DatabaseConnection,
}

impl RefreshSessionRepository for DbRefreshSessionRepository {
    async fn upsert(&self, user_id: Uuid, token_hash: &str) -> Result<(), ApiError> {
        let now = Utc::now();
        refresh_sessions::Entity::insert(refresh_sessions::ActiveModel {
            user_id: Set(user_id),
            token_hash: Set(token_hash.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .on_conflict(
            OnConflict::column(refresh_sessions::Column::UserId)
                .update_columns([
                    refresh_sessions::Column::TokenHash,
                    refresh_sessions::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("upsert refresh session")?;
        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<RefreshSession>, ApiError> {
        let model = refresh_sessions::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find refresh session")?;
        Ok(model.map(|m| RefreshSession {
            user_id: m.user_id,
            token_hash: m.token_hash,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }))
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, ApiError> {
        let result = refresh_sessions::Entity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .context("delete refresh session")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Resume repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbResumeRepository {
    pub db: DatabaseConnection,
}

impl ResumeRepository for DbResumeRepository {
    async fn create(&self, resume: &Resume) -> Result<(), ApiError> {
        resumes::ActiveModel {
            id: Set(resume.id),
            user_id: Set(resume.user_id),
            title: Set(resume.title.clone()),
            summary: Set(resume.summary.clone()),
            status: Set(resume.status.as_wire().to_owned()),
            created_at: Set(resume.created_at),
            updated_at: Set(resume.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create resume")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resume>, ApiError> {
        let model = resumes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find resume by id")?;
        model.map(resume_from_model).transpose()
    }

    async fn find_with_author(&self, id: Uuid) -> Result<Option<ResumeWithAuthor>, ApiError> {
        let Some(model) = resumes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find resume by id")?
        else {
            return Ok(None);
        };
        let names = profile_names(&self.db, vec![model.user_id]).await?;
        let author_name = names.get(&model.user_id).cloned().unwrap_or_default();
        Ok(Some(ResumeWithAuthor {
            resume: resume_from_model(model)?,
            author_name,
        }))
    }

    async fn list(
        &self,
        owner: Option<Uuid>,
        status: Option<ResumeStatus>,
        sort: Sort,
    ) -> Result<Vec<ResumeWithAuthor>, ApiError> {
        let mut query = resumes::Entity::find();
        if let Some(owner_id) = owner {
            query = query.filter(resumes::Column::UserId.eq(owner_id));
        }
        if let Some(status) = status {
            query = query.filter(resumes::Column::Status.eq(status.as_wire()));
        }
        let order = match sort {
            Sort::Asc => Order::Asc,
            Sort::Desc => Order::Desc,
        };
        let models = query
            .order_by(resumes::Column::CreatedAt, order)
            .all(&self.db)
            .await
            .context("list resumes")?;

        let names =
            profile_names(&self.db, models.iter().map(|m| m.user_id).collect()).await?;
        models
            .into_iter()
            .map(|model| {
                let author_name = names.get(&model.user_id).cloned().unwrap_or_default();
                Ok(ResumeWithAuthor {
                    resume: resume_from_model(model)?,
                    author_name,
                })
            })
            .collect()
    }

    async fn update_fields(
        &self,
        id: Uuid,
        title: Option<&str>,
        summary: Option<&str>,
    ) -> Result<Resume, ApiError> {
        let mut am = resumes::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(new_title) = title {
            am.title = Set(new_title.to_owned());
        }
        if let Some(new_summary) = summary {
            am.summary = Set(new_summary.to_owned());
        }
        am.updated_at = Set(Utc::now());
        let model = am.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => ApiError::NotFound,
            e => ApiError::Unexpected(anyhow::Error::new(e).context("update resume fields")),
        })?;
        resume_from_model(model)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = resumes::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete resume")?;
        Ok(result.rows_affected > 0)
    }

    async fn change_status(
        &self,
        resume_id: Uuid,
        actor_id: Uuid,
        new_status: ResumeStatus,
        reason: &str,
    ) -> Result<ResumeHistory, ApiError> {
        // Read-committed is enough here because the in-transaction read
        // takes the row lock: a concurrent transition blocks on the SELECT
        // ... FOR UPDATE and then sees the committed status as old_value.
        let result = self
            .db
            .transaction_with_config::<_, resume_histories::Model, DbErr>(
                |txn| {
                    let reason = reason.to_owned();
                    Box::pin(async move {
                        let resume = resumes::Entity::find_by_id(resume_id)
                            .lock_exclusive()
                            .one(txn)
                            .await?
                            .ok_or_else(|| DbErr::RecordNotFound("resume".to_owned()))?;

                        let now = Utc::now();
                        resumes::ActiveModel {
                            id: Set(resume_id),
                            status: Set(new_status.as_wire().to_owned()),
                            updated_at: Set(now),
                            ..Default::default()
                        }
                        .update(txn)
                        .await?;

                        resume_histories::ActiveModel {
                            id: Set(Uuid::now_v7()),
                            resume_id: Set(resume_id),
                            user_id: Set(actor_id),
                            old_value: Set(resume.status),
                            new_value: Set(new_status.as_wire().to_owned()),
                            reason: Set(reason),
                            created_at: Set(now),
                        }
                        .insert(txn)
                        .await
                    })
                },
                Some(IsolationLevel::ReadCommitted),
                None,
            )
            .await;

        match result {
            Ok(model) => Ok(history_from_model(model)),
            Err(TransactionError::Transaction(DbErr::RecordNotFound(_))) => {
                Err(ApiError::NotFound)
            }
            Err(e) => Err(ApiError::Unexpected(
                anyhow::Error::new(e).context("change resume status"),
            )),
        }
    }

    async fn list_history(&self, resume_id: Uuid) -> Result<Vec<HistoryWithActor>, ApiError> {
        let models = resume_histories::Entity::find()
            .filter(resume_histories::Column::ResumeId.eq(resume_id))
            .order_by(resume_histories::Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
            .context("list resume histories")?;

        let names =
            profile_names(&self.db, models.iter().map(|m| m.user_id).collect()).await?;
        Ok(models
            .into_iter()
            .map(|model| {
                let actor_name = names.get(&model.user_id).cloned().unwrap_or_default();
                HistoryWithActor {
                    history: history_from_model(model),
                    actor_name,
                }
            })
            .collect())
    }
}

fn resume_from_model(model: resumes::Model) -> Result<Resume, ApiError> {
    let status = ResumeStatus::from_wire(&model.status).ok_or_else(|| {
        ApiError::Unexpected(anyhow::anyhow!(
            "unknown resume status in store: {}",
            model.status
        ))
    })?;
    Ok(Resume {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        summary: model.summary,
        status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn history_from_model(model: resume_histories::Model) -> ResumeHistory {
    ResumeHistory {
        id: model.id,
        resume_id: model.resume_id,
        user_id: model.user_id,
        old_value: model.old_value,
        new_value: model.new_value,
        reason: model.reason,
        created_at: model.created_at,
    }
}

/// Profile names for a set of user ids, for author/actor display fields.
async fn profile_names(
    db: &DatabaseConnection,
    mut user_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, String>, ApiError> {
    user_ids.sort_unstable();
    user_ids.dedup();
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let models = user_profiles::Entity::find()
        .filter(user_profiles::Column::UserId.is_in(user_ids))
        .all(db)
        .await
        .context("load profile names")?;
    Ok(models.into_iter().map(|m| (m.user_id, m.name)).collect())
}
