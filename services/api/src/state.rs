use sea_orm::DatabaseConnection;

use crate::infra::db::{DbRefreshSessionRepository, DbResumeRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
///
/// The connection pool is constructed once in `main` and injected here —
/// components never reach for a global handle.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub access_token_secret: String,
    pub refresh_token_secret: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_repo(&self) -> DbRefreshSessionRepository {
        DbRefreshSessionRepository {
            db: self.db.clone(),
        }
    }

    pub fn resume_repo(&self) -> DbResumeRepository {
        DbResumeRepository {
            db: self.db.clone(),
        }
    }
}
