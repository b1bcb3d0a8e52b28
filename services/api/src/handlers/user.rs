use axum::{extract::State, response::IntoResponse};
use serde::Serialize;
use uuid::Uuid;

use hirelog_core::response;
use hirelog_domain::user::UserRole;

use crate::domain::types::{Identity, UserAccount};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::account::GetMeUseCase;

/// Account view returned to its owner (and echoed at sign-up).
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Option<UserRole>,
    #[serde(serialize_with = "hirelog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hirelog_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserAccount> for AccountResponse {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            role: account.role,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

// ── GET /users/me ────────────────────────────────────────────────────────────

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = GetMeUseCase {
        users: state.user_repo(),
    };
    let account = usecase.execute(identity.user_id).await?;

    Ok(response::ok("account details", AccountResponse::from(account)))
}
