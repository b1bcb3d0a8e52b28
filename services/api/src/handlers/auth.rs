use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use hirelog_core::response;

use crate::error::ApiError;
use crate::extract::BearerToken;
use crate::handlers::required;
use crate::handlers::user::AccountResponse;
use crate::state::AppState;
use crate::usecase::account::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::usecase::token::{RefreshTokenUseCase, RevokeTokenUseCase, TokenPair};

/// Canonical token-response shape for sign-in and refresh.
#[derive(Serialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

// ── POST /auth/sign-up ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
    pub name: Option<String>,
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = SignUpInput {
        email: required(body.email, "email")?,
        password: required(body.password, "password")?,
        password_confirm: required(body.password_confirm, "password_confirm")?,
        name: required(body.name, "name")?,
    };

    let usecase = SignUpUseCase {
        users: state.user_repo(),
    };
    let account = usecase.execute(input).await?;

    Ok(response::created(
        "account created",
        AccountResponse::from(account),
    ))
}

// ── POST /auth/sign-in ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = SignInInput {
        email: required(body.email, "email")?,
        password: required(body.password, "password")?,
    };

    let usecase = SignInUseCase {
        users: state.user_repo(),
        sessions: state.session_repo(),
        access_secret: state.access_token_secret.clone(),
        refresh_secret: state.refresh_token_secret.clone(),
    };
    let pair = usecase.execute(input).await?;

    Ok(response::ok("signed in", TokenPairResponse::from(pair)))
}

// ── PATCH /auth/token ────────────────────────────────────────────────────────

pub async fn refresh_token(
    State(state): State<AppState>,
    BearerToken(refresh_value): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = RefreshTokenUseCase {
        users: state.user_repo(),
        sessions: state.session_repo(),
        access_secret: state.access_token_secret.clone(),
        refresh_secret: state.refresh_token_secret.clone(),
    };
    let pair = usecase.execute(&refresh_value).await?;

    Ok(response::ok(
        "token pair reissued",
        TokenPairResponse::from(pair),
    ))
}

// ── DELETE /auth/token ───────────────────────────────────────────────────────

pub async fn revoke_token(
    State(state): State<AppState>,
    BearerToken(refresh_value): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = RevokeTokenUseCase {
        sessions: state.session_repo(),
        refresh_secret: state.refresh_token_secret.clone(),
    };
    usecase.execute(&refresh_value).await?;

    Ok(StatusCode::NO_CONTENT)
}
