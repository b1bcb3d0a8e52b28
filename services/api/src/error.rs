use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hirelog_auth_types::bearer::BearerError;
use hirelog_auth_types::token::TokenError;

/// Api service error variants.
///
/// The six unauthenticated kinds stay distinguishable end-to-end: an
/// expired access token, an invalid signature, and a rotated-away refresh
/// token each drive a different client remediation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("email is already registered")]
    DuplicateEmail,
    #[error("no authentication token provided")]
    NoToken,
    #[error("unsupported authentication scheme")]
    UnsupportedScheme,
    #[error("authentication token expired")]
    TokenExpired,
    #[error("authentication token invalid")]
    TokenInvalid,
    #[error("refresh token has been discarded")]
    TokenDiscarded,
    #[error("no user matches the authentication token")]
    NoUser,
    #[error("email or password is incorrect")]
    InvalidCredentials,
    #[error("access denied")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("unexpected error")]
    Unexpected(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::NoToken => "NO_TOKEN",
            Self::UnsupportedScheme => "UNSUPPORTED_SCHEME",
            Self::TokenExpired => "EXPIRED",
            Self::TokenInvalid => "INVALID",
            Self::TokenDiscarded => "DISCARDED",
            Self::NoUser => "NO_USER",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Unexpected(_) => "UNEXPECTED",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::NoToken
            | Self::UnsupportedScheme
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::TokenDiscarded
            | Self::NoUser
            | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => Self::TokenExpired,
            TokenError::Invalid => Self::TokenInvalid,
        }
    }
}

impl From<BearerError> for ApiError {
    fn from(e: BearerError) -> Self {
        match e {
            BearerError::NoToken => Self::NoToken,
            BearerError::UnsupportedScheme => Self::UnsupportedScheme,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors; logging them here
        // would be noise. Unexpected errors need the anyhow chain logged so the
        // root cause is traceable, and the caller sees only the generic message.
        if let Self::Unexpected(ref e) = self {
            tracing::error!(error = %e, kind = "UNEXPECTED", "unexpected error");
        }
        let body = serde_json::json!({
            "status": status.as_u16(),
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
