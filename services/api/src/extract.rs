//! Request extractors: the bearer token and the authenticated identity,
//! plus the role gate applied on top of an extracted identity.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use hirelog_auth_types::bearer::parse_bearer;
use hirelog_domain::user::UserRole;

use crate::domain::types::Identity;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::token::AuthenticateUseCase;

fn authorization_header(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Raw bearer token from the `Authorization` header, unverified.
///
/// Used by the refresh/revoke handlers, which verify the token against the
/// refresh secret and the stored session hash themselves.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    // axum-core defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let header = authorization_header(parts);
        async move {
            let token = parse_bearer(header.as_deref())?;
            Ok(Self(token.to_owned()))
        }
    }
}

/// Auth gate: parses the bearer token, verifies it against the access
/// secret, and resolves the embedded user id to a live User + UserProfile.
/// Every failure is a distinct 401 kind; none are swallowed.
impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let header = authorization_header(parts);
        let usecase = AuthenticateUseCase {
            users: state.user_repo(),
            access_secret: state.access_token_secret.clone(),
        };
        async move {
            let token = parse_bearer(header.as_deref())?;
            usecase.execute(token).await
        }
    }
}

/// Role gate: reject with `Forbidden` unless the identity's role is a
/// member of `allowed`. A missing or unknown role is not a member — never
/// a panic.
pub fn require_role(identity: &Identity, allowed: &[UserRole]) -> Result<(), ApiError> {
    match identity.role {
        Some(role) if allowed.contains(&role) => Ok(()),
        _ => Err(ApiError::Forbidden),
    }
}
