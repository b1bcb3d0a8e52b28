//! JWT validation for access and refresh tokens.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "USE_ONLY_IN_API_SERVICE", test))]
use serde::Serialize;
use uuid::Uuid;

/// Access-token JWT lifetime in seconds (12 hours).
pub const ACCESS_TOKEN_EXP: u64 = 43_200;

/// Refresh-token JWT lifetime in seconds (7 days).
pub const REFRESH_TOKEN_EXP: u64 = 604_800;

/// Failure kinds for [`validate_token`].
///
/// `Expired` and `Invalid` are reported separately end-to-end: clients
/// remediate an expired access token by refreshing, an invalid one by
/// re-authenticating.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token invalid")]
    Invalid,
}

/// JWT claims payload shared by token creation and validation.
///
/// | Field | Rust type | Meaning |
/// |-------|-----------|---------|
/// | `id` | UUID string | user ID |
/// | `exp` | seconds since epoch | token expiration |
///
/// [`Deserialize`] is always available — all consumers validate tokens.
/// [`Serialize`] requires the **`USE_ONLY_IN_API_SERVICE`** cargo feature:
/// only the api service (and test helpers) issue tokens.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_API_SERVICE", test), derive(Serialize))]
pub struct TokenClaims {
    /// User ID (UUID string).
    pub id: String,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

impl TokenClaims {
    /// Parse the embedded user id. A claim that is not a UUID is an
    /// invalid token, not a server error.
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        self.id.parse::<Uuid>().map_err(|_| TokenError::Invalid)
    }
}

/// Decode and validate a JWT against one of the two signing secrets.
///
/// Validation: HS256, exp required and checked with zero leeway — the
/// expiry window is exact, one second past `exp` is `Expired`. Signature
/// and shape failures are `Invalid`.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })?;

    Ok(data.claims)
}
