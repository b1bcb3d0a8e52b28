use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use jsonwebtoken::{EncodingKey, Header, encode};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use hirelog_auth_types::token::{
    ACCESS_TOKEN_EXP, REFRESH_TOKEN_EXP, TokenClaims, validate_token,
};

use crate::domain::repository::{RefreshSessionRepository, UserRepository};
use crate::domain::types::Identity;
use crate::error::ApiError;

/// bcrypt cost for refresh-token hashes.
const REFRESH_HASH_COST: u32 = 10;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_access_token(user_id: Uuid, secret: &str) -> Result<(String, u64), ApiError> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = TokenClaims {
        id: user_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("encode access token")?;
    Ok((token, exp))
}

pub fn issue_refresh_token(user_id: Uuid, secret: &str) -> Result<String, ApiError> {
    let exp = now_secs() + REFRESH_TOKEN_EXP;
    let claims = TokenClaims {
        id: user_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("encode refresh token")?;
    Ok(token)
}

/// bcrypt the SHA-256 digest of the raw token. The digest keeps the input
/// inside bcrypt's 72-byte limit; JWTs are longer and share a prefix.
pub fn hash_refresh_token(raw: &str) -> Result<String, ApiError> {
    let digest = Sha256::digest(raw.as_bytes());
    let hash = bcrypt::hash(digest.as_slice(), REFRESH_HASH_COST).context("hash refresh token")?;
    Ok(hash)
}

/// Compare a presented raw token against a stored hash. Goes through
/// `bcrypt::verify` — never plaintext equality.
pub fn refresh_token_matches(raw: &str, stored_hash: &str) -> Result<bool, ApiError> {
    let digest = Sha256::digest(raw.as_bytes());
    let matches =
        bcrypt::verify(digest.as_slice(), stored_hash).context("verify refresh token hash")?;
    Ok(matches)
}

/// Signed token pair issued on sign-in and refresh.
#[derive(Debug)]
pub struct TokenPair {
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

/// Issue a token pair and persist the refresh-token hash as the single live
/// session for the user, overwriting any prior session. Full rotation: a
/// user holds at most one valid refresh token, and issuing a new pair
/// invalidates the previous refresh token even if unexpired.
pub async fn issue_token_pair<S: RefreshSessionRepository>(
    sessions: &S,
    user_id: Uuid,
    access_secret: &str,
    refresh_secret: &str,
) -> Result<TokenPair, ApiError> {
    let (access_token, access_token_exp) = issue_access_token(user_id, access_secret)?;
    let refresh_token = issue_refresh_token(user_id, refresh_secret)?;
    let token_hash = hash_refresh_token(&refresh_token)?;
    sessions.upsert(user_id, &token_hash).await?;
    Ok(TokenPair {
        access_token,
        access_token_exp,
        refresh_token,
    })
}

/// Full refresh-token verification: signature and expiry against the
/// refresh secret, then hash comparison against the stored session.
/// Returns the embedded user id.
///
/// `TokenDiscarded` means the signature was fine but no stored hash
/// matches — the token was superseded by a later rotation (or never
/// issued). That is reported separately from `Expired`/`Invalid` because
/// it signals a replayed or revoked token.
pub async fn verify_refresh_token<S: RefreshSessionRepository>(
    sessions: &S,
    raw: &str,
    refresh_secret: &str,
) -> Result<Uuid, ApiError> {
    let claims = validate_token(raw, refresh_secret).map_err(ApiError::from)?;
    let user_id = claims.user_id().map_err(ApiError::from)?;

    let matches = match sessions.find_by_user(user_id).await? {
        Some(session) => refresh_token_matches(raw, &session.token_hash)?,
        None => false,
    };
    if !matches {
        return Err(ApiError::TokenDiscarded);
    }
    Ok(user_id)
}

// ── Authenticate (access gate) ───────────────────────────────────────────────

pub struct AuthenticateUseCase<U: UserRepository> {
    pub users: U,
    pub access_secret: String,
}

impl<U: UserRepository> AuthenticateUseCase<U> {
    /// Resolve a raw access token to an authenticated identity. Stateless
    /// signature/expiry checks first, then one store lookup; a valid token
    /// whose user no longer exists fails `NoUser`.
    pub async fn execute(&self, raw_token: &str) -> Result<Identity, ApiError> {
        let claims = validate_token(raw_token, &self.access_secret).map_err(ApiError::from)?;
        let user_id = claims.user_id().map_err(ApiError::from)?;
        self.users
            .find_identity(user_id)
            .await?
            .ok_or(ApiError::NoUser)
    }
}

// ── RefreshToken ─────────────────────────────────────────────────────────────

pub struct RefreshTokenUseCase<U: UserRepository, S: RefreshSessionRepository> {
    pub users: U,
    pub sessions: S,
    pub access_secret: String,
    pub refresh_secret: String,
}

impl<U: UserRepository, S: RefreshSessionRepository> RefreshTokenUseCase<U, S> {
    pub async fn execute(&self, refresh_token_value: &str) -> Result<TokenPair, ApiError> {
        let user_id =
            verify_refresh_token(&self.sessions, refresh_token_value, &self.refresh_secret)
                .await?;

        // Stale session rows can outlive a deleted account.
        self.users
            .find_identity(user_id)
            .await?
            .ok_or(ApiError::NoUser)?;

        issue_token_pair(
            &self.sessions,
            user_id,
            &self.access_secret,
            &self.refresh_secret,
        )
        .await
    }
}

// ── RevokeToken ──────────────────────────────────────────────────────────────

pub struct RevokeTokenUseCase<S: RefreshSessionRepository> {
    pub sessions: S,
    pub refresh_secret: String,
}

impl<S: RefreshSessionRepository> RevokeTokenUseCase<S> {
    /// Forced logout: verify the presented refresh token, then delete the
    /// session row so no refresh token remains valid for the user.
    pub async fn execute(&self, refresh_token_value: &str) -> Result<(), ApiError> {
        let user_id =
            verify_refresh_token(&self.sessions, refresh_token_value, &self.refresh_secret)
                .await?;
        self.sessions.delete_by_user(user_id).await?;
        Ok(())
    }
}
