//! Token helpers for tests.

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use hirelog_auth_types::token::TokenClaims;

/// Mint a signed token with an arbitrary expiry. Tests need tokens that
/// are already expired or that expire at a known instant; the production
/// issue path always stamps `now + lifetime`.
pub fn mint_token(user_id: Uuid, secret: &str, exp: u64) -> String {
    let claims = TokenClaims {
        id: user_id.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encode test token")
}

/// `Authorization: Bearer <token>` headers for a test request.
pub fn bearer_headers(token: &str) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    map
}
