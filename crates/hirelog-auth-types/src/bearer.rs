//! Bearer-scheme parsing for the `Authorization` header.

/// Failure kinds for [`parse_bearer`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("no authentication token provided")]
    NoToken,
    #[error("unsupported authentication scheme")]
    UnsupportedScheme,
}

/// Extract the raw token from an `Authorization: Bearer <token>` header value.
///
/// - Header absent or blank, or `Bearer` with an empty token segment → `NoToken`.
/// - Any scheme other than `Bearer` → `UnsupportedScheme`.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, BearerError> {
    let value = header.map(str::trim).ok_or(BearerError::NoToken)?;
    if value.is_empty() {
        return Err(BearerError::NoToken);
    }

    let (scheme, token) = value.split_once(' ').unwrap_or((value, ""));
    if scheme != "Bearer" {
        return Err(BearerError::UnsupportedScheme);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::NoToken);
    }
    Ok(token)
}
