use axum::extract::FromRequestParts;
use axum::http::Request;

use hirelog_api::error::ApiError;
use hirelog_api::extract::BearerToken;
use hirelog_testing::auth::{bearer_headers, mint_token};
use uuid::Uuid;

use crate::helpers::TEST_ACCESS_SECRET;

async fn extract_bearer(headers: Vec<(&str, &str)>) -> Result<BearerToken, ApiError> {
    let mut builder = Request::builder().method("GET").uri("/test");
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    let request = builder.body(()).unwrap();
    let (mut parts, _body) = request.into_parts();
    BearerToken::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn should_extract_raw_token_from_bearer_header() {
    let token = mint_token(Uuid::now_v7(), TEST_ACCESS_SECRET, 9_999_999_999);
    let headers = bearer_headers(&token);
    let value = headers.get("authorization").unwrap().to_str().unwrap();

    let extracted = extract_bearer(vec![("authorization", value)]).await.unwrap();
    assert_eq!(extracted.0, token);
}

#[tokio::test]
async fn should_reject_missing_authorization_header() {
    let result = extract_bearer(vec![]).await;
    assert!(
        matches!(result, Err(ApiError::NoToken)),
        "expected NoToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_non_bearer_scheme() {
    let result = extract_bearer(vec![("authorization", "Basic dXNlcjpwdw==")]).await;
    assert!(
        matches!(result, Err(ApiError::UnsupportedScheme)),
        "expected UnsupportedScheme, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_bearer_with_empty_token_segment() {
    let result = extract_bearer(vec![("authorization", "Bearer ")]).await;
    assert!(
        matches!(result, Err(ApiError::NoToken)),
        "expected NoToken, got {result:?}"
    );
}
