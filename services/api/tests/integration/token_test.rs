use hirelog_api::error::ApiError;
use hirelog_api::usecase::token::{
    AuthenticateUseCase, RefreshTokenUseCase, RevokeTokenUseCase, hash_refresh_token,
    issue_access_token, issue_refresh_token, issue_token_pair, refresh_token_matches,
    verify_refresh_token,
};
use hirelog_auth_types::token::{TokenError, validate_token};
use hirelog_domain::user::UserRole;
use hirelog_testing::auth::mint_token;
use uuid::Uuid;

use crate::helpers::{
    MockSessionRepo, MockUserRepo, TEST_ACCESS_SECRET, TEST_REFRESH_SECRET, test_user,
};

// ── issue / validate ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_access_token_that_validates_successfully() {
    let user_id = Uuid::now_v7();
    let (token, exp) = issue_access_token(user_id, TEST_ACCESS_SECRET).unwrap();

    assert!(!token.is_empty());
    let claims = validate_token(&token, TEST_ACCESS_SECRET).unwrap();
    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.exp, exp);
}

#[tokio::test]
async fn should_reject_access_token_against_refresh_secret() {
    // The two token kinds are signed with distinct secrets; one can never
    // stand in for the other.
    let user_id = Uuid::now_v7();
    let (access, _) = issue_access_token(user_id, TEST_ACCESS_SECRET).unwrap();
    let refresh = issue_refresh_token(user_id, TEST_REFRESH_SECRET).unwrap();

    assert_eq!(
        validate_token(&access, TEST_REFRESH_SECRET).unwrap_err(),
        TokenError::Invalid
    );
    assert_eq!(
        validate_token(&refresh, TEST_ACCESS_SECRET).unwrap_err(),
        TokenError::Invalid
    );
}

#[tokio::test]
async fn should_store_hash_not_plaintext_on_issue() {
    let sessions = MockSessionRepo::empty();
    let user_id = Uuid::now_v7();

    let pair = issue_token_pair(&sessions, user_id, TEST_ACCESS_SECRET, TEST_REFRESH_SECRET)
        .await
        .unwrap();

    let stored = sessions.sessions_handle().lock().unwrap()[&user_id].clone();
    assert_ne!(stored.token_hash, pair.refresh_token);
    assert!(refresh_token_matches(&pair.refresh_token, &stored.token_hash).unwrap());
}

#[tokio::test]
async fn should_distinguish_hashes_of_different_tokens() {
    let user_id = Uuid::now_v7();
    let first = issue_refresh_token(user_id, TEST_REFRESH_SECRET).unwrap();
    let hash = hash_refresh_token(&first).unwrap();

    let other = mint_token(user_id, TEST_REFRESH_SECRET, 9_999_999_999);
    assert!(refresh_token_matches(&first, &hash).unwrap());
    assert!(!refresh_token_matches(&other, &hash).unwrap());
}

// ── rotation ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_discard_previous_refresh_token_on_rotation() {
    let sessions = MockSessionRepo::empty();
    let user_id = Uuid::now_v7();

    let first = issue_token_pair(&sessions, user_id, TEST_ACCESS_SECRET, TEST_REFRESH_SECRET)
        .await
        .unwrap();
    let second = issue_token_pair(&sessions, user_id, TEST_ACCESS_SECRET, TEST_REFRESH_SECRET)
        .await
        .unwrap();

    // The first refresh token is unexpired but superseded.
    let result = verify_refresh_token(&sessions, &first.refresh_token, TEST_REFRESH_SECRET).await;
    assert!(
        matches!(result, Err(ApiError::TokenDiscarded)),
        "expected TokenDiscarded, got {result:?}"
    );

    let verified = verify_refresh_token(&sessions, &second.refresh_token, TEST_REFRESH_SECRET)
        .await
        .unwrap();
    assert_eq!(verified, user_id);
}

#[tokio::test]
async fn should_verify_refresh_token_iff_stored_hash_matches() {
    let sessions = MockSessionRepo::empty();
    let user_id = Uuid::now_v7();

    // Never issued: signature-valid token, no session row.
    let stray = mint_token(user_id, TEST_REFRESH_SECRET, 9_999_999_999);
    let result = verify_refresh_token(&sessions, &stray, TEST_REFRESH_SECRET).await;
    assert!(matches!(result, Err(ApiError::TokenDiscarded)));

    // Issued: verifies.
    let pair = issue_token_pair(&sessions, user_id, TEST_ACCESS_SECRET, TEST_REFRESH_SECRET)
        .await
        .unwrap();
    assert_eq!(
        verify_refresh_token(&sessions, &pair.refresh_token, TEST_REFRESH_SECRET)
            .await
            .unwrap(),
        user_id
    );

    // Session deleted: discarded again.
    use hirelog_api::domain::repository::RefreshSessionRepository as _;
    sessions.delete_by_user(user_id).await.unwrap();
    let result =
        verify_refresh_token(&sessions, &pair.refresh_token, TEST_REFRESH_SECRET).await;
    assert!(matches!(result, Err(ApiError::TokenDiscarded)));
}

#[tokio::test]
async fn should_report_expired_refresh_token_as_expired_not_discarded() {
    let sessions = MockSessionRepo::empty();
    let user_id = Uuid::now_v7();
    let expired = mint_token(user_id, TEST_REFRESH_SECRET, 1_000_000);

    let result = verify_refresh_token(&sessions, &expired, TEST_REFRESH_SECRET).await;
    assert!(
        matches!(result, Err(ApiError::TokenExpired)),
        "expected TokenExpired, got {result:?}"
    );
}

// ── AuthenticateUseCase (access gate) ────────────────────────────────────────

#[tokio::test]
async fn should_authenticate_valid_access_token() {
    let stored = test_user("user@example.com", "alice", UserRole::Recruiter);
    let user_id = stored.user.id;
    let usecase = AuthenticateUseCase {
        users: MockUserRepo::new(vec![stored]),
        access_secret: TEST_ACCESS_SECRET.to_owned(),
    };

    let (token, _) = issue_access_token(user_id, TEST_ACCESS_SECRET).unwrap();
    let identity = usecase.execute(&token).await.unwrap();
    assert_eq!(identity.user_id, user_id);
    assert_eq!(identity.role, Some(UserRole::Recruiter));
}

#[tokio::test]
async fn should_reject_expired_access_token() {
    let stored = test_user("user@example.com", "alice", UserRole::Applicant);
    let user_id = stored.user.id;
    let usecase = AuthenticateUseCase {
        users: MockUserRepo::new(vec![stored]),
        access_secret: TEST_ACCESS_SECRET.to_owned(),
    };

    let expired = mint_token(user_id, TEST_ACCESS_SECRET, 1_000_000);
    let result = usecase.execute(&expired).await;
    assert!(
        matches!(result, Err(ApiError::TokenExpired)),
        "expected TokenExpired, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_garbage_access_token_as_invalid() {
    let usecase = AuthenticateUseCase {
        users: MockUserRepo::empty(),
        access_secret: TEST_ACCESS_SECRET.to_owned(),
    };

    let result = usecase.execute("not-a-jwt").await;
    assert!(matches!(result, Err(ApiError::TokenInvalid)));
}

#[tokio::test]
async fn should_reject_stale_token_for_deleted_account() {
    let usecase = AuthenticateUseCase {
        users: MockUserRepo::empty(),
        access_secret: TEST_ACCESS_SECRET.to_owned(),
    };

    let (token, _) = issue_access_token(Uuid::now_v7(), TEST_ACCESS_SECRET).unwrap();
    let result = usecase.execute(&token).await;
    assert!(
        matches!(result, Err(ApiError::NoUser)),
        "expected NoUser, got {result:?}"
    );
}

// ── RefreshTokenUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_reissue_pair_and_rotate_on_refresh() {
    let stored = test_user("user@example.com", "alice", UserRole::Applicant);
    let user_id = stored.user.id;
    let sessions = MockSessionRepo::empty();

    let first = issue_token_pair(&sessions, user_id, TEST_ACCESS_SECRET, TEST_REFRESH_SECRET)
        .await
        .unwrap();

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::new(vec![stored]),
        sessions,
        access_secret: TEST_ACCESS_SECRET.to_owned(),
        refresh_secret: TEST_REFRESH_SECRET.to_owned(),
    };

    let second = usecase.execute(&first.refresh_token).await.unwrap();
    let claims = validate_token(&second.access_token, TEST_ACCESS_SECRET).unwrap();
    assert_eq!(claims.user_id().unwrap(), user_id);

    // The refresh that produced `second` rotated away `first`.
    let result = usecase.execute(&first.refresh_token).await;
    assert!(
        matches!(result, Err(ApiError::TokenDiscarded)),
        "expected TokenDiscarded, got {result:?}"
    );
    assert!(usecase.execute(&second.refresh_token).await.is_ok());
}

#[tokio::test]
async fn should_reject_refresh_for_deleted_account() {
    let sessions = MockSessionRepo::empty();
    let user_id = Uuid::now_v7();
    let pair = issue_token_pair(&sessions, user_id, TEST_ACCESS_SECRET, TEST_REFRESH_SECRET)
        .await
        .unwrap();

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::empty(),
        sessions,
        access_secret: TEST_ACCESS_SECRET.to_owned(),
        refresh_secret: TEST_REFRESH_SECRET.to_owned(),
    };

    let result = usecase.execute(&pair.refresh_token).await;
    assert!(
        matches!(result, Err(ApiError::NoUser)),
        "expected NoUser, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_refresh_with_access_secret_signature() {
    let stored = test_user("user@example.com", "alice", UserRole::Applicant);
    let user_id = stored.user.id;

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::new(vec![stored]),
        sessions: MockSessionRepo::empty(),
        access_secret: TEST_ACCESS_SECRET.to_owned(),
        refresh_secret: TEST_REFRESH_SECRET.to_owned(),
    };

    // Signed with the wrong secret: invalid before the store is consulted.
    let (access, _) = issue_access_token(user_id, TEST_ACCESS_SECRET).unwrap();
    let result = usecase.execute(&access).await;
    assert!(matches!(result, Err(ApiError::TokenInvalid)));
}

// ── RevokeTokenUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_revoke_session_so_refresh_token_is_discarded() {
    let sessions = MockSessionRepo::empty();
    let user_id = Uuid::now_v7();
    let pair = issue_token_pair(&sessions, user_id, TEST_ACCESS_SECRET, TEST_REFRESH_SECRET)
        .await
        .unwrap();

    let handle = sessions.sessions_handle();
    let usecase = RevokeTokenUseCase {
        sessions,
        refresh_secret: TEST_REFRESH_SECRET.to_owned(),
    };

    usecase.execute(&pair.refresh_token).await.unwrap();
    assert!(handle.lock().unwrap().is_empty());

    let result = usecase.execute(&pair.refresh_token).await;
    assert!(matches!(result, Err(ApiError::TokenDiscarded)));
}
