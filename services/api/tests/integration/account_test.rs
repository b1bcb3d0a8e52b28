use hirelog_api::error::ApiError;
use hirelog_api::usecase::account::{
    GetMeUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
};
use hirelog_auth_types::token::validate_token;
use hirelog_domain::user::UserRole;

use crate::helpers::{
    MockSessionRepo, MockUserRepo, TEST_ACCESS_SECRET, TEST_PASSWORD, TEST_REFRESH_SECRET,
    test_user,
};

fn sign_up_input(email: &str) -> SignUpInput {
    SignUpInput {
        email: email.to_owned(),
        password: TEST_PASSWORD.to_owned(),
        password_confirm: TEST_PASSWORD.to_owned(),
        name: "alice".to_owned(),
    }
}

// ── SignUpUseCase ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_user_and_profile_on_sign_up() {
    let repo = MockUserRepo::empty();
    let handle = repo.users_handle();
    let usecase = SignUpUseCase { users: repo };

    let account = usecase.execute(sign_up_input("alice@example.com")).await.unwrap();
    assert_eq!(account.email, "alice@example.com");
    assert_eq!(account.name, "alice");
    assert_eq!(account.role, Some(UserRole::Applicant));

    let stored = handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    let profile = stored[0].profile.as_ref().unwrap();
    assert_eq!(profile.user_id, stored[0].user.id);
    assert_eq!(profile.role, UserRole::Applicant);

    // Password is stored hashed, never plaintext.
    assert_ne!(stored[0].user.password_hash, TEST_PASSWORD);
    assert!(bcrypt::verify(TEST_PASSWORD, &stored[0].user.password_hash).unwrap());
}

#[tokio::test]
async fn should_reject_duplicate_email_with_conflict() {
    let repo = MockUserRepo::empty();
    let handle = repo.users_handle();
    let usecase = SignUpUseCase { users: repo };

    usecase.execute(sign_up_input("alice@example.com")).await.unwrap();
    let result = usecase.execute(sign_up_input("alice@example.com")).await;

    assert!(
        matches!(result, Err(ApiError::DuplicateEmail)),
        "expected DuplicateEmail, got {result:?}"
    );
    assert_eq!(handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_implausible_email() {
    let usecase = SignUpUseCase {
        users: MockUserRepo::empty(),
    };
    let result = usecase.execute(sign_up_input("not-an-email")).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

#[tokio::test]
async fn should_reject_short_password() {
    let usecase = SignUpUseCase {
        users: MockUserRepo::empty(),
    };
    let mut input = sign_up_input("alice@example.com");
    input.password = "abc".to_owned();
    input.password_confirm = "abc".to_owned();
    let result = usecase.execute(input).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

#[tokio::test]
async fn should_reject_mismatched_password_confirmation() {
    let usecase = SignUpUseCase {
        users: MockUserRepo::empty(),
    };
    let mut input = sign_up_input("alice@example.com");
    input.password_confirm = "different123".to_owned();
    let result = usecase.execute(input).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

// ── SignInUseCase ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_pair_on_sign_in() {
    let stored = test_user("alice@example.com", "alice", UserRole::Applicant);
    let user_id = stored.user.id;
    let sessions = MockSessionRepo::empty();
    let sessions_handle = sessions.sessions_handle();

    let usecase = SignInUseCase {
        users: MockUserRepo::new(vec![stored]),
        sessions,
        access_secret: TEST_ACCESS_SECRET.to_owned(),
        refresh_secret: TEST_REFRESH_SECRET.to_owned(),
    };

    let pair = usecase
        .execute(SignInInput {
            email: "alice@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    let claims = validate_token(&pair.access_token, TEST_ACCESS_SECRET).unwrap();
    assert_eq!(claims.user_id().unwrap(), user_id);

    // Sign-in persisted a refresh session for the user.
    assert!(sessions_handle.lock().unwrap().contains_key(&user_id));
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let stored = test_user("alice@example.com", "alice", UserRole::Applicant);
    let usecase = SignInUseCase {
        users: MockUserRepo::new(vec![stored]),
        sessions: MockSessionRepo::empty(),
        access_secret: TEST_ACCESS_SECRET.to_owned(),
        refresh_secret: TEST_REFRESH_SECRET.to_owned(),
    };

    let result = usecase
        .execute(SignInInput {
            email: "alice@example.com".to_owned(),
            password: "wrong-password".to_owned(),
        })
        .await;
    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_email_with_same_error_as_wrong_password() {
    let usecase = SignInUseCase {
        users: MockUserRepo::empty(),
        sessions: MockSessionRepo::empty(),
        access_secret: TEST_ACCESS_SECRET.to_owned(),
        refresh_secret: TEST_REFRESH_SECRET.to_owned(),
    };

    let result = usecase
        .execute(SignInInput {
            email: "nobody@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

// ── GetMeUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_joined_account_view() {
    let stored = test_user("alice@example.com", "alice", UserRole::Recruiter);
    let user_id = stored.user.id;
    let usecase = GetMeUseCase {
        users: MockUserRepo::new(vec![stored]),
    };

    let account = usecase.execute(user_id).await.unwrap();
    assert_eq!(account.id, user_id);
    assert_eq!(account.email, "alice@example.com");
    assert_eq!(account.name, "alice");
    assert_eq!(account.role, Some(UserRole::Recruiter));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_account() {
    let usecase = GetMeUseCase {
        users: MockUserRepo::empty(),
    };
    let result = usecase.execute(uuid::Uuid::now_v7()).await;
    assert!(matches!(result, Err(ApiError::NotFound)));
}
