use anyhow::Context as _;
use chrono::Utc;
use uuid::Uuid;

use hirelog_domain::user::UserRole;

use crate::domain::repository::{RefreshSessionRepository, UserRepository};
use crate::domain::types::{
    MIN_PASSWORD_LEN, User, UserAccount, UserProfile, validate_email,
};
use crate::error::ApiError;
use crate::usecase::token::{TokenPair, issue_token_pair};

/// bcrypt cost for password hashes.
const PASSWORD_HASH_COST: u32 = 10;

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
}

pub struct SignUpUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> SignUpUseCase<U> {
    /// Create a User + UserProfile pair. New accounts always start as
    /// applicants; the recruiter role is assigned out of band.
    pub async fn execute(&self, input: SignUpInput) -> Result<UserAccount, ApiError> {
        if !validate_email(&input.email) {
            return Err(ApiError::Validation("email format is invalid".to_owned()));
        }
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if input.password != input.password_confirm {
            return Err(ApiError::Validation(
                "the two passwords do not match".to_owned(),
            ));
        }
        if input.name.trim().is_empty() {
            return Err(ApiError::Validation("name is required".to_owned()));
        }

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::DuplicateEmail);
        }

        let password_hash =
            bcrypt::hash(input.password.as_bytes(), PASSWORD_HASH_COST).context("hash password")?;

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        let profile = UserProfile {
            user_id: user.id,
            name: input.name,
            role: UserRole::Applicant,
            created_at: now,
            updated_at: now,
        };
        self.users.create_with_profile(&user, &profile).await?;

        Ok(UserAccount {
            id: user.id,
            email: user.email,
            name: profile.name,
            role: Some(profile.role),
            created_at: now,
            updated_at: now,
        })
    }
}

// ── SignIn ───────────────────────────────────────────────────────────────────

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

pub struct SignInUseCase<U: UserRepository, S: RefreshSessionRepository> {
    pub users: U,
    pub sessions: S,
    pub access_secret: String,
    pub refresh_secret: String,
}

impl<U: UserRepository, S: RefreshSessionRepository> SignInUseCase<U, S> {
    /// Verify credentials and issue a rotated token pair. Unknown email and
    /// wrong password collapse into one `InvalidCredentials` answer so the
    /// response does not reveal which half was wrong.
    pub async fn execute(&self, input: SignInInput) -> Result<TokenPair, ApiError> {
        if !validate_email(&input.email) {
            return Err(ApiError::Validation("email format is invalid".to_owned()));
        }

        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        let password_ok = bcrypt::verify(input.password.as_bytes(), &user.password_hash)
            .context("verify password hash")?;
        if !password_ok {
            return Err(ApiError::InvalidCredentials);
        }

        issue_token_pair(
            &self.sessions,
            user.id,
            &self.access_secret,
            &self.refresh_secret,
        )
        .await
    }
}

// ── GetMe ────────────────────────────────────────────────────────────────────

pub struct GetMeUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetMeUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<UserAccount, ApiError> {
        self.users
            .find_account(user_id)
            .await?
            .ok_or(ApiError::NotFound)
    }
}
