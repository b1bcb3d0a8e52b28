//! sea-orm entities for the Hirelog api service.

pub mod refresh_sessions;
pub mod resume_histories;
pub mod resumes;
pub mod user_profiles;
pub mod users;
