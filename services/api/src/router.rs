use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use hirelog_core::health::{healthz, readyz};
use hirelog_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{refresh_token, revoke_token, sign_in, sign_up},
    resume::{
        change_resume_status, create_resume, delete_resume, get_resume, get_resume_logs,
        list_resumes, update_resume,
    },
    user::get_me,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/token", patch(refresh_token))
        .route("/auth/token", delete(revoke_token))
        // Users
        .route("/users/me", get(get_me))
        // Resumes
        .route("/resumes", post(create_resume))
        .route("/resumes", get(list_resumes))
        .route("/resumes/{id}", get(get_resume))
        .route("/resumes/{id}", patch(update_resume))
        .route("/resumes/{id}", delete(delete_resume))
        // Status engine (recruiter-gated in the handlers)
        .route("/resumes/{id}/status", patch(change_resume_status))
        .route("/resumes/{id}/logs", get(get_resume_logs))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
