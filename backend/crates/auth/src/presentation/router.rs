//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::session_gate::SessionGate;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any credential store
///
/// Intended to be nested under `/api/auth`.
pub fn auth_router<R>(gate: SessionGate<R>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState { gate };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route("/signout", post(handlers::sign_out::<R>))
        .route("/status", get(handlers::session_status::<R>))
        .with_state(state)
}
